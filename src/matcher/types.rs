//! Match records produced by the enumerator.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The value of one capturing group for one match.
///
/// `text == None` means the group did not participate (for example the
/// untaken side of an alternation). That is distinct from a group that
/// participated and captured the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGroup {
    /// Group name for `(?<name>...)` / `(?P<name>...)` groups.
    pub name: Option<String>,
    pub text: Option<String>,
    /// UTF-16 start offset when the group participated.
    pub index: Option<usize>,
}

impl CaptureGroup {
    pub fn absent(name: Option<String>) -> Self {
        Self {
            name,
            text: None,
            index: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.text.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// One occurrence of the pattern in the text.
///
/// `index` and `end_index` are UTF-16 code-unit offsets, the unit the
/// tester UI indexes its text with. `byte_start`/`byte_end` address the
/// same span in the Rust string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Position of this match in the sequence, starting at 0.
    pub ordinal: usize,
    pub index: usize,
    pub end_index: usize,
    pub byte_start: usize,
    pub byte_end: usize,
    pub text: String,
    pub groups: Vec<CaptureGroup>,
}

impl MatchRecord {
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    pub fn is_empty(&self) -> bool {
        self.byte_start == self.byte_end
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.end_index - self.index
    }

    pub fn group(&self, number: usize) -> Option<&CaptureGroup> {
        number.checked_sub(1).and_then(|i| self.groups.get(i))
    }

    pub fn named_group(&self, name: &str) -> Option<&CaptureGroup> {
        self.groups
            .iter()
            .find(|group| group.name.as_deref() == Some(name))
    }
}
