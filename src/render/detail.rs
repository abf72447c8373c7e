//! Display-ready match details.

use crate::matcher::{CaptureGroup, MatchRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a group that captured nothing.
pub const EMPTY_MARKER: &str = "(empty)";

/// Whether a group participated and what it captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupState {
    Captured,
    /// Participated but captured the empty string.
    Empty,
    /// Did not participate in this match.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetail {
    /// `$1`, `$2`, ... or the group's name.
    pub label: String,
    pub state: GroupState,
    /// The captured text, or [`EMPTY_MARKER`].
    pub display: String,
}

impl GroupDetail {
    fn from_group(number: usize, group: &CaptureGroup) -> Self {
        let label = match &group.name {
            Some(name) => name.clone(),
            None => format!("${number}"),
        };
        let (state, display) = match group.as_str() {
            None => (GroupState::Absent, EMPTY_MARKER.to_string()),
            Some("") => (GroupState::Empty, EMPTY_MARKER.to_string()),
            Some(text) => (GroupState::Captured, text.to_string()),
        };
        Self {
            label,
            state,
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// One-based match number as shown to the user.
    pub number: usize,
    pub index: usize,
    pub end_index: usize,
    pub text: String,
    pub groups: Vec<GroupDetail>,
}

impl MatchDetail {
    pub fn from_record(record: &MatchRecord) -> Self {
        Self {
            number: record.ordinal + 1,
            index: record.index,
            end_index: record.end_index,
            text: record.text.clone(),
            groups: record
                .groups
                .iter()
                .enumerate()
                .map(|(i, group)| GroupDetail::from_group(i + 1, group))
                .collect(),
        }
    }

    /// `"start-end"` in UTF-16 units.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.index, self.end_index)
    }
}

impl fmt::Display for MatchDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.text.is_empty() {
            EMPTY_MARKER
        } else {
            self.text.as_str()
        };
        write!(f, "Match {} [{}]: {text}", self.number, self.range_label())?;
        for group in &self.groups {
            write!(f, "\n  {}: {}", group.label, group.display)?;
        }
        Ok(())
    }
}

pub fn format(matches: &[MatchRecord]) -> Vec<MatchDetail> {
    matches.iter().map(MatchDetail::from_record).collect()
}
