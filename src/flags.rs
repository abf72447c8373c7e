//! Regular-expression flags.
//!
//! Flags use the ECMAScript letters (`g i m s u y`) because that is what the
//! tester UI exposes. A [`Flags`] value is a set, so duplicate or conflicting
//! entries cannot be represented once parsed.

use crate::error::CompileError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single matcher modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Enumerate every non-overlapping match instead of stopping at the first.
    Global,
    CaseInsensitive,
    /// `^` and `$` match at line boundaries.
    Multiline,
    /// `.` also matches `\n`.
    DotAll,
    /// Accepted for compatibility; matching is always code-point based.
    Unicode,
    /// Every attempt is anchored at the cursor.
    Sticky,
}

impl FlagKind {
    /// All flags in canonical display order.
    pub const ALL: [FlagKind; 6] = [
        FlagKind::Global,
        FlagKind::CaseInsensitive,
        FlagKind::Multiline,
        FlagKind::DotAll,
        FlagKind::Unicode,
        FlagKind::Sticky,
    ];

    pub fn letter(self) -> char {
        match self {
            FlagKind::Global => 'g',
            FlagKind::CaseInsensitive => 'i',
            FlagKind::Multiline => 'm',
            FlagKind::DotAll => 's',
            FlagKind::Unicode => 'u',
            FlagKind::Sticky => 'y',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.letter() == letter)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of [`FlagKind`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    bits: u8,
}

impl Flags {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, flag: FlagKind) -> Self {
        self.insert(flag);
        self
    }

    pub fn insert(&mut self, flag: FlagKind) {
        self.bits |= flag.bit();
    }

    pub fn remove(&mut self, flag: FlagKind) {
        self.bits &= !flag.bit();
    }

    pub fn contains(self, flag: FlagKind) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FlagKind> {
        FlagKind::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    pub fn global(self) -> bool {
        self.contains(FlagKind::Global)
    }

    pub fn sticky(self) -> bool {
        self.contains(FlagKind::Sticky)
    }

    /// Inline group prefix (`(?ims)`) for the flags that change pattern
    /// semantics. Empty when none are set.
    pub(crate) fn inline_prefix(self) -> String {
        let letters: String = [
            (FlagKind::CaseInsensitive, 'i'),
            (FlagKind::Multiline, 'm'),
            (FlagKind::DotAll, 's'),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, letter)| letter)
        .collect();

        if letters.is_empty() {
            String::new()
        } else {
            format!("(?{letters})")
        }
    }
}

impl FromIterator<FlagKind> for Flags {
    fn from_iter<I: IntoIterator<Item = FlagKind>>(iter: I) -> Self {
        let mut flags = Flags::empty();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl FromStr for Flags {
    type Err = CompileError;

    /// Parses a flag string such as `"gi"`. Unknown or repeated letters are
    /// rejected, mirroring how a `RegExp` constructor treats them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for letter in s.chars() {
            let flag =
                FlagKind::from_letter(letter).ok_or_else(|| CompileError::invalid_flags(s))?;
            if flags.contains(flag) {
                return Err(CompileError::invalid_flags(s));
            }
            flags.insert(flag);
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag.letter())?;
        }
        Ok(())
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
