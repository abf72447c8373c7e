//! Match enumeration.
//!
//! Applies a [`CompiledMatcher`](crate::compiler::CompiledMatcher) to a test
//! string and produces the ordered, non-overlapping [`MatchRecord`] sequence
//! with capture groups.
//!
//! ## Example Usage
//!
//! ```rust
//! use regex_workbench::{compile, enumerate};
//!
//! let matcher = compile(r"\d+", "g".parse()?)?;
//! let matches = enumerate(&matcher, "a1 b22 c333")?;
//! let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
//! assert_eq!(texts, ["1", "22", "333"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod enumerator;
pub(crate) mod offsets;
pub mod types;

pub use enumerator::{enumerate, MatchEnumerator};
pub use types::{CaptureGroup, MatchRecord};
