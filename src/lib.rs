//! # Regex Workbench
//!
//! The match and highlight engine behind an interactive regular-expression
//! tester. Given a pattern, a set of ECMAScript-style flags and a test
//! string, it compiles the pattern, enumerates matches with `g`/`y`
//! semantics, partitions the text into highlight segments and formats
//! per-match details.
//!
//! ## Quick Start
//!
//! ```rust
//! use regex_workbench::{recompute, Flags};
//!
//! let report = recompute(r"(a)(b)?", "g".parse::<Flags>()?, "a ab")?;
//! assert_eq!(report.summary.match_count, 2);
//! assert!(report.matches[0].groups[1].is_absent());
//! assert_eq!(report.matches[1].groups[1].as_str(), Some("b"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Step by step
//!
//! ```rust
//! use regex_workbench::{compile, enumerate, render, FlagKind, Flags};
//!
//! let flags = Flags::empty().with(FlagKind::Global);
//! let matcher = compile(r"\d+", flags)?;
//! let matches = enumerate(&matcher, "a1 b22 c333")?;
//! let segments = render("a1 b22 c333", &matches);
//! assert_eq!(segments.iter().filter(|s| s.is_match).count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Bounded work
//!
//! ```rust
//! use regex_workbench::{MatchConfig, Workbench};
//!
//! let bench = Workbench::with_config(MatchConfig::interactive())?;
//! let outcome = bench.run_json(r#"{"pattern": "(", "test_string": "x"}"#);
//! assert!(outcome.contains("\"error\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod flags;
pub mod matcher;
pub mod render;
pub mod session;

pub use compiler::{
    compile, CompiledMatcher, EngineKind, PatternCompiler, PatternComplexity, PatternSpec,
};
pub use config::{EnginePreference, MatchConfig, SecurityConfig};
pub use error::{CompileError, EnumerationError, Error, Result};
pub use flags::{FlagKind, Flags};
pub use matcher::{enumerate, CaptureGroup, MatchEnumerator, MatchRecord};
pub use render::{
    concat_segments, render, GroupDetail, GroupState, HighlightSegment, MatchDetail,
    EMPTY_MARKER,
};
pub use session::{recompute, MatchSummary, TestOutcome, TestReport, TestRequest, Workbench};
