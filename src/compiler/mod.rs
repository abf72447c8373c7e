//! Pattern compiler.
//!
//! Turns a user pattern plus a flag set into a [`CompiledMatcher`]. The
//! compiler is pure: it keeps no state between calls and never caches, so
//! every UI edit compiles from scratch.
//!
//! The compiler is organized into two sub-modules:
//! - [`engine`] - engine selection and the match primitive
//! - [`complexity`] - backtracking-risk heuristics
//!
//! # Examples
//!
//! ```rust
//! use regex_workbench::{Flags, PatternCompiler};
//!
//! let matcher = PatternCompiler::new().compile(r"(\d+)-(\d+)", "g".parse::<Flags>()?)?;
//! assert_eq!(matcher.group_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod complexity;
pub mod engine;

pub use complexity::PatternComplexity;
pub use engine::EngineKind;

use crate::config::MatchConfig;
use crate::error::{CompileError, EnumerationError};
use crate::flags::Flags;
use engine::{CaptureSpans, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The pattern source and flags a matcher was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub source: String,
    pub flags: Flags,
}

impl PatternSpec {
    pub fn new(source: impl Into<String>, flags: Flags) -> Self {
        Self {
            source: source.into(),
            flags,
        }
    }
}

/// A validated, ready-to-run matcher.
///
/// Can be enumerated any number of times without re-validation.
#[derive(Debug)]
pub struct CompiledMatcher {
    spec: PatternSpec,
    engine: Engine,
    group_names: Vec<Option<String>>,
    complexity: Option<PatternComplexity>,
    max_matches: Option<usize>,
}

impl CompiledMatcher {
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub fn source(&self) -> &str {
        &self.spec.source
    }

    pub fn flags(&self) -> Flags {
        self.spec.flags
    }

    pub fn engine(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Number of capturing groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.group_names.len()
    }

    /// Group names in declaration order; `None` for unnamed groups.
    pub fn group_names(&self) -> &[Option<String>] {
        &self.group_names
    }

    /// `None` when complexity analysis is disabled.
    pub fn complexity(&self) -> Option<PatternComplexity> {
        self.complexity
    }

    pub fn max_matches(&self) -> Option<usize> {
        self.max_matches
    }

    pub(crate) fn captures_at(
        &self,
        text: &str,
        pos: usize,
    ) -> Result<Option<CaptureSpans>, EnumerationError> {
        self.engine.captures_at(text, pos)
    }

    pub(crate) fn captures_anchored_at(
        &self,
        text: &str,
        pos: usize,
    ) -> Result<Option<CaptureSpans>, EnumerationError> {
        self.engine.captures_anchored_at(text, pos)
    }
}

/// Compiles patterns under a fixed [`MatchConfig`].
#[derive(Debug, Clone, Default)]
pub struct PatternCompiler {
    config: MatchConfig,
}

impl PatternCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Compile `source` under `flags`.
    ///
    /// An empty source is valid and matches the empty string everywhere.
    /// Syntax errors carry the engine's diagnostic unchanged.
    pub fn compile(&self, source: &str, flags: Flags) -> Result<CompiledMatcher, CompileError> {
        let security = &self.config.security;
        let complexity = security
            .analyze_complexity
            .then(|| PatternComplexity::analyze(source));

        if security.reject_dangerous_patterns
            && complexity == Some(PatternComplexity::Dangerous)
        {
            warn!(pattern = source, "rejecting dangerous pattern");
            return Err(CompileError::dangerous_pattern(source));
        }

        let engine = Engine::build(source, flags, &self.config)?;
        let group_names = engine.group_names();

        debug!(
            pattern = source,
            flags = %flags,
            engine = ?engine.kind(),
            groups = group_names.len(),
            "compiled pattern"
        );

        Ok(CompiledMatcher {
            spec: PatternSpec::new(source, flags),
            engine,
            group_names,
            complexity,
            max_matches: self.config.max_matches,
        })
    }

    pub fn compile_spec(&self, spec: &PatternSpec) -> Result<CompiledMatcher, CompileError> {
        self.compile(&spec.source, spec.flags)
    }
}

/// Compile with the default configuration.
pub fn compile(source: &str, flags: Flags) -> Result<CompiledMatcher, CompileError> {
    PatternCompiler::new().compile(source, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagKind;

    #[test]
    fn test_compile_records_spec() {
        let flags = Flags::empty().with(FlagKind::Global).with(FlagKind::Multiline);
        let matcher = compile("^abc", flags).unwrap();
        assert_eq!(matcher.source(), "^abc");
        assert_eq!(matcher.flags(), flags);
        assert_eq!(matcher.spec(), &PatternSpec::new("^abc", flags));
        assert_eq!(matcher.group_count(), 0);
    }

    #[test]
    fn test_empty_pattern_is_valid() {
        let matcher = compile("", Flags::empty()).unwrap();
        assert_eq!(matcher.group_count(), 0);
        assert_eq!(matcher.complexity(), Some(PatternComplexity::Simple));
    }

    #[test]
    fn test_unbalanced_paren_is_compile_error() {
        let err = compile("(", Flags::empty()).unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_non_capturing_groups_not_counted() {
        let matcher = compile("(?:a)(b)(?:c(d))", Flags::empty()).unwrap();
        assert_eq!(matcher.group_count(), 2);
    }

    #[test]
    fn test_dangerous_pattern_policy() {
        let lenient = PatternCompiler::new();
        let matcher = lenient.compile("(a+)+$", Flags::empty()).unwrap();
        assert_eq!(matcher.complexity(), Some(PatternComplexity::Dangerous));

        let strict = PatternCompiler::with_config(MatchConfig::strict());
        let err = strict.compile("(a+)+$", Flags::empty()).unwrap_err();
        assert!(err.message.contains("catastrophic backtracking"));
        assert!(strict.compile("a+", Flags::empty()).is_ok());
    }

    #[test]
    fn test_analysis_can_be_disabled() {
        let compiler = PatternCompiler::with_config(MatchConfig::permissive());
        let matcher = compiler.compile("(a+)+$", Flags::empty()).unwrap();
        assert_eq!(matcher.complexity(), None);
    }

    #[test]
    fn test_size_limit_is_compile_error() {
        let compiler = PatternCompiler::with_config(MatchConfig::new().with_size_limit(64));
        assert!(compiler.compile(r"\w{100}", Flags::empty()).is_err());
    }

    #[test]
    fn test_max_matches_propagates() {
        let compiler =
            PatternCompiler::with_config(MatchConfig::new().with_max_matches(Some(4)));
        let matcher = compiler.compile("a", Flags::empty()).unwrap();
        assert_eq!(matcher.max_matches(), Some(4));
    }
}
