//! One test invocation, end to end.
//!
//! The UI calls [`Workbench::recompute`] (or [`Workbench::run`]) whenever the
//! pattern, the flags or the test string change. Every call starts from
//! scratch; nothing is carried over from earlier calls, so a newer call
//! simply supersedes an older result.

use crate::compiler::{EngineKind, PatternCompiler, PatternComplexity};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::flags::Flags;
use crate::matcher::{enumerate, MatchRecord};
use crate::render::{self, HighlightSegment, MatchDetail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRequest {
    pub pattern: String,
    pub test_string: String,
    #[serde(default)]
    pub flags: Flags,
}

impl TestRequest {
    pub fn new(pattern: impl Into<String>, test_string: impl Into<String>, flags: Flags) -> Self {
        Self {
            pattern: pattern.into(),
            test_string: test_string.into(),
            flags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub match_count: usize,
    pub group_count: usize,
    pub flags: Flags,
    pub engine: EngineKind,
    pub complexity: Option<PatternComplexity>,
}

/// Everything the UI renders for a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestReport {
    pub matches: Vec<MatchRecord>,
    pub segments: Vec<HighlightSegment>,
    pub details: Vec<MatchDetail>,
    pub summary: MatchSummary,
}

/// Serialized as `{"matches": [...], ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TestOutcome {
    Matched(TestReport),
    Failed { error: String },
}

impl TestOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, TestOutcome::Matched(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TestOutcome::Matched(_) => None,
            TestOutcome::Failed { error } => Some(error),
        }
    }

    pub fn report(&self) -> Option<&TestReport> {
        match self {
            TestOutcome::Matched(report) => Some(report),
            TestOutcome::Failed { .. } => None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string() }).to_string()
        })
    }
}

/// Runs test invocations under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    compiler: PatternCompiler,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            compiler: PatternCompiler::with_config(config),
        })
    }

    pub fn config(&self) -> &MatchConfig {
        self.compiler.config()
    }

    /// Compile, enumerate, then render. A compile error skips the rest; an
    /// enumeration error discards any matches found before it.
    pub fn recompute(&self, pattern: &str, flags: Flags, text: &str) -> Result<TestReport> {
        let matcher = self.compiler.compile(pattern, flags)?;
        let matches = enumerate(&matcher, text)?;
        let segments = render::render(text, &matches);
        let details = render::detail::format(&matches);

        debug!(
            pattern,
            matches = matches.len(),
            segments = segments.len(),
            "recomputed"
        );

        Ok(TestReport {
            summary: MatchSummary {
                match_count: matches.len(),
                group_count: matcher.group_count(),
                flags,
                engine: matcher.engine(),
                complexity: matcher.complexity(),
            },
            matches,
            segments,
            details,
        })
    }

    pub fn run(&self, request: &TestRequest) -> TestOutcome {
        match self.recompute(&request.pattern, request.flags, &request.test_string) {
            Ok(report) => TestOutcome::Matched(report),
            Err(err) => TestOutcome::Failed {
                error: err.to_string(),
            },
        }
    }

    /// JSON in, JSON out. Malformed requests (including bad flag strings)
    /// come back as an `error` outcome.
    pub fn run_json(&self, request: &str) -> String {
        match serde_json::from_str::<TestRequest>(request) {
            Ok(request) => self.run(&request).to_json(),
            Err(err) => TestOutcome::Failed {
                error: err.to_string(),
            }
            .to_json(),
        }
    }
}

/// [`Workbench::recompute`] with the default configuration.
pub fn recompute(pattern: &str, flags: Flags, text: &str) -> Result<TestReport> {
    Workbench::new().recompute(pattern, flags, text)
}
