//! Matcher configuration.
//!
//! Bounds the work a single test invocation may do. The tester runs on every
//! keystroke, so an unbounded pathological pattern is a usability defect
//! rather than an edge case.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Which engine the compiler should try first.
///
/// | Preference | Linear-time patterns | Backreferences / lookaround |
/// |------------|----------------------|-----------------------------|
/// | `Auto` | `regex` | `fancy-regex` |
/// | `Backtracking` | `fancy-regex` | `fancy-regex` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePreference {
    /// Use the linear-time engine whenever the pattern allows it.
    #[default]
    Auto,
    /// Always compile on the backtracking engine.
    Backtracking,
}

/// Complexity-analysis policy for user patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Score every pattern with the backtracking heuristic.
    pub analyze_complexity: bool,
    /// Refuse patterns scored as dangerous at compile time.
    pub reject_dangerous_patterns: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            analyze_complexity: true,
            reject_dangerous_patterns: false,
        }
    }
}

/// Configuration for compiling and enumerating one pattern.
///
/// # Examples
///
/// ```rust
/// use regex_workbench::MatchConfig;
///
/// let config = MatchConfig::interactive()
///     .with_backtrack_limit(100_000)
///     .with_max_matches(Some(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum backtracking steps per match attempt on the backtracking
    /// engine. Exhaustion is reported as an enumeration error.
    ///
    /// **Default**: 1,000,000
    pub backtrack_limit: usize,

    /// Upper bound on the compiled program size in bytes.
    ///
    /// **Default**: 10MB
    pub size_limit: usize,

    /// Stop with an error once this many matches are found.
    /// `None` disables the cap.
    ///
    /// **Default**: `None`
    pub max_matches: Option<usize>,

    pub engine: EnginePreference,

    pub security: SecurityConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            backtrack_limit: 1_000_000,
            size_limit: 10 * 1024 * 1024,
            max_matches: None,
            engine: EnginePreference::Auto,
            security: SecurityConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuned for recompute-on-keystroke: small budgets, bounded output.
    pub fn interactive() -> Self {
        Self {
            backtrack_limit: 200_000,
            size_limit: 2 * 1024 * 1024,
            max_matches: Some(10_000),
            ..Default::default()
        }
    }

    /// Refuses dangerous patterns outright.
    pub fn strict() -> Self {
        Self {
            backtrack_limit: 50_000,
            size_limit: 1024 * 1024,
            max_matches: Some(1_000),
            security: SecurityConfig {
                analyze_complexity: true,
                reject_dangerous_patterns: true,
            },
            ..Default::default()
        }
    }

    /// Large budgets for batch use where latency does not matter.
    pub fn permissive() -> Self {
        Self {
            backtrack_limit: 50_000_000,
            size_limit: 64 * 1024 * 1024,
            max_matches: None,
            security: SecurityConfig {
                analyze_complexity: false,
                reject_dangerous_patterns: false,
            },
            ..Default::default()
        }
    }

    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn with_max_matches(mut self, max: Option<usize>) -> Self {
        self.max_matches = max;
        self
    }

    pub fn with_engine(mut self, engine: EnginePreference) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_dangerous_pattern_rejection(mut self, reject: bool) -> Self {
        self.security.reject_dangerous_patterns = reject;
        if reject {
            self.security.analyze_complexity = true;
        }
        self
    }

    /// Loads a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.backtrack_limit == 0 {
            return Err(Error::Config(
                "backtrack_limit must be greater than 0".to_string(),
            ));
        }
        if self.size_limit == 0 {
            return Err(Error::Config("size_limit must be greater than 0".to_string()));
        }
        if self.max_matches == Some(0) {
            return Err(Error::Config(
                "max_matches must be greater than 0 when set".to_string(),
            ));
        }
        if self.security.reject_dangerous_patterns && !self.security.analyze_complexity {
            return Err(Error::Config(
                "reject_dangerous_patterns requires analyze_complexity".to_string(),
            ));
        }
        Ok(())
    }
}
