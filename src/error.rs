//! Error types for the regex workbench crate.
//!
//! Two failure kinds exist and they never mix: a [`CompileError`] means the
//! pattern (or its flag string) was rejected before any matching happened,
//! an [`EnumerationError`] means the engine faulted while matching.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The pattern could not be turned into a matcher.
///
/// `message` is the engine diagnostic, passed through untouched so the UI
/// can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
}

impl CompileError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_flags(flags: &str) -> Self {
        Self::new(format!(
            "Invalid flags supplied to RegExp constructor '{flags}'"
        ))
    }

    pub(crate) fn dangerous_pattern(pattern: &str) -> Self {
        Self::new(format!(
            "Pattern rejected: catastrophic backtracking risk in /{pattern}/"
        ))
    }
}

/// Runtime failure while enumerating matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("Matching failed: backtrack limit exceeded")]
    BacktrackLimitExceeded,
    #[error("Matching failed: more than {0} matches")]
    TooManyMatches(usize),
    #[error("Matching failed: {0}")]
    Engine(String),
}

impl From<fancy_regex::Error> for EnumerationError {
    fn from(err: fancy_regex::Error) -> Self {
        match err {
            fancy_regex::Error::RuntimeError(fancy_regex::RuntimeError::BacktrackLimitExceeded) => {
                EnumerationError::BacktrackLimitExceeded
            }
            other => EnumerationError::Engine(other.to_string()),
        }
    }
}

/// Any failure of a single test invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn is_compile(&self) -> bool {
        matches!(self, Error::Compile(_))
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self, Error::Enumeration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_is_verbatim() {
        let err = CompileError::new("regex parse error: unclosed group");
        assert_eq!(err.to_string(), "regex parse error: unclosed group");
    }

    #[test]
    fn test_invalid_flags_message() {
        let err = CompileError::invalid_flags("gg");
        assert_eq!(
            err.to_string(),
            "Invalid flags supplied to RegExp constructor 'gg'"
        );
    }

    #[test]
    fn test_enumeration_error_display() {
        assert_eq!(
            EnumerationError::BacktrackLimitExceeded.to_string(),
            "Matching failed: backtrack limit exceeded"
        );
        assert_eq!(
            EnumerationError::TooManyMatches(10).to_string(),
            "Matching failed: more than 10 matches"
        );
        assert!(EnumerationError::Engine("boom".to_string())
            .to_string()
            .starts_with("Matching failed"));
    }

    #[test]
    fn test_top_level_conversions() {
        let err: Error = CompileError::new("bad").into();
        assert!(err.is_compile());
        assert!(!err.is_enumeration());
        assert_eq!(err.to_string(), "bad");

        let err: Error = EnumerationError::BacktrackLimitExceeded.into();
        assert!(err.is_enumeration());
    }

    #[test]
    fn test_result_type_alias() {
        fn failing() -> Result<i32> {
            Err(CompileError::new("nope").into())
        }

        match failing() {
            Err(Error::Compile(e)) => assert_eq!(e.message, "nope"),
            other => panic!("Expected compile error, got {other:?}"),
        }
    }
}
