//! Analysis error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by model builders, converters, and analyzers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A caller supplied a blank, missing, or out-of-range value.
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// The parser could not produce a usable syntax tree.
    #[error("parse error in {path}: {}", problems.join("; "))]
    Parse { path: String, problems: Vec<String> },

    /// A structural assumption did not hold during conversion.
    #[error("{context}")]
    State {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The source file could not be read.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// An invalid-argument error for the named field.
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// A parse error carrying the parser's diagnostics.
    pub fn parse(path: impl Into<String>, problems: Vec<String>) -> Self {
        Self::Parse {
            path: path.into(),
            problems,
        }
    }

    /// A state error with a context message and no underlying cause.
    pub fn state(context: impl Into<String>) -> Self {
        Self::State {
            context: context.into(),
            source: None,
        }
    }

    /// A state error chaining the failure that caused it.
    pub fn state_with(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::State {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    /// An I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_chains_its_source() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = AnalysisError::state_with("conversion failed", source);

        assert_eq!(err.to_string(), "conversion failed");
        let chained = std::error::Error::source(&err).expect("source retained");
        assert_eq!(chained.to_string(), "boom");
    }

    #[test]
    fn parse_error_lists_problems() {
        let err = AnalysisError::parse(
            "A.java",
            vec!["syntax error at 1:1".into(), "missing } at 3:1".into()],
        );
        assert_eq!(
            err.to_string(),
            "parse error in A.java: syntax error at 1:1; missing } at 3:1"
        );
    }
}
