//! Error types.

use crate::path::Path;
use thiserror::Error;

/// Errors raised while turning a pair of inputs into a changeset.
#[derive(Debug, Error)]
pub enum Error {
    /// A textual input was not valid JSON.
    #[error("{input}: could not parse JSON: {source}")]
    Parse {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value cannot be represented as JSON.
    #[error("{path}: invalid input: {reason}")]
    InvalidInput { path: Path, reason: String },

    /// An options file could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a parse error for the named input.
    pub fn parse(input: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Parse {
            input: input.into(),
            source,
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(path: Path, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            path,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An item failure while processing a batch with the abort policy.
#[derive(Debug, Error)]
#[error("item {index}: {source}")]
pub struct BatchError {
    /// Position of the failing item in the input.
    pub index: usize,
    #[source]
    pub source: Error,
}
