//! Error types for artifact emission

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format registered under this name
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The artifact text could not be produced
    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}
