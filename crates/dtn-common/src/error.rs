//! Error types for DT noise analysis configuration.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    /// A parameter value lies outside its permitted range.
    #[error("invalid configuration: {field} = {value}: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("unsupported schema version: {0}")]
    UnsupportedSchema(String),

    #[error("snapshot hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Internal errors (90-99)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidConfiguration`] for `field`.
    pub fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Error::InvalidConfiguration {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns the detailed error code for this error type.
    ///
    /// The CLI exit code is derived from the range: 10 is an invalid
    /// parameter, 11-19 a config load failure, 60-69 I/O, 90-99 internal.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidConfiguration { .. } => 10,
            Error::Config(_) => 11,
            Error::Parse { .. } => 12,
            Error::UnsupportedSchema(_) => 13,
            Error::HashMismatch { .. } => 14,
            Error::Io(_) => 60,
            Error::Json(_) => 90,
        }
    }

    /// Whether this error reports a parameter that failed validation.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. })
    }
}
