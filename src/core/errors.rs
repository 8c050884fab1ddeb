//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input phrase is missing, empty or whitespace-only
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        path: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Shorthand for the empty-input failure
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TranslationError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error was caused by bad caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TranslationError::InvalidArgument { .. })
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TranslationError::invalid_argument("phrase is empty");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: phrase is empty");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TranslationError = io.into();
        assert!(matches!(err, TranslationError::IoError(_)));
        assert!(!err.is_invalid_argument());
    }
}
