//! Error handling module for ContactForge
//!
//! This module defines the application-level error type. Field validation
//! and submission have their own error types which convert into it.

use thiserror::Error;

/// Result type alias for ContactForge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ContactForge
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for form input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Submission attempt failed
    #[error("Submission error: {0}")]
    Submission(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a submission error
    pub fn submission<S: Into<String>>(msg: S) -> Self {
        Error::Submission(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Check if the user can resolve this error by editing the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if the same attempt may be made again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Submission(_) | Error::Io(_))
    }

    /// Get a string representation of the error type
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration_error",
            Error::Validation(_) => "validation_error",
            Error::Submission(_) => "submission_error",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::validation("test").is_user_correctable());
        assert!(!Error::submission("test").is_user_correctable());

        assert!(Error::submission("test").is_retryable());
        assert!(!Error::validation("test").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_error_type_names() {
        assert_eq!(Error::config("x").error_type(), "configuration_error");
        assert_eq!(Error::internal("x").error_type(), "internal_error");
        assert_eq!(
            Error::submission("Network error occurred").to_string(),
            "Submission error: Network error occurred"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = err.into();
        assert_eq!(err.error_type(), "serialization_error");
    }
}
