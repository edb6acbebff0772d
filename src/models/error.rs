//! Validation error types for contact form fields
//!
//! This module defines error types specifically for field validation,
//! separate from the general application errors.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::field::Field;

/// A single field that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// The field that failed validation
    pub field: Field,
    /// The user-facing message for this failure
    pub message: &'static str,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: Field, message: &'static str) -> Self {
        Self {
            kind,
            field,
            message,
        }
    }
}

/// Specific validation failure reasons
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Trimmed value is empty
    #[error("Required field is empty")]
    EmptyField,

    /// Trimmed value is below the minimum length
    #[error("Value is below minimum length of {min}")]
    TooShort { min: usize },

    /// Trimmed value is above the maximum length
    #[error("Value exceeds maximum length of {max}")]
    TooLong { max: usize },

    /// Value contains characters outside the allowed set
    #[error("Value contains invalid characters")]
    InvalidCharacters,

    /// Value is not shaped like an email address
    #[error("Malformed email address")]
    MalformedEmail,
}

impl ValidationErrorKind {
    /// Stable machine-readable code, used as the `validator` error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyField => "empty_field",
            ValidationErrorKind::TooShort { .. } => "too_short",
            ValidationErrorKind::TooLong { .. } => "too_long",
            ValidationErrorKind::InvalidCharacters => "invalid_characters",
            ValidationErrorKind::MalformedEmail => "malformed_email",
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Find the error recorded for a field, if any
    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Convert to a Result
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed with {} error(s):", self.errors.len())?;
            for error in &self.errors {
                write!(f, "\n  - {}", error)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::validation(err.to_string())
    }
}

impl From<ValidationErrors> for crate::error::Error {
    fn from(err: ValidationErrors) -> Self {
        crate::error::Error::validation(err.to_string())
    }
}
