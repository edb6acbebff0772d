//! Data models for ContactForge
//!
//! This module contains the contact form fields, their validation rules and
//! error types, and the payload handed to a submission transport.

pub mod error;
pub mod field;
pub mod payload;
pub mod validation;

// Re-export commonly used types
pub use error::{ValidationError, ValidationErrorKind, ValidationErrors};
pub use field::Field;
pub use payload::{build_submission_payload, build_submission_payload_at, SubmissionPayload};
pub use validation::{
    validate_email, validate_field, validate_message, validate_name, validate_subject,
    ValidationResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _payload = build_submission_payload("Ann", "a@b.co", "Hi!", "1234567890");
        let _field = Field::Email;
        let _error = ValidationError::new(
            ValidationErrorKind::EmptyField,
            Field::Email,
            "Please enter your email address.",
        );
        assert!(validate_field(Field::Name, "Ann").valid);
    }
}
