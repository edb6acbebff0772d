//! ContactForge Library
//!
//! Validation and simulated submission for a portfolio site's contact form,
//! kept free of any UI so it can be driven by whatever adapter renders it.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub mod form;
pub mod submission;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    build_submission_payload, validate_email, validate_message, validate_name, validate_subject,
    Field, SubmissionPayload, ValidationError, ValidationErrorKind, ValidationErrors,
    ValidationResult,
};

// Re-export form and submission types
pub use form::{validate_all, CharacterCount, ContactForm, ContactFormData, FormValidation};
pub use submission::{
    SimulatedTransport, SubmissionError, SubmissionOutcome, SubmissionReceipt,
    SubmissionTransport,
};
