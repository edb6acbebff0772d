//! Whole-form validation
//!
//! All four fields are validated independently on every call. Nothing
//! short-circuits, so every field's message is available to the caller.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validation::{
    trim_input, validate_email_rule, validate_message_rule, validate_name_rule,
    validate_subject_rule,
};
use crate::models::{
    build_submission_payload, validate_email, validate_message, validate_name, validate_subject,
    Field, SubmissionPayload, ValidationErrors, ValidationResult,
};

/// Per-field results of validating the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    /// Results in form order: name, email, subject, message
    pub results: [ValidationResult; 4],
    pub all_valid: bool,
}

impl FormValidation {
    /// Result for a single field
    pub fn result(&self, field: Field) -> &ValidationResult {
        &self.results[field.index()]
    }

    /// First invalid field in form order, the one to focus
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| !self.result(*field).valid)
    }

    /// Collect the failures into a `ValidationErrors`
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in Field::ALL {
            if let Some(error) = self.result(field).clone().into_error(field) {
                errors.add(error);
            }
        }
        errors
    }

    /// Convert to a Result
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.errors().into_result(())
    }
}

/// Validate all four fields of the contact form
pub fn validate_all(name: &str, email: &str, subject: &str, message: &str) -> FormValidation {
    let results = [
        validate_name(name),
        validate_email(email),
        validate_subject(subject),
        validate_message(message),
    ];
    let all_valid = results.iter().all(|r| r.valid);

    FormValidation { results, all_valid }
}

/// Raw contact form data as posted by a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactFormData {
    #[validate(custom(function = "validate_name_rule"))]
    #[serde(default)]
    pub name: String,

    #[validate(custom(function = "validate_email_rule"))]
    #[serde(default)]
    pub email: String,

    #[validate(custom(function = "validate_subject_rule"))]
    #[serde(default)]
    pub subject: String,

    #[validate(custom(function = "validate_message_rule"))]
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Raw value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Mutable access to a field's raw value
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Validate every field
    pub fn validation(&self) -> FormValidation {
        validate_all(&self.name, &self.email, &self.subject, &self.message)
    }

    /// Validate all fields without using the validator crate
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        self.validation().into_result()
    }

    /// Copy with every value trimmed
    pub fn trimmed(&self) -> Self {
        Self::new(
            trim_input(&self.name),
            trim_input(&self.email),
            trim_input(&self.subject),
            trim_input(&self.message),
        )
    }

    /// Build the submission payload, stamped with the current time
    pub fn to_payload(&self) -> SubmissionPayload {
        build_submission_payload(&self.name, &self.email, &self.subject, &self.message)
    }
}
