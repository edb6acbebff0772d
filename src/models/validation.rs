//! Field validation rules for the contact form
//!
//! Each field is checked on its own: the value is trimmed, then the rules run
//! in order and the first violated rule decides the message. Lengths are
//! counted in UTF-16 code units, the unit browsers report for input length.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::OnceLock;

use super::error::{ValidationError, ValidationErrorKind};
use super::field::Field;

pub const NAME_MIN_LEN: usize = 2;
pub const SUBJECT_MIN_LEN: usize = 3;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

pub const NAME_EMPTY: &str = "Please enter your name.";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long.";
pub const NAME_INVALID_CHARACTERS: &str =
    "Name can only contain letters, spaces, hyphens, and apostrophes.";
pub const EMAIL_EMPTY: &str = "Please enter your email address.";
pub const EMAIL_MALFORMED: &str = "Please enter a valid email address.";
pub const SUBJECT_EMPTY: &str = "Please enter a subject.";
pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 3 characters long.";
pub const MESSAGE_EMPTY: &str = "Please enter your message.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";
pub const MESSAGE_TOO_LONG: &str = "Message must not exceed 1000 characters.";

// Lazy static regex patterns
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get or initialize the name regex pattern
fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("Invalid name regex pattern"))
}

/// Get or initialize the email regex pattern
///
/// Deliberately loose and not RFC 5322 compliant. Keep it as is.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Invalid email regex pattern")
    })
}

/// Outcome of validating a single field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when valid, otherwise the first violated rule's description
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValidationErrorKind>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: "",
            kind: None,
        }
    }

    pub fn invalid(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self {
            valid: false,
            message,
            kind: Some(kind),
        }
    }

    /// Attach the field name, yielding an error when the result is invalid
    pub fn into_error(self, field: Field) -> Option<ValidationError> {
        self.kind
            .map(|kind| ValidationError::new(kind, field, self.message))
    }
}

/// Strip surrounding whitespace, including the byte order mark
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length of a value in UTF-16 code units
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate the sender's name
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = trim_input(name);
    let len = text_len(trimmed);

    if len == 0 {
        return ValidationResult::invalid(ValidationErrorKind::EmptyField, NAME_EMPTY);
    }
    if len < NAME_MIN_LEN {
        return ValidationResult::invalid(
            ValidationErrorKind::TooShort { min: NAME_MIN_LEN },
            NAME_TOO_SHORT,
        );
    }
    if !name_regex().is_match(trimmed) {
        return ValidationResult::invalid(
            ValidationErrorKind::InvalidCharacters,
            NAME_INVALID_CHARACTERS,
        );
    }
    ValidationResult::ok()
}

/// Validate the sender's email address
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = trim_input(email);

    if trimmed.is_empty() {
        return ValidationResult::invalid(ValidationErrorKind::EmptyField, EMAIL_EMPTY);
    }
    if !email_regex().is_match(trimmed) {
        return ValidationResult::invalid(ValidationErrorKind::MalformedEmail, EMAIL_MALFORMED);
    }
    ValidationResult::ok()
}

/// Validate the message subject
pub fn validate_subject(subject: &str) -> ValidationResult {
    let len = text_len(trim_input(subject));

    if len == 0 {
        return ValidationResult::invalid(ValidationErrorKind::EmptyField, SUBJECT_EMPTY);
    }
    if len < SUBJECT_MIN_LEN {
        return ValidationResult::invalid(
            ValidationErrorKind::TooShort {
                min: SUBJECT_MIN_LEN,
            },
            SUBJECT_TOO_SHORT,
        );
    }
    ValidationResult::ok()
}

/// Validate the message body
pub fn validate_message(message: &str) -> ValidationResult {
    let len = text_len(trim_input(message));

    if len == 0 {
        return ValidationResult::invalid(ValidationErrorKind::EmptyField, MESSAGE_EMPTY);
    }
    if len < MESSAGE_MIN_LEN {
        return ValidationResult::invalid(
            ValidationErrorKind::TooShort {
                min: MESSAGE_MIN_LEN,
            },
            MESSAGE_TOO_SHORT,
        );
    }
    if len > MESSAGE_MAX_LEN {
        return ValidationResult::invalid(
            ValidationErrorKind::TooLong {
                max: MESSAGE_MAX_LEN,
            },
            MESSAGE_TOO_LONG,
        );
    }
    ValidationResult::ok()
}

/// Run the validator for the given field
pub fn validate_field(field: Field, value: &str) -> ValidationResult {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Subject => validate_subject(value),
        Field::Message => validate_message(value),
    }
}

fn into_validator_result(result: ValidationResult) -> Result<(), validator::ValidationError> {
    match result.kind {
        None => Ok(()),
        Some(kind) => Err(validator::ValidationError::new(kind.code())
            .with_message(Cow::Borrowed(result.message))),
    }
}

/// Validate name for validator crate
pub fn validate_name_rule(name: &str) -> Result<(), validator::ValidationError> {
    into_validator_result(validate_name(name))
}

/// Validate email for validator crate
pub fn validate_email_rule(email: &str) -> Result<(), validator::ValidationError> {
    into_validator_result(validate_email(email))
}

/// Validate subject for validator crate
pub fn validate_subject_rule(subject: &str) -> Result<(), validator::ValidationError> {
    into_validator_result(validate_subject(subject))
}

/// Validate message for validator crate
pub fn validate_message_rule(message: &str) -> Result<(), validator::ValidationError> {
    into_validator_result(validate_message(message))
}
