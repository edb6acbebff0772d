//! Contact form handling
//!
//! Whole-form validation, the message character counter, and the
//! UI-agnostic form session that drives submission.

pub mod counter;
pub mod session;
pub mod validator;

pub use counter::CharacterCount;
pub use session::{ContactForm, FieldState, Notice, NoticeKind, DEFAULT_NOTICE_DURATION};
pub use validator::{validate_all, ContactFormData, FormValidation};
