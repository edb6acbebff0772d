//! UI-agnostic state of a contact form
//!
//! A UI adapter forwards input, blur and submit events here and renders the
//! resulting field states, busy flag and notice. Nothing in this module
//! touches a UI toolkit.

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, Instrument};

use super::counter::CharacterCount;
use super::validator::{ContactFormData, FormValidation};
use crate::config::SubmissionConfig;
use crate::models::{validate_field, Field, SubmissionPayload, ValidationResult};
use crate::submission::{SubmissionError, SubmissionOutcome, SubmissionTransport};

/// How long a success or error notice stays visible
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// Validation state rendered next to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldState {
    /// Not validated since the last edit
    Pristine,
    Valid,
    Invalid(&'static str),
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        if result.valid {
            FieldState::Valid
        } else {
            FieldState::Invalid(result.message)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notice shown after a submission attempt, hidden once it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Leaves the busy state when dropped, including when a submit is cancelled
struct BusyGuard<'a> {
    form: &'a mut ContactForm,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.form.busy = false;
    }
}

/// State of one contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    data: ContactFormData,
    states: [FieldState; 4],
    busy: bool,
    notice: Option<Notice>,
    notice_duration: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_notice_duration(DEFAULT_NOTICE_DURATION)
    }

    pub fn with_notice_duration(notice_duration: Duration) -> Self {
        Self {
            data: ContactFormData::default(),
            states: [
                FieldState::Pristine,
                FieldState::Pristine,
                FieldState::Pristine,
                FieldState::Pristine,
            ],
            busy: false,
            notice: None,
            notice_duration,
        }
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::with_notice_duration(config.notice_duration())
    }

    /// Raw value of a field
    pub fn value(&self, field: Field) -> &str {
        self.data.value(field)
    }

    /// Raw values of all fields
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    /// Trimmed snapshot of all fields
    pub fn form_data(&self) -> ContactFormData {
        self.data.trimmed()
    }

    /// Record an edit to a field, clearing its validation state
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.data.value_mut(field) = value.into();
        self.states[field.index()] = FieldState::Pristine;
    }

    pub fn field_state(&self, field: Field) -> &FieldState {
        &self.states[field.index()]
    }

    /// Validate a single field when it loses focus
    pub fn blur(&mut self, field: Field) -> ValidationResult {
        let result = validate_field(field, self.data.value(field));
        self.states[field.index()] = FieldState::from(&result);
        result
    }

    /// Validate every field and record each state
    pub fn validate(&mut self) -> FormValidation {
        let validation = self.data.validation();
        for field in Field::ALL {
            self.states[field.index()] = FieldState::from(validation.result(field));
        }
        validation
    }

    /// Counter for the message field
    pub fn character_count(&self) -> CharacterCount {
        CharacterCount::of_message(&self.data.message)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Notice still visible at the current time
    pub fn visible_notice(&self) -> Option<NoticeKind> {
        self.visible_notice_at(Instant::now())
    }

    pub fn visible_notice_at(&self, now: Instant) -> Option<NoticeKind> {
        self.notice
            .filter(|notice| notice.is_visible_at(now))
            .map(|notice| notice.kind)
    }

    /// Validate and, if every field passes, enter the busy state
    ///
    /// Any previous notice is hidden first. On rejection the caller should
    /// focus `FormValidation::first_invalid`.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmissionError> {
        if self.busy {
            return Err(SubmissionError::Busy);
        }

        self.notice = None;

        let validation = self.validate();
        if !validation.all_valid {
            debug!(
                first_invalid = ?validation.first_invalid(),
                "Contact form rejected"
            );
            return Err(SubmissionError::Rejected(validation.errors()));
        }

        self.busy = true;
        Ok(self.data.to_payload())
    }

    /// Apply the outcome of an attempt started with `begin_submit`
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) {
        let kind = match outcome {
            Ok(_) => {
                self.clear_fields();
                NoticeKind::Success
            },
            Err(_) => NoticeKind::Error,
        };

        self.notice = Some(Notice {
            kind,
            expires_at: Instant::now() + self.notice_duration,
        });
        self.busy = false;
    }

    /// Validate, submit through the transport and apply the outcome
    ///
    /// Dropping the returned future before it resolves leaves the form idle
    /// with its values and no notice.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmissionOutcome
    where
        T: SubmissionTransport + ?Sized,
    {
        let payload = self.begin_submit()?;
        let guard = BusyGuard { form: self };

        let span = crate::submission_span!(payload.email);
        let outcome = transport.submit(payload).instrument(span.clone()).await;
        span.record("outcome", if outcome.is_ok() { "success" } else { "failure" });

        guard.form.finish_submit(&outcome);
        outcome
    }

    /// Clear values, field states and any notice
    pub fn reset(&mut self) {
        self.clear_fields();
        self.notice = None;
    }

    fn clear_fields(&mut self) {
        self.data = ContactFormData::default();
        self.states = [
            FieldState::Pristine,
            FieldState::Pristine,
            FieldState::Pristine,
            FieldState::Pristine,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::{EMAIL_MALFORMED, NAME_TOO_SHORT};
    use crate::submission::SimulatedTransport;
    use crate::test_utils::MockTransport;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, " Ann ");
        form.set_value(Field::Email, "a@b.co");
        form.set_value(Field::Subject, "Hi!");
        form.set_value(Field::Message, "1234567890");
        form
    }

    #[test]
    fn test_blur_records_state_and_input_clears_it() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "A");

        let result = form.blur(Field::Name);
        assert!(!result.valid);
        assert_eq!(form.field_state(Field::Name), &FieldState::Invalid(NAME_TOO_SHORT));
        // Other fields are untouched by a single blur
        assert_eq!(form.field_state(Field::Email), &FieldState::Pristine);

        form.set_value(Field::Name, "Ann");
        assert_eq!(form.field_state(Field::Name), &FieldState::Pristine);

        form.blur(Field::Name);
        assert_eq!(form.field_state(Field::Name), &FieldState::Valid);
    }

    #[test]
    fn test_begin_submit_rejects_invalid_form() {
        let mut form = filled_form();
        form.set_value(Field::Email, "nope");

        match form.begin_submit() {
            Err(SubmissionError::Rejected(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.errors()[0].field, Field::Email);
            },
            other => panic!("expected rejection, got {:?}", other),
        }

        assert!(!form.is_busy());
        assert_eq!(form.field_state(Field::Email), &FieldState::Invalid(EMAIL_MALFORMED));
        assert_eq!(form.field_state(Field::Name), &FieldState::Valid);
    }

    #[test]
    fn test_begin_submit_while_busy() {
        let mut form = filled_form();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Ann");
        assert!(form.is_busy());

        assert_eq!(form.begin_submit(), Err(SubmissionError::Busy));
    }

    #[test]
    fn test_form_data_is_trimmed() {
        let form = filled_form();
        assert_eq!(form.value(Field::Name), " Ann ");
        assert_eq!(form.form_data().name, "Ann");
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submit_clears_form() {
        let transport = MockTransport::new();
        let mut form = filled_form();

        let receipt = form.submit(&transport).await.unwrap();

        assert_eq!(receipt.data.name, "Ann");
        assert_eq!(transport.submitted().len(), 1);
        assert!(!form.is_busy());
        assert_eq!(form.value(Field::Message), "");
        assert_eq!(form.field_state(Field::Name), &FieldState::Pristine);
        assert_eq!(form.visible_notice(), Some(NoticeKind::Success));

        tokio::time::advance(Duration::from_millis(4999)).await;
        assert_eq!(form.visible_notice(), Some(NoticeKind::Success));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(form.visible_notice(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submit_keeps_values() {
        let transport = MockTransport::new();
        transport.fail_next_submission();
        let mut form = filled_form();

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome, Err(SubmissionError::Network));
        assert!(!form.is_busy());
        assert_eq!(form.value(Field::Subject), "Hi!");
        assert_eq!(form.visible_notice(), Some(NoticeKind::Error));

        // A new attempt hides the previous notice
        let _ = form.begin_submit().unwrap();
        assert_eq!(form.visible_notice(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_leaves_form_idle() {
        let transport = SimulatedTransport::new(Duration::from_millis(1500), 0.0);
        let mut form = filled_form();

        let result =
            tokio::time::timeout(Duration::from_millis(100), form.submit(&transport)).await;

        assert!(result.is_err());
        assert!(!form.is_busy());
        assert_eq!(form.value(Field::Subject), "Hi!");
        assert_eq!(form.visible_notice(), None);

        let mock = MockTransport::new();
        assert!(form.submit(&mock).await.is_ok());
        assert_eq!(mock.submitted().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_submit_never_reaches_transport() {
        let transport = MockTransport::new();
        let mut form = ContactForm::new();

        let outcome = form.submit(&transport).await;

        assert!(matches!(outcome, Err(SubmissionError::Rejected(ref e)) if e.len() == 4));
        assert!(transport.submitted().is_empty());
        assert_eq!(form.visible_notice(), None);
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.validate();
        form.reset();

        assert_eq!(form.data(), &ContactFormData::default());
        for field in Field::ALL {
            assert_eq!(form.field_state(field), &FieldState::Pristine);
        }
    }

    #[test]
    fn test_character_count() {
        let mut form = ContactForm::new();
        form.set_value(Field::Message, "hello");
        assert_eq!(form.character_count().to_string(), "5 / 1000 characters");
    }
}
