//! Submission payload built from a validated contact form

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::validation::trim_input;

/// Snapshot of the four trimmed field values at submission time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// ISO-8601 UTC creation time, millisecond precision
    pub timestamp: String,
}

impl SubmissionPayload {
    /// Parse the timestamp back into a `DateTime`
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Build a payload stamped with the current time
///
/// Callers are expected to have validated the fields first.
pub fn build_submission_payload(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> SubmissionPayload {
    build_submission_payload_at(name, email, subject, message, Utc::now())
}

/// Build a payload stamped with the given time
pub fn build_submission_payload_at(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    now: DateTime<Utc>,
) -> SubmissionPayload {
    SubmissionPayload {
        name: trim_input(name).to_string(),
        email: trim_input(email).to_string(),
        subject: trim_input(subject).to_string(),
        message: trim_input(message).to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
