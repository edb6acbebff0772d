//! Submission of validated contact forms
//!
//! This module provides:
//! - The `SubmissionTransport` seam a real transport can plug into
//! - A simulated transport with a fixed delay and failure rate
//! - Receipt and error types describing the outcome of an attempt

mod simulator;

pub use simulator::{SimulatedTransport, DEFAULT_DELAY, DEFAULT_FAILURE_RATE, SUCCESS_MESSAGE};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{SubmissionPayload, ValidationErrors};

/// Submission-specific error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Network error occurred")]
    Network,

    #[error("Form has invalid fields")]
    Rejected(ValidationErrors),

    #[error("A submission is already in progress")]
    Busy,
}

/// Successful submission, echoing the payload that was sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    pub data: SubmissionPayload,
}

impl SubmissionReceipt {
    pub fn new(data: SubmissionPayload) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// Exactly one of success or failure per attempt
pub type SubmissionOutcome = Result<SubmissionReceipt, SubmissionError>;

/// Something that can deliver a contact form payload
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver the payload, resolving exactly once
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome;
}

impl From<SubmissionError> for crate::error::Error {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Rejected(errors) => errors.into(),
            other => crate::error::Error::Submission(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::build_submission_payload;

    #[test]
    fn test_receipt_serialization() {
        let receipt =
            SubmissionReceipt::new(build_submission_payload("Ann", "a@b.co", "Hi!", "1234567890"));

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Message sent successfully");
        assert_eq!(json["data"]["email"], "a@b.co");
    }

    #[test]
    fn test_error_conversion() {
        let app: crate::error::Error = SubmissionError::Network.into();
        assert!(matches!(app, crate::error::Error::Submission(ref m) if m == "Network error occurred"));
        assert_eq!(app.error_type(), "submission_error");
        assert!(app.is_retryable());

        let app: crate::error::Error = SubmissionError::Rejected(ValidationErrors::new()).into();
        assert!(matches!(app, crate::error::Error::Validation(_)));
        assert!(app.is_user_correctable());
        assert!(!app.is_retryable());
    }
}
