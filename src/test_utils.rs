//! Test utilities for ContactForge
//!
//! This module provides mock implementations and utilities for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::models::SubmissionPayload;
use crate::submission::{
    SubmissionError, SubmissionOutcome, SubmissionReceipt, SubmissionTransport,
};

/// Mock transport that records payloads and resolves immediately
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    submitted: Arc<Mutex<Vec<SubmissionPayload>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail on the next submission
    pub fn fail_next_submission(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// Get all payloads received, including failed attempts
    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.lock().unwrap().clone()
    }

    /// Clear recorded payloads
    pub fn clear(&self) {
        self.submitted.lock().unwrap().clear();
    }

    fn check_failure(&self) -> Result<(), SubmissionError> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(SubmissionError::Network);
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionTransport for MockTransport {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        self.submitted.lock().unwrap().push(payload.clone());
        self.check_failure()?;
        Ok(SubmissionReceipt::new(payload))
    }
}
