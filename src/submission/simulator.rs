//! Simulated submission transport
//!
//! Stands in for a real network call: waits a fixed delay, then succeeds or
//! fails at random. Replace it with a real `SubmissionTransport` in production.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{SubmissionError, SubmissionOutcome, SubmissionReceipt, SubmissionTransport};
use crate::config::SubmissionConfig;
use crate::logging::Timer;
use crate::models::SubmissionPayload;

/// Simulated network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Probability that a simulated submission fails
pub const DEFAULT_FAILURE_RATE: f64 = 0.05;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully";

/// Transport that resolves after a delay with a configurable failure rate
pub struct SimulatedTransport<R = StdRng> {
    delay: Duration,
    failure_rate: f64,
    rng: Mutex<R>,
}

impl SimulatedTransport<StdRng> {
    /// Create a transport seeded from system entropy
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self::with_rng(delay, failure_rate, StdRng::from_entropy())
    }

    /// Create a transport from the submission configuration
    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(config.delay(), config.failure_rate)
    }
}

impl Default for SimulatedTransport<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_FAILURE_RATE)
    }
}

impl<R: Rng + Send> SimulatedTransport<R> {
    /// Create a transport drawing from the given random source
    pub fn with_rng(delay: Duration, failure_rate: f64, rng: R) -> Self {
        Self {
            delay,
            failure_rate,
            rng: Mutex::new(rng),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn draw(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen::<f64>()
    }
}

#[async_trait]
impl<R: Rng + Send> SubmissionTransport for SimulatedTransport<R> {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        let timer = Timer::start("simulated_submission");
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            email = %payload.email,
            "Simulating contact form submission"
        );

        tokio::time::sleep(self.delay).await;

        // Drawn after the delay, once per call
        let draw = self.draw();
        timer.stop();

        if draw > self.failure_rate {
            info!(
                email = %payload.email,
                subject = %payload.subject,
                "Form submitted successfully"
            );
            Ok(SubmissionReceipt::new(payload))
        } else {
            warn!(email = %payload.email, "Form submission error");
            Err(SubmissionError::Network)
        }
    }
}
