//! Configuration module for ContactForge
//!
//! This module handles loading and validating configuration from environment
//! variables, providing strongly-typed configuration structures for logging
//! and the simulated submission.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure for ContactForge
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Logging configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub logging: LoggingConfig,

    /// Submission configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub submission: SubmissionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct LoggingConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl LoggingConfig {
    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Submission configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct SubmissionConfig {
    /// Simulated network delay in milliseconds
    #[envconfig(from = "SUBMIT_DELAY_MS", default = "1500")]
    pub delay_ms: u64,

    /// Probability in [0, 1] that a simulated submission fails
    #[envconfig(from = "SUBMIT_FAILURE_RATE", default = "0.05")]
    pub failure_rate: f64,

    /// How long the success or error notice stays visible, in milliseconds
    #[envconfig(from = "NOTICE_DURATION_MS", default = "5000")]
    pub notice_duration_ms: u64,
}

impl SubmissionConfig {
    /// Get the simulated delay as Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Get the notice duration as Duration
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            failure_rate: 0.05,
            notice_duration_ms: 5000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let rate = self.submission.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::config(format!(
                "Submission failure rate must be between 0 and 1, got {}",
                rate
            )));
        }

        if self.logging.log_level.trim().is_empty() {
            return Err(Error::config("Log level cannot be empty"));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.logging.environment,
            log_level = %self.logging.log_level,
            "Logging configuration"
        );

        tracing::info!(
            delay_ms = %self.submission.delay_ms,
            failure_rate = %self.submission.failure_rate,
            notice_duration_ms = %self.submission.notice_duration_ms,
            "Submission configuration"
        );
    }
}
