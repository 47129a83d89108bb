//! Retry configuration
//!
//! `RetryConfig` is designed to be embedded in a larger application
//! configuration file, so every field has a serde default and the
//! struct validates after load rather than during deserialization.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for a fixed-delay retry wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryConfig {
    /// Total number of invocation attempts allowed, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between a failed attempt and the next, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_secs: default_delay_secs(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}
fn default_delay_secs() -> f64 {
    1.0
}

impl RetryConfig {
    /// Create a config from an attempt budget and a delay in seconds
    pub fn new(max_attempts: u32, delay_secs: f64) -> Self {
        Self {
            max_attempts,
            delay_secs,
        }
    }

    /// Check that the config describes a usable retry policy
    ///
    /// Fails when `max_attempts` is zero or when `delay_secs` is not a
    /// finite, non-negative number of seconds.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::invalid_max_attempts(self.max_attempts));
        }
        self.delay().map(|_| ())
    }

    /// The inter-attempt pause as a `Duration`
    ///
    /// Fails for negative, NaN, infinite, or overflowing `delay_secs`.
    pub fn delay(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.delay_secs)
            .map_err(|_| Error::invalid_delay(self.delay_secs))
    }
}
