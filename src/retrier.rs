//! The retry wrapper
//!
//! `Retrier` re-invokes a fallible operation until it succeeds or a fixed
//! attempt budget runs out, pausing a fixed delay between attempts. The
//! pause is a hard `std::thread::sleep`; nothing else runs on the calling
//! thread while waiting.

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::error::{Error, Result};

/// A reusable fixed-delay retry wrapper
///
/// Construction validates the configuration; after that the wrapper is
/// immutable and `Copy`, so it can be applied to any number of operations
/// and shared freely across threads.
///
/// # Example
///
/// ```rust
/// use relent::Retrier;
/// use std::time::Duration;
///
/// let retrier = Retrier::fixed(3, Duration::ZERO)?;
/// let mut calls = 0;
/// let result: Result<u32, &str> = retrier.run(|| {
///     calls += 1;
///     if calls < 3 { Err("boom") } else { Ok(42) }
/// });
/// assert_eq!(result, Ok(42));
/// # Ok::<(), relent::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retrier {
    max_attempts: u32,
    delay: Duration,
}

impl Retrier {
    /// Create a retrier from a validated configuration
    pub fn new(config: &RetryConfig) -> Result<Self> {
        if config.max_attempts == 0 {
            return Err(Error::invalid_max_attempts(config.max_attempts));
        }
        Ok(Self {
            max_attempts: config.max_attempts,
            delay: config.delay()?,
        })
    }

    /// Create a retrier directly from an attempt budget and a delay
    ///
    /// A `Duration` cannot be negative, so only the attempt budget can be
    /// rejected here.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::invalid_max_attempts(max_attempts));
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    /// The configured attempt budget
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The configured inter-attempt pause
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invoke `op` until it succeeds or the attempt budget is exhausted
    ///
    /// Returns the first successful result, or the error from the final
    /// attempt exactly as the operation produced it. Every failure is
    /// retried regardless of its kind; earlier errors are discarded.
    /// No delay is incurred after the final attempt, successful or not.
    pub fn run<T, E, F>(&self, mut op: F) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        // max_attempts >= 1 is a construction invariant, so the loop
        // always terminates through one of the returns.
        let mut remaining = self.max_attempts;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if remaining == 1 {
                        tracing::debug!(
                            max_attempts = self.max_attempts,
                            error = %err,
                            "giving up"
                        );
                        return Err(err);
                    }
                    tracing::warn!(
                        attempt = self.max_attempts - remaining + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = self.delay.as_millis() as u64,
                        error = %err,
                        "attempt failed, will retry"
                    );
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    remaining -= 1;
                }
            }
        }
    }

    /// Wrap `op`, producing a new operation with the same call shape
    ///
    /// Wrapping performs no invocation; each call of the returned closure
    /// runs a full retry cycle with its own attempt counter.
    pub fn wrap<T, E, F>(self, mut op: F) -> impl FnMut() -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        move || self.run(&mut op)
    }
}
