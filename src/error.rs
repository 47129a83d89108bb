//! Error types for retrier construction

use thiserror::Error;

/// Result type alias using relent's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a retry configuration is rejected
///
/// These only ever surface at construction time, before the wrapped
/// operation is invoked. Failures of the operation itself are returned
/// verbatim by [`Retrier::run`](crate::Retrier::run) and never pass
/// through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The attempt budget leaves no room for even a first attempt
    #[error("max-attempts must be at least 1, got {value}")]
    InvalidMaxAttempts { value: u32 },

    /// The delay is not a usable duration
    #[error("delay-secs must be a finite, non-negative number of seconds, got {value}")]
    InvalidDelay { value: f64 },
}

impl Error {
    /// Create an invalid max-attempts error
    pub fn invalid_max_attempts(value: u32) -> Self {
        Self::InvalidMaxAttempts { value }
    }

    /// Create an invalid delay error
    pub fn invalid_delay(value: f64) -> Self {
        Self::InvalidDelay { value }
    }
}
