//! # relent
//!
//! Fixed-delay retry wrapper for fallible operations, providing:
//! - Attempt-budget and delay configuration with validation (`RetryConfig`)
//! - A reusable wrapper that re-invokes an operation until it succeeds
//!   or the budget runs out (`Retrier`)
//! - Verbatim propagation of the final failure to the caller
//!
//! Success is determined by the operation returning `Ok`; any `Err` is
//! treated as retryable. The pause between attempts blocks the calling
//! thread.

pub mod config;
pub mod error;
pub mod retrier;

pub use config::RetryConfig;
pub use error::{Error, Result};
pub use retrier::Retrier;
