//! Error types for rate estimation.
//!
//! The estimator itself is total; the only error is the caller-side input
//! check rejecting out-of-range values before invocation.

use thiserror::Error;

/// Errors raised by rate-request validation.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("invalid input: {field} = {value} (must be a non-negative number)")]
    InvalidInput { field: String, value: f64 },
}
