//! Error types for signal statistics
//!
//! Provides a unified error type for all signal-stats crates.
//!
//! Only precondition violations are reported as errors. Degenerate but
//! well-typed inputs (all-zero noise, a zero norm) produce IEEE `NaN`/`Inf`
//! values instead.

use thiserror::Error;

/// Core error type for signal statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to an estimator
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Not enough samples for the requested estimator
    #[error("Insufficient data for {operation}: expected at least {expected} samples, got {actual}")]
    InsufficientData {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Paired sequences of different lengths
    #[error("Length mismatch in {operation}: left sequence has {left} samples, right has {right}")]
    LengthMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },

    /// Numerical conversion or computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::InsufficientData {
            operation,
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a sample count below the estimator's minimum
    pub fn insufficient(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation,
            expected,
            actual,
        }
    }

    /// Create an error for paired sequences of different lengths
    pub fn length_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Self::LengthMismatch {
            operation,
            left,
            right,
        }
    }

    /// Create an error for an out-of-domain parameter
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// True for the precondition violations (empty or mismatched input)
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::LengthMismatch { .. }
        )
    }
}
