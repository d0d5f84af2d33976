//! Iterative factorial with overflow detection.

use thiserror::Error;
use tracing::{debug, trace};

/// Value returned by [`factorial_or_sentinel`] when the computation fails.
/// No valid factorial is negative, so it never collides with a real result.
pub const SENTINEL: i64 = -1;

/// Largest input whose factorial fits in an `i64`.
pub const MAX_INPUT: i32 = 20;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    #[error("Error: Factorial is not defined for negative numbers.")]
    InvalidInput { n: i32 },
    #[error("Warning: Overflow occurred! Factorial of {n} is too large.")]
    Overflow { n: i32 },
}

impl FactorialError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FactorialError::InvalidInput { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, FactorialError::Overflow { .. })
    }

    /// The input that produced this error.
    pub fn input(&self) -> i32 {
        match *self {
            FactorialError::InvalidInput { n } | FactorialError::Overflow { n } => n,
        }
    }
}

pub type Result<T> = std::result::Result<T, FactorialError>;

/// Calculates `n!` with a running product in an `i64`.
///
/// Fails with [`FactorialError::InvalidInput`] for negative `n` and with
/// [`FactorialError::Overflow`] as soon as the next multiplication would exceed
/// `i64::MAX`.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        debug!(n, "factorial of negative input");
        return Err(FactorialError::InvalidInput { n });
    }

    if n == 0 || n == 1 {
        return Ok(1);
    }

    let mut acc: i64 = 1;
    for i in 2..=i64::from(n) {
        // same as `acc > i64::MAX / i` for positive operands
        acc = match acc.checked_mul(i) {
            Some(next) => next,
            None => {
                debug!(n, i, acc, "factorial overflow");
                return Err(FactorialError::Overflow { n });
            }
        };
        trace!(i, acc, "factorial step");
    }

    Ok(acc)
}

/// Like [`factorial`], but collapses both failure kinds into [`SENTINEL`].
pub fn factorial_or_sentinel(n: i32) -> i64 {
    factorial(n).unwrap_or(SENTINEL)
}
