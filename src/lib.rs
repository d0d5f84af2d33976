//! Iterative factorial calculation with overflow and negative-input detection.

pub mod factorial;
pub mod report;

pub use factorial::{FactorialError, MAX_INPUT, SENTINEL, factorial, factorial_or_sentinel};
pub use report::{Report, run};

/// Inputs evaluated when the driver is given no arguments.
pub const DEMO_INPUTS: &[i32] = &[5, 10, 21, -3];
