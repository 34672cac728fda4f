//! Shared error types.
//!
//! Degenerate circuits never produce an error: they evaluate to
//! [`crate::math::UNBOUNDED`]. Errors are reserved for malformed input
//! handed to the plotting adapter.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircuitError {
    /// A sequence does not have as many samples as the frequency axis.
    #[error("{series} must have the same length as freqs: expected {expected}, found {found}")]
    LengthMismatch {
        /// Name of the offending sequence (`mags` or `phase`).
        series: &'static str,
        /// Number of frequencies supplied.
        expected: usize,
        /// Number of samples in the offending sequence.
        found: usize,
    },
    /// Raised when a frequency cannot be placed on a logarithmic axis.
    #[error("frequency at index {index} must be finite and positive, found {value}")]
    InvalidFrequency {
        /// Position of the sample in the caller's sequence.
        index: usize,
        /// The rejected frequency in hertz.
        value: f64,
    },
    /// Raised when a Bode dataset has no samples.
    #[error("bode dataset is empty")]
    EmptyDataset,
    /// Raised when the drawing backend fails.
    #[error("plot error: {0}")]
    Plot(String),
}

/// Convenience alias used by fallible APIs in this crate.
pub type Result<T> = std::result::Result<T, CircuitError>;
