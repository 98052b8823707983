//! Error types for ricker-core.

use thiserror::Error;

/// Malformed input handed to the spectrum analyzer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// One-sided folding needs an odd, Hermitian-symmetric input.
    #[error("even-length signal: {len} samples")]
    EvenLength { len: usize },

    #[error("length-mismatch: {times} time samples vs {amplitudes} amplitudes")]
    LengthMismatch { times: usize, amplitudes: usize },

    /// `times[1] - times[0]` was zero, negative, or not finite.
    #[error("non-positive sample interval: {interval}")]
    NonPositiveInterval { interval: f64 },

    /// The time grid spans more samples than the amplitudes hold.
    #[error("index limit {index_limit} exceeds {max} for the given samples")]
    IndexLimitOutOfRange { index_limit: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
