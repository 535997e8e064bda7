//! Error types for harmonic computations.

use thiserror::Error;

/// Result type for harmonic computations.
pub type OvertoneResult<T> = Result<T, OvertoneError>;

/// Errors that can occur during harmonic computations.
///
/// These are deterministic input-validation errors, not transient failures:
/// they propagate to the caller without retries or internal recovery.
#[derive(Debug, Error)]
pub enum OvertoneError {
    /// Base frequency for a multiple series must be positive.
    #[error("invalid base frequency: {freq} Hz")]
    InvalidBaseFrequency {
        /// The invalid base frequency.
        freq: f64,
    },

    /// Frequency for note resolution must be positive.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },
}
