//! Shared error types for pipeline construction and teardown.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! fall into two families: validation errors raised synchronously by the
//! call that constructs an operator (before any element is pulled), and
//! cleanup errors raised when a source's close hook fails during
//! termination.
//!
//! ## Design notes
//!
//! * Empty-sequence results are never errors. Statistics over an empty
//!   sequence return `None` (except `sum`/`product`, which have
//!   identities); only invalid arguments and failed cleanup produce an
//!   error value.
//! * Negative or fractional sizes are unrepresentable in `usize`, so the
//!   size checks reduce to rejecting zero.
//! * User-callback panics are not converted into this type. They unwind
//!   through the pipeline call untouched.
//!
//! ## Visibility
//!
//! [`PipelineError`] is part of the public API and is re-exported at the
//! crate root.

use thiserror::Error;

/// Errors produced by pipeline operators and terminal consumers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Window size must be a positive integer.
    #[error("window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    /// Chunk size must be a positive integer.
    #[error("chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    /// Percentile rank must be finite and within `[0, 100]`.
    #[error("percentile must be within [0, 100], got {0}")]
    InvalidPercentile(f64),

    /// A source's close hook reported a failure during termination.
    ///
    /// Surfaced rather than swallowed, since it may indicate a real
    /// resource leak.
    #[error("source cleanup failed: {0}")]
    CleanupFailed(String),
}
