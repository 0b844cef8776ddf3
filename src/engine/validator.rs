//! Call-time validation for operator arguments.
//!
//! ## Purpose
//!
//! This module checks operator arguments at the call that constructs the
//! operator, before any element is pulled from the source. A pipeline
//! with an invalid stage never starts consuming.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation.
//! * Error values carry the offending argument for debugging.
//! * Sizes are `usize`, so negative and fractional values are rejected by
//!   the type system; the runtime checks reject zero.
//! * Percentile ranks are validated generically over `Float` and reported
//!   as `f64`.
//!
//! ## Non-goals
//!
//! * This module does not inspect sequence contents; empty sequences are
//!   valid inputs everywhere and yield "no value" results, not errors.
//!
//! ## Visibility
//!
//! Internal to the crate; the public surface raises these errors through
//! the pipeline constructors.

use crate::primitives::errors::PipelineError;
use num_traits::Float;

/// Validation utility for operator arguments.
///
/// All methods return `Result<(), PipelineError>` and fail fast on the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate a sliding-window size (must be at least 1).
    pub fn validate_window_size(size: usize) -> Result<(), PipelineError> {
        if size == 0 {
            return Err(PipelineError::InvalidWindowSize(size));
        }
        Ok(())
    }

    /// Validate a chunk size (must be at least 1).
    pub fn validate_chunk_size(size: usize) -> Result<(), PipelineError> {
        if size == 0 {
            return Err(PipelineError::InvalidChunkSize(size));
        }
        Ok(())
    }

    /// Validate a percentile rank (must be finite and within `[0, 100]`).
    pub fn validate_percentile<T: Float>(p: T) -> Result<(), PipelineError> {
        let hundred = T::from(100.0).unwrap_or_else(T::max_value);
        if !p.is_finite() || p < T::zero() || p > hundred {
            return Err(PipelineError::InvalidPercentile(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sizes() {
        assert_eq!(
            Validator::validate_window_size(0),
            Err(PipelineError::InvalidWindowSize(0))
        );
        assert_eq!(
            Validator::validate_chunk_size(0),
            Err(PipelineError::InvalidChunkSize(0))
        );
        assert!(Validator::validate_window_size(1).is_ok());
        assert!(Validator::validate_chunk_size(1).is_ok());
    }

    #[test]
    fn rejects_out_of_range_percentiles() {
        assert!(Validator::validate_percentile(-1.0_f64).is_err());
        assert!(Validator::validate_percentile(101.0_f64).is_err());
        assert!(Validator::validate_percentile(f64::NAN).is_err());
        assert!(Validator::validate_percentile(0.0_f64).is_ok());
        assert!(Validator::validate_percentile(100.0_f64).is_ok());
    }
}
