//! Layer 5: Statistics
//!
//! Terminal numeric folds with exactly-reproduced edge-case policies.
//!
//! Every function here derives its state from the slice it is handed and
//! keeps nothing between calls. Empty-input policy: `sum → 0`,
//! `product → 1`, everything else → `None`.
//!
//! # Module Organization
//!
//! - **accumulate**: sum, product, mean, min, max, span
//! - **dispersion**: population variance, standard deviation
//! - **order**: median, continuous-rank percentile, quartiles
//! - **frequency**: mode with ties
//! - **bivariate**: covariance, correlation

/// Single-pass accumulating statistics.
pub mod accumulate;

/// Variance and standard deviation (population).
pub mod dispersion;

/// Order statistics over a sorted copy.
pub mod order;

/// Frequency statistics.
pub mod frequency;

/// Paired-sequence statistics.
pub mod bivariate;
