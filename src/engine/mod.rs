//! Layer 2: Engine
//!
//! The lazy evaluation core.
//!
//! This layer implements argument validation and the one-element lazy
//! stages that make up the spine of every pipeline. It depends only on
//! the primitives layer.
//!
//! # Module Organization
//!
//! - **validator**: Call-time argument validation (fail-fast)
//! - **stages**: Lazy transformation stages (map, filter, take, ...)

/// Call-time argument validation.
///
/// Provides:
/// - Window/chunk size checks
/// - Percentile range checks
pub mod validator;

/// Lazy transformation stages.
///
/// Provides:
/// - Element transforms (map, filter, flat_map, tap)
/// - Prefix/suffix selection (take, skip, take_while, skip_while)
/// - Indexed and accumulating stages (enumerate, scan)
pub mod stages;
