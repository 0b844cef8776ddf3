//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions used throughout the
//! crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (`PipelineError`)
//! - **sequence**: The pull-based `Sequence` contract and conversions
//! - **sources**: Adapters from collections, iterators, and generators
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API (pipeline surface, curried mirror)
//!   ↓
//! Layer 6: Consumers (terminal drains)
//!   ↓
//! Layer 5: Stats (numeric folds)
//!   ↓
//! Layer 4: Combine (zip, concat, interleave, merge)
//!   ↓
//! Layer 3: Buffered (window, group, sort, ...)
//!   ↓
//! Layer 2: Engine (validator, lazy stages)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `PipelineError` enum
/// - Validation and cleanup failure variants
pub mod errors;

/// The pull-based sequence contract.
///
/// Provides:
/// - The `Sequence` trait (`advance`/`close`)
/// - The `IntoSequence` conversion trait
pub mod sequence;

/// Source adapters.
///
/// Provides:
/// - Iterator-backed sources
/// - Generator-closure sources
/// - Cleanup-hook wrapping
pub mod sources;
