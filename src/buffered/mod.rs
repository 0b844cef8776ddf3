//! Layer 3: Buffered operators
//!
//! Stateful operators that must hold more than one element to produce
//! output. Everything here still honors the pull contract: buffers fill
//! on first demand, never at construction time.
//!
//! # Module Organization
//!
//! - **window**: Sliding windows, chunks, pairwise
//! - **dedup**: Distinct / distinct-by with first-seen-wins ordering
//! - **ordering**: Full-sequence sort, comparator sort, reversal
//! - **group**: Insertion-ordered key grouping
//! - **intersperse**: Separator insertion with one-element lookahead

/// Windowing operators.
///
/// Provides:
/// - Fixed-size overlapping windows (snapshot emission)
/// - Non-overlapping chunks
/// - Pairwise successor tuples
pub mod window;

/// Deduplication operators.
///
/// Provides:
/// - Value-keyed and key-function-keyed seen-sets
pub mod dedup;

/// Reordering operators.
///
/// Provides:
/// - Stable ascending and comparator-driven sorts
/// - Reversal
pub mod ordering;

/// Grouping operators.
///
/// Provides:
/// - First-seen-ordered group maps
pub mod group;

/// Separator insertion.
pub mod intersperse;
