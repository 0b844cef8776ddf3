//! Layer 4: Combining operators
//!
//! Operators that draw from two sources. Each owns both upstream handles
//! and closes both when the chain is torn down.
//!
//! # Module Organization
//!
//! - **zip**: Pairing truncated to the shorter source
//! - **chain**: Sequential concatenation
//! - **interleave**: Round-robin alternation with survivor continuation
//! - **merge**: Stable two-pointer merge of pre-sorted inputs

/// Zipping operators.
pub mod zip;

/// Sequential concatenation.
pub mod chain;

/// Round-robin interleaving.
pub mod interleave;

/// Sorted-sequence merging.
pub mod merge;
