//! The pull-based sequence abstraction every stage implements.
//!
//! ## Purpose
//!
//! This module defines [`Sequence`], the cursor contract at the heart of
//! the engine: "give me the next element or signal exhaustion", plus an
//! explicit close channel for early-termination cleanup. Every source
//! adapter, lazy stage, buffering operator, and combining operator in the
//! crate implements this one trait, so stages compose by simple wrapping.
//!
//! ## Key concepts
//!
//! ### Ownership chain
//!
//! A stage exclusively owns its upstream handle. Ownership forms a singly
//! linked chain, never a graph: no handle is ever shared by two chains.
//! Rust's move semantics make violations unrepresentable.
//!
//! ### Cooperative suspension
//!
//! A stage's computation lives between one `advance` call and the next.
//! Each stage keeps an explicit cursor/state field and resumes exactly
//! where it left off; no coroutine primitive is involved.
//!
//! ### Close propagation
//!
//! `close` walks the chain downstream-to-source so that cleanup code
//! attached to the original source runs even when a consumer abandons the
//! pipeline after a partial read. Sources without attached cleanup return
//! `Ok(())`.
//!
//! ## Invariants
//!
//! * An exhausted handle keeps returning `None`; re-polling is a caller
//!   error but never undefined behavior.
//! * A stage pulls at most as many upstream elements per `advance` as it
//!   needs to decide on one output.
//!
//! ## Visibility
//!
//! Public; implement this trait to plug a custom source into a pipeline.

use crate::primitives::errors::PipelineError;

/// A pull-based cursor over a sequence of elements.
pub trait Sequence {
    /// Element type produced by this handle.
    type Item;

    /// Produce the next element, or `None` once the sequence is exhausted.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Release upstream resources.
    ///
    /// Propagates down the stage chain so a cleanup hook attached to the
    /// original source runs exactly once, even if the sequence was not
    /// fully consumed. Stateless handles return `Ok(())`.
    fn close(&mut self) -> Result<(), PipelineError>;
}

/// Conversion into a [`Sequence`].
///
/// Mirrors `IntoIterator`: anything iterable becomes a sequence without an
/// eager copy. `flat_map`, `zip`, `concat` and friends accept any
/// `IntoSequence` so callers can hand them plain collections or other
/// pipelines.
pub trait IntoSequence {
    /// Element type of the resulting sequence.
    type Item;
    /// Concrete handle type.
    type Seq: Sequence<Item = Self::Item>;

    /// Wrap `self` in a pull-based handle.
    fn into_sequence(self) -> Self::Seq;
}

impl<I: IntoIterator> IntoSequence for I {
    type Item = I::Item;
    type Seq = crate::primitives::sources::IterSource<I::IntoIter>;

    fn into_sequence(self) -> Self::Seq {
        crate::primitives::sources::IterSource::new(self.into_iter())
    }
}
