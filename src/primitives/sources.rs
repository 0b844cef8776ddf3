//! Source adapters that normalize inputs into pull-based sequences.
//!
//! ## Purpose
//!
//! This module adapts concrete inputs (collections, strings-as-chars,
//! maps-as-pairs, native iterators, generator closures) into the single
//! [`Sequence`] abstraction the rest of the engine consumes. Adapters wrap;
//! they never copy the source eagerly.
//!
//! ## Design notes
//!
//! * [`IterSource`] covers everything `IntoIterator` covers, which in std
//!   Rust already includes arrays, `Vec`, sets, maps (as key/value pairs),
//!   and borrowed slices. The wrapped iterator is fused, so even a
//!   misbehaving iterator cannot resume after exhaustion.
//! * [`FnSource`] models generator/coroutine sources: a closure pulled for
//!   one element at a time, usable for infinite sequences. Once the closure
//!   returns `None` the source is fused and never polled again.
//! * [`CleanupSource`] attaches a close hook to an upstream handle. The
//!   hook runs exactly once: on explicit `close`, or on drop when the
//!   pipeline is abandoned. Hook failures surface through `close`; on the
//!   drop path there is no error channel, so a failure there is discarded.
//!
//! ## Invariants
//!
//! * Every adapter keeps returning `None` after exhaustion.
//! * A cleanup hook never runs twice, including the panic-unwind path.
//!
//! ## Visibility
//!
//! Constructed through `seq`, `from_fn`, and `Pipeline::try_on_close`;
//! the types are public so custom stages can name them.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Iterator-backed sources
// ============================================================================

/// Adapter over any native iterator.
///
/// Fused on construction: a non-fused iterator that would resume after
/// its first `None` stays exhausted behind this adapter.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Wrap an iterator without consuming it eagerly.
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Sequence for IterSource<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

// ============================================================================
// Generator sources
// ============================================================================

/// Adapter over a generator closure pulled one element at a time.
///
/// Fused: after the closure first returns `None`, it is never called
/// again, so re-polling an exhausted source stays well-defined even for
/// closures that would otherwise resume.
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    generate: F,
    done: bool,
}

impl<T, F: FnMut() -> Option<T>> FnSource<F> {
    pub fn new(generate: F) -> Self {
        Self {
            generate,
            done: false,
        }
    }
}

impl<T, F: FnMut() -> Option<T>> Sequence for FnSource<F> {
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let next = (self.generate)();
        if next.is_none() {
            self.done = true;
        }
        next
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

// ============================================================================
// Cleanup-carrying sources
// ============================================================================

/// Wraps an upstream handle with a close hook that runs exactly once.
pub struct CleanupSource<S, F>
where
    F: FnOnce() -> Result<(), PipelineError>,
{
    upstream: S,
    hook: Option<F>,
}

impl<S, F> CleanupSource<S, F>
where
    S: Sequence,
    F: FnOnce() -> Result<(), PipelineError>,
{
    pub fn new(upstream: S, hook: F) -> Self {
        Self {
            upstream,
            hook: Some(hook),
        }
    }
}

impl<S, F> Sequence for CleanupSource<S, F>
where
    S: Sequence,
    F: FnOnce() -> Result<(), PipelineError>,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        self.upstream.advance()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        // Taking the hook up front guarantees exactly-once even when the
        // upstream close also fails.
        let hook_result = match self.hook.take() {
            Some(hook) => hook(),
            None => Ok(()),
        };
        let upstream_result = self.upstream.close();
        hook_result.and(upstream_result)
    }
}

impl<S, F> Drop for CleanupSource<S, F>
where
    F: FnOnce() -> Result<(), PipelineError>,
{
    fn drop(&mut self) {
        if let Some(hook) = self.hook.take() {
            // No error channel exists on the drop path.
            let _ = hook();
        }
    }
}
