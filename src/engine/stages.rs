//! Lazy transformation stages holding at most one element of state.
//!
//! ## Purpose
//!
//! This module implements the lazy stage chain: map, filter, flat_map,
//! take, skip, take_while, skip_while, tap, enumerate, and scan. Each
//! stage wraps the handle beneath it and only pulls from it on demand,
//! so chains compose by simple ownership nesting and early termination
//! over infinite sources stays cheap.
//!
//! ## Key concepts
//!
//! ### Pull discipline
//!
//! A stage pulls upstream exactly as many times as needed to decide on one
//! output. `filter`, `take_while`, and `skip_while` may pull several
//! upstream elements per emitted element; `take` stops pulling entirely
//! once its quota is spent; `skip` discards exactly `n` elements before
//! its first emission.
//!
//! ### Inner handles
//!
//! `flat_map` holds a secondary handle opened on the current outer
//! element. When the inner handle exhausts it is dropped (running any
//! cleanup it carries) and the next outer element opens a fresh one.
//!
//! ## Invariants
//!
//! * No stage here buffers more than one element at a time.
//! * Close signals propagate through every stage to the source, including
//!   any live inner handle.
//!
//! ## Visibility
//!
//! Stage types are public so pipeline signatures can be named, but they
//! are constructed through the `Pipeline` surface.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::{IntoSequence, Sequence};

// ============================================================================
// Element transforms
// ============================================================================

/// Applies a transform to every element.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    upstream: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn advance(&mut self) -> Option<B> {
        self.upstream.advance().map(&mut self.transform)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Keeps only elements satisfying a predicate.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        // May pull several upstream elements for one output.
        while let Some(value) = self.upstream.advance() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Maps each element to a sub-sequence and flattens the results.
pub struct FlatMap<S, F, I>
where
    I: IntoSequence,
{
    upstream: S,
    expand: F,
    inner: Option<I::Seq>,
}

impl<S, F, I: IntoSequence> FlatMap<S, F, I> {
    pub(crate) fn new(upstream: S, expand: F) -> Self {
        Self {
            upstream,
            expand,
            inner: None,
        }
    }
}

impl<S, F, I> Sequence for FlatMap<S, F, I>
where
    S: Sequence,
    F: FnMut(S::Item) -> I,
    I: IntoSequence,
{
    type Item = I::Item;

    fn advance(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(value) = inner.advance() {
                    return Some(value);
                }
                // Exhausted inner handle; dropping it runs its cleanup.
                self.inner = None;
            }
            let outer = self.upstream.advance()?;
            self.inner = Some((self.expand)(outer).into_sequence());
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        let inner_result = match self.inner.as_mut() {
            Some(inner) => inner.close(),
            None => Ok(()),
        };
        let upstream_result = self.upstream.close();
        inner_result.and(upstream_result)
    }
}

/// Observes each element without transforming it.
#[derive(Debug, Clone)]
pub struct Tap<S, F> {
    upstream: S,
    observe: F,
}

impl<S, F> Tap<S, F> {
    pub(crate) fn new(upstream: S, observe: F) -> Self {
        Self { upstream, observe }
    }
}

impl<S, F> Sequence for Tap<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        let value = self.upstream.advance()?;
        (self.observe)(&value);
        Some(value)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Prefix and suffix selection
// ============================================================================

/// Emits at most `n` elements, then stops pulling upstream entirely.
#[derive(Debug, Clone)]
pub struct Take<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(upstream: S, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        // Once the quota is spent no upstream pull happens, which keeps
        // take(n) safe over infinite sources.
        if self.remaining == 0 {
            return None;
        }
        let value = self.upstream.advance();
        if value.is_some() {
            self.remaining -= 1;
        } else {
            self.remaining = 0;
        }
        value
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Discards exactly `n` elements before the first emission.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    upstream: S,
    pending: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(upstream: S, n: usize) -> Self {
        Self {
            upstream,
            pending: n,
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.upstream.advance()?;
        }
        self.upstream.advance()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Emits the longest prefix satisfying a predicate.
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
    done: bool,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        let value = self.upstream.advance()?;
        if (self.predicate)(&value) {
            Some(value)
        } else {
            self.done = true;
            None
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Discards the longest prefix satisfying a predicate, emits the rest.
#[derive(Debug, Clone)]
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: P,
    skipping: bool,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            skipping: true,
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        while self.skipping {
            let value = self.upstream.advance()?;
            if !(self.predicate)(&value) {
                self.skipping = false;
                return Some(value);
            }
        }
        self.upstream.advance()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Indexed and accumulating stages
// ============================================================================

/// Pairs each element with its zero-based position.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    upstream: S,
    index: usize,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self { upstream, index: 0 }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn advance(&mut self) -> Option<(usize, S::Item)> {
        let value = self.upstream.advance()?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Emits the running fold of the sequence, one output per input.
#[derive(Debug, Clone)]
pub struct Scan<S, A, F> {
    upstream: S,
    accumulator: A,
    fold: F,
}

impl<S, A, F> Scan<S, A, F> {
    pub(crate) fn new(upstream: S, init: A, fold: F) -> Self {
        Self {
            upstream,
            accumulator: init,
            fold,
        }
    }
}

impl<S, A, F> Sequence for Scan<S, A, F>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    type Item = A;

    fn advance(&mut self) -> Option<A> {
        let value = self.upstream.advance()?;
        self.accumulator = (self.fold)(&self.accumulator, value);
        Some(self.accumulator.clone())
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
