//! Windowing operators over a bounded FIFO buffer.
//!
//! ## Purpose
//!
//! This module implements the overlapping sliding window, the
//! non-overlapping chunk, and the pairwise operator. These are the only
//! operators whose buffer is bounded by a caller-chosen size rather than
//! by the full sequence length.
//!
//! ## Design notes
//!
//! * `window(size)` maintains a fixed-size FIFO buffer: one new element in,
//!   the oldest out, per emitted window. Elements age out strictly FIFO.
//! * Every emitted window is a snapshot copy. Consumers may retain the
//!   yielded `Vec`; the internal buffer is never aliased.
//! * `chunk(size)` resets its buffer after each full or final partial
//!   emission.
//! * Sizes are validated at operator construction, before any pull.
//!
//! ## Invariants
//!
//! * A window buffer holds exactly `size` elements once initialized.
//! * `window(size)` over `n` elements emits `n - size + 1` windows, none
//!   when `n < size`.
//! * `chunk(size)` over `n` elements emits `ceil(n / size)` chunks, all of
//!   length `size` except possibly the last.
//!
//! ## Visibility
//!
//! Constructed through `Pipeline::window`, `Pipeline::chunk`, and
//! `Pipeline::pairwise`.

use std::collections::VecDeque;

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Overlapping windows
// ============================================================================

/// Emits overlapping fixed-size windows as snapshot copies.
pub struct Window<S: Sequence> {
    upstream: S,
    size: usize,
    buffer: VecDeque<S::Item>,
    primed: bool,
}

impl<S: Sequence> Window<S> {
    /// Size must already be validated (`size >= 1`).
    pub(crate) fn new(upstream: S, size: usize) -> Self {
        Self {
            upstream,
            size,
            buffer: VecDeque::with_capacity(size),
            primed: false,
        }
    }
}

impl<S> Sequence for Window<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> Option<Vec<S::Item>> {
        if !self.primed {
            while self.buffer.len() < self.size {
                self.buffer.push_back(self.upstream.advance()?);
            }
            self.primed = true;
        } else {
            let next = self.upstream.advance()?;
            self.buffer.pop_front();
            self.buffer.push_back(next);
        }
        // Snapshot: consumers may retain the yielded vector.
        Some(self.buffer.iter().cloned().collect())
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Non-overlapping chunks
// ============================================================================

/// Groups the sequence into runs of `size` consecutive elements.
#[derive(Debug, Clone)]
pub struct Chunk<S> {
    upstream: S,
    size: usize,
}

impl<S> Chunk<S> {
    /// Size must already be validated (`size >= 1`).
    pub(crate) fn new(upstream: S, size: usize) -> Self {
        Self { upstream, size }
    }
}

impl<S: Sequence> Sequence for Chunk<S> {
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> Option<Vec<S::Item>> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.upstream.advance() {
                Some(value) => chunk.push(value),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Pairwise
// ============================================================================

/// Emits each element together with its successor.
///
/// Typed rendition of a two-wide sliding window: `[1, 2, 3]` yields
/// `(1, 2)` and `(2, 3)`.
pub struct Pairwise<S: Sequence> {
    upstream: S,
    previous: Option<S::Item>,
}

impl<S: Sequence> Pairwise<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream,
            previous: None,
        }
    }
}

impl<S> Sequence for Pairwise<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = (S::Item, S::Item);

    fn advance(&mut self) -> Option<(S::Item, S::Item)> {
        let previous = match self.previous.take() {
            Some(value) => value,
            None => self.upstream.advance()?,
        };
        let current = self.upstream.advance()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
