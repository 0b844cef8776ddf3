//! Reordering operators that buffer the full sequence.
//!
//! ## Purpose
//!
//! `sort`, `sort_by`, and `reverse` cannot emit anything until the last
//! upstream element is known, so they pull the entire sequence into a
//! temporary buffer on the first demand, reorder it, and replay it. The
//! upstream remains lazy: nothing is pulled before a terminal consumer
//! asks for the first reordered element.
//!
//! ## Design notes
//!
//! * Sorting is stable and never mutates caller-visible data; the buffer
//!   is owned by the stage.
//! * The default sort compares with `partial_cmp`, treating incomparable
//!   pairs (NaN) as equal so a stray NaN cannot poison the ordering.
//! * These operators must not be applied to unbounded sequences; they
//!   exhaust their source fully and have no short-circuit path.
//!
//! ## Visibility
//!
//! Constructed through `Pipeline::sort`, `Pipeline::sort_by`, and
//! `Pipeline::reverse`.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

fn drain<S: Sequence>(upstream: &mut S) -> Vec<S::Item> {
    let mut buffer = Vec::new();
    while let Some(value) = upstream.advance() {
        buffer.push(value);
    }
    buffer
}

// ============================================================================
// Ascending sort
// ============================================================================

/// Replays the sequence in ascending order.
pub struct Sorted<S: Sequence> {
    upstream: S,
    buffered: Option<VecDeque<S::Item>>,
}

impl<S: Sequence> Sorted<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream,
            buffered: None,
        }
    }
}

impl<S> Sequence for Sorted<S>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.buffered.is_none() {
            let mut buffer = drain(&mut self.upstream);
            buffer.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            self.buffered = Some(buffer.into());
        }
        self.buffered.as_mut().and_then(VecDeque::pop_front)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Comparator sort
// ============================================================================

/// Replays the sequence ordered by a caller-supplied comparator.
pub struct SortedBy<S: Sequence, F> {
    upstream: S,
    compare: F,
    buffered: Option<VecDeque<S::Item>>,
}

impl<S: Sequence, F> SortedBy<S, F> {
    pub(crate) fn new(upstream: S, compare: F) -> Self {
        Self {
            upstream,
            compare,
            buffered: None,
        }
    }
}

impl<S, F> Sequence for SortedBy<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.buffered.is_none() {
            let mut buffer = drain(&mut self.upstream);
            buffer.sort_by(&mut self.compare);
            self.buffered = Some(buffer.into());
        }
        self.buffered.as_mut().and_then(VecDeque::pop_front)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

// ============================================================================
// Reversal
// ============================================================================

/// Replays the sequence back to front.
pub struct Reversed<S: Sequence> {
    upstream: S,
    buffered: Option<Vec<S::Item>>,
}

impl<S: Sequence> Reversed<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream,
            buffered: None,
        }
    }
}

impl<S: Sequence> Sequence for Reversed<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.buffered.is_none() {
            self.buffered = Some(drain(&mut self.upstream));
        }
        // Popping from the back replays in reverse without a second pass.
        self.buffered.as_mut().and_then(Vec::pop)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
