//! Layer 6: Terminal consumers
//!
//! Drains that drive a chain to completion or to early termination.
//!
//! ## Purpose
//!
//! Every function here takes ownership of a handle, pulls exactly as much
//! as its answer requires, then closes the chain. The close result rides
//! the `Result` channel, so a failing cleanup hook is surfaced to the
//! caller instead of being swallowed; that is the only error a fully
//! valid pipeline can produce at drain time.
//!
//! ## Design notes
//!
//! * Short-circuiting consumers (`find`, `any`, `all`, `first`, `nth`,
//!   `contains`, `position`) stop pulling the moment the answer is
//!   determined, which makes them safe over infinite sources whenever the
//!   answer is eventually determined.
//! * `count` and `is_empty` are single-pass with O(1) state.
//! * `reduce` seeds from the first element and returns `None` on empty
//!   input; `fold` takes an explicit seed and always has a value.
//!
//! ## Visibility
//!
//! Crate-internal plumbing for the `Pipeline` surface.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Exhaust the chain into a vector, then close it.
pub(crate) fn drain<S: Sequence>(mut seq: S) -> Result<Vec<S::Item>, PipelineError> {
    let mut out = Vec::new();
    while let Some(value) = seq.advance() {
        out.push(value);
    }
    seq.close()?;
    Ok(out)
}

/// Fold every element into an accumulator.
pub(crate) fn fold<S, A, F>(mut seq: S, init: A, mut fold: F) -> Result<A, PipelineError>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    while let Some(value) = seq.advance() {
        acc = fold(acc, value);
    }
    seq.close()?;
    Ok(acc)
}

/// Fold seeded by the first element; `None` on empty input.
pub(crate) fn reduce<S, F>(mut seq: S, mut combine: F) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let Some(mut acc) = seq.advance() else {
        seq.close()?;
        return Ok(None);
    };
    while let Some(value) = seq.advance() {
        acc = combine(acc, value);
    }
    seq.close()?;
    Ok(Some(acc))
}

/// First element satisfying the predicate; stops pulling once found.
pub(crate) fn find<S, P>(mut seq: S, mut predicate: P) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(value) = seq.advance() {
        if predicate(&value) {
            seq.close()?;
            return Ok(Some(value));
        }
    }
    seq.close()?;
    Ok(None)
}

/// Index of the first element satisfying the predicate.
pub(crate) fn position<S, P>(mut seq: S, mut predicate: P) -> Result<Option<usize>, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut index = 0;
    while let Some(value) = seq.advance() {
        if predicate(&value) {
            seq.close()?;
            return Ok(Some(index));
        }
        index += 1;
    }
    seq.close()?;
    Ok(None)
}

/// True if any element satisfies the predicate; short-circuits on yes.
pub(crate) fn any<S, P>(mut seq: S, mut predicate: P) -> Result<bool, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(value) = seq.advance() {
        if predicate(&value) {
            seq.close()?;
            return Ok(true);
        }
    }
    seq.close()?;
    Ok(false)
}

/// True if every element satisfies the predicate; short-circuits on no.
pub(crate) fn all<S, P>(mut seq: S, mut predicate: P) -> Result<bool, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(value) = seq.advance() {
        if !predicate(&value) {
            seq.close()?;
            return Ok(false);
        }
    }
    seq.close()?;
    Ok(true)
}

/// The first element, pulling exactly once.
pub(crate) fn first<S: Sequence>(mut seq: S) -> Result<Option<S::Item>, PipelineError> {
    let value = seq.advance();
    seq.close()?;
    Ok(value)
}

/// The final element; necessarily exhausts the source.
pub(crate) fn last<S: Sequence>(mut seq: S) -> Result<Option<S::Item>, PipelineError> {
    let mut held = None;
    while let Some(value) = seq.advance() {
        held = Some(value);
    }
    seq.close()?;
    Ok(held)
}

/// The element at zero-based position `n`, or `None` past the end.
pub(crate) fn nth<S: Sequence>(mut seq: S, n: usize) -> Result<Option<S::Item>, PipelineError> {
    let mut remaining = n;
    while let Some(value) = seq.advance() {
        if remaining == 0 {
            seq.close()?;
            return Ok(Some(value));
        }
        remaining -= 1;
    }
    seq.close()?;
    Ok(None)
}

/// Number of elements; single pass, O(1) state.
pub(crate) fn count<S: Sequence>(mut seq: S) -> Result<usize, PipelineError> {
    let mut total = 0;
    while seq.advance().is_some() {
        total += 1;
    }
    seq.close()?;
    Ok(total)
}

/// True when no element exists; pulls at most once.
pub(crate) fn is_empty<S: Sequence>(mut seq: S) -> Result<bool, PipelineError> {
    let empty = seq.advance().is_none();
    seq.close()?;
    Ok(empty)
}

/// Split into passing and failing elements, both in original order.
pub(crate) fn partition<S, P>(
    mut seq: S,
    mut predicate: P,
) -> Result<(Vec<S::Item>, Vec<S::Item>), PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut passing = Vec::new();
    let mut failing = Vec::new();
    while let Some(value) = seq.advance() {
        if predicate(&value) {
            passing.push(value);
        } else {
            failing.push(value);
        }
    }
    seq.close()?;
    Ok((passing, failing))
}

/// Run a side effect for every element.
pub(crate) fn for_each<S, F>(mut seq: S, mut effect: F) -> Result<(), PipelineError>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    while let Some(value) = seq.advance() {
        effect(value);
    }
    seq.close()
}
