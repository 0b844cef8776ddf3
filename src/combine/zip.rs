//! Pairwise combination of two sequences, truncated to the shorter.
//!
//! The left source is pulled first each round; once either side exhausts,
//! neither side is pulled again.
//!
//! Constructed through `Pipeline::zip` and `Pipeline::zip_with`.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Emits `(left, right)` pairs until either source exhausts.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            done: false,
        }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Option<(A::Item, B::Item)> {
        if self.done {
            return None;
        }
        // Left first; an exhausted left never triggers a right pull.
        let Some(left) = self.left.advance() else {
            self.done = true;
            return None;
        };
        match self.right.advance() {
            Some(right) => Some((left, right)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        let left = self.left.close();
        let right = self.right.close();
        left.and(right)
    }
}

/// Combines paired elements through a caller-supplied function.
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    inner: Zip<A, B>,
    combine: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    pub(crate) fn new(left: A, right: B, combine: F) -> Self {
        Self {
            inner: Zip::new(left, right),
            combine,
        }
    }
}

impl<A, B, F, C> Sequence for ZipWith<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(A::Item, B::Item) -> C,
{
    type Item = C;

    fn advance(&mut self) -> Option<C> {
        let (left, right) = self.inner.advance()?;
        Some((self.combine)(left, right))
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.inner.close()
    }
}
