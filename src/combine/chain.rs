//! Sequential concatenation of two sequences.
//!
//! The left source is fully exhausted before the first right pull.
//!
//! Constructed through `Pipeline::concat` (alias `Pipeline::chain`).

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Emits all of `left`, then all of `right`.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    left: A,
    right: B,
    left_done: bool,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            left_done: false,
        }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Option<A::Item> {
        if !self.left_done {
            if let Some(value) = self.left.advance() {
                return Some(value);
            }
            self.left_done = true;
        }
        self.right.advance()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        let left = self.left.close();
        let right = self.right.close();
        left.and(right)
    }
}
