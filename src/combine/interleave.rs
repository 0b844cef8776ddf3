//! Round-robin interleaving of two sequences.
//!
//! One element from each live source per round. Once a source exhausts,
//! the round-robin continues among the sources still live, so the longer
//! tail is emitted in full.
//!
//! Constructed through `Pipeline::interleave`.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Alternates elements from two sources until both exhaust.
#[derive(Debug, Clone)]
pub struct Interleave<A, B> {
    left: A,
    right: B,
    left_done: bool,
    right_done: bool,
    left_turn: bool,
}

impl<A, B> Interleave<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            left_done: false,
            right_done: false,
            left_turn: true,
        }
    }
}

impl<A, B> Sequence for Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Option<A::Item> {
        // Two attempts: the side whose turn it is, then the other.
        for _ in 0..2 {
            let left_turn = self.left_turn;
            self.left_turn = !left_turn;
            if left_turn {
                if !self.left_done {
                    match self.left.advance() {
                        Some(value) => return Some(value),
                        None => self.left_done = true,
                    }
                }
            } else if !self.right_done {
                match self.right.advance() {
                    Some(value) => return Some(value),
                    None => self.right_done = true,
                }
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        let left = self.left.close();
        let right = self.right.close();
        left.and(right)
    }
}
