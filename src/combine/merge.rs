//! Two-pointer merge of pre-sorted sequences.
//!
//! ## Purpose
//!
//! `merge` assumes both inputs are already sorted ascending and performs
//! the classic merge step: compare the two head elements and emit the
//! smaller. The merge is stable: on ties the left-source element wins.
//!
//! ## Design notes
//!
//! * One head element per side is held in lookahead slots; a head is only
//!   refilled after it has been emitted, so each advance pulls at most one
//!   element per side.
//! * Comparison uses `partial_cmp`; an incomparable pair (NaN) resolves in
//!   favor of the left source, matching the tie rule.
//! * Inputs that are not actually sorted simply produce an unsorted merge;
//!   no verification pass is made.
//!
//! ## Visibility
//!
//! Constructed through `Pipeline::merge`.

use std::cmp::Ordering;

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Merges two ascending sequences into one.
pub struct Merge<A: Sequence, B: Sequence> {
    left: A,
    right: B,
    left_head: Option<A::Item>,
    right_head: Option<B::Item>,
    left_done: bool,
    right_done: bool,
}

impl<A: Sequence, B: Sequence> Merge<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            left_head: None,
            right_head: None,
            left_done: false,
            right_done: false,
        }
    }
}

impl<A, B> Sequence for Merge<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialOrd,
{
    type Item = A::Item;

    fn advance(&mut self) -> Option<A::Item> {
        if self.left_head.is_none() && !self.left_done {
            match self.left.advance() {
                Some(value) => self.left_head = Some(value),
                None => self.left_done = true,
            }
        }
        if self.right_head.is_none() && !self.right_done {
            match self.right.advance() {
                Some(value) => self.right_head = Some(value),
                None => self.right_done = true,
            }
        }

        let emit_left = match (&self.left_head, &self.right_head) {
            (Some(left), Some(right)) => {
                // Left wins ties (and incomparable pairs) for stability.
                left.partial_cmp(right) != Some(Ordering::Greater)
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };

        if emit_left {
            self.left_head.take()
        } else {
            self.right_head.take()
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        let left = self.left.close();
        let right = self.right.close();
        left.and(right)
    }
}
