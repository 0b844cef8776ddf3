//! Separator insertion between consecutive elements.
//!
//! Holds a one-element lookahead: the separator is only emitted once the
//! next real element is known to exist, so no trailing separator appears.
//!
//! Constructed through `Pipeline::intersperse`.

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Emits a cloned separator between consecutive upstream elements.
pub struct Intersperse<S: Sequence> {
    upstream: S,
    separator: S::Item,
    lookahead: Option<S::Item>,
    started: bool,
}

impl<S: Sequence> Intersperse<S> {
    pub(crate) fn new(upstream: S, separator: S::Item) -> Self {
        Self {
            upstream,
            separator,
            lookahead: None,
            started: false,
        }
    }
}

impl<S> Sequence for Intersperse<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if let Some(held) = self.lookahead.take() {
            return Some(held);
        }
        let next = self.upstream.advance()?;
        if self.started {
            self.lookahead = Some(next);
            Some(self.separator.clone())
        } else {
            self.started = true;
            Some(next)
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
