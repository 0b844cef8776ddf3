//! Single-pass deduplication with first-seen-wins ordering.
//!
//! ## Purpose
//!
//! `distinct` and `distinct_by` drop repeated elements in a single pass
//! over the source, preserving the original relative order of first
//! occurrences. The seen-set grows with the number of distinct keys, so
//! memory is bounded by key cardinality rather than sequence length.
//!
//! ## Visibility
//!
//! Constructed through `Pipeline::distinct` and `Pipeline::distinct_by`.

use std::collections::HashSet;
use std::hash::Hash;

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Drops elements already seen, comparing by value.
pub struct Distinct<S: Sequence> {
    upstream: S,
    seen: HashSet<S::Item>,
}

impl<S: Sequence> Distinct<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream,
            seen: HashSet::new(),
        }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        while let Some(value) = self.upstream.advance() {
            if self.seen.insert(value.clone()) {
                return Some(value);
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Drops elements whose derived key has already been seen.
#[derive(Debug, Clone)]
pub struct DistinctBy<S, F, K> {
    upstream: S,
    key: F,
    seen: HashSet<K>,
}

impl<S, F, K> DistinctBy<S, F, K> {
    pub(crate) fn new(upstream: S, key: F) -> Self {
        Self {
            upstream,
            key,
            seen: HashSet::new(),
        }
    }
}

impl<S, F, K> Sequence for DistinctBy<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        while let Some(value) = self.upstream.advance() {
            if self.seen.insert((self.key)(&value)) {
                return Some(value);
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
