//! Key-based grouping over an insertion-ordered map.
//!
//! ## Purpose
//!
//! `group_by` folds the whole sequence into a group map (key to ordered
//! list of matching elements) and replays the entries. Both orders are
//! preserved: entries appear in first-key-seen order, and each value list
//! keeps the original relative order of its elements.
//!
//! ## Design notes
//!
//! * The group map is built once, on the first demand, fully owned by the
//!   stage, and discarded when the stage is dropped.
//! * `indexmap::IndexMap` provides the first-seen entry order directly;
//!   no separate order index is maintained.
//!
//! ## Visibility
//!
//! Constructed through `Pipeline::group_by`.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::Sequence;

/// Buffers the sequence into groups and emits `(key, members)` pairs.
pub struct GroupBy<S: Sequence, F, K: Hash + Eq> {
    upstream: S,
    key: F,
    groups: Option<indexmap::map::IntoIter<K, Vec<S::Item>>>,
}

impl<S: Sequence, F, K: Hash + Eq> GroupBy<S, F, K> {
    pub(crate) fn new(upstream: S, key: F) -> Self {
        Self {
            upstream,
            key,
            groups: None,
        }
    }
}

impl<S, F, K> Sequence for GroupBy<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    K: Hash + Eq,
{
    type Item = (K, Vec<S::Item>);

    fn advance(&mut self) -> Option<(K, Vec<S::Item>)> {
        if self.groups.is_none() {
            let mut groups: IndexMap<K, Vec<S::Item>> = IndexMap::new();
            while let Some(value) = self.upstream.advance() {
                groups.entry((self.key)(&value)).or_default().push(value);
            }
            self.groups = Some(groups.into_iter());
        }
        self.groups.as_mut().and_then(Iterator::next)
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}
