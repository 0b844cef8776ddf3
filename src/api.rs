//! High-level pipeline surface.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: the
//! [`Pipeline`] handle and the `seq`/`from_fn` constructors. A pipeline
//! chains lazy stages over any source and materializes results only when
//! a terminal consumer is invoked.
//!
//! ## Design notes
//!
//! * **Lazy**: chaining allocates a stage wrapper and nothing else; no
//!   source element moves before a terminal call.
//! * **Validated**: operators with argument constraints (`window`,
//!   `chunk`, `percentile`) return `Result` and fail at the constructing
//!   call, before any element is pulled.
//! * **Typed**: statistics require `Item: Float`, so a statistical call on
//!   a non-numeric pipeline fails to compile.
//! * **Owned**: every operator takes `self`; the stage chain is a singly
//!   owned linked structure, never shared.
//!
//! ## Key concepts
//!
//! ### Terminal result shape
//!
//! Terminal consumers return `Result<_, PipelineError>`. The error channel
//! carries exactly two things: call-time validation failures and cleanup
//! failures reported by a source close hook. An empty sequence is never an
//! error; statistics yield `Ok(None)` (except `sum`/`product`, which have
//! identities).
//!
//! ### Early termination
//!
//! Short-circuiting consumers close the chain as soon as the answer is
//! determined; abandoning a pipeline mid-flight runs attached cleanup on
//! drop. Either way a cleanup hook runs exactly once.
//!
//! ## Visibility
//!
//! This is the stable public API, re-exported at the crate root.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use num_traits::{Float, NumCast, One, Zero};

use crate::buffered::dedup::{Distinct, DistinctBy};
use crate::buffered::group::GroupBy;
use crate::buffered::intersperse::Intersperse;
use crate::buffered::ordering::{Reversed, Sorted, SortedBy};
use crate::buffered::window::{Chunk, Pairwise, Window};
use crate::combine::chain::Concat;
use crate::combine::interleave::Interleave;
use crate::combine::merge::Merge;
use crate::combine::zip::{Zip, ZipWith};
use crate::consumers;
use crate::engine::stages::{
    Enumerate, Filter, FlatMap, Map, Scan, Skip, SkipWhile, Take, TakeWhile, Tap,
};
use crate::engine::validator::Validator;
use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::{IntoSequence, Sequence};
use crate::primitives::sources::{CleanupSource, FnSource, IterSource};
use crate::stats;
use crate::stats::order::Quartiles;

// ============================================================================
// Entry points
// ============================================================================

/// Open a pipeline over anything iterable.
///
/// Arrays, vectors, sets, maps (as key/value pairs), and string `chars()`
/// all qualify; the input is wrapped, not copied.
///
/// ```
/// use iterflow::seq;
///
/// let doubled = seq([1, 2, 3]).map(|x| x * 2).to_vec().unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn seq<I: IntoIterator>(input: I) -> Pipeline<IterSource<I::IntoIter>> {
    Pipeline::new(IterSource::new(input.into_iter()))
}

/// Open a pipeline over a generator closure, pulled one element at a time.
///
/// The natural adapter for infinite or I/O-backed sources:
///
/// ```
/// use iterflow::from_fn;
///
/// let mut n = 0;
/// let squares = from_fn(move || {
///     n += 1;
///     Some(n * n)
/// });
/// assert_eq!(squares.take(3).to_vec().unwrap(), vec![1, 4, 9]);
/// ```
pub fn from_fn<T, F: FnMut() -> Option<T>>(generate: F) -> Pipeline<FnSource<F>> {
    Pipeline::new(FnSource::new(generate))
}

// ============================================================================
// Pipeline handle
// ============================================================================

/// A lazy, chainable cursor over a sequence source.
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    seq: S,
}

impl<S: Sequence> Pipeline<S> {
    /// Wrap a custom [`Sequence`] implementation.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Tear the chain down without consuming it further.
    ///
    /// Runs any attached cleanup hook exactly once and surfaces its
    /// failure. Terminal consumers do this implicitly; call it directly
    /// when abandoning a pipeline whose cleanup result matters.
    pub fn close(mut self) -> Result<(), PipelineError> {
        self.seq.close()
    }

    // ========================================================================
    // Cleanup hooks
    // ========================================================================

    /// Attach a cleanup hook that runs exactly once on close or drop.
    pub fn on_close<F: FnOnce()>(self, hook: F) -> Pipeline<impl Sequence<Item = S::Item>> {
        self.try_on_close(move || {
            hook();
            Ok(())
        })
    }

    /// Attach a fallible cleanup hook.
    ///
    /// A returned error surfaces as [`PipelineError::CleanupFailed`] from
    /// whichever terminal consumer closes the chain. On the drop path no
    /// error channel exists and the failure is discarded.
    pub fn try_on_close<F>(self, hook: F) -> Pipeline<CleanupSource<S, F>>
    where
        F: FnOnce() -> Result<(), PipelineError>,
    {
        Pipeline::new(CleanupSource::new(self.seq, hook))
    }

    // ========================================================================
    // Lazy stages
    // ========================================================================

    /// Transform every element.
    pub fn map<B, F: FnMut(S::Item) -> B>(self, transform: F) -> Pipeline<Map<S, F>> {
        Pipeline::new(Map::new(self.seq, transform))
    }

    /// Keep only elements satisfying the predicate.
    pub fn filter<P: FnMut(&S::Item) -> bool>(self, predicate: P) -> Pipeline<Filter<S, P>> {
        Pipeline::new(Filter::new(self.seq, predicate))
    }

    /// Map each element to a sub-sequence and flatten the results.
    ///
    /// The expansion may return anything iterable, including another
    /// pipeline.
    pub fn flat_map<I, F>(self, expand: F) -> Pipeline<FlatMap<S, F, I>>
    where
        I: IntoSequence,
        F: FnMut(S::Item) -> I,
    {
        Pipeline::new(FlatMap::new(self.seq, expand))
    }

    /// Emit at most `n` elements; upstream is never pulled past the quota,
    /// so this is safe over infinite sources.
    pub fn take(self, n: usize) -> Pipeline<Take<S>> {
        Pipeline::new(Take::new(self.seq, n))
    }

    /// Discard exactly `n` elements before the first emission.
    pub fn skip(self, n: usize) -> Pipeline<Skip<S>> {
        Pipeline::new(Skip::new(self.seq, n))
    }

    /// Emit the longest prefix satisfying the predicate.
    pub fn take_while<P: FnMut(&S::Item) -> bool>(self, predicate: P) -> Pipeline<TakeWhile<S, P>> {
        Pipeline::new(TakeWhile::new(self.seq, predicate))
    }

    /// Discard the longest prefix satisfying the predicate.
    pub fn skip_while<P: FnMut(&S::Item) -> bool>(self, predicate: P) -> Pipeline<SkipWhile<S, P>> {
        Pipeline::new(SkipWhile::new(self.seq, predicate))
    }

    /// Observe each element as it flows past, without transforming it.
    pub fn tap<F: FnMut(&S::Item)>(self, observe: F) -> Pipeline<Tap<S, F>> {
        Pipeline::new(Tap::new(self.seq, observe))
    }

    /// Pair each element with its zero-based position.
    pub fn enumerate(self) -> Pipeline<Enumerate<S>> {
        Pipeline::new(Enumerate::new(self.seq))
    }

    /// Emit the running fold of the sequence, one output per input.
    pub fn scan<A, F>(self, init: A, fold: F) -> Pipeline<Scan<S, A, F>>
    where
        A: Clone,
        F: FnMut(&A, S::Item) -> A,
    {
        Pipeline::new(Scan::new(self.seq, init, fold))
    }

    // ========================================================================
    // Buffering operators
    // ========================================================================

    /// Overlapping windows of `size` consecutive elements.
    ///
    /// Each emitted window is a snapshot the consumer may retain. Fails
    /// at this call, before any pull, when `size` is zero.
    pub fn window(self, size: usize) -> Result<Pipeline<Window<S>>, PipelineError>
    where
        S::Item: Clone,
    {
        Validator::validate_window_size(size)?;
        Ok(Pipeline::new(Window::new(self.seq, size)))
    }

    /// Non-overlapping runs of `size` consecutive elements; the final run
    /// may be shorter. Fails at this call when `size` is zero.
    pub fn chunk(self, size: usize) -> Result<Pipeline<Chunk<S>>, PipelineError> {
        Validator::validate_chunk_size(size)?;
        Ok(Pipeline::new(Chunk::new(self.seq, size)))
    }

    /// Each element paired with its successor.
    pub fn pairwise(self) -> Pipeline<Pairwise<S>>
    where
        S::Item: Clone,
    {
        Pipeline::new(Pairwise::new(self.seq))
    }

    /// Drop repeated elements, first occurrence wins, original order kept.
    pub fn distinct(self) -> Pipeline<Distinct<S>>
    where
        S::Item: Eq + Hash + Clone,
    {
        Pipeline::new(Distinct::new(self.seq))
    }

    /// Drop elements whose derived key repeats.
    pub fn distinct_by<K, F>(self, key: F) -> Pipeline<DistinctBy<S, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&S::Item) -> K,
    {
        Pipeline::new(DistinctBy::new(self.seq, key))
    }

    /// Group elements by key, emitting `(key, members)` pairs in
    /// first-key-seen order; each member list keeps original order.
    pub fn group_by<K, F>(self, key: F) -> Pipeline<GroupBy<S, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&S::Item) -> K,
    {
        Pipeline::new(GroupBy::new(self.seq, key))
    }

    /// Replay the sequence in ascending order.
    ///
    /// Buffers the full sequence on first demand; do not apply to
    /// unbounded sources.
    pub fn sort(self) -> Pipeline<Sorted<S>>
    where
        S::Item: PartialOrd,
    {
        Pipeline::new(Sorted::new(self.seq))
    }

    /// Replay the sequence ordered by a comparator.
    pub fn sort_by<F>(self, compare: F) -> Pipeline<SortedBy<S, F>>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        Pipeline::new(SortedBy::new(self.seq, compare))
    }

    /// Replay the sequence back to front.
    pub fn reverse(self) -> Pipeline<Reversed<S>> {
        Pipeline::new(Reversed::new(self.seq))
    }

    /// Insert a separator between consecutive elements.
    pub fn intersperse(self, separator: S::Item) -> Pipeline<Intersperse<S>>
    where
        S::Item: Clone,
    {
        Pipeline::new(Intersperse::new(self.seq, separator))
    }

    // ========================================================================
    // Combining operators
    // ========================================================================

    /// Pair elements with a second source, truncated to the shorter.
    pub fn zip<O: IntoSequence>(self, other: O) -> Pipeline<Zip<S, O::Seq>> {
        Pipeline::new(Zip::new(self.seq, other.into_sequence()))
    }

    /// Combine paired elements through a function, truncated to the
    /// shorter source.
    pub fn zip_with<O, F, C>(self, other: O, combine: F) -> Pipeline<ZipWith<S, O::Seq, F>>
    where
        O: IntoSequence,
        F: FnMut(S::Item, O::Item) -> C,
    {
        Pipeline::new(ZipWith::new(self.seq, other.into_sequence(), combine))
    }

    /// Emit this sequence in full, then the other.
    pub fn concat<O>(self, other: O) -> Pipeline<Concat<S, O::Seq>>
    where
        O: IntoSequence<Item = S::Item>,
    {
        Pipeline::new(Concat::new(self.seq, other.into_sequence()))
    }

    /// Alias for [`Pipeline::concat`].
    pub fn chain<O>(self, other: O) -> Pipeline<Concat<S, O::Seq>>
    where
        O: IntoSequence<Item = S::Item>,
    {
        self.concat(other)
    }

    /// Alternate elements with a second source; once one side exhausts,
    /// the survivor continues alone.
    pub fn interleave<O>(self, other: O) -> Pipeline<Interleave<S, O::Seq>>
    where
        O: IntoSequence<Item = S::Item>,
    {
        Pipeline::new(Interleave::new(self.seq, other.into_sequence()))
    }

    /// Merge with another ascending sequence, keeping ascending order.
    /// Stable: this sequence wins ties.
    pub fn merge<O>(self, other: O) -> Pipeline<Merge<S, O::Seq>>
    where
        O: IntoSequence<Item = S::Item>,
        S::Item: PartialOrd,
    {
        Pipeline::new(Merge::new(self.seq, other.into_sequence()))
    }

    // ========================================================================
    // Terminal consumers
    // ========================================================================

    /// Exhaust the chain into a vector.
    pub fn to_vec(self) -> Result<Vec<S::Item>, PipelineError> {
        consumers::drain(self.seq)
    }

    /// Exhaust the chain into an insertion-ordered set.
    pub fn to_set(self) -> Result<IndexSet<S::Item>, PipelineError>
    where
        S::Item: Eq + Hash,
    {
        consumers::fold(self.seq, IndexSet::new(), |mut set, value| {
            set.insert(value);
            set
        })
    }

    /// Exhaust a chain of key/value pairs into an insertion-ordered map.
    /// Later pairs overwrite earlier ones with the same key.
    pub fn to_map<K, V>(self) -> Result<IndexMap<K, V>, PipelineError>
    where
        S: Sequence<Item = (K, V)>,
        K: Eq + Hash,
    {
        consumers::fold(self.seq, IndexMap::new(), |mut map, (key, value)| {
            map.insert(key, value);
            map
        })
    }

    /// Fold every element into an accumulator seeded by `init`.
    pub fn fold<A, F: FnMut(A, S::Item) -> A>(self, init: A, fold: F) -> Result<A, PipelineError> {
        consumers::fold(self.seq, init, fold)
    }

    /// Fold seeded by the first element; `Ok(None)` on empty input.
    pub fn reduce<F>(self, combine: F) -> Result<Option<S::Item>, PipelineError>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        consumers::reduce(self.seq, combine)
    }

    /// First element satisfying the predicate; short-circuits.
    pub fn find<P: FnMut(&S::Item) -> bool>(
        self,
        predicate: P,
    ) -> Result<Option<S::Item>, PipelineError> {
        consumers::find(self.seq, predicate)
    }

    /// Index of the first element satisfying the predicate; short-circuits.
    pub fn position<P: FnMut(&S::Item) -> bool>(
        self,
        predicate: P,
    ) -> Result<Option<usize>, PipelineError> {
        consumers::position(self.seq, predicate)
    }

    /// True if any element satisfies the predicate; short-circuits on the
    /// first hit, so eventually-satisfiable predicates terminate even over
    /// infinite sources.
    pub fn any<P: FnMut(&S::Item) -> bool>(self, predicate: P) -> Result<bool, PipelineError> {
        consumers::any(self.seq, predicate)
    }

    /// True if every element satisfies the predicate; short-circuits on
    /// the first miss.
    pub fn all<P: FnMut(&S::Item) -> bool>(self, predicate: P) -> Result<bool, PipelineError> {
        consumers::all(self.seq, predicate)
    }

    /// The first element, pulling exactly once.
    pub fn first(self) -> Result<Option<S::Item>, PipelineError> {
        consumers::first(self.seq)
    }

    /// The final element; exhausts the source.
    pub fn last(self) -> Result<Option<S::Item>, PipelineError> {
        consumers::last(self.seq)
    }

    /// The element at zero-based position `n`, or `Ok(None)` past the end.
    pub fn nth(self, n: usize) -> Result<Option<S::Item>, PipelineError> {
        consumers::nth(self.seq, n)
    }

    /// Number of elements; single pass, O(1) memory.
    pub fn count(self) -> Result<usize, PipelineError> {
        consumers::count(self.seq)
    }

    /// True when no element exists; pulls at most one element.
    pub fn is_empty(self) -> Result<bool, PipelineError> {
        consumers::is_empty(self.seq)
    }

    /// True if some element equals `value`; short-circuits.
    pub fn contains(self, value: &S::Item) -> Result<bool, PipelineError>
    where
        S::Item: PartialEq,
    {
        consumers::any(self.seq, |candidate| candidate == value)
    }

    /// Split into `(passing, failing)`, both in original order.
    pub fn partition<P>(self, predicate: P) -> Result<(Vec<S::Item>, Vec<S::Item>), PipelineError>
    where
        P: FnMut(&S::Item) -> bool,
    {
        consumers::partition(self.seq, predicate)
    }

    /// Run a side effect for every element.
    pub fn for_each<F: FnMut(S::Item)>(self, effect: F) -> Result<(), PipelineError> {
        consumers::for_each(self.seq, effect)
    }
}

// ============================================================================
// Statistics (numeric pipelines only)
// ============================================================================

impl<S> Pipeline<S>
where
    S: Sequence,
    S::Item: Float,
{
    /// Sum of all elements; `0` on empty input.
    pub fn sum(self) -> Result<S::Item, PipelineError> {
        consumers::fold(self.seq, S::Item::zero(), |acc, v| acc + v)
    }

    /// Product of all elements; `1` on empty input.
    pub fn product(self) -> Result<S::Item, PipelineError> {
        consumers::fold(self.seq, S::Item::one(), |acc, v| acc * v)
    }

    /// Arithmetic mean; `Ok(None)` on empty input. Single pass, running
    /// sum and count.
    pub fn mean(self) -> Result<Option<S::Item>, PipelineError> {
        let (total, count) = consumers::fold(
            self.seq,
            (S::Item::zero(), 0_usize),
            |(total, count), v| (total + v, count + 1),
        )?;
        if count == 0 {
            return Ok(None);
        }
        Ok(<S::Item as NumCast>::from(count).map(|n| total / n))
    }

    /// Smallest element; `Ok(None)` on empty input.
    pub fn min(self) -> Result<Option<S::Item>, PipelineError> {
        consumers::reduce(self.seq, S::Item::min)
    }

    /// Largest element; `Ok(None)` on empty input.
    pub fn max(self) -> Result<Option<S::Item>, PipelineError> {
        consumers::reduce(self.seq, S::Item::max)
    }

    /// Range `max - min`; `Ok(None)` on empty input. Single pass, running
    /// extremes.
    pub fn span(self) -> Result<Option<S::Item>, PipelineError> {
        let extremes = consumers::fold(self.seq, None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
        Ok(extremes.map(|(lo, hi)| hi - lo))
    }

    /// Population variance; `Ok(None)` on empty input.
    pub fn variance(self) -> Result<Option<S::Item>, PipelineError> {
        let values = consumers::drain(self.seq)?;
        Ok(stats::dispersion::variance(&values))
    }

    /// Population standard deviation; `Ok(None)` on empty input.
    pub fn std_dev(self) -> Result<Option<S::Item>, PipelineError> {
        let values = consumers::drain(self.seq)?;
        Ok(stats::dispersion::std_dev(&values))
    }

    /// Middle value; `Ok(None)` on empty input.
    pub fn median(self) -> Result<Option<S::Item>, PipelineError> {
        let values = consumers::drain(self.seq)?;
        Ok(stats::order::median(&values))
    }

    /// Continuous-rank percentile with linear interpolation.
    ///
    /// Fails, before any element is pulled, when `p` is outside
    /// `[0, 100]` or not finite. `Ok(None)` on empty input.
    pub fn percentile(self, p: S::Item) -> Result<Option<S::Item>, PipelineError> {
        Validator::validate_percentile(p)?;
        let values = consumers::drain(self.seq)?;
        Ok(stats::order::percentile(&values, p))
    }

    /// Q1/Q2/Q3 cut points; `Ok(None)` on empty input.
    pub fn quartiles(self) -> Result<Option<Quartiles<S::Item>>, PipelineError> {
        let values = consumers::drain(self.seq)?;
        Ok(stats::order::quartiles(&values))
    }

    /// All values tied for maximum frequency, in first-seen order;
    /// `Ok(None)` on empty input.
    pub fn mode(self) -> Result<Option<Vec<S::Item>>, PipelineError> {
        let values = consumers::drain(self.seq)?;
        Ok(stats::frequency::mode(&values))
    }

    /// Population covariance against a second sequence, zipped and
    /// truncated to the shorter; `Ok(None)` when the overlap is empty.
    pub fn covariance<O>(self, other: O) -> Result<Option<S::Item>, PipelineError>
    where
        O: IntoSequence<Item = S::Item>,
    {
        let xs = consumers::drain(self.seq)?;
        let ys = consumers::drain(other.into_sequence())?;
        Ok(stats::bivariate::covariance(&xs, &ys))
    }

    /// Pearson correlation against a second sequence, zipped and
    /// truncated to the shorter; `Ok(None)` when the overlap is empty or
    /// either side has zero deviation.
    pub fn correlation<O>(self, other: O) -> Result<Option<S::Item>, PipelineError>
    where
        O: IntoSequence<Item = S::Item>,
    {
        let xs = consumers::drain(self.seq)?;
        let ys = consumers::drain(other.into_sequence())?;
        Ok(stats::bivariate::correlation(&xs, &ys))
    }
}

// ============================================================================
// Iterator interop
// ============================================================================

/// Pipelines iterate directly, so `for` loops and std adapters work.
/// Cleanup attached to the source still runs exactly once, on drop.
impl<S: Sequence> Iterator for Pipeline<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.seq.advance()
    }
}
