//! Curried, point-free mirror of the pipeline surface.
//!
//! ## Purpose
//!
//! Re-exposes the operators as standalone two-call functions,
//! `op(args)(pipeline)`, for point-free composition. Every function
//! delegates to the corresponding [`Pipeline`] method; no new semantics
//! are introduced, including validation timing (a returned closure for a
//! fallible operator yields the same `Result` the method would).
//!
//! ```
//! use iterflow::functional::{filter, map, take};
//! use iterflow::seq;
//!
//! let odds_squared = take(3)(map(|x: i32| x * x)(filter(|x: &i32| x % 2 == 1)(
//!     seq(1..),
//! )));
//! assert_eq!(odds_squared.to_vec().unwrap(), vec![1, 9, 25]);
//! ```
//!
//! ## Visibility
//!
//! Public, optional surface; the fluent `Pipeline` API is the primary one.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use num_traits::Float;

use crate::api::Pipeline;
use crate::buffered::dedup::{Distinct, DistinctBy};
use crate::buffered::group::GroupBy;
use crate::buffered::intersperse::Intersperse;
use crate::buffered::ordering::{Reversed, Sorted, SortedBy};
use crate::buffered::window::{Chunk, Pairwise, Window};
use crate::combine::chain::Concat;
use crate::combine::interleave::Interleave;
use crate::combine::merge::Merge;
use crate::combine::zip::{Zip, ZipWith};
use crate::engine::stages::{
    Enumerate, Filter, FlatMap, Map, Scan, Skip, SkipWhile, Take, TakeWhile, Tap,
};
use crate::primitives::errors::PipelineError;
use crate::primitives::sequence::{IntoSequence, Sequence};
use crate::stats::order::Quartiles;

// ============================================================================
// Lazy stages
// ============================================================================

/// Curried [`Pipeline::map`].
pub fn map<S, B, F>(transform: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<Map<S, F>>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    move |pipeline| pipeline.map(transform)
}

/// Curried [`Pipeline::filter`].
pub fn filter<S, P>(predicate: P) -> impl FnOnce(Pipeline<S>) -> Pipeline<Filter<S, P>>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.filter(predicate)
}

/// Curried [`Pipeline::flat_map`].
pub fn flat_map<S, I, F>(expand: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<FlatMap<S, F, I>>
where
    S: Sequence,
    I: IntoSequence,
    F: FnMut(S::Item) -> I,
{
    move |pipeline| pipeline.flat_map(expand)
}

/// Curried [`Pipeline::take`].
pub fn take<S: Sequence>(n: usize) -> impl FnOnce(Pipeline<S>) -> Pipeline<Take<S>> {
    move |pipeline| pipeline.take(n)
}

/// Curried [`Pipeline::skip`].
pub fn skip<S: Sequence>(n: usize) -> impl FnOnce(Pipeline<S>) -> Pipeline<Skip<S>> {
    move |pipeline| pipeline.skip(n)
}

/// Curried [`Pipeline::take_while`].
pub fn take_while<S, P>(predicate: P) -> impl FnOnce(Pipeline<S>) -> Pipeline<TakeWhile<S, P>>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.take_while(predicate)
}

/// Curried [`Pipeline::skip_while`].
pub fn skip_while<S, P>(predicate: P) -> impl FnOnce(Pipeline<S>) -> Pipeline<SkipWhile<S, P>>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.skip_while(predicate)
}

/// Curried [`Pipeline::tap`].
pub fn tap<S, F>(observe: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<Tap<S, F>>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    move |pipeline| pipeline.tap(observe)
}

/// Curried [`Pipeline::enumerate`].
pub fn enumerate<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Pipeline<Enumerate<S>> {
    |pipeline| pipeline.enumerate()
}

/// Curried [`Pipeline::scan`].
pub fn scan<S, A, F>(init: A, fold: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<Scan<S, A, F>>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    move |pipeline| pipeline.scan(init, fold)
}

// ============================================================================
// Buffering operators
// ============================================================================

/// Curried [`Pipeline::window`]. Validation still happens at the inner
/// call, before any element is pulled.
pub fn window<S>(
    size: usize,
) -> impl FnOnce(Pipeline<S>) -> Result<Pipeline<Window<S>>, PipelineError>
where
    S: Sequence,
    S::Item: Clone,
{
    move |pipeline| pipeline.window(size)
}

/// Curried [`Pipeline::chunk`].
pub fn chunk<S>(
    size: usize,
) -> impl FnOnce(Pipeline<S>) -> Result<Pipeline<Chunk<S>>, PipelineError>
where
    S: Sequence,
{
    move |pipeline| pipeline.chunk(size)
}

/// Curried [`Pipeline::pairwise`].
pub fn pairwise<S>() -> impl FnOnce(Pipeline<S>) -> Pipeline<Pairwise<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    |pipeline| pipeline.pairwise()
}

/// Curried [`Pipeline::distinct`].
pub fn distinct<S>() -> impl FnOnce(Pipeline<S>) -> Pipeline<Distinct<S>>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    |pipeline| pipeline.distinct()
}

/// Curried [`Pipeline::distinct_by`].
pub fn distinct_by<S, K, F>(key: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<DistinctBy<S, F, K>>
where
    S: Sequence,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    move |pipeline| pipeline.distinct_by(key)
}

/// Curried [`Pipeline::group_by`].
pub fn group_by<S, K, F>(key: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<GroupBy<S, F, K>>
where
    S: Sequence,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    move |pipeline| pipeline.group_by(key)
}

/// Curried [`Pipeline::sort`].
pub fn sort<S>() -> impl FnOnce(Pipeline<S>) -> Pipeline<Sorted<S>>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    |pipeline| pipeline.sort()
}

/// Curried [`Pipeline::sort_by`].
pub fn sort_by<S, F>(compare: F) -> impl FnOnce(Pipeline<S>) -> Pipeline<SortedBy<S, F>>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    move |pipeline| pipeline.sort_by(compare)
}

/// Curried [`Pipeline::reverse`].
pub fn reverse<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Pipeline<Reversed<S>> {
    |pipeline| pipeline.reverse()
}

/// Curried [`Pipeline::intersperse`].
pub fn intersperse<S>(separator: S::Item) -> impl FnOnce(Pipeline<S>) -> Pipeline<Intersperse<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    move |pipeline| pipeline.intersperse(separator)
}

// ============================================================================
// Combining operators
// ============================================================================

/// Curried [`Pipeline::zip`].
pub fn zip<S, O>(other: O) -> impl FnOnce(Pipeline<S>) -> Pipeline<Zip<S, O::Seq>>
where
    S: Sequence,
    O: IntoSequence,
{
    move |pipeline| pipeline.zip(other)
}

/// Curried [`Pipeline::zip_with`].
pub fn zip_with<S, O, F, C>(
    other: O,
    combine: F,
) -> impl FnOnce(Pipeline<S>) -> Pipeline<ZipWith<S, O::Seq, F>>
where
    S: Sequence,
    O: IntoSequence,
    F: FnMut(S::Item, O::Item) -> C,
{
    move |pipeline| pipeline.zip_with(other, combine)
}

/// Curried [`Pipeline::concat`].
pub fn concat<S, O>(other: O) -> impl FnOnce(Pipeline<S>) -> Pipeline<Concat<S, O::Seq>>
where
    S: Sequence,
    O: IntoSequence<Item = S::Item>,
{
    move |pipeline| pipeline.concat(other)
}

/// Curried [`Pipeline::interleave`].
pub fn interleave<S, O>(other: O) -> impl FnOnce(Pipeline<S>) -> Pipeline<Interleave<S, O::Seq>>
where
    S: Sequence,
    O: IntoSequence<Item = S::Item>,
{
    move |pipeline| pipeline.interleave(other)
}

/// Curried [`Pipeline::merge`].
pub fn merge<S, O>(other: O) -> impl FnOnce(Pipeline<S>) -> Pipeline<Merge<S, O::Seq>>
where
    S: Sequence,
    O: IntoSequence<Item = S::Item>,
    S::Item: PartialOrd,
{
    move |pipeline| pipeline.merge(other)
}

// ============================================================================
// Terminal consumers and statistics
// ============================================================================

/// Curried [`Pipeline::to_vec`].
pub fn to_vec<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Result<Vec<S::Item>, PipelineError> {
    |pipeline| pipeline.to_vec()
}

/// Curried [`Pipeline::to_set`].
pub fn to_set<S>() -> impl FnOnce(Pipeline<S>) -> Result<IndexSet<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    |pipeline| pipeline.to_set()
}

/// Curried [`Pipeline::to_map`].
pub fn to_map<S, K, V>() -> impl FnOnce(Pipeline<S>) -> Result<IndexMap<K, V>, PipelineError>
where
    S: Sequence<Item = (K, V)>,
    K: Eq + Hash,
{
    |pipeline| pipeline.to_map()
}

/// Curried [`Pipeline::fold`].
pub fn fold<S, A, F>(init: A, fold: F) -> impl FnOnce(Pipeline<S>) -> Result<A, PipelineError>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    move |pipeline| pipeline.fold(init, fold)
}

/// Curried [`Pipeline::reduce`].
pub fn reduce<S, F>(
    combine: F,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    move |pipeline| pipeline.reduce(combine)
}

/// Curried [`Pipeline::find`].
pub fn find<S, P>(
    predicate: P,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.find(predicate)
}

/// Curried [`Pipeline::any`].
pub fn any<S, P>(predicate: P) -> impl FnOnce(Pipeline<S>) -> Result<bool, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.any(predicate)
}

/// Curried [`Pipeline::all`].
pub fn all<S, P>(predicate: P) -> impl FnOnce(Pipeline<S>) -> Result<bool, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.all(predicate)
}

/// Curried [`Pipeline::position`].
pub fn position<S, P>(
    predicate: P,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<usize>, PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.position(predicate)
}

/// Curried [`Pipeline::first`].
pub fn first<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError> {
    |pipeline| pipeline.first()
}

/// Curried [`Pipeline::last`].
pub fn last<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError> {
    |pipeline| pipeline.last()
}

/// Curried [`Pipeline::nth`].
pub fn nth<S: Sequence>(
    n: usize,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError> {
    move |pipeline| pipeline.nth(n)
}

/// Curried [`Pipeline::count`].
pub fn count<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Result<usize, PipelineError> {
    |pipeline| pipeline.count()
}

/// Curried [`Pipeline::is_empty`].
pub fn is_empty<S: Sequence>() -> impl FnOnce(Pipeline<S>) -> Result<bool, PipelineError> {
    |pipeline| pipeline.is_empty()
}

/// Curried [`Pipeline::contains`].
pub fn contains<S>(value: S::Item) -> impl FnOnce(Pipeline<S>) -> Result<bool, PipelineError>
where
    S: Sequence,
    S::Item: PartialEq,
{
    move |pipeline| pipeline.contains(&value)
}

/// Curried [`Pipeline::partition`].
pub fn partition<S, P>(
    predicate: P,
) -> impl FnOnce(Pipeline<S>) -> Result<(Vec<S::Item>, Vec<S::Item>), PipelineError>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    move |pipeline| pipeline.partition(predicate)
}

/// Curried [`Pipeline::for_each`].
pub fn for_each<S, F>(effect: F) -> impl FnOnce(Pipeline<S>) -> Result<(), PipelineError>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    move |pipeline| pipeline.for_each(effect)
}

/// Curried [`Pipeline::sum`].
pub fn sum<S>() -> impl FnOnce(Pipeline<S>) -> Result<S::Item, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.sum()
}

/// Curried [`Pipeline::product`].
pub fn product<S>() -> impl FnOnce(Pipeline<S>) -> Result<S::Item, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.product()
}

/// Curried [`Pipeline::mean`].
pub fn mean<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.mean()
}

/// Curried [`Pipeline::median`].
pub fn median<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.median()
}

/// Curried [`Pipeline::percentile`].
pub fn percentile<S>(
    p: S::Item,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    move |pipeline| pipeline.percentile(p)
}

/// Curried [`Pipeline::mode`].
pub fn mode<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<Vec<S::Item>>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.mode()
}

/// Curried [`Pipeline::min`].
pub fn min<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.min()
}

/// Curried [`Pipeline::max`].
pub fn max<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.max()
}

/// Curried [`Pipeline::span`].
pub fn span<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.span()
}

/// Curried [`Pipeline::variance`].
pub fn variance<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.variance()
}

/// Curried [`Pipeline::std_dev`].
pub fn std_dev<S>() -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.std_dev()
}

/// Curried [`Pipeline::quartiles`].
pub fn quartiles<S>(
) -> impl FnOnce(Pipeline<S>) -> Result<Option<Quartiles<S::Item>>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
{
    |pipeline| pipeline.quartiles()
}

/// Curried [`Pipeline::covariance`].
pub fn covariance<S, O>(
    other: O,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
    O: IntoSequence<Item = S::Item>,
{
    move |pipeline| pipeline.covariance(other)
}

/// Curried [`Pipeline::correlation`].
pub fn correlation<S, O>(
    other: O,
) -> impl FnOnce(Pipeline<S>) -> Result<Option<S::Item>, PipelineError>
where
    S: Sequence,
    S::Item: Float,
    O: IntoSequence<Item = S::Item>,
{
    move |pipeline| pipeline.correlation(other)
}
