//! Single-pass accumulating statistics.
//!
//! ## Purpose
//!
//! Sum, product, mean, minimum, maximum, and span: everything computable
//! in one pass over the values with O(1) state.
//!
//! ## Design notes
//!
//! * `sum` and `product` have well-defined identities (0 and 1) and are
//!   the only statistics with a value on empty input. Everything else
//!   returns `None`, never zero or NaN.
//! * Generic over `Float`, so non-numeric calls fail to compile.
//!
//! ## Visibility
//!
//! Consumed by the pipeline surface; public for direct slice use.

use num_traits::Float;

/// Sum of all values. Identity: `0` on empty input.
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Product of all values. Identity: `1` on empty input.
pub fn product<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::one(), |acc, &v| acc * v)
}

/// Arithmetic mean, or `None` on empty input.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let count = T::from(values.len())?;
    Some(sum(values) / count)
}

/// Smallest value, or `None` on empty input.
pub fn min<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::min)
}

/// Largest value, or `None` on empty input.
pub fn max<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::max)
}

/// Range `max - min`, or `None` on empty input.
pub fn span<T: Float>(values: &[T]) -> Option<T> {
    Some(max(values)? - min(values)?)
}
