//! Order statistics: median, percentile, quartiles.
//!
//! ## Purpose
//!
//! Statistics computed over a sorted copy of the values. The percentile
//! follows the continuous-rank linear-interpolation method (the common
//! "R-7" / default NumPy method): rank `r = p/100 × (n−1)`, result
//! interpolated between `values[floor(r)]` and `values[ceil(r)]`.
//!
//! ## Design notes
//!
//! * Every call sorts a fresh copy; nothing caller-visible is mutated and
//!   no state survives between calls.
//! * The sort is stable with `partial_cmp`, incomparable pairs treated as
//!   equal, consistent with the reordering operators.
//! * Percentile ranks are validated by the caller before any element is
//!   pulled; the functions here assume `p ∈ [0, 100]`.
//! * `quartiles` sorts once and interpolates three ranks from the same
//!   copy.
//!
//! ## Visibility
//!
//! Consumed by the pipeline surface; public for direct slice use.

use std::cmp::Ordering;

use num_traits::Float;

/// The three quartile cut points of a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles<T> {
    /// 25th percentile.
    pub q1: T,
    /// 50th percentile (the median).
    pub q2: T,
    /// 75th percentile.
    pub q3: T,
}

fn sorted_copy<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Interpolate the continuous-rank percentile over already-sorted values.
fn interpolate_rank<T: Float>(sorted: &[T], p: T) -> Option<T> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }
    let hundred = T::from(100.0)?;
    let rank = p / hundred * T::from(n - 1)?;
    let lo = rank.floor();
    let frac = rank - lo;
    let lo_idx = lo.to_usize()?;
    let hi_idx = rank.ceil().to_usize()?;
    Some(sorted[lo_idx] + frac * (sorted[hi_idx] - sorted[lo_idx]))
}

/// Middle value, or `None` on empty input.
///
/// Odd lengths return the middle element; even lengths return the average
/// of the two middle elements.
pub fn median<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        let two = T::from(2.0)?;
        Some((sorted[mid - 1] + sorted[mid]) / two)
    }
}

/// Continuous-rank percentile, or `None` on empty input.
///
/// Assumes a validated rank; `percentile(50)` over `[1..=10]` is `5.5`,
/// `percentile(75)` is `7.75`.
pub fn percentile<T: Float>(values: &[T], p: T) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    interpolate_rank(&sorted_copy(values), p)
}

/// Q1/Q2/Q3 from a single sorted copy, or `None` on empty input.
pub fn quartiles<T: Float>(values: &[T]) -> Option<Quartiles<T>> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);
    Some(Quartiles {
        q1: interpolate_rank(&sorted, T::from(25.0)?)?,
        q2: interpolate_rank(&sorted, T::from(50.0)?)?,
        q3: interpolate_rank(&sorted, T::from(75.0)?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_parity() {
        assert_eq!(median(&[1.0_f64, 3.0, 2.0]), Some(2.0));
        assert_eq!(median(&[1.0_f64, 2.0, 3.0, 4.0]), Some(2.5));
        let empty: [f64; 0] = [];
        assert_eq!(median(&empty), None);
    }

    #[test]
    fn percentile_grid_over_one_to_ten() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 50.0), Some(5.5));
        assert_eq!(percentile(&values, 75.0), Some(7.75));
        assert_eq!(percentile(&values, 100.0), Some(10.0));
    }

    #[test]
    fn quartiles_match_percentiles() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let q = quartiles(&values).unwrap();
        assert_eq!(q.q1, percentile(&values, 25.0).unwrap());
        assert_eq!(q.q2, 5.5);
        assert_eq!(q.q3, 7.75);
    }

    #[test]
    fn singleton_is_its_own_percentile() {
        assert_eq!(percentile(&[42.0_f64], 0.0), Some(42.0));
        assert_eq!(percentile(&[42.0_f64], 100.0), Some(42.0));
    }
}
