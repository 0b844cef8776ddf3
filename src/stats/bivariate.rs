//! Covariance and correlation over paired sequences.
//!
//! ## Purpose
//!
//! Pairwise statistics over two numeric sequences. The pairing is zipped
//! and truncated to the shorter input, so mismatched lengths compare the
//! shared prefix rather than erroring.
//!
//! ## Design notes
//!
//! * Population covariance: mean of `(x − x̄)(y − ȳ)` with divisor `n`,
//!   consistent with the population variance elsewhere in the crate.
//! * Correlation divides the covariance by the product of the population
//!   standard deviations. A constant sequence has zero deviation and an
//!   undefined ratio; that case is "no value", not infinity or NaN.
//!
//! ## Visibility
//!
//! Consumed by the pipeline surface; public for direct slice use.

use num_traits::Float;

use crate::stats::accumulate::mean;
use crate::stats::dispersion::std_dev;

/// Population covariance over the shared prefix, or `None` when empty.
pub fn covariance<T: Float>(xs: &[T], ys: &[T]) -> Option<T> {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return None;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];
    let x_mean = mean(xs)?;
    let y_mean = mean(ys)?;
    let cross = xs
        .iter()
        .zip(ys)
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - x_mean) * (y - y_mean));
    Some(cross / T::from(n)?)
}

/// Pearson correlation over the shared prefix.
///
/// `None` when empty or when either sequence has zero deviation.
pub fn correlation<T: Float>(xs: &[T], ys: &[T]) -> Option<T> {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return None;
    }
    let cov = covariance(xs, ys)?;
    let x_dev = std_dev(&xs[..n])?;
    let y_dev = std_dev(&ys[..n])?;
    if x_dev == T::zero() || y_dev == T::zero() {
        return None;
    }
    Some(cov / (x_dev * y_dev))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_correlated() {
        let xs = [1.0_f64, 2.0, 3.0, 4.0];
        let ys = [2.0_f64, 4.0, 6.0, 8.0];
        assert!((correlation(&xs, &ys).unwrap() - 1.0).abs() < 1e-12);
        // cov(x, 2x) = 2 * var(x); var([1..4]) = 1.25
        assert!((covariance(&xs, &ys).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn truncates_to_shorter() {
        let xs = [1.0_f64, 2.0, 3.0, 100.0];
        let ys = [1.0_f64, 2.0, 3.0];
        let full = covariance(&[1.0, 2.0, 3.0], &ys).unwrap();
        assert_eq!(covariance(&xs, &ys), Some(full));
    }

    #[test]
    fn degenerate_inputs() {
        let empty: [f64; 0] = [];
        assert_eq!(covariance(&empty, &empty), None);
        assert_eq!(correlation(&empty, &empty), None);
        // Constant sequence: zero deviation, undefined correlation.
        assert_eq!(correlation(&[1.0_f64, 1.0], &[1.0, 2.0]), None);
    }
}
