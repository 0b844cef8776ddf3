//! Population variance and standard deviation.
//!
//! ## Purpose
//!
//! Dispersion measures around the mean. Variance is the population
//! variance: mean of squared deviations, divisor `n`, not `n - 1`.
//!
//! ## Design notes
//!
//! * Two passes: one for the mean, one for the squared deviations. The
//!   textbook formulation is kept over the single-pass shortcut
//!   `E[x²] - E[x]²`, which loses precision catastrophically when the
//!   mean is large relative to the spread.
//!
//! ## Visibility
//!
//! Consumed by the pipeline surface; public for direct slice use.

use num_traits::Float;

use crate::stats::accumulate::mean;

/// Population variance, or `None` on empty input.
pub fn variance<T: Float>(values: &[T]) -> Option<T> {
    let center = mean(values)?;
    let count = T::from(values.len())?;
    let squared_deviations = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - center;
        acc + d * d
    });
    Some(squared_deviations / count)
}

/// Population standard deviation, or `None` on empty input.
pub fn std_dev<T: Float>(values: &[T]) -> Option<T> {
    variance(values).map(Float::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_divisor() {
        // Deviations from mean 4: [-2, 0, 2]; variance = 8 / 3.
        let values = [2.0_f64, 4.0, 6.0];
        let v = variance(&values).unwrap();
        assert!((v - 8.0 / 3.0).abs() < 1e-12);
        assert!((std_dev(&values).unwrap() - v.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_and_singleton() {
        let empty: [f64; 0] = [];
        assert_eq!(variance(&empty), None);
        assert_eq!(std_dev(&empty), None);
        // A single value has zero spread, not "no value".
        assert_eq!(variance(&[7.0_f64]), Some(0.0));
    }
}
