//! Mode: the most frequent values, ties included.
//!
//! ## Purpose
//!
//! Builds a frequency table over the values and returns every value tied
//! for the maximum frequency, in first-seen order.
//!
//! ## Design notes
//!
//! * Floats are not hashable, so the table is an ordered list probed by
//!   `partial_cmp` equality. Linear in the number of distinct values per
//!   insertion; adequate for the distributions a mode is meaningful on.
//! * NaN never compares equal, so each NaN forms its own singleton entry
//!   and cannot win against any repeated value.
//!
//! ## Visibility
//!
//! Consumed by the pipeline surface; public for direct slice use.

use std::cmp::Ordering;

use num_traits::Float;

/// All values tied for maximum frequency, first-seen order, or `None` on
/// empty input.
pub fn mode<T: Float>(values: &[T]) -> Option<Vec<T>> {
    if values.is_empty() {
        return None;
    }

    // (value, count) in first-seen order.
    let mut table: Vec<(T, usize)> = Vec::new();
    for &value in values {
        match table
            .iter_mut()
            .find(|(seen, _)| seen.partial_cmp(&value) == Some(Ordering::Equal))
        {
            Some(entry) => entry.1 += 1,
            None => table.push((value, 1)),
        }
    }

    let best = table.iter().map(|&(_, count)| count).max()?;
    Some(
        table
            .into_iter()
            .filter(|&(_, count)| count == best)
            .map(|(value, _)| value)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_in_first_seen_order() {
        assert_eq!(mode(&[1.0_f64, 1.0, 2.0, 2.0, 3.0]), Some(vec![1.0, 2.0]));
        assert_eq!(mode(&[2.0_f64, 1.0, 2.0]), Some(vec![2.0]));
    }

    #[test]
    fn all_unique_returns_everything() {
        assert_eq!(mode(&[3.0_f64, 1.0, 2.0]), Some(vec![3.0, 1.0, 2.0]));
    }

    #[test]
    fn empty_has_no_mode() {
        let empty: [f64; 0] = [];
        assert_eq!(mode(&empty), None);
    }
}
