//! Property tests for the order/permutation guarantees of the buffering
//! operators.

use proptest::prelude::*;

use iterflow::seq;

proptest! {
    #[test]
    fn reverse_twice_restores_original_order(
        values in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let round_trip = seq(values.clone()).reverse().reverse().to_vec().unwrap();
        prop_assert_eq!(round_trip, values);
    }

    #[test]
    fn sort_emits_a_sorted_permutation(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let sorted = seq(values.clone()).sort().to_vec().unwrap();
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn chunks_concatenate_back_to_the_input(
        values in prop::collection::vec(any::<i32>(), 0..100),
        size in 1_usize..10,
    ) {
        let chunks = seq(values.clone()).chunk(size).unwrap().to_vec().unwrap();
        prop_assert!(chunks.iter().rev().skip(1).all(|c| c.len() == size));
        let rejoined: Vec<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(rejoined, values);
    }

    #[test]
    fn window_count_is_len_minus_size_plus_one(
        values in prop::collection::vec(any::<i32>(), 0..50),
        size in 1_usize..8,
    ) {
        let windows = seq(values.clone()).window(size).unwrap().to_vec().unwrap();
        let expected = if values.len() < size { 0 } else { values.len() - size + 1 };
        prop_assert_eq!(windows.len(), expected);
        prop_assert!(windows.iter().all(|w| w.len() == size));
    }

    #[test]
    fn zip_length_is_the_minimum_of_both_sources(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let zipped = seq(left.clone()).zip(right.clone()).to_vec().unwrap();
        prop_assert_eq!(zipped.len(), left.len().min(right.len()));
    }

    #[test]
    fn merge_of_sorted_inputs_is_sorted(
        mut left in prop::collection::vec(any::<i32>(), 0..50),
        mut right in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        left.sort();
        right.sort();
        let total = left.len() + right.len();
        let merged = seq(left).merge(right).to_vec().unwrap();
        prop_assert_eq!(merged.len(), total);
        prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));
    }
}
