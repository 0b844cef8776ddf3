//! Operator contract coverage: lazy stages, buffering operators, and
//! combining operators.

use iterflow::{from_fn, seq, PipelineError};

// ============================================================================
// Lazy stages
// ============================================================================

#[test]
fn map_filter_compose() {
    let out = seq(1..=6)
        .map(|x| x * 10)
        .filter(|x| x % 20 == 0)
        .to_vec()
        .unwrap();
    assert_eq!(out, vec![20, 40, 60]);
}

#[test]
fn flat_map_opens_one_inner_handle_per_outer_element() {
    let out = seq([1, 2, 3])
        .flat_map(|x| vec![x; x as usize])
        .to_vec()
        .unwrap();
    assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn flat_map_accepts_pipelines() {
    let out = seq([2, 3]).flat_map(|n| seq(0..n)).to_vec().unwrap();
    assert_eq!(out, vec![0, 1, 0, 1, 2]);
}

#[test]
fn skip_discards_exactly_n() {
    assert_eq!(seq(1..=5).skip(3).to_vec().unwrap(), vec![4, 5]);
    assert_eq!(seq(1..=3).skip(5).to_vec().unwrap(), Vec::<i32>::new());
}

#[test]
fn take_while_stops_at_first_failure() {
    let out = seq([1, 2, 9, 1, 1]).take_while(|&x| x < 5).to_vec().unwrap();
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn skip_while_emits_from_first_failure_onward() {
    let out = seq([1, 2, 9, 1, 1]).skip_while(|&x| x < 5).to_vec().unwrap();
    assert_eq!(out, vec![9, 1, 1]);
}

#[test]
fn tap_observes_in_stream_order_without_changing_elements() {
    let mut observed = Vec::new();
    let out = seq([1, 2, 3])
        .tap(|&x| observed.push(x))
        .map(|x| x * 2)
        .to_vec()
        .unwrap();
    assert_eq!(out, vec![2, 4, 6]);
    assert_eq!(observed, vec![1, 2, 3]);
}

#[test]
fn enumerate_and_scan() {
    let indexed = seq(['a', 'b']).enumerate().to_vec().unwrap();
    assert_eq!(indexed, vec![(0, 'a'), (1, 'b')]);

    let running = seq([1, 2, 3, 4]).scan(0, |acc, x| acc + x).to_vec().unwrap();
    assert_eq!(running, vec![1, 3, 6, 10]);
}

// ============================================================================
// Windowing
// ============================================================================

#[test]
fn window_emits_overlapping_snapshots() {
    let out = seq([1, 2, 3, 4, 5]).window(3).unwrap().to_vec().unwrap();
    assert_eq!(out, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
}

#[test]
fn window_shorter_than_size_emits_nothing() {
    let out = seq([1, 2]).window(3).unwrap().to_vec().unwrap();
    assert_eq!(out, Vec::<Vec<i32>>::new());
}

#[test]
fn emitted_windows_are_independent_of_later_pulls() {
    let mut windows = seq([1, 2, 3, 4]).window(2).unwrap();
    let first = Iterator::next(&mut windows).unwrap();
    let second = Iterator::next(&mut windows).unwrap();
    // Retained snapshots must not alias the internal buffer.
    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, vec![2, 3]);
}

#[test]
fn chunk_emits_ceil_n_over_size_runs() {
    let out = seq([1, 2, 3, 4, 5]).chunk(2).unwrap().to_vec().unwrap();
    assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);

    let exact = seq([1, 2, 3, 4]).chunk(2).unwrap().to_vec().unwrap();
    assert_eq!(exact, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn pairwise_pairs_each_element_with_its_successor() {
    let out = seq([1, 2, 3]).pairwise().to_vec().unwrap();
    assert_eq!(out, vec![(1, 2), (2, 3)]);
    assert_eq!(seq([7]).pairwise().to_vec().unwrap(), Vec::<(i32, i32)>::new());
}

#[test]
fn zero_sizes_fail_at_construction() {
    assert_eq!(
        seq([1]).window(0).err(),
        Some(PipelineError::InvalidWindowSize(0))
    );
    assert_eq!(
        seq([1]).chunk(0).err(),
        Some(PipelineError::InvalidChunkSize(0))
    );
}

// ============================================================================
// Dedup, grouping, partitioning
// ============================================================================

#[test]
fn distinct_keeps_first_occurrences_in_order() {
    let out = seq([3, 1, 3, 2, 1, 3]).distinct().to_vec().unwrap();
    assert_eq!(out, vec![3, 1, 2]);
}

#[test]
fn distinct_by_keys_on_the_derived_value() {
    let out = seq(["apple", "avocado", "banana", "cherry"])
        .distinct_by(|s| s.as_bytes()[0])
        .to_vec()
        .unwrap();
    assert_eq!(out, vec!["apple", "banana", "cherry"]);
}

#[test]
fn group_by_preserves_both_orders() {
    let groups = seq([1, 4, 2, 7, 5, 8])
        .group_by(|x| x % 3)
        .to_vec()
        .unwrap();
    // Keys in first-seen order; members in original relative order.
    assert_eq!(groups, vec![(1, vec![1, 4, 7]), (2, vec![2, 5, 8])]);
}

#[test]
fn partition_splits_in_original_order() {
    let (evens, odds) = seq(1..=6).partition(|x| x % 2 == 0).unwrap();
    assert_eq!(evens, vec![2, 4, 6]);
    assert_eq!(odds, vec![1, 3, 5]);
}

// ============================================================================
// Reordering
// ============================================================================

#[test]
fn sort_is_ascending_and_stable_under_comparator() {
    let out = seq([3, 1, 2]).sort().to_vec().unwrap();
    assert_eq!(out, vec![1, 2, 3]);

    let by_len = seq(["ccc", "a", "bb", "dd"])
        .sort_by(|a, b| a.len().cmp(&b.len()))
        .to_vec()
        .unwrap();
    // "dd" keeps its position after "bb": stable.
    assert_eq!(by_len, vec!["a", "bb", "dd", "ccc"]);
}

#[test]
fn sort_does_not_mutate_the_caller_backing_store() {
    let original = vec![3, 1, 2];
    let sorted = seq(original.iter().copied()).sort().to_vec().unwrap();
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(original, vec![3, 1, 2]);
}

#[test]
fn reverse_round_trip_restores_order() {
    let out = seq([1, 2, 3]).reverse().to_vec().unwrap();
    assert_eq!(out, vec![3, 2, 1]);

    let round_trip = seq([1, 2, 3]).reverse().reverse().to_vec().unwrap();
    assert_eq!(round_trip, vec![1, 2, 3]);
}

#[test]
fn intersperse_separates_without_trailing_separator() {
    let out = seq([1, 2, 3]).intersperse(0).to_vec().unwrap();
    assert_eq!(out, vec![1, 0, 2, 0, 3]);
    assert_eq!(seq([1]).intersperse(0).to_vec().unwrap(), vec![1]);
    let empty: Vec<i32> = Vec::new();
    assert_eq!(seq(empty).intersperse(0).to_vec().unwrap(), Vec::<i32>::new());
}

// ============================================================================
// Combining
// ============================================================================

#[test]
fn zip_truncates_to_the_shorter_source() {
    let out = seq([1, 2, 3]).zip(["a", "b"]).to_vec().unwrap();
    assert_eq!(out, vec![(1, "a"), (2, "b")]);
}

#[test]
fn zip_with_combines_pairs() {
    let out = seq([1, 2, 3])
        .zip_with([10, 20, 30, 40], |a, b| a + b)
        .to_vec()
        .unwrap();
    assert_eq!(out, vec![11, 22, 33]);
}

#[test]
fn concat_exhausts_left_before_right() {
    let out = seq([1, 2]).concat([3, 4]).to_vec().unwrap();
    assert_eq!(out, vec![1, 2, 3, 4]);

    let chained = seq([1]).chain(seq([2])).to_vec().unwrap();
    assert_eq!(chained, vec![1, 2]);
}

#[test]
fn interleave_round_robins_and_survivors_continue() {
    let out = seq([1, 3, 5, 7, 9]).interleave([2, 4]).to_vec().unwrap();
    assert_eq!(out, vec![1, 2, 3, 4, 5, 7, 9]);
}

#[test]
fn merge_is_a_stable_two_pointer_merge() {
    let out = seq([1, 3, 5]).merge([2, 3, 6]).to_vec().unwrap();
    assert_eq!(out, vec![1, 2, 3, 3, 5, 6]);
}

#[test]
fn merge_left_wins_ties() {
    #[derive(Debug, Clone, PartialEq)]
    struct Keyed {
        key: i32,
        side: &'static str,
    }
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }
    let left = vec![Keyed { key: 2, side: "left" }];
    let right = vec![Keyed { key: 2, side: "right" }];
    let merged = seq(left).merge(right).to_vec().unwrap();
    assert_eq!(merged[0].side, "left");
    assert_eq!(merged[1].side, "right");
}

// ============================================================================
// Terminal consumers
// ============================================================================

#[test]
fn collection_terminals() {
    let set = seq([2, 1, 2, 3]).to_set().unwrap();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![2, 1, 3]);

    let map = seq([("a", 1), ("b", 2), ("a", 3)]).to_map().unwrap();
    assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![("a", 3), ("b", 2)]);
}

#[test]
fn fold_and_reduce() {
    assert_eq!(seq([1, 2, 3]).fold(10, |acc, x| acc + x).unwrap(), 16);
    assert_eq!(seq([1, 2, 3]).reduce(|a, b| a * b).unwrap(), Some(6));
    let empty: Vec<i32> = Vec::new();
    assert_eq!(seq(empty).reduce(|a, b| a + b).unwrap(), None);
}

#[test]
fn searching_terminals() {
    assert_eq!(seq([5, 6, 7]).find(|&x| x > 5).unwrap(), Some(6));
    assert_eq!(seq([5, 6, 7]).position(|&x| x == 7).unwrap(), Some(2));
    assert_eq!(seq([5, 6, 7]).position(|&x| x == 9).unwrap(), None);
    assert!(seq([5, 6, 7]).contains(&6).unwrap());
    assert!(!seq([5, 6, 7]).contains(&9).unwrap());
}

#[test]
fn counting_terminals() {
    assert_eq!(seq([1, 2, 3]).count().unwrap(), 3);
    assert!(!seq([1]).is_empty().unwrap());
    let empty: Vec<i32> = Vec::new();
    assert!(seq(empty).is_empty().unwrap());
}

#[test]
fn positional_terminals() {
    assert_eq!(seq([1, 2, 3]).first().unwrap(), Some(1));
    assert_eq!(seq([1, 2, 3]).last().unwrap(), Some(3));
    assert_eq!(seq([1, 2, 3]).nth(1).unwrap(), Some(2));
    assert_eq!(seq([1, 2, 3]).nth(10).unwrap(), None);
}

#[test]
fn exhausted_pipelines_stay_exhausted() {
    let mut pipeline = seq([1]);
    assert_eq!(Iterator::next(&mut pipeline), Some(1));
    assert_eq!(Iterator::next(&mut pipeline), None);
    assert_eq!(Iterator::next(&mut pipeline), None);
}

// ============================================================================
// Source adapters
// ============================================================================

#[test]
fn strings_iterate_as_characters() {
    let out = seq("abc".chars()).to_vec().unwrap();
    assert_eq!(out, vec!['a', 'b', 'c']);
}

#[test]
fn non_fused_iterators_stay_exhausted_once_wrapped() {
    // Resumes after its first None if polled raw.
    struct Resuming {
        calls: u32,
    }
    impl Iterator for Resuming {
        type Item = i32;
        fn next(&mut self) -> Option<i32> {
            self.calls += 1;
            match self.calls {
                1 => Some(1),
                2 => None,
                _ => Some(99),
            }
        }
    }

    let mut pipeline = seq(Resuming { calls: 0 });
    assert_eq!(Iterator::next(&mut pipeline), Some(1));
    assert_eq!(Iterator::next(&mut pipeline), None);
    assert_eq!(Iterator::next(&mut pipeline), None);
}

#[test]
fn generator_sources_are_fused() {
    let mut budget = 2;
    let mut pipeline = from_fn(move || {
        if budget == 0 {
            None
        } else {
            budget -= 1;
            Some(budget)
        }
    });
    assert_eq!(Iterator::next(&mut pipeline), Some(1));
    assert_eq!(Iterator::next(&mut pipeline), Some(0));
    assert_eq!(Iterator::next(&mut pipeline), None);
    assert_eq!(Iterator::next(&mut pipeline), None);
}

// ============================================================================
// Curried mirror
// ============================================================================

#[test]
fn curried_surface_delegates_to_the_engine() {
    use iterflow::functional::{filter, map, sum, take, window};

    let out = take(2)(map(|x: i32| x + 1)(filter(|x: &i32| x % 2 == 0)(seq(
        1..=10,
    ))))
    .to_vec()
    .unwrap();
    assert_eq!(out, vec![3, 5]);

    let windows = window(2)(seq([1, 2, 3])).unwrap().to_vec().unwrap();
    assert_eq!(windows, vec![vec![1, 2], vec![2, 3]]);

    let total = sum()(seq([1.0_f64, 2.0, 3.0])).unwrap();
    assert_eq!(total, 6.0);
}
