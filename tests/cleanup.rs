//! Early-termination cleanup: a close hook attached to the source must run
//! exactly once, however the pipeline ends.

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use iterflow::{seq, PipelineError};

fn hook_counter() -> (Rc<Cell<u32>>, impl FnOnce()) {
    let runs = Rc::new(Cell::new(0));
    let probe = Rc::clone(&runs);
    (runs, move || probe.set(probe.get() + 1))
}

#[test]
fn hook_runs_once_after_full_consumption() {
    let (runs, hook) = hook_counter();
    let out = seq([1, 2, 3]).on_close(hook).to_vec().unwrap();
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(runs.get(), 1);
}

#[test]
fn hook_runs_once_on_early_termination() {
    let (runs, hook) = hook_counter();
    let out = seq(1..=100).on_close(hook).take(2).to_vec().unwrap();
    assert_eq!(out, vec![1, 2]);
    assert_eq!(runs.get(), 1, "partial consumption must still clean up");
}

#[test]
fn hook_runs_once_on_short_circuit() {
    let (runs, hook) = hook_counter();
    let found = seq(1..=100).on_close(hook).find(|&x| x == 3).unwrap();
    assert_eq!(found, Some(3));
    assert_eq!(runs.get(), 1);
}

#[test]
fn hook_runs_once_when_pipeline_is_abandoned() {
    let (runs, hook) = hook_counter();
    let mut pipeline = seq(1..=100).on_close(hook);
    assert_eq!(Iterator::next(&mut pipeline), Some(1));
    assert_eq!(Iterator::next(&mut pipeline), Some(2));
    assert_eq!(runs.get(), 0, "hook must not fire while the chain is live");
    drop(pipeline);
    assert_eq!(runs.get(), 1);
}

#[test]
fn explicit_close_runs_hook_once() {
    let (runs, hook) = hook_counter();
    let pipeline = seq(1..=100).on_close(hook).map(|x| x * 2);
    pipeline.close().unwrap();
    assert_eq!(runs.get(), 1);
}

#[test]
fn failing_hook_is_surfaced_not_swallowed() {
    let result = seq(1..=100)
        .try_on_close(|| Err(PipelineError::CleanupFailed("file handle leak".into())))
        .take(2)
        .to_vec();
    assert_eq!(
        result,
        Err(PipelineError::CleanupFailed("file handle leak".into()))
    );
}

#[test]
fn failing_hook_still_counts_as_run() {
    let runs = Rc::new(Cell::new(0));
    let probe = Rc::clone(&runs);
    let pipeline = seq(1..=10).try_on_close(move || {
        probe.set(probe.get() + 1);
        Err(PipelineError::CleanupFailed("boom".into()))
    });
    assert!(pipeline.count().is_err());
    assert_eq!(runs.get(), 1);
}

#[test]
fn hook_runs_once_when_a_callback_panics() {
    let (runs, hook) = hook_counter();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        seq(1..=10)
            .on_close(hook)
            .map(|x: i32| {
                if x == 3 {
                    panic!("callback failure");
                }
                x
            })
            .to_vec()
    }));
    assert!(outcome.is_err());
    assert_eq!(runs.get(), 1, "unwinding must still release the source");
}
