//! # iterflow: Lazy Iterator Pipelines with Streaming Statistics
//!
//! A pull-based pipeline engine: compose multi-stage transformations over
//! arrays, generators, or infinite sequences without allocating
//! intermediate collections at every stage, then fold the result through
//! a numerically careful statistics engine.
//!
//! ## How it works
//!
//! Data flows strictly downstream. A terminal consumer pulls from the
//! outermost stage, which pulls from the stage below it, down to the
//! source adapter, one element at a time. No stage runs ahead of what the
//! consumer actually requests; that is what makes early termination
//! over infinite sources safe and cheap.
//!
//! * **Lazy stages** (`map`, `filter`, `take`, ...) hold at most one
//!   element of state.
//! * **Buffering operators** (`window`, `group_by`, `sort`, ...) hold a
//!   bounded or full-sequence buffer, filled on first demand.
//! * **Terminal consumers** and **statistics** drive the chain and close
//!   it, running any attached source cleanup exactly once.
//!
//! ## Quick Start
//!
//! ```rust
//! use iterflow::seq;
//!
//! let windows = seq([1, 2, 3, 4, 5]).window(3).unwrap().to_vec().unwrap();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//!
//! let p75 = seq((1..=10).map(f64::from)).percentile(75.0).unwrap();
//! assert_eq!(p75, Some(7.75));
//! ```
//!
//! Infinite sources work wherever the consumer short-circuits:
//!
//! ```rust
//! use iterflow::from_fn;
//!
//! let mut n = 0_u64;
//! let first_cube_over_100 = from_fn(move || {
//!     n += 1;
//!     Some(n * n * n)
//! })
//! .find(|&c| c > 100)
//! .unwrap();
//! assert_eq!(first_cube_over_100, Some(125));
//! ```
//!
//! ## Error model
//!
//! Operators with argument constraints (`window`, `chunk`, `percentile`)
//! fail at the constructing call, before any element is pulled. Empty
//! sequences are never errors: statistics return `None` (except `sum` → 0
//! and `product` → 1). Panics from user-supplied callbacks propagate
//! unchanged; cleanup hooks still run during unwinding.

pub mod primitives;

pub mod engine;

pub mod buffered;

pub mod combine;

pub mod stats;

pub(crate) mod consumers;

pub mod api;

pub mod functional;

pub use api::{from_fn, seq, Pipeline};
pub use primitives::errors::PipelineError;
pub use primitives::sequence::{IntoSequence, Sequence};
pub use stats::order::Quartiles;

/// Convenience re-exports for glob import.
pub mod prelude {
    pub use crate::api::{from_fn, seq, Pipeline};
    pub use crate::primitives::errors::PipelineError;
    pub use crate::primitives::sequence::{IntoSequence, Sequence};
    pub use crate::stats::order::Quartiles;
}
