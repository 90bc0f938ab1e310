//! Drift detection engine.
//!
//! Compares two recorded snapshots of the same endpoint and produces a
//! structured, deterministic report suitable for alerting, persistence,
//! and human review.
//!
//! ## Entry points
//!
//! ```ignore
//! use driftwatch_core::diff::engine::compare_responses;
//! use driftwatch_core::diff::trend::analyze_trends;
//!
//! let result = compare_responses(Some(&previous), Some(&current))?;
//! let summary = driftwatch_core::diff::human_summary::render_human_summary(&result);
//! let trend = analyze_trends(&history)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical results, including
//!   change ordering (body keys compare in sorted order).
//! - **Fail-fast comparison**: an absent snapshot or unparseable body fails
//!   the whole call; there are no partial results.
//! - **Null/absent equivalence**: a field explicitly set to JSON `null` and
//!   a missing field are the same observation, in both directions.
//! - **Statelessness**: every call is independently reentrant; concurrent
//!   callers need no coordination.

pub mod classify;
pub mod engine;
pub mod human_summary;
pub mod model;
pub mod tree;
pub mod trend;

pub use classify::{CriticalFieldClassifier, PathClassifier};
pub use engine::compare_responses;
pub use human_summary::render_human_summary;
pub use model::{DiffResult, TrendAnalysis};
pub use trend::analyze_trends;
