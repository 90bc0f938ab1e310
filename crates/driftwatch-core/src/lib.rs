//! Driftwatch Core - API drift detection engine
//!
//! This crate provides the comparison machinery for driftwatch, including:
//! - The `Response` snapshot model for observed HTTP responses
//! - A recursive, type-aware tree differ over parsed JSON bodies
//! - A pluggable change classifier (severity, category, impact, breaking)
//! - The `compare_responses` aggregator producing one `DiffResult` per check
//! - Trend analysis over endpoint snapshot history
//! - A Markdown summary renderer for alert bodies
//!
//! The engine is purely functional: no I/O, no shared state, no retries.
//! Callers own scheduling, storage, alerting, and retry policy.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{
    analyze_trends, compare_responses, render_human_summary, CriticalFieldClassifier,
    DiffResult, PathClassifier, TrendAnalysis,
};
pub use errors::{DriftError, DriftErrorKind, DriftwatchError, Result};
pub use model::Response;
