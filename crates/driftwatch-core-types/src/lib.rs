//! Core types shared across DriftWatch facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: CheckId, TraceId, SpanId, CheckContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{CheckContext, CheckId, SpanId, TraceId};
pub use sensitive::{Sensitive, REDACTED};
