//! Correlation types for check-cycle tracking and tracing
//!
//! Every probe of an endpoint runs as one check cycle. These types let the
//! scheduler, transport, and reporting layers correlate their log events
//! for a single cycle across async boundaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single check cycle of one endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(String);

impl CheckId {
    /// Generate a new random CheckId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier for distributed tracing across service boundaries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Span identifier for hierarchical tracing within a trace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanId(String);

impl SpanId {
    /// Generate a new random SpanId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for SpanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one check cycle for correlation
///
/// The scheduler creates one per cycle; everything downstream (transport,
/// diffing, reporting) logs with the same CheckId.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub check_id: CheckId,
    pub trace_id: Option<TraceId>,
    /// Endpoint label under check, if known (e.g. "GET /v1/users")
    pub endpoint: Option<String>,
}

impl CheckContext {
    /// Create a new context with a fresh CheckId
    pub fn new() -> Self {
        Self {
            check_id: CheckId::new(),
            trace_id: None,
            endpoint: None,
        }
    }

    /// Create a context with an existing CheckId
    pub fn with_check_id(check_id: CheckId) -> Self {
        Self {
            check_id,
            trace_id: None,
            endpoint: None,
        }
    }

    /// Add a TraceId to the context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add an endpoint label to the context
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::new()
    }
}
