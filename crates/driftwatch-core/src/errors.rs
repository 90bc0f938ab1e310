use driftwatch_core_types::{CheckId, TraceId};
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, DriftError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the engine and its file boundary
/// can produce. Each kind maps to a stable error code usable for
/// programmatic handling, testing, and external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftErrorKind {
    // Comparison inputs
    /// A snapshot side was absent when comparing two snapshots
    InvalidInput,
    /// A response body failed to parse as JSON during comparison
    UnparseableBody,

    // Trend analysis
    /// Trend analysis needs at least two snapshots
    InsufficientHistory,

    // Snapshot file boundary
    Io,
    Serialization,

    // Internal
    Internal,
}

impl DriftErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DriftErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            DriftErrorKind::UnparseableBody => "ERR_UNPARSEABLE_BODY",
            DriftErrorKind::InsufficientHistory => "ERR_INSUFFICIENT_HISTORY",
            DriftErrorKind::Io => "ERR_IO",
            DriftErrorKind::Serialization => "ERR_SERIALIZATION",
            DriftErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind plus optional context (operation, endpoint, path,
/// correlation ids) so callers can report failures without string parsing.
#[derive(Debug, Clone)]
pub struct DriftError {
    kind: DriftErrorKind,
    op: Option<String>,
    endpoint: Option<String>,
    path: Option<String>,
    check_id: Option<CheckId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<DriftError>>,
}

impl DriftError {
    /// Create a new error with the specified kind
    pub fn new(kind: DriftErrorKind) -> Self {
        Self {
            kind,
            op: None,
            endpoint: None,
            path: None,
            check_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add endpoint context
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add path context (a document path or a file path, depending on op)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add check ID context
    pub fn with_check_id(mut self, check_id: CheckId) -> Self {
        self.check_id = Some(check_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: DriftError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> DriftErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the endpoint context, if any
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the check ID context, if any
    pub fn check_id(&self) -> Option<&CheckId> {
        self.check_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&DriftError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for DriftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(endpoint) = &self.endpoint {
            write!(f, " (endpoint: {})", endpoint)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for DriftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Create an absent-snapshot error for a comparison entry point
///
/// `side` names which input was missing ("previous" or "current").
pub fn absent_snapshot(side: &str) -> DriftError {
    DriftError::new(DriftErrorKind::InvalidInput)
        .with_op("compare_responses")
        .with_message(format!("{} snapshot is absent", side))
}

/// Create an unparseable-body error for a comparison entry point
///
/// `side` names which body failed ("previous" or "current").
pub fn unparseable_body(side: &str, err: &serde_json::Error) -> DriftError {
    DriftError::new(DriftErrorKind::UnparseableBody)
        .with_op("compare_responses")
        .with_message(format!("{} body is not valid JSON: {}", side, err))
}

/// Create an insufficient-history error for trend analysis
pub fn insufficient_history(count: usize) -> DriftError {
    DriftError::new(DriftErrorKind::InsufficientHistory)
        .with_op("analyze_trends")
        .with_message(format!(
            "need at least 2 snapshots to analyze trends, got {}",
            count
        ))
}

/// Create an IO error for the snapshot file boundary
pub fn io_error(operation: &str, file: &str, err: &std::io::Error) -> DriftError {
    DriftError::new(DriftErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(file.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error for the snapshot file boundary
pub fn serialization_error(operation: &str, file: &str, err: &serde_json::Error) -> DriftError {
    DriftError::new(DriftErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_path(file.to_string())
        .with_message(err.to_string())
}

/// Outer-boundary error for callers that mix engine failures with file I/O
///
/// The engine itself only ever returns [`DriftError`]; this wrapper gives
/// binaries and harnesses one conversion point.
#[derive(Error, Debug)]
pub enum DriftwatchError {
    /// Engine rejected the operation
    #[error(transparent)]
    Drift(#[from] DriftError),

    /// Recorded snapshot file could not be read
    #[error("failed to read snapshot file {path}: {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Recorded snapshot file does not hold valid snapshot JSON
    #[error("failed to decode snapshot file {path}: {source}")]
    SnapshotDecode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Conversion from DriftwatchError to DriftError
///
/// Flattens the boundary wrapper into the facility error so logging and
/// reporting see one uniform kind/code surface. The by-reference form is
/// for call sites that log the flattened error but still return the
/// original for display.
impl From<&DriftwatchError> for DriftError {
    fn from(err: &DriftwatchError) -> Self {
        match err {
            DriftwatchError::Drift(e) => e.clone(),
            DriftwatchError::SnapshotRead { path, source } => {
                io_error("load_snapshot", path, source)
            }
            DriftwatchError::SnapshotDecode { path, source } => {
                serialization_error("load_snapshot", path, source)
            }
        }
    }
}

impl From<DriftwatchError> for DriftError {
    fn from(err: DriftwatchError) -> Self {
        match err {
            DriftwatchError::Drift(e) => e,
            other => DriftError::from(&other),
        }
    }
}
