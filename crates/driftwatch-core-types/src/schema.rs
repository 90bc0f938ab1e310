//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_CHECK_ID: &str = "check_id";
pub const FIELD_TRACE_ID: &str = "trace_id";
pub const FIELD_SPAN_ID: &str = "span_id";

// Check-cycle identifiers
pub const FIELD_ENDPOINT: &str = "endpoint";
pub const FIELD_STATUS_CODE: &str = "status_code";

// Diff result counters
pub const FIELD_TOTAL_CHANGES: &str = "total_changes";
pub const FIELD_BREAKING_CHANGES: &str = "breaking_changes";
pub const FIELD_SNAPSHOT_COUNT: &str = "snapshot_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
