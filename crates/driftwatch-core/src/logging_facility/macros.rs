//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_start;
/// log_op_start!("compare_responses");
/// log_op_start!("compare_responses", endpoint = "GET /v1/users");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_end;
/// log_op_end!("compare_responses", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_error;
/// # use driftwatch_core::errors::absent_snapshot;
/// let err = absent_snapshot("previous");
/// log_op_error!("compare_responses", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::DriftError;
        let drift_err: DriftError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?drift_err.kind(),
            err_code = drift_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::DriftError;
        let drift_err: DriftError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?drift_err.kind(),
            err_code = drift_err.code(),
            $($field)*
        );
    }};
}
