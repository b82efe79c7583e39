//! Canonical logging macros
//!
//! Every operation boundary emits exactly one `start` and one `end` or
//! `end_error` event carrying the canonical field keys.

/// Log the start of an operation
///
/// ```
/// # use metacheck_core::log_op_start;
/// log_op_start!("validate_snapshot");
/// log_op_start!("invariant_check", check = "meta sanity");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use metacheck_core::log_op_end;
/// log_op_end!("validate_snapshot", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `McError`, including `&McError`.
///
/// ```
/// # use metacheck_core::log_op_error;
/// # use metacheck_core::errors::{McError, McErrorKind};
/// let err = McError::new(McErrorKind::QueryFailed).with_message("no such table");
/// log_op_error!("invariant_check", &err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::McError;
        let mc_err: McError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?mc_err.kind(),
            err.code = mc_err.code(),
            message = mc_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::McError;
        let mc_err: McError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = metacheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?mc_err.kind(),
            err.code = mc_err.code(),
            message = mc_err.message(),
            $($field)*
        );
    }};
}
