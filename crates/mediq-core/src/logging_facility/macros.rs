//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Schema constants and `tracing` are reached through `$crate`, so callers
//! only need a dependency on `mediq-core`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use mediq_core::log_op_start;
/// log_op_start!("fetch");
/// log_op_start!("fetch", kind = "medicine-info");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use mediq_core::log_op_end;
/// log_op_end!("fetch", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ErrorInfo`, including a clone of an
/// existing `ErrorInfo`.
///
/// # Example
///
/// ```
/// # use mediq_core::log_op_error;
/// use mediq_core::errors::{ErrorInfo, ErrorSource};
/// let err = ErrorInfo::new(ErrorSource::Network).with_message("offline");
/// log_op_error!("fetch", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let info: $crate::errors::ErrorInfo = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.source = info.source().as_str(),
            err.code = info.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let info: $crate::errors::ErrorInfo = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::mediq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.source = info.source().as_str(),
            err.code = info.code(),
            $($field)*
        );
    }};
}
