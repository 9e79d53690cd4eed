//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the orchestrator,
//! the transport and any log consumer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Orchestration fields
pub const FIELD_KIND: &str = "kind";
pub const FIELD_GENERATION: &str = "generation";
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_HTTP_STATUS: &str = "http_status";

// Error fields
pub const FIELD_ERR_SOURCE: &str = "err.source";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_STALE: &str = "stale_discarded";
pub const EVENT_SKIPPED: &str = "skipped";
