//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the runner, the engine
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Validation identifiers
pub const FIELD_CHECK: &str = "check";
pub const FIELD_CHECK_OK: &str = "ok";

// Run summary
pub const FIELD_CHECKS_TOTAL: &str = "checks_total";
pub const FIELD_CHECKS_FAILED: &str = "checks_failed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Operation names
pub const OP_VALIDATE: &str = "validate_snapshot";
pub const OP_CHECK: &str = "invariant_check";
pub const OP_APPLY_SCHEMA: &str = "apply_schema";
