//! Structured logging facility for metacheck
//!
//! - Single initialization point via `init(profile)`; output goes to stderr so
//!   stdout only ever carries the validation report
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use metacheck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{capture_layer, init_test_capture, CapturedEvent, TestCapture};
