//! Core types shared across metacheck facilities
//!
//! This crate provides foundational types used by the error, logging and
//! validation layers:
//!
//! - **Correlation**: `RunId` tags every log event of one validation run
//! - **Sensitive data**: `Sensitive<T>` keeps connection targets out of logs
//! - **Schema constants**: canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RunId;
pub use sensitive::Sensitive;
