//! Command orchestration layer.

pub mod schema;
pub mod validate;
