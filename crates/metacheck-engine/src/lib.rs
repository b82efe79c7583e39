//! metacheck engine - Orchestration layer
//!
//! Coordinates the check catalog in `metacheck-core` with the SQLite
//! snapshot scope in `metacheck-store`.

pub mod commands;

pub use commands::schema::apply_schema;
pub use commands::validate::{run_validation, run_validation_with};
