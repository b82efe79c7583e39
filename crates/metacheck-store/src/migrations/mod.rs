//! Schema provisioning
//!
//! Provides:
//! - Embedded, checksummed DDL for the snapshot tables
//! - Idempotent application recorded in `schema_version`
//! - Listing of the provisioned base tables

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migrations, list_snapshot_tables, SCHEMA_VERSION_TABLE};
