//! metacheck store - SQLite access for snapshot validation
//!
//! Provides:
//! - Connection target parsing (`DATABASE_URL` forms)
//! - Read-only and writable connection setup
//! - The snapshot schema with a checksummed migrations framework
//! - `SqliteSnapshot`, the run-scoped `SnapshotAccessor`

pub mod accessor;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod target;

pub use accessor::SqliteSnapshot;
pub use errors::Result;
pub use target::DatabaseTarget;
