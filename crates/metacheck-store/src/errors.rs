//! Error handling for metacheck-store
//!
//! Wraps metacheck-core McError with store-specific helpers

use metacheck_core::errors::{McError, McErrorKind};

/// Result type alias using McError
pub type Result<T> = std::result::Result<T, McError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> McError {
    McError::new(McErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> McError {
    McError::new(McErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> McError {
    McError::new(McErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a query error from rusqlite::Error
///
/// Used while a validation run is in progress, where a failing statement is
/// an execution fault of one check rather than a setup failure.
pub fn query_error(err: rusqlite::Error) -> McError {
    McError::new(McErrorKind::QueryFailed)
        .with_op("snapshot_query")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> McError {
    McError::new(McErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
