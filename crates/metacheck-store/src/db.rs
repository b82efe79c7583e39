//! Database connection management
//!
//! Validation always reads through a read-only, query-only connection;
//! provisioning opens a writable one.

use std::time::Duration;

use crate::errors::{from_rusqlite, io_error, Result};
use crate::target::DatabaseTarget;
use metacheck_core::errors::{McError, MetaCheckError};
use rusqlite::{Connection, OpenFlags};

/// Upper bound on waiting for a writer's lock before a query fails
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a writable SQLite database, creating the file and parent directory
///
/// # Errors
///
/// IO failure creating the directory, or SQLite failing to open.
pub fn open(target: &DatabaseTarget) -> Result<Connection> {
    let conn = match target {
        DatabaseTarget::InMemory => Connection::open_in_memory().map_err(from_rusqlite)?,
        DatabaseTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
            Connection::open(path).map_err(from_rusqlite)?
        }
    };
    configure(&conn)?;
    Ok(conn)
}

/// Open an existing snapshot for validation
///
/// The file is read once before returning, so a target that is not a SQLite
/// database fails here rather than inside every check.
///
/// # Errors
///
/// - `NotFound` when the file does not exist (SQLite would otherwise fail
///   with a less helpful message, or create it in read-write mode)
/// - `UnsupportedTarget` for `:memory:`, which never holds a snapshot
/// - `Persistence` when SQLite cannot open or read it
pub fn open_read_only(target: &DatabaseTarget) -> Result<Connection> {
    let path = match target {
        DatabaseTarget::InMemory => {
            return Err(McError::from(MetaCheckError::InMemorySnapshot));
        }
        DatabaseTarget::File(path) => path,
    };
    if !path.exists() {
        return Err(McError::from(MetaCheckError::SnapshotNotFound {
            path: path.display().to_string(),
        }));
    }

    let unreadable = |e: rusqlite::Error| {
        McError::from(MetaCheckError::UnreadableSnapshot {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    };
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(unreadable)?;
    configure_read_only(&conn)?;
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(unreadable)?;
    Ok(conn)
}

/// Settings for a writable connection
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Settings for a validation connection: bounded waits, no writes
pub fn configure_read_only(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    conn.execute_batch("PRAGMA query_only = ON;")
        .map_err(from_rusqlite)?;
    Ok(())
}
