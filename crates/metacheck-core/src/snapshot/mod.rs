//! Read-only access to the snapshot under validation
//!
//! The core never talks to a database directly. Checks issue SQL through a
//! `SnapshotAccessor`, which the store crate implements over a SQLite read
//! transaction and tests can implement in memory.

pub mod value;

pub use value::{Row, Value};

use crate::errors::Result;

/// Uniform tabular query interface over the snapshot
///
/// Implementations must serve every call of one run from the same consistent
/// read view and must never write.
pub trait SnapshotAccessor {
    /// Execute an aggregate/group query and return all rows
    ///
    /// # Errors
    ///
    /// Any failure to prepare or step the query.
    fn query_rows(&self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a query and return the first column of the first row
    ///
    /// `None` when the query yields no rows.
    ///
    /// # Errors
    ///
    /// Any failure to prepare or step the query.
    fn query_scalar(&self, sql: &str) -> Result<Option<Value>>;
}

/// Run a count/sum query, treating no row and NULL as zero
///
/// # Errors
///
/// Query failures, or a non-numeric scalar.
pub fn scalar_i64(snapshot: &dyn SnapshotAccessor, sql: &str) -> Result<i64> {
    match snapshot.query_scalar(sql)? {
        Some(v) => v.to_i64(),
        None => Ok(0),
    }
}
