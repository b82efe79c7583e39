//! SQLite implementation of `SnapshotAccessor`
//!
//! One `SqliteSnapshot` spans one validation run. All queries share a single
//! read transaction, so every check observes the same committed state even
//! if a writer commits mid-run. The transaction is never committed.

use metacheck_core::{Result, Row, SnapshotAccessor, Value};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Transaction};

use crate::errors::{from_rusqlite, query_error};

/// Consistent read scope over a snapshot database
pub struct SqliteSnapshot<'c> {
    tx: Transaction<'c>,
}

impl<'c> SqliteSnapshot<'c> {
    /// Open the read scope
    ///
    /// # Errors
    ///
    /// SQLite refusing to begin a transaction.
    pub fn begin(conn: &'c Connection) -> Result<Self> {
        let tx = conn.unchecked_transaction().map_err(from_rusqlite)?;
        Ok(Self { tx })
    }

    /// Close the read scope, discarding the transaction
    ///
    /// # Errors
    ///
    /// SQLite failing to roll back.
    pub fn release(self) -> Result<()> {
        self.tx.rollback().map_err(from_rusqlite)
    }
}

fn to_value(raw: ValueRef<'_>) -> Value {
    match raw {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Text(format!("<blob {} bytes>", b.len())),
    }
}

fn read_row(row: &rusqlite::Row<'_>, width: usize) -> rusqlite::Result<Row> {
    let mut values = Vec::with_capacity(width);
    for idx in 0..width {
        values.push(to_value(row.get_ref(idx)?));
    }
    Ok(Row::new(values))
}

impl SnapshotAccessor for SqliteSnapshot<'_> {
    fn query_rows(&self, sql: &str) -> Result<Vec<Row>> {
        let mut stmt = self.tx.prepare(sql).map_err(query_error)?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map([], |row| read_row(row, width))
            .map_err(query_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(query_error)?;
        Ok(rows)
    }

    fn query_scalar(&self, sql: &str) -> Result<Option<Value>> {
        let mut stmt = self.tx.prepare(sql).map_err(query_error)?;
        let mut rows = stmt.query([]).map_err(query_error)?;
        match rows.next().map_err(query_error)? {
            Some(row) => Ok(Some(to_value(row.get_ref(0).map_err(query_error)?))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacheck_core::McErrorKind;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (k TEXT, n INTEGER, r REAL);
             INSERT INTO t VALUES ('a', 1, 0.5), ('b', NULL, 2.0);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_rows_preserve_column_types() {
        let conn = conn();
        let snap = SqliteSnapshot::begin(&conn).unwrap();
        let rows = snap.query_rows("SELECT k, n, r FROM t ORDER BY k").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), &Value::Text("a".into()));
        assert_eq!(rows[0].get(1), &Value::Integer(1));
        assert_eq!(rows[1].get(1), &Value::Null);
        assert_eq!(rows[1].get(2), &Value::Real(2.0));
        snap.release().unwrap();
    }

    #[test]
    fn test_scalar_empty_result_is_none() {
        let conn = conn();
        let snap = SqliteSnapshot::begin(&conn).unwrap();
        assert_eq!(snap.query_scalar("SELECT n FROM t WHERE 0").unwrap(), None);
        assert_eq!(
            snap.query_scalar("SELECT SUM(n) FROM t WHERE k = 'zzz'").unwrap(),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_missing_table_is_query_fault() {
        let conn = conn();
        let snap = SqliteSnapshot::begin(&conn).unwrap();
        let err = snap.query_scalar("SELECT COUNT(*) FROM nope").unwrap_err();
        assert_eq!(err.kind(), McErrorKind::QueryFailed);
        assert!(err.message().contains("nope"));
    }

    #[test]
    fn test_release_allows_a_new_scope() {
        let conn = conn();
        SqliteSnapshot::begin(&conn).unwrap().release().unwrap();
        let again = SqliteSnapshot::begin(&conn).unwrap();
        assert!(again.query_scalar("SELECT 1").unwrap().is_some());
    }
}
