//! Schema provisioning.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use metacheck_core::errors::{McError, MetaCheckError};
use metacheck_core::{log_op_end, log_op_error, log_op_start};
use metacheck_core_types::schema::OP_APPLY_SCHEMA;
use metacheck_store::errors::Result;
use metacheck_store::migrations::{apply_migrations, list_snapshot_tables};
use rusqlite::Connection;

/// Apply the embedded migrations and list the resulting snapshot tables
///
/// # Errors
///
/// Migration failure, or no snapshot table present afterwards.
pub fn apply_schema(conn: &mut Connection) -> Result<Vec<String>> {
    log_op_start!(OP_APPLY_SCHEMA);
    let start = Instant::now();

    let tables = apply_schema_impl(conn).map_err(|e| {
        log_op_error!(
            OP_APPLY_SCHEMA,
            &e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_APPLY_SCHEMA,
        duration_ms = start.elapsed().as_millis() as u64,
        tables = tables.len() as u64
    );
    Ok(tables)
}

fn apply_schema_impl(conn: &mut Connection) -> Result<Vec<String>> {
    apply_migrations(conn)?;
    let tables = list_snapshot_tables(conn)?;
    if tables.is_empty() {
        return Err(McError::from(MetaCheckError::SchemaEmpty));
    }
    Ok(tables)
}
