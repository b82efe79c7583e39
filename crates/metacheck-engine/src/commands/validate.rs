//! Snapshot validation orchestration.
//!
//! ## Pipeline (in order):
//! 1. Parameter validation (hard stop, no queries)
//! 2. Open the read scope over the connection
//! 3. Evaluate the catalog; per-check faults become failing results
//! 4. Release the read scope (rollback, never commit)
//! 5. Aggregate into a `VerdictReport` tagged with the run id

#![allow(clippy::result_large_err)]

use std::time::Instant;

use metacheck_core::{
    log_op_end, log_op_error, log_op_start, McError, ValidationParams, ValidationRunner,
    VerdictReport,
};
use metacheck_core_types::schema::OP_VALIDATE;
use metacheck_core_types::RunId;
use metacheck_store::errors::Result;
use metacheck_store::SqliteSnapshot;
use rusqlite::Connection;

/// Validate the snapshot behind `conn` with the default catalog
///
/// # Errors
///
/// Invalid parameters, or SQLite failing to open or close the read scope.
/// Faults inside individual checks are reported as failing results instead.
pub fn run_validation(conn: &Connection, params: &ValidationParams) -> Result<VerdictReport> {
    run_validation_with(&ValidationRunner::default(), conn, params)
}

/// Validate the snapshot behind `conn` with a caller-supplied catalog
///
/// # Errors
///
/// Same as [`run_validation`].
pub fn run_validation_with(
    runner: &ValidationRunner,
    conn: &Connection,
    params: &ValidationParams,
) -> Result<VerdictReport> {
    let run_id = RunId::new();
    log_op_start!(
        OP_VALIDATE,
        run_id = run_id.as_str(),
        checks_total = runner.len() as u64
    );
    let start = Instant::now();

    let report = validate_impl(runner, conn, params).map_err(|e| {
        let e = e.with_run_id(run_id.clone());
        log_op_error!(
            OP_VALIDATE,
            &e,
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str()
        );
        e
    })?;
    let report = report.with_run_id(run_id.clone());

    log_op_end!(
        OP_VALIDATE,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        checks_total = report.results().len() as u64,
        checks_failed = report.failed() as u64
    );

    Ok(report)
}

fn validate_impl(
    runner: &ValidationRunner,
    conn: &Connection,
    params: &ValidationParams,
) -> std::result::Result<VerdictReport, McError> {
    params.validate()?;

    let snapshot = SqliteSnapshot::begin(conn)?;
    let results = runner.run(&snapshot, params);
    snapshot.release()?;

    Ok(VerdictReport::from_results(results))
}
