//! Run-level log events emitted by the validation engine

#![allow(clippy::unwrap_used, clippy::expect_used)]

use metacheck_core::logging_facility::init_test_capture;
use metacheck_core::ValidationParams;
use metacheck_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CHECKS_FAILED, FIELD_CHECKS_TOTAL,
    FIELD_DURATION_MS, OP_CHECK, OP_VALIDATE,
};
use metacheck_engine::run_validation;
use metacheck_store::migrations::apply_migrations;
use rusqlite::Connection;

fn empty_snapshot() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_run_events_share_the_report_run_id() {
    let capture = init_test_capture();
    let conn = empty_snapshot();

    let report = run_validation(&conn, &ValidationParams::default()).unwrap();
    let run_id = report.run_id().unwrap().as_str();

    let events = capture.events_for_run(run_id);
    let kinds: Vec<_> = events.iter().map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![Some(EVENT_START), Some(EVENT_END)]);
    assert!(events.iter().all(|e| e.op.as_deref() == Some(OP_VALIDATE)));

    let end = &events[1];
    assert_eq!(end.field(FIELD_CHECKS_TOTAL), Some("6"));
    assert_eq!(
        end.field(FIELD_CHECKS_FAILED),
        Some(report.failed().to_string().as_str())
    );
    assert!(end.field(FIELD_DURATION_MS).is_some());

    // Every catalog entry got its own start/end pair during the run
    let check_ends = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(OP_CHECK) && e.event.as_deref() == Some(EVENT_END))
        .count();
    assert!(check_ends >= 6);
}

#[test]
fn test_rejected_params_log_end_error_with_run_id() {
    let capture = init_test_capture();
    let conn = empty_snapshot();
    let params = ValidationParams::default().with_max_unknown_ratio(f64::NAN);

    let err = run_validation(&conn, &params).unwrap_err();
    let run_id = err.run_id().unwrap().as_str();

    let events = capture.events_for_run(run_id);
    let end = events.last().unwrap();
    assert_eq!(end.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(end.err_code(), Some("ERR_INVALID_INPUT"));
}
