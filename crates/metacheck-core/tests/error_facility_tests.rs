use metacheck_core::errors::{McError, McErrorKind, MetaCheckError};
use metacheck_core_types::RunId;

#[test]
fn test_missing_target_verifiable_by_kind() {
    let err: McError = MetaCheckError::MissingDatabaseUrl.into();

    assert_eq!(err.kind(), McErrorKind::MissingConfig);
    assert_eq!(err.code(), "ERR_MISSING_CONFIG");
    assert_eq!(
        err.message(),
        "DATABASE_URL is not set (and --database-url not provided)."
    );
    assert!(err.kind().is_setup());
}

#[test]
fn test_unsupported_scheme_distinct_from_missing() {
    let err: McError = MetaCheckError::UnsupportedScheme {
        scheme: "postgres".to_string(),
    }
    .into();

    assert_eq!(err.kind(), McErrorKind::UnsupportedTarget);
    assert_ne!(err.kind(), McErrorKind::MissingConfig);
    assert!(err.message().contains("'postgres'"));
}

#[test]
fn test_query_fault_is_not_setup() {
    let err: McError = MetaCheckError::QueryFailed {
        reason: "no such table: player".to_string(),
    }
    .into();

    assert_eq!(err.code(), "ERR_QUERY_FAILED");
    assert!(!err.kind().is_setup());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (McErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (McErrorKind::MissingConfig, "ERR_MISSING_CONFIG"),
        (McErrorKind::UnsupportedTarget, "ERR_UNSUPPORTED_TARGET"),
        (McErrorKind::NotFound, "ERR_NOT_FOUND"),
        (McErrorKind::QueryFailed, "ERR_QUERY_FAILED"),
        (McErrorKind::UnexpectedValue, "ERR_UNEXPECTED_VALUE"),
        (McErrorKind::SchemaEmpty, "ERR_SCHEMA_EMPTY"),
        (McErrorKind::CheckPanicked, "ERR_CHECK_PANICKED"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_carries_context() {
    let run_id = RunId::from_string("run-1".to_string());
    let err = McError::new(McErrorKind::QueryFailed)
        .with_op("invariant_check")
        .with_check("meta sanity: meta_deck_types not empty")
        .with_run_id(run_id.clone())
        .with_message("database is locked");

    assert_eq!(
        err.to_string(),
        "[ERR_QUERY_FAILED] in operation 'invariant_check': database is locked (check: meta sanity: meta_deck_types not empty)"
    );
    assert_eq!(err.run_id(), Some(&run_id));
    assert_eq!(err.op(), Some("invariant_check"));
}
