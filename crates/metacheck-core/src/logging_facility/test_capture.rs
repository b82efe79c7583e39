//! In-memory event capture for logging assertions
//!
//! `init_test_capture` installs a process-wide subscriber once per test
//! binary and hands out handles to the same buffer, so tests filter by a
//! unique op or check name. `capture_layer` builds a private layer for use
//! with `tracing::subscriber::with_default` when a test needs isolation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use metacheck_core_types::schema::{
    FIELD_CHECK, FIELD_CHECK_OK, FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP,
    FIELD_RUN_ID,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event, every field rendered as a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub check: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            check: fields.get(FIELD_CHECK).cloned(),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn run_id(&self) -> Option<&str> {
        self.field(FIELD_RUN_ID)
    }

    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    /// Outcome recorded on a check's `end` event
    pub fn check_ok(&self) -> Option<bool> {
        self.field(FIELD_CHECK_OK).and_then(|v| v.parse().ok())
    }
}

#[derive(Default)]
struct StringFields(HashMap<String, String>);

impl Visit for StringFields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// Layer appending every event to a buffer shared with a `TestCapture`
pub struct TestCaptureLayer {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = StringFields::default();
        event.record(&mut fields);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), fields.0);

        if let Ok(mut sink) = self.sink.lock() {
            sink.push(captured);
        }
    }
}

/// Read handle over captured events
#[derive(Clone)]
pub struct TestCapture {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events tagged with one check name, in emission order
    pub fn events_for_check(&self, check: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.check.as_deref() == Some(check))
    }

    /// Events tagged with one run id, in emission order
    pub fn events_for_run(&self, run_id: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.run_id() == Some(run_id))
    }

    fn filtered(&self, keep: impl Fn(&CapturedEvent) -> bool) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| keep(e)).collect()
    }

    /// # Panics
    ///
    /// Panics if no event with the given op and event type was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events
                .iter()
                .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }
}

/// A private layer and its handle, not installed anywhere
pub fn capture_layer() -> (TestCaptureLayer, TestCapture) {
    let sink = Arc::new(Mutex::new(Vec::new()));
    (
        TestCaptureLayer { sink: sink.clone() },
        TestCapture { sink },
    )
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the process-wide capture subscriber and return its handle
///
/// ```
/// use metacheck_core::logging_facility::test_capture::init_test_capture;
/// use metacheck_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op", check = "doc check");
/// capture.assert_event_exists("doc_capture_op", "start");
/// assert_eq!(capture.events_for_check("doc check").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = capture_layer();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{meta_catalog, MetaCatalogNotEmptyCheck};
    use crate::errors::{McError, McErrorKind, Result};
    use crate::model::ValidationParams;
    use crate::runner::ValidationRunner;
    use crate::snapshot::{Row, SnapshotAccessor, Value};
    use metacheck_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, OP_CHECK};

    struct Catalog(Option<i64>);

    impl SnapshotAccessor for Catalog {
        fn query_rows(&self, _sql: &str) -> Result<Vec<Row>> {
            Ok(Vec::new())
        }

        fn query_scalar(&self, _sql: &str) -> Result<Option<Value>> {
            match self.0 {
                Some(n) => Ok(Some(Value::Integer(n))),
                None => Err(McError::new(McErrorKind::QueryFailed).with_message("no such table")),
            }
        }
    }

    fn run_captured(snapshot: Catalog) -> TestCapture {
        let (layer, capture) = capture_layer();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            ValidationRunner::new(vec![Box::new(MetaCatalogNotEmptyCheck)])
                .run(&snapshot, &ValidationParams::default());
        });
        capture
    }

    #[test]
    fn test_runner_check_field_is_captured() {
        let capture = run_captured(Catalog(Some(3)));

        let events = capture.events_for_check(meta_catalog::NAME);
        let kinds: Vec<_> = events.iter().map(|e| e.event.as_deref()).collect();
        assert_eq!(kinds, vec![Some(EVENT_START), Some(EVENT_END)]);
        assert!(events.iter().all(|e| e.op.as_deref() == Some(OP_CHECK)));
        assert_eq!(events[1].check_ok(), Some(true));
        assert!(events[1].field("duration_ms").is_some());
    }

    #[test]
    fn test_failing_check_records_ok_false() {
        let capture = run_captured(Catalog(Some(0)));

        let end = capture
            .events_for_check(meta_catalog::NAME)
            .pop()
            .unwrap();
        assert_eq!(end.event.as_deref(), Some(EVENT_END));
        assert_eq!(end.check_ok(), Some(false));
    }

    #[test]
    fn test_faulting_check_records_error_code() {
        let capture = run_captured(Catalog(None));

        let end = capture
            .events_for_check(meta_catalog::NAME)
            .pop()
            .unwrap();
        assert_eq!(end.event.as_deref(), Some(EVENT_END_ERROR));
        assert_eq!(end.level, Level::ERROR);
        assert_eq!(end.err_code(), Some("ERR_QUERY_FAILED"));
        assert_eq!(end.check_ok(), None);
    }

    #[test]
    fn test_private_layer_does_not_see_other_checks() {
        let capture = run_captured(Catalog(Some(1)));
        assert!(capture.events_for_check("some other check").is_empty());
        assert!(capture
            .events()
            .iter()
            .all(|e| e.component.as_deref() == Some("metacheck_core::runner")));
    }
}
