//! Validation runner
//!
//! Evaluates every check of the catalog in order against one snapshot. A
//! failing or faulting check never prevents the next one from running: each
//! evaluation sits behind a fault boundary that turns `Err` and panics into a
//! failing `CheckResult` named after the check.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use crate::checks::{default_catalog, InvariantCheck};
use crate::errors::{McError, McErrorKind};
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::SnapshotAccessor;
use crate::{log_op_end, log_op_error, log_op_start};
use metacheck_core_types::schema::OP_CHECK;

/// Ordered, pluggable catalog of invariant checks
pub struct ValidationRunner {
    catalog: Vec<Box<dyn InvariantCheck>>,
}

impl Default for ValidationRunner {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl ValidationRunner {
    pub fn new(catalog: Vec<Box<dyn InvariantCheck>>) -> Self {
        Self { catalog }
    }

    /// Append a check at the end of the catalog
    pub fn with_check(mut self, check: Box<dyn InvariantCheck>) -> Self {
        self.catalog.push(check);
        self
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Names of the catalog entries, in evaluation order
    pub fn check_names(&self) -> Vec<&str> {
        self.catalog.iter().map(|c| c.name()).collect()
    }

    /// Evaluate the whole catalog; returns exactly one result per entry
    pub fn run(&self, snapshot: &dyn SnapshotAccessor, params: &ValidationParams) -> Vec<CheckResult> {
        self.catalog
            .iter()
            .map(|check| evaluate_guarded(check.as_ref(), snapshot, params))
            .collect()
    }
}

fn evaluate_guarded(
    check: &dyn InvariantCheck,
    snapshot: &dyn SnapshotAccessor,
    params: &ValidationParams,
) -> CheckResult {
    let name = check.name();
    let start = Instant::now();
    log_op_start!(OP_CHECK, check = name);

    let outcome = catch_unwind(AssertUnwindSafe(|| check.evaluate(snapshot, params)))
        .unwrap_or_else(|payload| {
            Err(McError::new(McErrorKind::CheckPanicked).with_message(panic_message(payload.as_ref())))
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match outcome {
        Ok(result) => {
            log_op_end!(OP_CHECK, duration_ms = duration_ms, check = name, ok = result.ok());
            result
        }
        Err(err) => {
            let err = err.with_check(name);
            log_op_error!(OP_CHECK, &err, duration_ms = duration_ms, check = name);
            CheckResult::fail(name, format!("check aborted: {}", err))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}
