//! metacheck core - invariant validation engine
//!
//! This crate holds the domain logic of the snapshot validator:
//! - `CheckResult` and `ValidationParams` models
//! - the `SnapshotAccessor` seam the checks query through
//! - the fixed catalog of invariant checks
//! - the `ValidationRunner` with its per-check fault boundary
//! - the `VerdictReport` text/JSON reporter
//! - error and logging facilities shared by the other crates

pub mod checks;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod runner;
pub mod snapshot;

// Re-export commonly used types
pub use checks::{default_catalog, InvariantCheck};
pub use errors::{McError, McErrorKind, MetaCheckError, Result};
pub use model::{CheckResult, ValidationParams};
pub use report::{Verdict, VerdictReport};
pub use runner::ValidationRunner;
pub use snapshot::{Row, SnapshotAccessor, Value};
