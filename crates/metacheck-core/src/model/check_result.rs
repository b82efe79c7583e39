use serde::{Deserialize, Serialize};

/// Placeholder used when a failure is constructed without diagnostics
pub const NO_DETAILS: &str = "(no details provided)";

/// Outcome of one invariant check
///
/// `details` is never empty for a failing result: it carries the keys and
/// counts needed to locate the offending rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    name: String,
    ok: bool,
    details: String,
}

impl CheckResult {
    /// Passing result without supplementary context
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            details: String::new(),
        }
    }

    /// Passing result that still reports what was measured
    pub fn pass_with(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            details: details.into(),
        }
    }

    /// Failing result
    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        let details = details.into();
        Self {
            name: name.into(),
            ok: false,
            details: if details.trim().is_empty() {
                NO_DETAILS.to_string()
            } else {
                details
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Detail lines, empty when there are no details
    pub fn detail_lines(&self) -> impl Iterator<Item = &str> {
        self.details.lines()
    }
}
