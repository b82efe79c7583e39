//! Verdict reporter
//!
//! Turns the ordered check results of one run into a printable report, a
//! pass/fail verdict and the process exit status.

use std::fmt::Write as _;

use metacheck_core_types::RunId;
use serde::Serialize;

use crate::errors::{McError, McErrorKind, Result};
use crate::model::CheckResult;

const TAG: &str = "[VALIDATE]";
const DETAIL_INDENT: &str = "      ";

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Process exit status for this verdict
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }
}

/// Aggregated results of one validation run
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<RunId>,
    verdict: Verdict,
    failed: usize,
    results: Vec<CheckResult>,
}

impl VerdictReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let failed = results.iter().filter(|r| !r.ok()).count();
        let verdict = if failed == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self {
            run_id: None,
            verdict,
            failed,
            results,
        }
    }

    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }

    /// Human-readable report, details indented under each status line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} RESULTS", TAG);
        for r in &self.results {
            let status = if r.ok() { "OK" } else { "FAIL" };
            let _ = writeln!(out, "  - {}: {}", status, r.name());
            for line in r.detail_lines() {
                let _ = writeln!(out, "{}{}", DETAIL_INDENT, line);
            }
        }
        out.push('\n');
        match self.verdict {
            Verdict::Pass => {
                let _ = writeln!(out, "{} PASSED.", TAG);
            }
            Verdict::Fail => {
                let _ = writeln!(out, "{} FAILED ({} checks).", TAG, self.failed);
            }
        }
        out
    }

    /// Machine-readable report
    ///
    /// # Errors
    ///
    /// `Serialization` if the report cannot be encoded.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            McError::new(McErrorKind::Serialization)
                .with_op("render_json")
                .with_message(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_ok_passes_with_exit_zero() {
        let report = VerdictReport::from_results(vec![
            CheckResult::pass("a"),
            CheckResult::pass_with("b", "ratio=1.50"),
        ]);
        assert_eq!(report.verdict(), Verdict::Pass);
        assert_eq!(report.exit_code(), 0);
        assert!(report.render_text().ends_with("[VALIDATE] PASSED.\n"));
    }

    #[test]
    fn test_any_failure_fails_with_nonzero_exit() {
        let report = VerdictReport::from_results(vec![
            CheckResult::pass("a"),
            CheckResult::fail("b", "bad"),
            CheckResult::fail("c", "worse"),
        ]);
        assert_eq!(report.verdict(), Verdict::Fail);
        assert_eq!(report.failed(), 2);
        assert_ne!(report.exit_code(), 0);
        assert!(report.render_text().contains("[VALIDATE] FAILED (2 checks)."));
    }

    #[test]
    fn test_text_layout_indents_multiline_details() {
        let report = VerdictReport::from_results(vec![
            CheckResult::pass("meta sanity"),
            CheckResult::fail("deck_cards", "Found 1 deck_hash\n  D2 -> 7"),
        ]);
        let text = report.render_text();
        let expected = "[VALIDATE] RESULTS\n\
                        \x20 - OK: meta sanity\n\
                        \x20 - FAIL: deck_cards\n\
                        \x20     Found 1 deck_hash\n\
                        \x20       D2 -> 7\n\
                        \n\
                        [VALIDATE] FAILED (1 checks).\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_shape() {
        let report = VerdictReport::from_results(vec![CheckResult::fail("x", "y")])
            .with_run_id(RunId::from_string("run-7".to_string()));
        let v: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(v["run_id"], "run-7");
        assert_eq!(v["verdict"], "fail");
        assert_eq!(v["failed"], 1);
        assert_eq!(v["results"][0]["name"], "x");
        assert_eq!(v["results"][0]["ok"], false);
    }

    #[test]
    fn test_empty_results_pass() {
        let report = VerdictReport::from_results(Vec::new());
        assert!(report.passed());
    }

    proptest! {
        #[test]
        fn prop_verdict_counts_failures(oks in proptest::collection::vec(any::<bool>(), 0..12)) {
            let results: Vec<CheckResult> = oks
                .iter()
                .enumerate()
                .map(|(i, ok)| if *ok {
                    CheckResult::pass(format!("c{}", i))
                } else {
                    CheckResult::fail(format!("c{}", i), "x")
                })
                .collect();
            let report = VerdictReport::from_results(results);
            let expected_failed = oks.iter().filter(|ok| !**ok).count();
            prop_assert_eq!(report.failed(), expected_failed);
            prop_assert_eq!(report.exit_code() == 0, expected_failed == 0);
            prop_assert_eq!(report.results().len(), oks.len());
        }
    }
}
