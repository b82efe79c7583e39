use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "deck_type sanity: unknown ratio";

/// Placeholder deck type assigned when classification fails
pub const UNRESOLVED_DECK_TYPE: &str = "Unknown";

/// Share of `Unknown` meta observations stays under the configured ceiling
pub struct UnknownDeckTypeRatioCheck;

fn total_sql() -> &'static str {
    "SELECT COALESCE(SUM(uses), 0) FROM meta_deck_types"
}

fn unknown_sql() -> String {
    // Case-insensitive exact match on the placeholder label
    format!(
        "SELECT COALESCE(SUM(uses), 0) FROM meta_deck_types
         WHERE lower(deck_type) = lower('{}')",
        UNRESOLVED_DECK_TYPE
    )
}

impl InvariantCheck for UnknownDeckTypeRatioCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        params: &ValidationParams,
    ) -> Result<CheckResult> {
        let total = scalar_i64(snapshot, total_sql())?;
        let unknown = scalar_i64(snapshot, &unknown_sql())?;
        Ok(assess_unknown_ratio(unknown, total, params.max_unknown_ratio))
    }
}

fn pct(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

pub fn assess_unknown_ratio(unknown: i64, total: i64, max_ratio: f64) -> CheckResult {
    if total == 0 {
        return CheckResult::fail(NAME, "meta_deck_types total uses is 0");
    }

    let ratio = unknown as f64 / total as f64;
    if ratio > max_ratio {
        CheckResult::fail(
            NAME,
            format!(
                "Unknown uses ratio too high: {}/{} = {} (max {})",
                unknown,
                total,
                pct(ratio),
                pct(max_ratio)
            ),
        )
    } else {
        CheckResult::pass_with(
            NAME,
            format!("Unknown ratio: {}/{} = {}", unknown, total, pct(ratio)),
        )
    }
}
