use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "wins/uses sanity (wins<=uses and non-negative)";

/// Stats tables carrying a (uses, wins) counter pair: (table, uses column, wins column)
pub const STATS_TABLES: &[(&str, &str, &str)] = &[
    ("player_decks", "uses", "wins"),
    ("player_type_cards", "uses", "wins"),
    ("meta_deck_types", "uses", "wins"),
    ("meta_type_cards", "uses", "wins"),
    ("meta_type_deck_ids", "uses", "wins"),
];

/// No stats row has `wins > uses` or a negative counter
pub struct CountersSanityCheck;

fn bad_rows_sql(table: &str, uses: &str, wins: &str) -> String {
    format!(
        "SELECT COUNT(*) FROM {table}
         WHERE {wins} > {uses} OR {wins} < 0 OR {uses} < 0"
    )
}

impl InvariantCheck for CountersSanityCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        _params: &ValidationParams,
    ) -> Result<CheckResult> {
        let mut counts = Vec::with_capacity(STATS_TABLES.len());
        for (table, uses, wins) in STATS_TABLES {
            let n = scalar_i64(snapshot, &bad_rows_sql(table, uses, wins))?;
            counts.push((table.to_string(), n));
        }
        Ok(assess_counters(&counts))
    }
}

/// One reason per table with a nonzero bad-row count
pub fn assess_counters(bad_counts: &[(String, i64)]) -> CheckResult {
    let reasons: Vec<String> = bad_counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(table, n)| format!("{} has {} bad rows", table, n))
        .collect();

    if reasons.is_empty() {
        CheckResult::pass(NAME)
    } else {
        CheckResult::fail(NAME, reasons.join("; "))
    }
}
