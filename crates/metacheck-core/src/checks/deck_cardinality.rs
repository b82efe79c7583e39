use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "deck_cards: each deck_hash has exactly 8 cards";

/// Card slots per deck
pub const DECK_SIZE: i64 = 8;

/// Upper bound on offending decks listed in the details
pub const SAMPLE_LIMIT: usize = 20;

/// Every deck in `deck_cards` has exactly `DECK_SIZE` rows
pub struct DeckCardinalityCheck;

fn sample_sql() -> String {
    format!(
        "SELECT deck_hash, COUNT(*) AS n
         FROM deck_cards
         GROUP BY deck_hash
         HAVING COUNT(*) <> {DECK_SIZE}
         ORDER BY deck_hash
         LIMIT {SAMPLE_LIMIT}"
    )
}

fn malformed_total_sql() -> String {
    format!(
        "SELECT COUNT(*) FROM (
             SELECT deck_hash FROM deck_cards
             GROUP BY deck_hash
             HAVING COUNT(*) <> {DECK_SIZE}
         )"
    )
}

impl InvariantCheck for DeckCardinalityCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        _params: &ValidationParams,
    ) -> Result<CheckResult> {
        let rows = snapshot.query_rows(&sample_sql())?;
        let mut sample = Vec::with_capacity(rows.len());
        for row in &rows {
            sample.push((row.get(0).to_string(), row.get(1).to_i64()?));
        }
        let total = if sample.is_empty() {
            0
        } else {
            scalar_i64(snapshot, &malformed_total_sql())?
        };
        Ok(assess_deck_cardinality(total, &sample))
    }
}

/// `malformed_total` is the number of bad decks overall; `sample` is at most
/// `SAMPLE_LIMIT` of them as (deck_hash, row count)
pub fn assess_deck_cardinality(malformed_total: i64, sample: &[(String, i64)]) -> CheckResult {
    if sample.is_empty() && malformed_total == 0 {
        return CheckResult::pass(NAME);
    }

    let total = malformed_total.max(sample.len() as i64);
    let mut details = format!(
        "Found {} deck_hash with != {} cards (showing up to {}):",
        total, DECK_SIZE, SAMPLE_LIMIT
    );
    for (deck, n) in sample.iter().take(SAMPLE_LIMIT) {
        details.push_str(&format!("\n  {} -> {}", deck, n));
    }
    CheckResult::fail(NAME, details)
}
