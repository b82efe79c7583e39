use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "player count matches --top-n";
pub const SKIPPED_NAME: &str = "player count matches --top-n (skipped)";

const COUNT_SQL: &str = "SELECT COUNT(*) FROM player";

/// `player` row count equals the caller's expected population size
///
/// Activated only when `ValidationParams::expected_players` is set.
pub struct ExpectedPlayerCountCheck;

impl InvariantCheck for ExpectedPlayerCountCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        params: &ValidationParams,
    ) -> Result<CheckResult> {
        let Some(expected) = params.expected_players else {
            return Ok(CheckResult::pass(SKIPPED_NAME));
        };
        let actual = scalar_i64(snapshot, COUNT_SQL)?;
        Ok(assess_player_count(actual, expected))
    }
}

pub fn assess_player_count(actual: i64, expected: u64) -> CheckResult {
    if u64::try_from(actual).ok() == Some(expected) {
        CheckResult::pass_with(NAME, format!("player={}", actual))
    } else {
        CheckResult::fail(
            NAME,
            format!("player table count = {}, expected {}", actual, expected),
        )
    }
}
