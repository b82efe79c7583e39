use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "totals sanity: meta_obs between topn_obs and 2*topn_obs";

const TOPN_OBS_SQL: &str = "SELECT COALESCE(SUM(uses), 0) FROM player_decks";
const META_OBS_SQL: &str = "SELECT COALESCE(SUM(uses), 0) FROM meta_deck_types";

/// Bounded ratio between tracked-player and both-sides observation totals
///
/// A match is ingested when at least one side is a tracked player. Meta
/// tables count both sides (2 per match); `player_decks` counts only the
/// tracked sides (1 or 2 per match). Hence `topn_obs <= meta_obs <= 2 * topn_obs`.
pub struct TopnMetaTotalsCheck;

impl InvariantCheck for TopnMetaTotalsCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        _params: &ValidationParams,
    ) -> Result<CheckResult> {
        let topn_obs = scalar_i64(snapshot, TOPN_OBS_SQL)?;
        let meta_obs = scalar_i64(snapshot, META_OBS_SQL)?;
        Ok(assess_totals(topn_obs, meta_obs))
    }
}

pub fn assess_totals(topn_obs: i64, meta_obs: i64) -> CheckResult {
    if topn_obs == 0 {
        return CheckResult::fail(
            NAME,
            "topn_obs (SUM(player_decks.uses)) is 0; did ETL write player_decks?",
        );
    }
    if meta_obs < topn_obs {
        return CheckResult::fail(
            NAME,
            format!("meta_obs < topn_obs ({} < {})", meta_obs, topn_obs),
        );
    }
    let upper = topn_obs.saturating_mul(2);
    if meta_obs > upper {
        return CheckResult::fail(
            NAME,
            format!("meta_obs > 2*topn_obs ({} > {})", meta_obs, upper),
        );
    }

    let ratio = meta_obs as f64 / topn_obs as f64;
    CheckResult::pass_with(
        NAME,
        format!(
            "topn_obs={}, meta_obs={}, ratio={:.2}",
            topn_obs, meta_obs, ratio
        ),
    )
}
