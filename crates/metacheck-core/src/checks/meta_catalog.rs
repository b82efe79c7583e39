use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::{scalar_i64, SnapshotAccessor};

use super::InvariantCheck;

pub const NAME: &str = "meta sanity: meta_deck_types not empty";

const COUNT_SQL: &str = "SELECT COUNT(*) FROM meta_deck_types";

/// The aggregation step produced at least one deck type
pub struct MetaCatalogNotEmptyCheck;

impl InvariantCheck for MetaCatalogNotEmptyCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        _params: &ValidationParams,
    ) -> Result<CheckResult> {
        Ok(assess_meta_catalog(scalar_i64(snapshot, COUNT_SQL)?))
    }
}

pub fn assess_meta_catalog(rows: i64) -> CheckResult {
    if rows <= 0 {
        CheckResult::fail(NAME, "meta_deck_types is empty")
    } else {
        CheckResult::pass(NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fails() {
        let r = assess_meta_catalog(0);
        assert!(!r.ok());
        assert_eq!(r.details(), "meta_deck_types is empty");
    }

    #[test]
    fn test_populated_passes() {
        assert!(assess_meta_catalog(12).ok());
    }
}
