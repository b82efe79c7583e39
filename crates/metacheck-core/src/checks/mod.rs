//! Invariant check catalog
//!
//! Each check is an independent, read-only evaluation of one consistency
//! property of the snapshot. Checks split the query step (`evaluate`) from a
//! pure `assess_*` function over the fetched numbers.
//!
//! Catalog order is fixed and is the order results appear in the report:
//!
//! 1. deck cardinality
//! 2. wins/uses counters sanity
//! 3. meta catalog not empty
//! 4. expected player count (optional)
//! 5. top-N vs meta observation totals
//! 6. unknown deck-type ratio

pub mod counters;
pub mod deck_cardinality;
pub mod meta_catalog;
pub mod player_count;
pub mod totals;
pub mod unknown_ratio;

pub use counters::CountersSanityCheck;
pub use deck_cardinality::DeckCardinalityCheck;
pub use meta_catalog::MetaCatalogNotEmptyCheck;
pub use player_count::ExpectedPlayerCountCheck;
pub use totals::TopnMetaTotalsCheck;
pub use unknown_ratio::UnknownDeckTypeRatioCheck;

use crate::errors::Result;
use crate::model::{CheckResult, ValidationParams};
use crate::snapshot::SnapshotAccessor;

/// One entry of the check catalog
pub trait InvariantCheck: Send + Sync {
    /// Stable name, also used for results synthesized from faults
    fn name(&self) -> &str;

    /// Evaluate the invariant against one snapshot
    ///
    /// Validation failures are returned as `Ok` with a failing result; `Err`
    /// is reserved for faults such as a broken connection or missing table.
    ///
    /// # Errors
    ///
    /// Any snapshot query failure.
    fn evaluate(
        &self,
        snapshot: &dyn SnapshotAccessor,
        params: &ValidationParams,
    ) -> Result<CheckResult>;
}

/// The fixed catalog, in report order
pub fn default_catalog() -> Vec<Box<dyn InvariantCheck>> {
    vec![
        Box::new(DeckCardinalityCheck),
        Box::new(CountersSanityCheck),
        Box::new(MetaCatalogNotEmptyCheck),
        Box::new(ExpectedPlayerCountCheck),
        Box::new(TopnMetaTotalsCheck),
        Box::new(UnknownDeckTypeRatioCheck),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let names: Vec<String> = default_catalog()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                deck_cardinality::NAME,
                counters::NAME,
                meta_catalog::NAME,
                player_count::NAME,
                totals::NAME,
                unknown_ratio::NAME,
            ]
        );
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<String> = default_catalog()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), default_catalog().len());
    }
}
