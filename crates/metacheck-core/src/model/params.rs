use crate::errors::{McError, MetaCheckError, Result};

/// Ceiling used when the caller does not supply one
pub const DEFAULT_MAX_UNKNOWN_RATIO: f64 = 0.30;

/// Caller-supplied parameters for one validation run
///
/// Passed explicitly into the runner; nothing is read from the environment
/// below the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationParams {
    /// Expected row count of the `player` table; `None` skips the check
    pub expected_players: Option<u64>,
    /// Highest tolerated share of `Unknown` deck-type observations
    pub max_unknown_ratio: f64,
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            expected_players: None,
            max_unknown_ratio: DEFAULT_MAX_UNKNOWN_RATIO,
        }
    }
}

impl ValidationParams {
    pub fn with_expected_players(mut self, n: u64) -> Self {
        self.expected_players = Some(n);
        self
    }

    pub fn with_max_unknown_ratio(mut self, ratio: f64) -> Self {
        self.max_unknown_ratio = ratio;
        self
    }

    /// Reject parameters that would make a check meaningless
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the ceiling is NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let r = self.max_unknown_ratio;
        if !(0.0..=1.0).contains(&r) {
            return Err(McError::from(MetaCheckError::InvalidRatioCeiling { value: r }));
        }
        Ok(())
    }
}
