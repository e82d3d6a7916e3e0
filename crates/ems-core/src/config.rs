//! Planner configuration.

use crate::{EmsError, EmsResult};

/// Tunables for facility selection and the path search.
///
/// The defaults give the stock dispatch behaviour: a constant
/// heuristic of `1.0` and a high-cost cutoff of `20.0` that is evaluated but
/// does not affect which facility is chosen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Adjusted cost above which a candidate facility counts as "high cost".
    pub high_cost_cutoff: f64,

    /// When `true`, candidates whose adjusted cost exceeds
    /// `high_cost_cutoff` are excluded from selection.  Off by default: the
    /// cutoff is then only reported in trace logs.
    pub enforce_cutoff: bool,

    /// Constant remaining-cost estimate used by the search heuristic of
    /// routers built from this config.  A caller-supplied router ignores it.
    pub heuristic_estimate: f64,
}

impl PlannerConfig {
    pub const DEFAULT_HIGH_COST_CUTOFF: f64 = 20.0;
    pub const DEFAULT_HEURISTIC_ESTIMATE: f64 = 1.0;

    /// Check that every numeric field is finite and non-negative.
    pub fn validate(&self) -> EmsResult<()> {
        if !(self.high_cost_cutoff.is_finite() && self.high_cost_cutoff >= 0.0) {
            return Err(EmsError::Config(format!(
                "high_cost_cutoff must be finite and >= 0, got {}",
                self.high_cost_cutoff
            )));
        }
        if !(self.heuristic_estimate.is_finite() && self.heuristic_estimate >= 0.0) {
            return Err(EmsError::Config(format!(
                "heuristic_estimate must be finite and >= 0, got {}",
                self.heuristic_estimate
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            high_cost_cutoff:   Self::DEFAULT_HIGH_COST_CUTOFF,
            enforce_cutoff:     false,
            heuristic_estimate: Self::DEFAULT_HEURISTIC_ESTIMATE,
        }
    }
}
