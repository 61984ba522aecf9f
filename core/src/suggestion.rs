//! Improvement suggestions.
//!
//! A fixed checklist inspected in order. An empty result means the
//! snapshot is fully optimized.

use crate::policy::PolicyInputs;
use serde::{Deserialize, Serialize};

pub const CARBON_REDUCTION_TARGET_PCT: f64   = 60.0;
pub const RENEWABLE_TARGET_PCT:        f64   = 80.0;
pub const POLICY_COUNT_TARGET:         usize = 4;
pub const SEA_WALL_TARGET_TRILLION:    f64   = 30.0;

/// Variants are listed in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    RaiseCarbonReduction,
    RaiseRenewableShare,
    SelectMorePolicies,
    RaiseCoastalDefense,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Self::RaiseCarbonReduction => "Raise the carbon reduction target",
            Self::RaiseRenewableShare  => "Raise the renewable energy share",
            Self::SelectMorePolicies   => "Select more supplementary policies",
            Self::RaiseCoastalDefense  => "Raise coastal defense investment",
        }
    }
}

pub fn suggest(inputs: &PolicyInputs) -> Vec<Suggestion> {
    let checklist = [
        (inputs.carbon_reduction_pct < CARBON_REDUCTION_TARGET_PCT,     Suggestion::RaiseCarbonReduction),
        (inputs.renewable_energy_pct < RENEWABLE_TARGET_PCT,            Suggestion::RaiseRenewableShare),
        (inputs.policy_count() < POLICY_COUNT_TARGET,                   Suggestion::SelectMorePolicies),
        (inputs.sea_wall_investment_trillion < SEA_WALL_TARGET_TRILLION, Suggestion::RaiseCoastalDefense),
    ];

    checklist
        .into_iter()
        .filter_map(|(below_target, suggestion)| below_target.then_some(suggestion))
        .collect()
}
