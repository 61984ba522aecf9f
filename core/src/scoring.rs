//! The 2050 sea-level scoring model.
//!
//! A fixed linear model. Mitigation dials pull the projected rise down from
//! the current-trend baseline; adaptation dials and supplementary policies
//! only build the separate adaptation score and never feed back into the
//! projected rise.
//!
//! NOTE: the adaptation bonus sums sea-wall investment (trillions of KRW)
//! with ecosystem restoration (percent of coastline). The units disagree;
//! the sum is kept literally so scores match the published dashboard.

use crate::{
    grade::Grade,
    policy::PolicyInputs,
    types::Centimetres,
};
use serde::{Deserialize, Serialize};

/// Projected 2050 rise on the current trend, with no new policy.
pub const BASE_RISE_CM: Centimetres = 26.0;
/// Lowest rise any policy mix can reach; already committed by past emissions.
pub const PHYSICAL_FLOOR_CM: Centimetres = 8.0;

const CARBON_REDUCTION_CM_PER_PCT: f64 = 0.15;
const RENEWABLE_CM_PER_PCT:        f64 = 0.08;
const TAX_STEP_PER_TON:            f64 = 10_000.0;
const TAX_CM_PER_STEP:             f64 = 0.8;
const ADAPTATION_WEIGHT:           f64 = 2.0;
const POLICY_BONUS_EACH:           f64 = 0.5;

/// Every signed term of the model, kept for the contribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectBreakdown {
    pub carbon_effect:        f64,
    pub renewable_effect:     f64,
    pub tax_effect:           f64,
    /// Shown as a negative bar; not part of the projected rise.
    pub supplementary_effect: f64,
    pub adaptation_bonus:     f64,
    pub policy_bonus:         f64,
}

impl EffectBreakdown {
    /// Rise before the physical floor is applied. May go below the floor.
    pub fn raw_rise_cm(&self) -> Centimetres {
        BASE_RISE_CM + self.carbon_effect + self.renewable_effect + self.tax_effect
    }

    pub fn adaptation_score(&self) -> f64 {
        self.adaptation_bonus + self.policy_bonus
    }

    /// The four bars of the per-policy contribution chart, in display order.
    pub fn contributions(&self) -> [Contribution; 4] {
        [
            Contribution { label: "Carbon reduction",        effect_cm: self.carbon_effect },
            Contribution { label: "Renewable energy",        effect_cm: self.renewable_effect },
            Contribution { label: "Carbon tax",              effect_cm: self.tax_effect },
            Contribution { label: "Supplementary policies",  effect_cm: self.supplementary_effect },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub label:     &'static str,
    pub effect_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub projected_rise_cm: Centimetres,
    pub adaptation_score:  f64,
    pub grade:             Grade,
    /// `projected_rise_cm - BASE_RISE_CM`; negative means better than trend.
    pub delta_vs_trend_cm: Centimetres,
}

/// Compute every signed term for a normalized snapshot.
pub fn effects(inputs: &PolicyInputs) -> EffectBreakdown {
    let policy_count = inputs.policy_count() as f64;
    EffectBreakdown {
        carbon_effect:    -(inputs.carbon_reduction_pct * CARBON_REDUCTION_CM_PER_PCT),
        renewable_effect: -(inputs.renewable_energy_pct * RENEWABLE_CM_PER_PCT),
        tax_effect:       -(inputs.carbon_tax_per_ton / TAX_STEP_PER_TON * TAX_CM_PER_STEP),
        supplementary_effect: -(policy_count * POLICY_BONUS_EACH),
        adaptation_bonus: (inputs.sea_wall_investment_trillion + inputs.ecosystem_restoration_pct)
            / 100.0
            * ADAPTATION_WEIGHT,
        policy_bonus: policy_count * POLICY_BONUS_EACH,
    }
}

/// Score a snapshot. Pure and total: any real-valued input yields a result.
pub fn score(inputs: &PolicyInputs) -> SimulationResult {
    score_breakdown(&effects(inputs))
}

/// Score from an already computed breakdown.
pub fn score_breakdown(breakdown: &EffectBreakdown) -> SimulationResult {
    let projected_rise_cm = breakdown.raw_rise_cm().max(PHYSICAL_FLOOR_CM);
    SimulationResult {
        projected_rise_cm,
        adaptation_score:  breakdown.adaptation_score(),
        grade:             Grade::classify(projected_rise_cm),
        delta_vs_trend_cm: projected_rise_cm - BASE_RISE_CM,
    }
}
