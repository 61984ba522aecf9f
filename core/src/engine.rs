//! The policy simulator: one full evaluation per input snapshot.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Normalize   (clamp dials, de-duplicate policies)
//!   2. Score       (effect terms, floor, adaptation score)
//!   3. Classify    (grade and banner)
//!   4. Trajectory  (chart series toward the projection)
//!   5. Suggest     (under-optimized inputs)
//!
//! RULES:
//!   - Every widget event triggers a complete re-evaluation.
//!   - The simulator holds configuration only; no state crosses calls.
//!   - Nothing here fails: out-of-range input is recovered in step 1.

use crate::{
    config::SimConfig,
    grade::Banner,
    policy::{normalize_with_report, InputAdjustment, PolicyInputs, RawPolicyInputs},
    scoring::{effects, score_breakdown, EffectBreakdown, SimulationResult},
    suggestion::{suggest, Suggestion},
    trajectory::{trajectory, TrajectoryPoint},
};
use serde::Serialize;

/// Everything the presentation layer needs for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs:      PolicyInputs,
    pub adjustments: Vec<InputAdjustment>,
    pub result:      SimulationResult,
    pub breakdown:   EffectBreakdown,
    pub trajectory:  Vec<TrajectoryPoint>,
    pub suggestions: Vec<Suggestion>,
    pub banner:      Banner,
}

impl Evaluation {
    pub fn fully_optimized(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicySimulator {
    config: SimConfig,
}

impl PolicySimulator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// A simulator over the shipped slider table.
    pub fn standard() -> Self {
        Self::new(SimConfig::standard())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The snapshot a freshly opened dashboard shows.
    pub fn default_inputs(&self) -> RawPolicyInputs {
        RawPolicyInputs::from_config(&self.config)
    }

    /// Run the full pipeline on an untrusted snapshot.
    pub fn evaluate(&self, raw: &RawPolicyInputs) -> Evaluation {
        let (inputs, adjustments) = normalize_with_report(raw, &self.config);
        let mut evaluation = self.evaluate_inputs(&inputs);
        evaluation.adjustments = adjustments;
        evaluation
    }

    /// Run steps 2-5 on an already normalized snapshot.
    pub fn evaluate_inputs(&self, inputs: &PolicyInputs) -> Evaluation {
        let breakdown = effects(inputs);
        let result = score_breakdown(&breakdown);
        let banner = result.grade.banner(result.projected_rise_cm);
        let trajectory = trajectory(result.projected_rise_cm);
        let suggestions = suggest(inputs);

        log::debug!(
            "evaluate: rise={:.2}cm adaptation={:.2} grade={:?} suggestions={}",
            result.projected_rise_cm,
            result.adaptation_score,
            result.grade,
            suggestions.len()
        );

        Evaluation {
            inputs: inputs.clone(),
            adjustments: Vec::new(),
            result,
            breakdown,
            trajectory,
            suggestions,
            banner,
        }
    }
}

/// One-call entry point over the shipped slider table.
pub fn evaluate(raw: &RawPolicyInputs) -> Evaluation {
    PolicySimulator::standard().evaluate(raw)
}
