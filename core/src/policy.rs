//! Policy inputs and normalization.
//!
//! RULE: the scoring function only ever sees a normalized `PolicyInputs`.
//! Raw widget values are clamped into their dial ranges here; nothing out of
//! range is ever reported to the caller as a failure. Every recovery is
//! recorded as an `InputAdjustment` so the widget surface can resync.

use crate::{
    config::{Dial, SimConfig},
    error::SimError,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Supplementary policies on the multi-select widget.
/// Variants are never reordered: `Policy::ALL` drives display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    ElectricVehicleMandate,
    BuildingEfficiency,
    CarbonNeutralCity,
    InternationalCooperation,
    GreenTechRnd,
    ClimateEducation,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::ElectricVehicleMandate,
        Policy::BuildingEfficiency,
        Policy::CarbonNeutralCity,
        Policy::InternationalCooperation,
        Policy::GreenTechRnd,
        Policy::ClimateEducation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::ElectricVehicleMandate   => "electric_vehicle_mandate",
            Self::BuildingEfficiency       => "building_efficiency",
            Self::CarbonNeutralCity        => "carbon_neutral_city",
            Self::InternationalCooperation => "international_cooperation",
            Self::GreenTechRnd             => "green_tech_rnd",
            Self::ClimateEducation         => "climate_education",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ElectricVehicleMandate   => "Electric vehicle mandate (from 2030)",
            Self::BuildingEfficiency       => "Stronger building energy efficiency",
            Self::CarbonNeutralCity        => "Carbon-neutral city development",
            Self::InternationalCooperation => "Stronger international climate cooperation",
            Self::GreenTechRnd             => "Expanded green-tech R&D investment",
            Self::ClimateEducation         => "Mandatory climate education",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| SimError::UnknownPolicy { key: key.to_string() })
    }
}

/// An untrusted input snapshot, exactly as the widget surface reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPolicyInputs {
    pub carbon_reduction_pct:         f64,
    pub renewable_energy_pct:         f64,
    pub carbon_tax_per_ton:           f64,
    pub sea_wall_investment_trillion: f64,
    pub ecosystem_restoration_pct:    f64,
    pub selected_policies:            Vec<String>,
}

impl RawPolicyInputs {
    /// Every slider at its configured starting position.
    pub fn from_config(config: &SimConfig) -> Self {
        let mut raw = Self {
            carbon_reduction_pct:         0.0,
            renewable_energy_pct:         0.0,
            carbon_tax_per_ton:           0.0,
            sea_wall_investment_trillion: 0.0,
            ecosystem_restoration_pct:    0.0,
            selected_policies: config
                .default_policies
                .iter()
                .map(|p| p.key().to_string())
                .collect(),
        };
        for dial in Dial::ALL {
            raw.set(dial, config.dial(dial).default_value);
        }
        raw
    }

    pub fn get(&self, dial: Dial) -> f64 {
        match dial {
            Dial::CarbonReductionPct        => self.carbon_reduction_pct,
            Dial::RenewableEnergyPct        => self.renewable_energy_pct,
            Dial::CarbonTaxPerTon           => self.carbon_tax_per_ton,
            Dial::SeaWallInvestmentTrillion => self.sea_wall_investment_trillion,
            Dial::EcosystemRestorationPct   => self.ecosystem_restoration_pct,
        }
    }

    pub fn set(&mut self, dial: Dial, value: f64) {
        match dial {
            Dial::CarbonReductionPct        => self.carbon_reduction_pct = value,
            Dial::RenewableEnergyPct        => self.renewable_energy_pct = value,
            Dial::CarbonTaxPerTon           => self.carbon_tax_per_ton = value,
            Dial::SeaWallInvestmentTrillion => self.sea_wall_investment_trillion = value,
            Dial::EcosystemRestorationPct   => self.ecosystem_restoration_pct = value,
        }
    }
}

impl Default for RawPolicyInputs {
    fn default() -> Self {
        Self::from_config(&SimConfig::standard())
    }
}

/// A normalized input snapshot. Every numeric field lies inside its dial
/// range and the policy set holds no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInputs {
    pub carbon_reduction_pct:         f64,
    pub renewable_energy_pct:         f64,
    pub carbon_tax_per_ton:           f64,
    pub sea_wall_investment_trillion: f64,
    pub ecosystem_restoration_pct:    f64,
    pub selected_policies:            BTreeSet<Policy>,
}

impl PolicyInputs {
    pub fn policy_count(&self) -> usize {
        self.selected_policies.len()
    }

    pub fn get(&self, dial: Dial) -> f64 {
        match dial {
            Dial::CarbonReductionPct        => self.carbon_reduction_pct,
            Dial::RenewableEnergyPct        => self.renewable_energy_pct,
            Dial::CarbonTaxPerTon           => self.carbon_tax_per_ton,
            Dial::SeaWallInvestmentTrillion => self.sea_wall_investment_trillion,
            Dial::EcosystemRestorationPct   => self.ecosystem_restoration_pct,
        }
    }
}

/// One local recovery applied during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputAdjustment {
    Clamped {
        dial:    Dial,
        raw:     f64,
        clamped: f64,
    },
    NonFinite {
        dial:          Dial,
        replaced_with: f64,
    },
    UnknownPolicyDropped {
        key: String,
    },
    DuplicatePolicyDropped {
        policy: Policy,
    },
}

/// Clamp and de-duplicate a raw snapshot.
pub fn normalize(raw: &RawPolicyInputs, config: &SimConfig) -> PolicyInputs {
    normalize_with_report(raw, config).0
}

/// Like `normalize`, also returning every adjustment that was applied.
pub fn normalize_with_report(
    raw:    &RawPolicyInputs,
    config: &SimConfig,
) -> (PolicyInputs, Vec<InputAdjustment>) {
    let mut adjustments = Vec::new();

    let mut value_of = |dial: Dial| -> f64 {
        let dial_config = config.dial(dial);
        let value = raw.get(dial);

        if !value.is_finite() {
            adjustments.push(InputAdjustment::NonFinite {
                dial,
                replaced_with: dial_config.default_value,
            });
            return dial_config.default_value;
        }

        let clamped = dial_config.clamp(value);
        if clamped != value {
            adjustments.push(InputAdjustment::Clamped { dial, raw: value, clamped });
        }
        clamped
    };

    let carbon_reduction_pct         = value_of(Dial::CarbonReductionPct);
    let renewable_energy_pct         = value_of(Dial::RenewableEnergyPct);
    let carbon_tax_per_ton           = value_of(Dial::CarbonTaxPerTon);
    let sea_wall_investment_trillion = value_of(Dial::SeaWallInvestmentTrillion);
    let ecosystem_restoration_pct    = value_of(Dial::EcosystemRestorationPct);

    let mut selected_policies = BTreeSet::new();
    for key in &raw.selected_policies {
        match key.parse::<Policy>() {
            Ok(policy) => {
                if !selected_policies.insert(policy) {
                    adjustments.push(InputAdjustment::DuplicatePolicyDropped { policy });
                }
            }
            Err(_) => adjustments.push(InputAdjustment::UnknownPolicyDropped { key: key.clone() }),
        }
    }

    for adjustment in &adjustments {
        log::warn!("input recovered during normalization: {adjustment:?}");
    }

    let inputs = PolicyInputs {
        carbon_reduction_pct,
        renewable_energy_pct,
        carbon_tax_per_ton,
        sea_wall_investment_trillion,
        ecosystem_restoration_pct,
        selected_policies,
    };
    (inputs, adjustments)
}
