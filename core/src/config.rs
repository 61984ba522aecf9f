//! Policy dial configuration.
//!
//! Each numeric policy input is driven by a bounded slider ("dial") on the
//! widget surface. The dial table defines the clamp range used by
//! normalization and the starting position of every slider.
//!
//! In tests, use `SimConfig::standard()`. The runner can load the same table
//! from `{data_dir}/policy/dials.json`.

use crate::error::{SimError, SimResult};
use crate::policy::Policy;
use serde::{Deserialize, Serialize};

/// The five numeric policy inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dial {
    CarbonReductionPct,
    RenewableEnergyPct,
    CarbonTaxPerTon,
    SeaWallInvestmentTrillion,
    EcosystemRestorationPct,
}

impl Dial {
    pub const ALL: [Dial; 5] = [
        Dial::CarbonReductionPct,
        Dial::RenewableEnergyPct,
        Dial::CarbonTaxPerTon,
        Dial::SeaWallInvestmentTrillion,
        Dial::EcosystemRestorationPct,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CarbonReductionPct        => "carbon_reduction_pct",
            Self::RenewableEnergyPct        => "renewable_energy_pct",
            Self::CarbonTaxPerTon           => "carbon_tax_per_ton",
            Self::SeaWallInvestmentTrillion => "sea_wall_investment_trillion",
            Self::EcosystemRestorationPct   => "ecosystem_restoration_pct",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialConfig {
    pub dial:          Dial,
    pub label:         String,
    pub min_value:     f64,
    pub max_value:     f64,
    pub default_value: f64,
    pub step_size:     f64,
}

impl DialConfig {
    fn new(dial: Dial, label: &str, min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            dial,
            label: label.into(),
            min_value: min,
            max_value: max,
            default_value: default,
            step_size: step,
        }
    }

    /// Clamp `value` into `[min_value, max_value]`.
    /// Never panics, even on an inverted range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_value).min(self.max_value)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    fn validate(&self) -> SimResult<()> {
        let invalid = |reason: String| SimError::InvalidDial { dial: self.dial, reason };

        let values = [self.min_value, self.max_value, self.default_value, self.step_size];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all bounds must be finite".into()));
        }
        if self.min_value > self.max_value {
            return Err(invalid(format!(
                "min {} exceeds max {}",
                self.min_value, self.max_value
            )));
        }
        if self.step_size <= 0.0 {
            return Err(invalid(format!("step {} must be positive", self.step_size)));
        }
        if !(self.min_value..=self.max_value).contains(&self.default_value) {
            return Err(invalid(format!(
                "default {} outside [{}, {}]",
                self.default_value, self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    pub dials: Vec<DialConfig>,
    #[serde(default = "default_policies")]
    pub default_policies: Vec<Policy>,
}

fn default_policies() -> Vec<Policy> {
    vec![Policy::BuildingEfficiency, Policy::CarbonNeutralCity]
}

impl SimConfig {
    /// The slider table shipped with the dashboard.
    pub fn standard() -> Self {
        Self {
            dials: vec![
                DialConfig::new(Dial::CarbonReductionPct, "Carbon emission reduction target (%)",
                    0.0, 80.0, 40.0, 5.0),
                DialConfig::new(Dial::RenewableEnergyPct, "Renewable energy share target (%)",
                    20.0, 100.0, 60.0, 5.0),
                DialConfig::new(Dial::CarbonTaxPerTon, "Carbon tax (KRW per ton)",
                    0.0, 100_000.0, 30_000.0, 10_000.0),
                DialConfig::new(Dial::SeaWallInvestmentTrillion, "Coastal defense investment (trillion KRW)",
                    0.0, 50.0, 20.0, 5.0),
                DialConfig::new(Dial::EcosystemRestorationPct, "Ecosystem restoration area (%)",
                    0.0, 100.0, 50.0, 10.0),
            ],
            default_policies: default_policies(),
        }
    }

    /// Load from the data/ directory.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/policy/dials.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid {path}: {e}"))?;
        log::debug!("Loaded {} dials from {path}", config.dials.len());
        Ok(config)
    }

    /// Parse and validate a dial table.
    pub fn from_json(content: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Every dial must appear exactly once with sane bounds.
    pub fn validate(&self) -> SimResult<()> {
        for dial in Dial::ALL {
            let mut matches = self.dials.iter().filter(|d| d.dial == dial);
            let first = matches.next().ok_or(SimError::MissingDial { dial })?;
            if matches.next().is_some() {
                return Err(SimError::InvalidDial {
                    dial,
                    reason: "configured more than once".into(),
                });
            }
            first.validate()?;
        }
        Ok(())
    }

    /// Look up a dial. Falls back to the standard table for a config
    /// that skipped validation.
    pub fn dial(&self, dial: Dial) -> DialConfig {
        self.dials
            .iter()
            .find(|d| d.dial == dial)
            .cloned()
            .unwrap_or_else(|| {
                log::warn!("dial {} missing from config; using standard range", dial.key());
                Self::standard_dial(dial)
            })
    }

    fn standard_dial(dial: Dial) -> DialConfig {
        Self::standard()
            .dials
            .into_iter()
            .find(|d| d.dial == dial)
            .unwrap_or_else(|| DialConfig::new(dial, dial.key(), 0.0, 0.0, 0.0, 1.0))
    }
}

impl Default for SimConfig {
    fn default() -> Self { Self::standard() }
}
