//! Grade classifier and result banners.
//!
//! Boundaries are half-open and lower-inclusive:
//!   (-inf, 15)  Guardian
//!   [15, 20)    Protector
//!   [20, 30)    NeedsAttention
//!   [30, +inf)  Danger

use crate::{scoring::BASE_RISE_CM, types::Centimetres};
use serde::{Deserialize, Serialize};

pub const GUARDIAN_BELOW_CM:        Centimetres = 15.0;
pub const PROTECTOR_BELOW_CM:       Centimetres = 20.0;
pub const NEEDS_ATTENTION_BELOW_CM: Centimetres = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Guardian,
    Protector,
    NeedsAttention,
    Danger,
}

/// Styling bucket for the result banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Good,
    Neutral,
    Bad,
}

impl Grade {
    /// Total over all reals. NaN compares false everywhere and lands on Danger.
    pub fn classify(projected_rise_cm: Centimetres) -> Self {
        if projected_rise_cm < GUARDIAN_BELOW_CM {
            Self::Guardian
        } else if projected_rise_cm < PROTECTOR_BELOW_CM {
            Self::Protector
        } else if projected_rise_cm < NEEDS_ATTENTION_BELOW_CM {
            Self::NeedsAttention
        } else {
            Self::Danger
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Guardian       => "Earth Guardian",
            Self::Protector      => "Environment Protector",
            Self::NeedsAttention => "Needs Attention",
            Self::Danger         => "Danger",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Guardian | Self::Protector => Tone::Good,
            Self::NeedsAttention             => Tone::Neutral,
            Self::Danger                     => Tone::Bad,
        }
    }

    /// Only the best grade gets the celebration effect.
    pub fn celebrates(&self) -> bool {
        matches!(self, Self::Guardian)
    }

    pub fn banner(&self, projected_rise_cm: Centimetres) -> Banner {
        let reduction = BASE_RISE_CM - projected_rise_cm;
        let lines = match self {
            Self::Guardian => vec![
                format!("Congratulations! Your policies held the 2050 rise to {projected_rise_cm:.1}cm."),
                format!("That is {reduction:.1}cm below the current trend."),
                "You are a true guardian of the planet!".to_string(),
            ],
            Self::Protector => vec![
                format!("Well done! Your policies kept the rise to {projected_rise_cm:.1}cm."),
                format!("{reduction:.1}cm below the current trend protects many coastal areas."),
                "A little more ambition will do even better.".to_string(),
            ],
            Self::NeedsAttention => vec![
                format!("Average result. Sea level is set to rise {projected_rise_cm:.1}cm."),
                "Some coastal areas may face flooding.".to_string(),
                "Stronger action is needed: raise carbon reduction and renewables.".to_string(),
            ],
            Self::Danger => vec![
                format!("Danger! Sea level is set to rise {projected_rise_cm:.1}cm."),
                "Many coastal areas face a high risk of flooding.".to_string(),
                "Every policy must be strengthened immediately.".to_string(),
            ],
        };
        Banner {
            grade:      *self,
            tone:       self.tone(),
            celebrate:  self.celebrates(),
            lines,
        }
    }
}

/// Message for the styled-banner collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub grade:     Grade,
    pub tone:      Tone,
    pub celebrate: bool,
    pub lines:     Vec<String>,
}
