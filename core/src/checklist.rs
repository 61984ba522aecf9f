//! Self-report action checklist and progress tiers.
//!
//! Twelve youth climate actions in three categories. Progress is a pure
//! function of the set of completed items; the checkbox widgets own the set.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    School,
    Community,
    Personal,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 3] = [Self::School, Self::Community, Self::Personal];

    pub fn label(&self) -> &'static str {
        match self {
            Self::School    => "At school",
            Self::Community => "In the community",
            Self::Personal  => "Personal practice",
        }
    }

    pub fn items(&self) -> impl Iterator<Item = ActionItem> + '_ {
        ActionItem::ALL.into_iter().filter(move |item| item.category() == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionItem {
    // School
    ClimateClub,
    PeerCounseling,
    SchoolCampaign,
    SchoolEnergy,
    // Community
    CommunityEnv,
    BeachCleanup,
    ClimateMonitoring,
    EnvVolunteer,
    // Personal
    EcoTransport,
    CarbonFootprint,
    SnsAwareness,
    EcoConsumption,
}

impl ActionItem {
    pub const ALL: [ActionItem; 12] = [
        Self::ClimateClub,
        Self::PeerCounseling,
        Self::SchoolCampaign,
        Self::SchoolEnergy,
        Self::CommunityEnv,
        Self::BeachCleanup,
        Self::ClimateMonitoring,
        Self::EnvVolunteer,
        Self::EcoTransport,
        Self::CarbonFootprint,
        Self::SnsAwareness,
        Self::EcoConsumption,
    ];

    pub fn category(&self) -> ActionCategory {
        match self {
            Self::ClimateClub | Self::PeerCounseling | Self::SchoolCampaign | Self::SchoolEnergy => {
                ActionCategory::School
            }
            Self::CommunityEnv | Self::BeachCleanup | Self::ClimateMonitoring | Self::EnvVolunteer => {
                ActionCategory::Community
            }
            Self::EcoTransport | Self::CarbonFootprint | Self::SnsAwareness | Self::EcoConsumption => {
                ActionCategory::Personal
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ClimateClub       => "climate_club",
            Self::PeerCounseling    => "peer_counseling",
            Self::SchoolCampaign    => "school_campaign",
            Self::SchoolEnergy      => "school_energy",
            Self::CommunityEnv      => "community_env",
            Self::BeachCleanup      => "beach_cleanup",
            Self::ClimateMonitoring => "climate_monitoring",
            Self::EnvVolunteer      => "env_volunteer",
            Self::EcoTransport      => "eco_transport",
            Self::CarbonFootprint   => "carbon_footprint",
            Self::SnsAwareness      => "sns_awareness",
            Self::EcoConsumption    => "eco_consumption",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClimateClub       => "Join a climate action club",
            Self::PeerCounseling    => "Run a peer counseling program",
            Self::SchoolCampaign    => "Plan an environmental campaign with friends",
            Self::SchoolEnergy      => "Save energy at school",
            Self::CommunityEnv      => "Join local environmental protection",
            Self::BeachCleanup      => "Take part in a beach cleanup",
            Self::ClimateMonitoring => "Help with local climate monitoring",
            Self::EnvVolunteer      => "Volunteer for environmental causes",
            Self::EcoTransport      => "Use low-carbon transport",
            Self::CarbonFootprint   => "Build habits that cut your carbon footprint",
            Self::SnsAwareness      => "Raise climate awareness on social media",
            Self::EcoConsumption    => "Shop with the environment in mind",
        }
    }
}

impl FromStr for ActionItem {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|item| item.key() == key)
            .ok_or_else(|| SimError::UnknownAction { key: key.to_string() })
    }
}

/// Overall practice tier, by percent of items done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeLevel {
    NotStarted,
    Sprout,
    Growing,
    Blooming,
    EarthKeeper,
}

impl PracticeLevel {
    pub fn from_percent(pct: f64) -> Self {
        if pct <= 0.0 {
            Self::NotStarted
        } else if pct < 30.0 {
            Self::Sprout
        } else if pct < 60.0 {
            Self::Growing
        } else if pct < 90.0 {
            Self::Blooming
        } else {
            Self::EarthKeeper
        }
    }

    pub fn encouragement(&self) -> &'static str {
        match self {
            Self::NotStarted  => "Take your first step!",
            Self::Sprout      => "A good start!",
            Self::Growing     => "You are practicing steadily!",
            Self::Blooming    => "Truly impressive!",
            Self::EarthKeeper => "A perfect practitioner!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category:  ActionCategory,
    pub completed: usize,
    pub total:     usize,
    pub percent:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistProgress {
    pub categories: Vec<CategoryProgress>,
    pub completed:  usize,
    pub total:      usize,
    pub percent:    f64,
    pub level:      PracticeLevel,
}

impl ChecklistProgress {
    pub fn from_completed(done: &BTreeSet<ActionItem>) -> Self {
        let categories: Vec<CategoryProgress> = ActionCategory::ALL
            .into_iter()
            .map(|category| {
                let total = category.items().count();
                let completed = category.items().filter(|item| done.contains(item)).count();
                CategoryProgress { category, completed, total, percent: percent(completed, total) }
            })
            .collect();

        let completed = categories.iter().map(|c| c.completed).sum::<usize>();
        let total = ActionItem::ALL.len();
        let overall = percent(completed, total);

        Self {
            categories,
            completed,
            total,
            percent: overall,
            level: PracticeLevel::from_percent(overall),
        }
    }

    pub fn all_done(&self) -> bool {
        self.completed >= self.total
    }
}

fn percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}
