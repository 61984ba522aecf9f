//! Static reference tables shown beside the simulator.
//!
//! None of this is computed from user input. The tables are handed to the
//! presentation layer as-is, together with the few derived series the
//! dashboard prints next to them.

use crate::types::{Centimetres, Millimetres, Year};
use serde::Serialize;

pub const HISTORY_START_YEAR: Year = 1989;

/// Cumulative rise along the Korean coast since 1989, one entry per year
/// through 2024.
pub const SEA_LEVEL_MM: [u32; 36] = [
    0, 2, 4, 7, 9, 12, 14, 16, 19, 22,
    24, 27, 30, 32, 35, 38, 41, 44, 47, 50,
    53, 57, 60, 63, 67, 70, 74, 77, 81, 85,
    89, 93, 97, 101, 105, 110,
];

/// Divisor for the long-run average annual rise.
const HISTORY_SPAN_YEARS: f64 = 35.0;
const ROLLING_WINDOW: usize = 5;
const RECENT_YEARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeaLevelRecord {
    pub year:           Year,
    pub sea_level_mm:   Millimetres,
    pub sea_level_cm:   Centimetres,
    /// `None` for the first year.
    pub annual_rise_mm: Option<Millimetres>,
    /// Centred rolling mean of annual rise; `None` where the window is incomplete.
    pub five_year_avg_mm: Option<Millimetres>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_rise_cm:             Centimetres,
    pub avg_annual_rise_mm:        Millimetres,
    pub recent_annual_rise_mm:     Millimetres,
    /// How far the recent rate runs above the long-run average, in percent.
    pub recent_vs_avg_pct:         f64,
}

pub fn sea_level_history() -> Vec<SeaLevelRecord> {
    let annual: Vec<Option<f64>> = std::iter::once(None)
        .chain(SEA_LEVEL_MM.windows(2).map(|w| Some(f64::from(w[1]) - f64::from(w[0]))))
        .collect();

    let half = ROLLING_WINDOW / 2;
    let rolling = |i: usize| -> Option<f64> {
        if i < half || i + half >= annual.len() {
            return None;
        }
        let window = &annual[i - half..=i + half];
        let sum = window.iter().copied().sum::<Option<f64>>()?;
        Some(sum / ROLLING_WINDOW as f64)
    };

    SEA_LEVEL_MM
        .iter()
        .enumerate()
        .map(|(i, &mm)| SeaLevelRecord {
            year:             HISTORY_START_YEAR + i as Year,
            sea_level_mm:     f64::from(mm),
            sea_level_cm:     f64::from(mm) / 10.0,
            annual_rise_mm:   annual[i],
            five_year_avg_mm: rolling(i),
        })
        .collect()
}

pub fn history_summary() -> HistorySummary {
    let last = SEA_LEVEL_MM.last().copied().map(f64::from).unwrap_or(0.0);
    let avg_annual_rise_mm = last / HISTORY_SPAN_YEARS;

    let recent: Vec<f64> = SEA_LEVEL_MM
        .windows(2)
        .rev()
        .take(RECENT_YEARS)
        .map(|w| f64::from(w[1]) - f64::from(w[0]))
        .collect();
    let recent_annual_rise_mm = recent.iter().sum::<f64>() / recent.len().max(1) as f64;

    HistorySummary {
        total_rise_cm: last / 10.0,
        avg_annual_rise_mm,
        recent_annual_rise_mm,
        recent_vs_avg_pct: (recent_annual_rise_mm / avg_annual_rise_mm - 1.0) * 100.0,
    }
}

// ── Damage sites ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageSite {
    pub name:        &'static str,
    pub lat:         f64,
    pub lon:         f64,
    /// 1 (minor) to 3 (severe).
    pub severity:    u8,
    pub description: &'static str,
    pub impact:      &'static str,
    pub article_url: &'static str,
}

pub const DAMAGE_SITES: [DamageSite; 3] = [
    DamageSite {
        name: "Daecheongdo", lat: 37.828, lon: 124.704, severity: 3,
        description: "Roads and harbour flood at high tide",
        impact: "Fishing restricted, residents evacuated",
        article_url: "https://www.kyeonggi.com/article/20230803580166",
    },
    DamageSite {
        name: "Yeonpyeongdo", lat: 37.666, lon: 125.700, severity: 3,
        description: "Island flooding at high tide",
        impact: "Ferry service halted, supply disrupted",
        article_url: "https://www.kyeongin.com/article/1747652",
    },
    DamageSite {
        name: "Busan coast", lat: 35.1796, lon: 129.0756, severity: 2,
        description: "Low-lying homes and roads flooded",
        impact: "Flooding around Haeundae and Gwangalli",
        article_url: "https://www.hankyung.com/article/2023030990747",
    },
];

// ── Youth mental health ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SymptomSurvey {
    pub symptom:      &'static str,
    pub pct_2020:     u32,
    pub pct_2024:     u32,
    pub increase_pct: u32,
}

pub const MENTAL_HEALTH_SURVEY: [SymptomSurvey; 5] = [
    SymptomSurvey { symptom: "Climate anxiety",    pct_2020: 45, pct_2024: 72, increase_pct: 60 },
    SymptomSurvey { symptom: "Depressed mood",     pct_2020: 23, pct_2024: 38, increase_pct: 65 },
    SymptomSurvey { symptom: "Sleep disturbance",  pct_2020: 18, pct_2024: 31, increase_pct: 72 },
    SymptomSurvey { symptom: "PTSD symptoms",      pct_2020: 12, pct_2024: 25, increase_pct: 108 },
    SymptomSurvey { symptom: "Helplessness",       pct_2020: 35, pct_2024: 58, increase_pct: 66 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyImpact {
    pub area:        &'static str,
    pub impact_pct:  u32,
    pub description: &'static str,
}

pub const DAILY_IMPACT: [DailyImpact; 5] = [
    DailyImpact { area: "Study focus",        impact_pct: 82, description: "Disaster news erodes concentration" },
    DailyImpact { area: "Peer relationships", impact_pct: 56, description: "Anxiety makes it harder to talk" },
    DailyImpact { area: "Outdoor activity",   impact_pct: 73, description: "Heat waves and fine dust limit time outside" },
    DailyImpact { area: "Future planning",    impact_pct: 91, description: "An uncertain future is hard to plan for" },
    DailyImpact { area: "Hobbies",            impact_pct: 45, description: "Helplessness crowds out hobbies" },
];

// ── Future scenarios ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub year:            Year,
    pub optimistic_cm:   Centimetres,
    pub intermediate_cm: Centimetres,
    pub pessimistic_cm:  Centimetres,
}

pub const FUTURE_SCENARIOS: [ScenarioProjection; 6] = [
    ScenarioProjection { year: 2024, optimistic_cm: 11.0, intermediate_cm: 11.0, pessimistic_cm: 11.0 },
    ScenarioProjection { year: 2030, optimistic_cm: 13.0, intermediate_cm: 14.0, pessimistic_cm: 15.0 },
    ScenarioProjection { year: 2040, optimistic_cm: 16.0, intermediate_cm: 19.0, pessimistic_cm: 23.0 },
    ScenarioProjection { year: 2050, optimistic_cm: 20.0, intermediate_cm: 26.0, pessimistic_cm: 35.0 },
    ScenarioProjection { year: 2070, optimistic_cm: 28.0, intermediate_cm: 40.0, pessimistic_cm: 58.0 },
    ScenarioProjection { year: 2100, optimistic_cm: 43.0, intermediate_cm: 65.0, pessimistic_cm: 110.0 },
];
