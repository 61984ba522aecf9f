//! Scenario trajectory for the two-series chart.
//!
//! The baseline is a hand-picked reference trend, not a fit of the
//! historical dataset. The scenario series starts from the present-day
//! level and reaches the projected 2050 value through a fixed fraction
//! table. Neither series is physically derived.

use crate::types::{Centimetres, Year};
use serde::{Deserialize, Serialize};

pub const YEARS: [Year; 6] = [2024, 2030, 2035, 2040, 2045, 2050];
pub const BASELINE_CM: [Centimetres; 6] = [11.0, 14.0, 17.0, 21.0, 23.5, 26.0];
/// Share of the gap to the 2050 projection closed by each year after 2024.
pub const FRACTIONS: [f64; 5] = [0.2, 0.4, 0.7, 0.9, 1.0];
pub const PRESENT_DAY_CM: Centimetres = 11.0;

/// Horizontal threshold lines drawn on the trajectory chart.
pub const DANGER_THRESHOLD_CM:   Centimetres = 30.0;
pub const DISASTER_THRESHOLD_CM: Centimetres = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year:        Year,
    pub baseline_cm: Centimetres,
    pub scenario_cm: Centimetres,
}

/// Build the chart series for one projection.
pub fn trajectory(projected_rise_cm: Centimetres) -> Vec<TrajectoryPoint> {
    let gap = projected_rise_cm - PRESENT_DAY_CM;

    let scenario = std::iter::once(PRESENT_DAY_CM).chain(FRACTIONS.iter().map(|&f| {
        // Pinned so the last point matches the projection exactly.
        if f >= 1.0 { projected_rise_cm } else { PRESENT_DAY_CM + gap * f }
    }));

    YEARS
        .iter()
        .zip(BASELINE_CM.iter())
        .zip(scenario)
        .map(|((&year, &baseline_cm), scenario_cm)| TrajectoryPoint {
            year,
            baseline_cm,
            scenario_cm,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up() {
        assert_eq!(YEARS.len(), BASELINE_CM.len());
        assert_eq!(YEARS.len(), FRACTIONS.len() + 1);
        assert!(FRACTIONS.windows(2).all(|w| w[0] < w[1]), "fractions must increase");
    }

    #[test]
    fn baseline_ends_on_trend() {
        assert_eq!(BASELINE_CM[BASELINE_CM.len() - 1], crate::scoring::BASE_RISE_CM);
    }
}
