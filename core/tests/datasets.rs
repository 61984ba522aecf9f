//! Reference table tests.

use tideline_core::datasets::{
    history_summary, sea_level_history, DAMAGE_SITES, FUTURE_SCENARIOS, MENTAL_HEALTH_SURVEY,
};

#[test]
fn history_covers_1989_through_2024() {
    let history = sea_level_history();
    assert_eq!(history.len(), 36);
    assert_eq!(history[0].year, 1989);
    assert_eq!(history[35].year, 2024);
    assert_eq!(history[35].sea_level_cm, 11.0);
}

#[test]
fn first_year_has_no_annual_rise() {
    let history = sea_level_history();
    assert_eq!(history[0].annual_rise_mm, None);
    assert_eq!(history[1].annual_rise_mm, Some(2.0));
    assert_eq!(history[35].annual_rise_mm, Some(5.0));
}

#[test]
fn rolling_mean_needs_a_full_window() {
    let history = sea_level_history();
    let missing: Vec<u16> = history
        .iter()
        .filter(|r| r.five_year_avg_mm.is_none())
        .map(|r| r.year)
        .collect();
    // The first window containing no missing annual rise is centred on 1992.
    assert_eq!(missing, vec![1989, 1990, 1991, 2023, 2024]);

    // 1992: rises for 1990..=1994 are 2, 2, 3, 2, 3.
    let avg = history[3].five_year_avg_mm.expect("1992 window is full");
    assert!((avg - 2.4).abs() < 1e-9, "got {avg}");
}

#[test]
fn summary_matches_dashboard_cards() {
    let summary = history_summary();
    assert!((summary.total_rise_cm - 11.0).abs() < 1e-9);
    assert!((summary.avg_annual_rise_mm - 110.0 / 35.0).abs() < 1e-9);
    assert!((summary.recent_annual_rise_mm - 4.2).abs() < 1e-9);
    assert!((summary.recent_vs_avg_pct - 33.636_363_636).abs() < 1e-6);
}

#[test]
fn damage_severity_in_range() {
    assert!(DAMAGE_SITES.iter().all(|s| (1..=3).contains(&s.severity)));
    assert!(DAMAGE_SITES.iter().all(|s| s.article_url.starts_with("https://")));
}

#[test]
fn survey_rates_rose_everywhere() {
    assert!(MENTAL_HEALTH_SURVEY.iter().all(|s| s.pct_2024 > s.pct_2020));
}

#[test]
fn scenarios_start_at_present_and_fan_out() {
    let first = FUTURE_SCENARIOS[0];
    assert_eq!(first.year, 2024);
    assert_eq!(first.optimistic_cm, first.pessimistic_cm);
    for row in &FUTURE_SCENARIOS[1..] {
        assert!(row.optimistic_cm < row.intermediate_cm && row.intermediate_cm < row.pessimistic_cm);
    }
    let mid_2050 = FUTURE_SCENARIOS.iter().find(|r| r.year == 2050).expect("2050 row");
    assert_eq!(mid_2050.intermediate_cm, tideline_core::scoring::BASE_RISE_CM);
}
