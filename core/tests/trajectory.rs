//! Scenario trajectory tests.

use tideline_core::trajectory::{trajectory, BASELINE_CM, PRESENT_DAY_CM, YEARS};

#[test]
fn endpoints_are_pinned() {
    for projected in [8.0, 12.8, 17.3, 24.4, 26.0, 31.7] {
        let points = trajectory(projected);
        assert_eq!(points.len(), YEARS.len());

        let first = points.first().expect("non-empty trajectory");
        let last = points.last().expect("non-empty trajectory");
        assert_eq!(first.year, 2024);
        assert_eq!(first.scenario_cm, PRESENT_DAY_CM);
        assert_eq!(last.year, 2050);
        assert_eq!(
            last.scenario_cm.to_bits(),
            projected.to_bits(),
            "2050 point must equal the projection exactly"
        );
    }
}

#[test]
fn middle_points_follow_fraction_table() {
    let points = trajectory(21.0);
    let expected = [11.0, 13.0, 15.0, 18.0, 20.0, 21.0];
    for (point, want) in points.iter().zip(expected) {
        assert!(
            (point.scenario_cm - want).abs() < 1e-9,
            "{}: expected {want}, got {}",
            point.year,
            point.scenario_cm
        );
    }
}

#[test]
fn baseline_is_fixed_reference_trend() {
    let a = trajectory(8.0);
    let b = trajectory(40.0);
    let baseline: Vec<f64> = a.iter().map(|p| p.baseline_cm).collect();
    assert_eq!(baseline, BASELINE_CM.to_vec());
    assert!(a.iter().zip(&b).all(|(x, y)| x.baseline_cm == y.baseline_cm));
}

#[test]
fn floor_projection_descends_from_present() {
    let points = trajectory(8.0);
    assert!(
        points.windows(2).all(|w| w[1].scenario_cm <= w[0].scenario_cm),
        "projection below present day should never climb: {points:?}"
    );
}

#[test]
fn restartable() {
    assert_eq!(trajectory(17.5), trajectory(17.5));
}
