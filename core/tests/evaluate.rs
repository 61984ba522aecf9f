//! End-to-end pipeline tests through the simulator.

use tideline_core::{
    config::SimConfig,
    engine::{evaluate, PolicySimulator},
    grade::{Grade, Tone},
    policy::{InputAdjustment, RawPolicyInputs},
    suggestion::Suggestion,
};

#[test]
fn opening_dashboard_evaluation() {
    let simulator = PolicySimulator::standard();
    let evaluation = simulator.evaluate(&simulator.default_inputs());

    assert!((evaluation.result.projected_rise_cm - 12.8).abs() < 1e-9);
    assert!((evaluation.result.adaptation_score - 2.4).abs() < 1e-9);
    assert_eq!(evaluation.result.grade, Grade::Guardian);
    assert_eq!(evaluation.banner.grade, Grade::Guardian);
    assert_eq!(evaluation.banner.tone, Tone::Good);
    assert!(evaluation.adjustments.is_empty());

    assert_eq!(evaluation.trajectory.len(), 6);
    assert_eq!(
        evaluation.trajectory[5].scenario_cm.to_bits(),
        evaluation.result.projected_rise_cm.to_bits()
    );

    assert_eq!(
        evaluation.suggestions,
        vec![
            Suggestion::RaiseCarbonReduction,
            Suggestion::RaiseRenewableShare,
            Suggestion::SelectMorePolicies,
            Suggestion::RaiseCoastalDefense,
        ]
    );
    assert!(!evaluation.fully_optimized());
}

#[test]
fn clamps_are_reported_alongside_the_result() {
    let raw = RawPolicyInputs {
        carbon_reduction_pct: 120.0,
        ..RawPolicyInputs::default()
    };
    let evaluation = evaluate(&raw);

    assert_eq!(evaluation.inputs.carbon_reduction_pct, 80.0);
    assert_eq!(evaluation.adjustments.len(), 1);
    assert!(matches!(evaluation.adjustments[0], InputAdjustment::Clamped { .. }));
}

#[test]
fn fully_optimized_snapshot() {
    let raw = RawPolicyInputs {
        carbon_reduction_pct: 80.0,
        renewable_energy_pct: 100.0,
        carbon_tax_per_ton: 100_000.0,
        sea_wall_investment_trillion: 50.0,
        ecosystem_restoration_pct: 100.0,
        selected_policies: vec![
            "electric_vehicle_mandate".into(),
            "building_efficiency".into(),
            "carbon_neutral_city".into(),
            "international_cooperation".into(),
        ],
    };
    let evaluation = evaluate(&raw);

    assert_eq!(evaluation.result.projected_rise_cm, 8.0);
    assert!(evaluation.fully_optimized());
    assert!(evaluation.banner.celebrate);
}

#[test]
fn evaluation_serializes_for_the_ui() {
    let evaluation = evaluate(&RawPolicyInputs::default());
    let json = serde_json::to_value(&evaluation).expect("serialize evaluation");

    assert_eq!(json["result"]["grade"], "guardian");
    assert_eq!(json["trajectory"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["suggestions"][0], "raise_carbon_reduction");
    assert_eq!(json["banner"]["tone"], "good");
}

#[test]
fn custom_ranges_drive_clamping() {
    let mut config = SimConfig::standard();
    config.dials[0].max_value = 50.0;
    config.validate().expect("narrowed range still valid");

    let simulator = PolicySimulator::new(config);
    let raw = RawPolicyInputs {
        carbon_reduction_pct: 80.0,
        ..simulator.default_inputs()
    };
    assert_eq!(simulator.evaluate(&raw).inputs.carbon_reduction_pct, 50.0);
}
