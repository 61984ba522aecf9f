//! Input normalization tests: clamping, non-finite recovery, policy de-duplication.

use tideline_core::{
    config::{Dial, SimConfig},
    policy::{normalize, normalize_with_report, InputAdjustment, Policy, RawPolicyInputs},
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn raw(carbon: f64, renewable: f64, tax: f64, sea_wall: f64, ecosystem: f64, policies: &[&str]) -> RawPolicyInputs {
    RawPolicyInputs {
        carbon_reduction_pct: carbon,
        renewable_energy_pct: renewable,
        carbon_tax_per_ton: tax,
        sea_wall_investment_trillion: sea_wall,
        ecosystem_restoration_pct: ecosystem,
        selected_policies: policies.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn in_range_snapshot_passes_through_untouched() {
    let config = SimConfig::standard();
    let (inputs, adjustments) = normalize_with_report(
        &raw(40.0, 60.0, 30_000.0, 20.0, 50.0, &["building_efficiency", "carbon_neutral_city"]),
        &config,
    );

    assert!(adjustments.is_empty(), "unexpected adjustments: {adjustments:?}");
    assert_eq!(inputs.carbon_reduction_pct, 40.0);
    assert_eq!(inputs.carbon_tax_per_ton, 30_000.0);
    assert_eq!(inputs.policy_count(), 2);
    assert!(inputs.selected_policies.contains(&Policy::BuildingEfficiency));
    assert!(inputs.selected_policies.contains(&Policy::CarbonNeutralCity));
}

#[test]
fn out_of_range_values_are_clamped_not_rejected() {
    init_logging();
    let config = SimConfig::standard();
    let (inputs, adjustments) =
        normalize_with_report(&raw(95.0, 5.0, -10.0, 80.0, 101.0, &[]), &config);

    assert_eq!(inputs.carbon_reduction_pct, 80.0);
    assert_eq!(inputs.renewable_energy_pct, 20.0);
    assert_eq!(inputs.carbon_tax_per_ton, 0.0);
    assert_eq!(inputs.sea_wall_investment_trillion, 50.0);
    assert_eq!(inputs.ecosystem_restoration_pct, 100.0);

    assert_eq!(adjustments.len(), 5);
    assert_eq!(
        adjustments[0],
        InputAdjustment::Clamped { dial: Dial::CarbonReductionPct, raw: 95.0, clamped: 80.0 }
    );
}

#[test]
fn non_finite_values_fall_back_to_dial_default() {
    init_logging();
    let config = SimConfig::standard();
    let (inputs, adjustments) = normalize_with_report(
        &raw(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 20.0, 50.0, &[]),
        &config,
    );

    assert_eq!(inputs.carbon_reduction_pct, 40.0);
    assert_eq!(inputs.renewable_energy_pct, 60.0);
    assert_eq!(inputs.carbon_tax_per_ton, 30_000.0);
    assert_eq!(adjustments.len(), 3);
    assert!(matches!(
        adjustments[0],
        InputAdjustment::NonFinite { dial: Dial::CarbonReductionPct, .. }
    ));
}

#[test]
fn duplicate_and_unknown_policies_are_dropped() {
    init_logging();
    let config = SimConfig::standard();
    let (inputs, adjustments) = normalize_with_report(
        &raw(40.0, 60.0, 30_000.0, 20.0, 50.0, &[
            "green_tech_rnd",
            "green_tech_rnd",
            " climate_education ",
            "free_lunch",
        ]),
        &config,
    );

    assert_eq!(inputs.policy_count(), 2);
    assert!(adjustments.contains(&InputAdjustment::DuplicatePolicyDropped { policy: Policy::GreenTechRnd }));
    assert!(adjustments.contains(&InputAdjustment::UnknownPolicyDropped { key: "free_lunch".into() }));
}

#[test]
fn all_six_policies_fit() {
    let keys: Vec<&str> = Policy::ALL.iter().map(|p| p.key()).collect();
    let inputs = normalize(&raw(0.0, 20.0, 0.0, 0.0, 0.0, &keys), &SimConfig::standard());
    assert_eq!(inputs.policy_count(), 6);
}

#[test]
fn normalized_values_always_lie_in_dial_ranges() {
    let config = SimConfig::standard();
    let probes = [-1e12, -1.0, 0.0, 17.0, 55.5, 1e12];
    for &value in &probes {
        let inputs = normalize(&raw(value, value, value, value, value, &[]), &config);
        for dial in Dial::ALL {
            let range = config.dial(dial);
            assert!(
                range.contains(inputs.get(dial)),
                "{} = {} outside [{}, {}]",
                dial.key(),
                inputs.get(dial),
                range.min_value,
                range.max_value
            );
        }
    }
}

#[test]
fn policy_keys_parse_back() {
    for policy in Policy::ALL {
        assert_eq!(policy.key().parse::<Policy>().expect("known key"), policy);
        assert!(!policy.label().is_empty());
    }
    assert!("solar_roads".parse::<Policy>().is_err());
}

#[test]
fn missing_fields_deserialize_to_widget_defaults() {
    let parsed: RawPolicyInputs =
        serde_json::from_str(r#"{ "carbon_reduction_pct": 70 }"#).expect("partial snapshot");
    assert_eq!(parsed.carbon_reduction_pct, 70.0);
    assert_eq!(parsed.renewable_energy_pct, 60.0);
    assert_eq!(parsed.selected_policies, vec!["building_efficiency", "carbon_neutral_city"]);
}
