mod common;

use common::{create_test_takeoff_input, weather_with_wind};
use perfcalc::{
    compute_takeoff, MarkerLabel, PerfError, PerfProfile, RunwayCondition, TakeoffFlaps,
    TrimDirection,
};
use pretty_assertions::assert_eq;

#[test]
fn test_baseline_regression() {
    // 68 t, CG 33.1, CONF 1+F, standard day, calm, 2500 m sea-level runway.
    let input = create_test_takeoff_input();
    let result = compute_takeoff(&input, &PerfProfile::default()).unwrap();

    assert_eq!(result.density_alt_ft, 0);
    assert_eq!(result.headwind_kt, 0);
    assert_eq!(result.v1, 139);
    assert_eq!(result.vr, 144);
    assert_eq!(result.v2, 149);
    assert_eq!(result.flap_retract, 159);
    assert_eq!(result.slat_retract, 179);
    assert_eq!(result.green_dot, 221);
    assert_eq!(result.flex_temp_c, 24);
    assert_eq!(result.trim.direction, TrimDirection::NoseDown);
    assert_eq!(result.trim.to_string(), "DN1.1");
    assert_eq!(result.thr_red_alt_ft, 1500);
    assert_eq!(result.eng_out_accel_alt_ft, 1500);
}

#[test]
fn test_speed_ordering_across_weights_and_configs() {
    let profile = PerfProfile::default();
    for weight in (40000..=80000).step_by(2500) {
        for flaps in [TakeoffFlaps::OneF, TakeoffFlaps::Two, TakeoffFlaps::Three] {
            let mut input = create_test_takeoff_input();
            input.weight_kg = f64::from(weight);
            input.flaps = flaps;
            let result = compute_takeoff(&input, &profile).unwrap();
            assert!(result.v1 <= result.vr, "V1 > VR at {weight} kg {flaps:?}");
            assert!(result.vr <= result.v2, "VR > V2 at {weight} kg {flaps:?}");
        }
    }
}

#[test]
fn test_v1_capped_at_vr_with_extreme_conditions() {
    // Large shift plus a wet runway drags the raw V1 well below VR; a hot
    // high runway pushes VR around. V1 must track but never exceed VR.
    let mut input = create_test_takeoff_input();
    input.to_shift_m = 1000.0;
    input.runway_condition = RunwayCondition::Wet;
    input.weather = weather_with_wind(90.0, 20.0); // tailwind on runway 27
    let result = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert!(result.v1 <= result.vr);
}

#[test]
fn test_wet_runway_lowers_v1() {
    let dry = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    let mut input = create_test_takeoff_input();
    input.runway_condition = RunwayCondition::Wet;
    let wet = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert_eq!(wet.v1, dry.v1 - 8);
    assert_eq!(wet.vr, dry.vr);
}

#[test]
fn test_tailwind_lowers_v1() {
    let calm = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    let mut input = create_test_takeoff_input();
    input.weather = weather_with_wind(90.0, 10.0); // 10 kt tailwind on runway 27
    let tailwind = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert!(tailwind.v1 < calm.v1);
    // Headwind changes nothing in the takeoff speed model.
    input.weather = weather_with_wind(270.0, 10.0);
    let headwind = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert_eq!(headwind.v1, calm.v1);
}

#[test]
fn test_density_altitude_raises_speeds() {
    let mut input = create_test_takeoff_input();
    input.runway.elevation_ft = 2000.0;
    let hot_high = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    let baseline = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    assert!(hot_high.v1 > baseline.v1);
    assert!(hot_high.vr > baseline.vr);
    assert!(hot_high.flex_temp_c < baseline.flex_temp_c);
}

#[test]
fn test_cold_day_does_not_reduce_speeds() {
    let mut input = create_test_takeoff_input();
    input.weather.oat_c = -20.0;
    input.weather.qnh_hpa = 1035.0;
    let cold = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    let baseline = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    assert_eq!(cold.v1, baseline.v1);
    assert_eq!(cold.vr, baseline.vr);
}

#[test]
fn test_flex_clamped_between_oat_and_ceiling() {
    let profile = PerfProfile::default();
    for weight in (40000..=80000).step_by(5000) {
        for oat in [-10.0, 15.0, 38.0] {
            for elevation in [0.0, 3000.0] {
                let mut input = create_test_takeoff_input();
                input.weight_kg = f64::from(weight);
                input.weather.oat_c = oat;
                input.runway.elevation_ft = elevation;
                let result = compute_takeoff(&input, &profile).unwrap();
                assert!(result.flex_temp_c >= oat as i32);
                assert!(result.flex_temp_c <= 65);
            }
        }
    }
}

#[test]
fn test_packs_and_anti_ice_penalties() {
    let baseline = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    let mut input = create_test_takeoff_input();
    input.packs = true;
    let packs = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert_eq!(packs.flex_temp_c, baseline.flex_temp_c - 3);
    input.anti_ice = true;
    let both = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    assert_eq!(both.flex_temp_c, baseline.flex_temp_c - 8);
}

#[test]
fn test_markers_ordered_and_labelled() {
    let result = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    let labels: Vec<_> = result.markers.iter().map(|m| m.label).collect();
    assert_eq!(labels, vec![MarkerLabel::V1, MarkerLabel::Vr, MarkerLabel::V2]);
    assert!(result.markers[0].percent < result.markers[1].percent);
    assert!(result.markers[1].percent < result.markers[2].percent);
}

#[test]
fn test_takeoff_shift_moves_markers_downfield() {
    let baseline = compute_takeoff(&create_test_takeoff_input(), &PerfProfile::default()).unwrap();
    let mut input = create_test_takeoff_input();
    input.to_shift_m = 500.0;
    let shifted = compute_takeoff(&input, &PerfProfile::default()).unwrap();
    for (a, b) in baseline.markers.iter().zip(&shifted.markers) {
        assert!(b.distance_m > a.distance_m);
    }
}

#[test]
fn test_rejects_malformed_runway_identifier() {
    let mut input = create_test_takeoff_input();
    input.runway.identifier = "---".to_string();
    let err = compute_takeoff(&input, &PerfProfile::default()).unwrap_err();
    assert!(matches!(err, PerfError::InvalidRunwayFormat(_)));
}

#[test]
fn test_rejects_zero_length_runway() {
    let mut input = create_test_takeoff_input();
    input.runway.length_ft = 0.0;
    let err = compute_takeoff(&input, &PerfProfile::default()).unwrap_err();
    assert!(matches!(err, PerfError::InvalidInput(_)));
}

#[test]
fn test_rejects_out_of_range_weight() {
    let mut input = create_test_takeoff_input();
    input.weight_kg = 85000.0;
    assert!(compute_takeoff(&input, &PerfProfile::default()).is_err());
}
