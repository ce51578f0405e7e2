use serde::{Deserialize, Serialize};

use crate::perf::profile::{LandingCoefficients, TakeoffCoefficients};
use crate::utils::PerfError;

/// A runway-relative marker for visualization: percent of runway length
/// plus the distance from the threshold in whole meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayMarker {
    pub label: MarkerLabel,
    pub percent: f64,
    pub distance_m: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerLabel {
    V1,
    Vr,
    V2,
    Touchdown,
    Stop,
    Margin,
}

fn marker(label: MarkerLabel, fraction: f64, runway_length_m: f64) -> RunwayMarker {
    RunwayMarker {
        label,
        percent: fraction * 100.0,
        distance_m: (fraction * runway_length_m) as i32,
    }
}

fn guard_length(runway_length_m: f64) -> Result<(), PerfError> {
    if runway_length_m <= 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "runway length must be positive for marker projection, got {runway_length_m} m"
        )));
    }
    Ok(())
}

/// Projects V1/VR/V2 onto the runway via a power-law relation between speed
/// ratio and ground roll, offset by the takeoff shift.
#[allow(clippy::too_many_arguments)]
pub fn takeoff_markers(
    to: &TakeoffCoefficients,
    v1: i32,
    vr: i32,
    v2: i32,
    weight_t: f64,
    slope_pct: f64,
    wet: bool,
    shift_m: f64,
    runway_length_m: f64,
) -> Result<Vec<RunwayMarker>, PerfError> {
    guard_length(runway_length_m)?;

    let friction = if wet { to.roll_wet_factor } else { 1.0 };
    let roll_m = to.roll_reference_m
        * (weight_t / to.roll_reference_weight_t).powi(2)
        * (1.0 + slope_pct / to.roll_slope_divisor)
        * friction;
    let liftoff_kt = f64::from(vr + to.liftoff_margin_kt);
    let shift_fraction = shift_m / runway_length_m;

    let fraction = |speed_kt: i32| {
        shift_fraction
            + (f64::from(speed_kt) / liftoff_kt).powf(to.roll_speed_exponent) * roll_m
                / runway_length_m
    };

    Ok(vec![
        marker(MarkerLabel::V1, fraction(v1), runway_length_m),
        marker(MarkerLabel::Vr, fraction(vr), runway_length_m),
        marker(MarkerLabel::V2, fraction(v2), runway_length_m),
    ])
}

/// Places the touchdown-zone, stop, and safety-margin points for a landing.
pub fn landing_markers(
    ldg: &LandingCoefficients,
    distance_m: f64,
    factored_m: f64,
    runway_length_m: f64,
) -> Result<Vec<RunwayMarker>, PerfError> {
    guard_length(runway_length_m)?;

    let touchdown = ldg.touchdown_zone_m / runway_length_m;
    let stop = (ldg.touchdown_zone_m + distance_m) / runway_length_m;
    let margin = (ldg.touchdown_zone_m + factored_m) / runway_length_m;

    Ok(vec![
        marker(MarkerLabel::Touchdown, touchdown, runway_length_m),
        marker(MarkerLabel::Stop, stop, runway_length_m),
        marker(MarkerLabel::Margin, margin, runway_length_m),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::profile::PerfProfile;

    #[test]
    fn test_zero_length_rejected() {
        let profile = PerfProfile::ultra();
        assert!(takeoff_markers(&profile.takeoff, 139, 144, 149, 68.0, 0.0, false, 0.0, 0.0)
            .is_err());
        assert!(landing_markers(&profile.landing, 1450.0, 1667.5, 0.0).is_err());
    }

    #[test]
    fn test_takeoff_markers_ordered() {
        let profile = PerfProfile::ultra();
        let markers =
            takeoff_markers(&profile.takeoff, 139, 144, 149, 68.0, 0.0, false, 0.0, 2500.0)
                .unwrap();
        assert_eq!(markers.len(), 3);
        assert!(markers[0].percent < markers[1].percent);
        assert!(markers[1].percent < markers[2].percent);
        // V2 marker sits at the full estimated roll
        assert!(markers[2].distance_m <= 2500);
    }

    #[test]
    fn test_shift_offsets_all_markers() {
        let profile = PerfProfile::ultra();
        let base = takeoff_markers(&profile.takeoff, 139, 144, 149, 68.0, 0.0, false, 0.0, 2500.0)
            .unwrap();
        let shifted =
            takeoff_markers(&profile.takeoff, 139, 144, 149, 68.0, 0.0, false, 250.0, 2500.0)
                .unwrap();
        for (a, b) in base.iter().zip(&shifted) {
            assert!((b.percent - a.percent - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_landing_markers_cumulative() {
        let profile = PerfProfile::ultra();
        let markers = landing_markers(&profile.landing, 1450.0, 1667.5, 2500.0).unwrap();
        assert_eq!(markers[0].distance_m, 300);
        assert_eq!(markers[1].distance_m, 1750);
        assert_eq!(markers[2].distance_m, 1967);
        assert!(markers[0].percent < markers[1].percent);
        assert!(markers[1].percent < markers[2].percent);
    }
}
