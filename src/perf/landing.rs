use serde::{Deserialize, Serialize};

use crate::perf::input::{AutobrakeMode, AutobrakeSetting, LandingFlaps, LandingInput};
use crate::perf::markers::{landing_markers, RunwayMarker};
use crate::perf::profile::{LandingCoefficients, PerfProfile};
use crate::runway::RunwayState;
use crate::utils::PerfError;

/// Landing performance output bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPerf {
    pub vls: i32,
    pub vapp: i32,
    /// Minimum ground speed to target on approach.
    pub min_ground_speed: i32,
    /// Tier applied to the distance, either the manual selection or the
    /// AUTO recommendation.
    pub autobrake: AutobrakeSetting,
    pub distance_unfactored_m: i32,
    pub distance_m: i32,
    /// Regulatory factored distance; reported regardless of runway
    /// sufficiency, the go/no-go call is downstream.
    pub distance_factored_m: i32,
    pub density_alt_ft: i32,
    pub headwind_kt: i32,
    pub markers: Vec<RunwayMarker>,
}

fn select_autobrake(
    mode: AutobrakeMode,
    margin_m: f64,
    ldg: &LandingCoefficients,
) -> AutobrakeSetting {
    match mode {
        AutobrakeMode::Lo => AutobrakeSetting::Lo,
        AutobrakeMode::Med => AutobrakeSetting::Med,
        AutobrakeMode::Max => AutobrakeSetting::Max,
        AutobrakeMode::Auto => {
            if margin_m <= ldg.auto_max_margin_m {
                AutobrakeSetting::Max
            } else if margin_m <= ldg.auto_med_margin_m {
                AutobrakeSetting::Med
            } else {
                AutobrakeSetting::Lo
            }
        }
    }
}

fn tier_factor(setting: AutobrakeSetting, ldg: &LandingCoefficients) -> f64 {
    match setting {
        AutobrakeSetting::Lo => ldg.autobrake_lo_factor,
        AutobrakeSetting::Med => ldg.autobrake_med_factor,
        AutobrakeSetting::Max => ldg.autobrake_max_factor,
    }
}

pub fn calculate(
    input: &LandingInput,
    runway: &RunwayState,
    density_alt_ft: f64,
    profile: &PerfProfile,
) -> Result<LandingPerf, PerfError> {
    let ldg = &profile.landing;
    let headwind = runway.headwind_kt;
    let da_factor = 1.0 + density_alt_ft.max(0.0) / 1000.0 * 0.01;

    let vls_base =
        ldg.reference_speed_kt * (input.weight_kg / ldg.reference_weight_kg).sqrt() * da_factor;
    let mut vls = vls_base.round() as i32;
    if input.flaps == LandingFlaps::Conf3 {
        vls += ldg.conf_three_penalty_kt;
    }

    // Headwind additive, never below the minimum once any headwind exists,
    // capped so VAPP stays within VLS + max.
    let wind_additive = if headwind > 0 {
        ((f64::from(headwind) / ldg.wind_divisor).round() as i32)
            .clamp(ldg.wind_additive_min_kt, ldg.wind_additive_max_kt)
    } else {
        0
    };
    let vapp = vls + wind_additive;
    let min_ground_speed = vapp - headwind.max(0);

    let unfactored = ldg.distance_base_m * (input.weight_kg / ldg.reference_weight_kg)
        * (1.0 - ldg.headwind_credit_per_kt * f64::from(headwind))
        * da_factor;
    // The headwind credit is a linear approximation; past its range it
    // produces a nonsensical distance rather than a short one.
    if unfactored <= 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "headwind {headwind} kt drives the landing distance to {unfactored:.0} m"
        )));
    }

    let margin_m = f64::from(runway.length_m) - unfactored;
    let autobrake = select_autobrake(input.autobrake, margin_m, ldg);
    let reverser_factor = if input.reversers {
        ldg.reverser_credit
    } else {
        1.0
    };
    let distance = unfactored * tier_factor(autobrake, ldg) * reverser_factor;
    let factored = distance * ldg.regulatory_factor;

    let markers = landing_markers(ldg, distance, factored, f64::from(runway.length_m))?;

    Ok(LandingPerf {
        vls,
        vapp,
        min_ground_speed,
        autobrake,
        distance_unfactored_m: unfactored.round() as i32,
        distance_m: distance.round() as i32,
        distance_factored_m: factored.round() as i32,
        density_alt_ft: density_alt_ft.round() as i32,
        headwind_kt: headwind,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::profile::PerfProfile;

    #[test]
    fn test_auto_tier_boundaries() {
        let ldg = PerfProfile::ultra().landing;
        assert_eq!(
            select_autobrake(AutobrakeMode::Auto, 300.0, &ldg),
            AutobrakeSetting::Max
        );
        assert_eq!(
            select_autobrake(AutobrakeMode::Auto, 800.0, &ldg),
            AutobrakeSetting::Med
        );
        assert_eq!(
            select_autobrake(AutobrakeMode::Auto, 801.0, &ldg),
            AutobrakeSetting::Lo
        );
        assert_eq!(
            select_autobrake(AutobrakeMode::Auto, 299.0, &ldg),
            AutobrakeSetting::Max
        );
    }

    #[test]
    fn test_manual_mode_overrides_margin() {
        let ldg = PerfProfile::ultra().landing;
        assert_eq!(
            select_autobrake(AutobrakeMode::Lo, 100.0, &ldg),
            AutobrakeSetting::Lo
        );
        assert_eq!(
            select_autobrake(AutobrakeMode::Max, 2000.0, &ldg),
            AutobrakeSetting::Max
        );
    }
}
