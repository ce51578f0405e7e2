use std::fmt;

use serde::{Deserialize, Serialize};

use crate::perf::input::{RunwayCondition, TakeoffInput};
use crate::perf::markers::{takeoff_markers, RunwayMarker};
use crate::perf::profile::PerfProfile;
use crate::runway::RunwayState;
use crate::utils::{interp, PerfError};

/// Horizontal stabilizer trim: nose direction plus magnitude to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimSetting {
    pub direction: TrimDirection,
    pub magnitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimDirection {
    NoseUp,
    NoseDown,
    Neutral,
}

impl TrimSetting {
    /// Linear THS model: CG forward of the reference trims nose up, aft
    /// trims nose down.
    pub fn from_cg(cg_pct: f64, reference_cg_pct: f64, span_pct: f64) -> Self {
        let value = (cg_pct - reference_cg_pct) / span_pct;
        let direction = if value > 0.0 {
            TrimDirection::NoseDown
        } else if value < 0.0 {
            TrimDirection::NoseUp
        } else {
            TrimDirection::Neutral
        };
        Self {
            direction,
            magnitude: (value.abs() * 10.0).round() / 10.0,
        }
    }
}

impl fmt::Display for TrimSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            TrimDirection::NoseUp => write!(f, "UP{:.1}", self.magnitude),
            TrimDirection::NoseDown => write!(f, "DN{:.1}", self.magnitude),
            TrimDirection::Neutral => write!(f, "{:.1}", self.magnitude),
        }
    }
}

/// Takeoff performance output bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeoffPerf {
    pub v1: i32,
    pub vr: i32,
    pub v2: i32,
    /// Flap retraction speed (F).
    pub flap_retract: i32,
    /// Slat retraction speed (S).
    pub slat_retract: i32,
    /// Clean / green-dot speed (O).
    pub green_dot: i32,
    pub flex_temp_c: i32,
    pub trim: TrimSetting,
    pub thr_red_alt_ft: i32,
    pub accel_alt_ft: i32,
    pub eng_out_accel_alt_ft: i32,
    pub density_alt_ft: i32,
    pub headwind_kt: i32,
    pub markers: Vec<RunwayMarker>,
}

pub fn calculate(
    input: &TakeoffInput,
    runway: &RunwayState,
    density_alt_ft: f64,
    profile: &PerfProfile,
) -> Result<TakeoffPerf, PerfError> {
    let to = &profile.takeoff;
    let weight_t = input.weight_kg / 1000.0;
    let headwind = runway.headwind_kt;
    let wet = input.runway_condition == RunwayCondition::Wet;
    let flap_factor = to.flap_factor(input.flaps);
    // Density altitude below standard does not reduce the required speeds.
    let da_gain = density_alt_ft.max(0.0);

    let v1_base = interp(
        input.weight_kg,
        to.weight_lo_kg,
        to.weight_hi_kg,
        to.v1_lo_kt,
        to.v1_hi_kt,
    ) * flap_factor;
    let mut v1 = (v1_base - input.to_shift_m * to.shift_penalty_kt_per_m
        + da_gain / to.v1_density_divisor_ft) as i32;
    if wet {
        v1 -= to.wet_penalty_kt as i32;
    }
    if headwind < 0 {
        v1 -= (f64::from(-headwind) * to.tailwind_penalty_per_kt) as i32;
    }

    let vr = (interp(
        input.weight_kg,
        to.weight_lo_kg,
        to.weight_hi_kg,
        to.vr_lo_kt,
        to.vr_hi_kt,
    ) * flap_factor
        + da_gain / to.vr_density_divisor_ft) as i32;
    // V1 must never exceed VR.
    let v1 = v1.min(vr);
    let v2 = vr + to.v2_margin_kt;

    let mut flex = to.flex_base_c
        - weight_t * to.flex_weight_penalty_c_per_tonne
        - runway.slope_pct * to.flex_slope_penalty_c_per_pct
        - density_alt_ft / to.flex_density_divisor_ft
        - input.to_shift_m * to.flex_shift_penalty_c_per_m;
    if input.packs {
        flex -= to.flex_packs_penalty_c;
    }
    if input.anti_ice {
        flex -= to.flex_anti_ice_penalty_c;
    }
    // A flex temperature below ambient would not reduce thrust.
    let flex_temp_c = (flex as i32)
        .max(input.weather.oat_c as i32)
        .min(to.flex_ceiling_c);

    let trim = TrimSetting::from_cg(input.cg_pct, to.trim_reference_cg_pct, to.trim_cg_span_pct);
    let green_dot = (to.green_dot_per_tonne_kt * weight_t + to.green_dot_base_kt) as i32;
    let accel_alt_ft = (runway.elevation_ft + to.accel_height_agl_ft) as i32;

    let markers = takeoff_markers(
        to,
        v1,
        vr,
        v2,
        weight_t,
        runway.slope_pct,
        wet,
        input.to_shift_m,
        f64::from(runway.length_m),
    )?;

    Ok(TakeoffPerf {
        v1,
        vr,
        v2,
        flap_retract: v1 + to.flap_retract_offset_kt,
        slat_retract: v1 + to.slat_retract_offset_kt,
        green_dot,
        flex_temp_c,
        trim,
        thr_red_alt_ft: accel_alt_ft,
        accel_alt_ft,
        eng_out_accel_alt_ft: accel_alt_ft,
        density_alt_ft: density_alt_ft.round() as i32,
        headwind_kt: headwind,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_directions() {
        let aft = TrimSetting::from_cg(33.1, 25.0, 7.5);
        assert_eq!(aft.direction, TrimDirection::NoseDown);
        assert_eq!(aft.magnitude, 1.1);
        assert_eq!(aft.to_string(), "DN1.1");

        let fwd = TrimSetting::from_cg(17.5, 25.0, 7.5);
        assert_eq!(fwd.direction, TrimDirection::NoseUp);
        assert_eq!(fwd.to_string(), "UP1.0");

        let neutral = TrimSetting::from_cg(25.0, 25.0, 7.5);
        assert_eq!(neutral.direction, TrimDirection::Neutral);
        assert_eq!(neutral.to_string(), "0.0");
    }
}
