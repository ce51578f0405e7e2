use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::perf::input::TakeoffFlaps;
use crate::utils::PerfError;

/// A versioned coefficient set for the performance engine. Every empirical
/// constant in the speed, flex and distance models lives here so that
/// historical product revisions are selectable data, not branching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfProfile {
    /// Name of the profile, defaults to the variant name.
    pub name: String,
    /// Coefficients for the takeoff calculator and roll projection.
    pub takeoff: TakeoffCoefficients,
    /// Coefficients for the landing calculator and marker projection.
    pub landing: LandingCoefficients,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeoffCoefficients {
    /// Interpolation span for the V-speed tables (kg).
    pub weight_lo_kg: f64,
    pub weight_hi_kg: f64,
    /// V1 at the low/high end of the weight span (kt).
    pub v1_lo_kt: f64,
    pub v1_hi_kt: f64,
    /// VR at the low/high end of the weight span (kt).
    pub vr_lo_kt: f64,
    pub vr_hi_kt: f64,
    /// Fixed margin added to VR to obtain V2 (kt).
    pub v2_margin_kt: i32,
    /// Speed factors per flap configuration; more flap lifts at lower speed.
    pub conf_one_f_factor: f64,
    pub conf_two_factor: f64,
    pub conf_three_factor: f64,
    /// V1 penalty per meter of takeoff shift (kt/m).
    pub shift_penalty_kt_per_m: f64,
    /// Density-altitude gain divisors: speeds rise one knot per this many feet.
    pub v1_density_divisor_ft: f64,
    pub vr_density_divisor_ft: f64,
    /// Flat V1 penalty on a wet runway (kt).
    pub wet_penalty_kt: f64,
    /// V1 penalty per knot of tailwind (kt/kt).
    pub tailwind_penalty_per_kt: f64,
    /// Flap and slat retraction speed offsets above V1 (kt).
    pub flap_retract_offset_kt: i32,
    pub slat_retract_offset_kt: i32,
    /// Green-dot (clean) speed model: base + gain per tonne (kt).
    pub green_dot_base_kt: f64,
    pub green_dot_per_tonne_kt: f64,
    /// Flex temperature model (degC).
    pub flex_base_c: f64,
    pub flex_weight_penalty_c_per_tonne: f64,
    pub flex_slope_penalty_c_per_pct: f64,
    pub flex_density_divisor_ft: f64,
    pub flex_shift_penalty_c_per_m: f64,
    pub flex_packs_penalty_c: f64,
    pub flex_anti_ice_penalty_c: f64,
    /// Regulatory assumed-temperature ceiling (degC).
    pub flex_ceiling_c: i32,
    /// Trim model: reference CG and span (percent MAC).
    pub trim_reference_cg_pct: f64,
    pub trim_cg_span_pct: f64,
    /// Thrust reduction / acceleration height above the threshold (ft AGL).
    pub accel_height_agl_ft: f64,
    /// Takeoff roll projection: baseline roll at the reference weight (m).
    pub roll_reference_m: f64,
    pub roll_reference_weight_t: f64,
    /// Slope divisor for the roll estimate (percent per unit factor).
    pub roll_slope_divisor: f64,
    /// Roll lengthening factor on a wet runway.
    pub roll_wet_factor: f64,
    /// Power-law exponent relating speed ratio to roll fraction.
    pub roll_speed_exponent: f64,
    /// Margin above VR used as the liftoff reference speed (kt).
    pub liftoff_margin_kt: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingCoefficients {
    /// VLS reference pair: speed at the reference weight, full flaps (kt, kg).
    pub reference_speed_kt: f64,
    pub reference_weight_kg: f64,
    /// VLS penalty when landing in CONF 3 instead of FULL (kt).
    pub conf_three_penalty_kt: i32,
    /// Wind additive: headwind divided by this, clamped to [min, max] (kt).
    pub wind_divisor: f64,
    pub wind_additive_min_kt: i32,
    pub wind_additive_max_kt: i32,
    /// Unfactored distance at the reference weight, sea level, calm (m).
    pub distance_base_m: f64,
    /// Distance credit per knot of headwind (fraction/kt).
    pub headwind_credit_per_kt: f64,
    /// Distance multipliers per autobrake tier; a lower tier stops longer.
    pub autobrake_lo_factor: f64,
    pub autobrake_med_factor: f64,
    pub autobrake_max_factor: f64,
    /// AUTO tier selection margins: remaining runway after the unfactored
    /// stop at or below these picks the harder tier (m).
    pub auto_med_margin_m: f64,
    pub auto_max_margin_m: f64,
    /// Distance factor with reversers deployed.
    pub reverser_credit: f64,
    /// Regulatory safety factor applied to the final distance.
    pub regulatory_factor: f64,
    /// Touchdown-zone distance from the threshold for marker projection (m).
    pub touchdown_zone_m: f64,
}

impl TakeoffCoefficients {
    pub fn flap_factor(&self, flaps: TakeoffFlaps) -> f64 {
        match flaps {
            TakeoffFlaps::OneF => self.conf_one_f_factor,
            TakeoffFlaps::Two => self.conf_two_factor,
            TakeoffFlaps::Three => self.conf_three_factor,
        }
    }
}

/// Named historical coefficient revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileVariant {
    /// Current revision.
    Ultra,
    /// Earlier revision with the old retraction-speed increments and a
    /// slightly more conservative flex and roll model.
    Classic,
}

/// Source for a coefficient profile: a programmed variant or a YAML file.
#[derive(Debug, Clone)]
pub enum ProfileSource {
    Programmed(ProfileVariant),
    File(PathBuf),
}

impl Default for PerfProfile {
    fn default() -> Self {
        Self::ultra()
    }
}

impl PerfProfile {
    /// Creates a profile from a given source.
    ///
    /// # Arguments
    /// * `source` - A `ProfileSource` specifying a programmed variant or a
    ///              YAML file to load.
    ///
    /// # Returns
    /// A `Result` containing the profile or an error if the file fails to
    /// load or the coefficients do not validate.
    pub fn new(source: ProfileSource) -> Result<Self, PerfError> {
        match source {
            ProfileSource::Programmed(variant) => Ok(Self::from_programmed(variant)),
            ProfileSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(variant: ProfileVariant) -> Self {
        match variant {
            ProfileVariant::Ultra => Self::ultra(),
            ProfileVariant::Classic => Self::classic(),
        }
    }

    pub fn ultra() -> Self {
        Self {
            name: "Ultra".to_string(),
            takeoff: TakeoffCoefficients {
                weight_lo_kg: 45000.0,
                weight_hi_kg: 80000.0,
                v1_lo_kt: 110.0,
                v1_hi_kt: 155.0,
                vr_lo_kt: 115.0,
                vr_hi_kt: 160.0,
                v2_margin_kt: 5,
                conf_one_f_factor: 1.0,
                conf_two_factor: 0.97,
                conf_three_factor: 0.95,
                shift_penalty_kt_per_m: 0.015,
                v1_density_divisor_ft: 1500.0,
                vr_density_divisor_ft: 2000.0,
                wet_penalty_kt: 8.0,
                tailwind_penalty_per_kt: 0.6,
                flap_retract_offset_kt: 20,
                slat_retract_offset_kt: 40,
                green_dot_base_kt: 85.0,
                green_dot_per_tonne_kt: 2.0,
                flex_base_c: 259.0,
                flex_weight_penalty_c_per_tonne: 3.45,
                flex_slope_penalty_c_per_pct: 3.8,
                flex_density_divisor_ft: 850.0,
                flex_shift_penalty_c_per_m: 0.02,
                flex_packs_penalty_c: 3.0,
                flex_anti_ice_penalty_c: 5.0,
                flex_ceiling_c: 65,
                trim_reference_cg_pct: 25.0,
                trim_cg_span_pct: 7.5,
                accel_height_agl_ft: 1500.0,
                roll_reference_m: 1600.0,
                roll_reference_weight_t: 68.0,
                roll_slope_divisor: 7.0,
                roll_wet_factor: 1.15,
                roll_speed_exponent: 2.1,
                liftoff_margin_kt: 5,
            },
            landing: LandingCoefficients {
                reference_speed_kt: 127.0,
                reference_weight_kg: 61000.0,
                conf_three_penalty_kt: 4,
                wind_divisor: 3.0,
                wind_additive_min_kt: 10,
                wind_additive_max_kt: 20,
                distance_base_m: 1450.0,
                headwind_credit_per_kt: 0.01,
                autobrake_lo_factor: 1.15,
                autobrake_med_factor: 1.0,
                autobrake_max_factor: 0.85,
                auto_med_margin_m: 800.0,
                auto_max_margin_m: 300.0,
                reverser_credit: 0.92,
                regulatory_factor: 1.15,
                touchdown_zone_m: 300.0,
            },
        }
    }

    pub fn classic() -> Self {
        let mut profile = Self::ultra();
        profile.name = "Classic".to_string();
        profile.takeoff.flap_retract_offset_kt = 15;
        profile.takeoff.slat_retract_offset_kt = 35;
        profile.takeoff.conf_two_factor = 0.98;
        profile.takeoff.conf_three_factor = 0.96;
        profile.takeoff.flex_base_c = 256.0;
        profile.takeoff.roll_speed_exponent = 2.0;
        profile.landing.distance_base_m = 1500.0;
        profile
    }

    /// Loads a profile from a flat YAML file.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PerfError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawProfile = serde_yaml::from_str(&file_contents)?;
        Self::from_raw(raw)
    }

    /// Converts a flat raw profile into the structured coefficient tables.
    fn from_raw(raw: RawProfile) -> Result<Self, PerfError> {
        let profile = Self {
            name: raw.name.clone(),
            takeoff: TakeoffCoefficients {
                weight_lo_kg: raw.to_weight_lo_kg,
                weight_hi_kg: raw.to_weight_hi_kg,
                v1_lo_kt: raw.to_v1_lo_kt,
                v1_hi_kt: raw.to_v1_hi_kt,
                vr_lo_kt: raw.to_vr_lo_kt,
                vr_hi_kt: raw.to_vr_hi_kt,
                v2_margin_kt: raw.to_v2_margin_kt,
                conf_one_f_factor: raw.to_conf_one_f_factor,
                conf_two_factor: raw.to_conf_two_factor,
                conf_three_factor: raw.to_conf_three_factor,
                shift_penalty_kt_per_m: raw.to_shift_penalty_kt_per_m,
                v1_density_divisor_ft: raw.to_v1_density_divisor_ft,
                vr_density_divisor_ft: raw.to_vr_density_divisor_ft,
                wet_penalty_kt: raw.to_wet_penalty_kt,
                tailwind_penalty_per_kt: raw.to_tailwind_penalty_per_kt,
                flap_retract_offset_kt: raw.to_flap_retract_offset_kt,
                slat_retract_offset_kt: raw.to_slat_retract_offset_kt,
                green_dot_base_kt: raw.to_green_dot_base_kt,
                green_dot_per_tonne_kt: raw.to_green_dot_per_tonne_kt,
                flex_base_c: raw.to_flex_base_c,
                flex_weight_penalty_c_per_tonne: raw.to_flex_weight_penalty_c_per_tonne,
                flex_slope_penalty_c_per_pct: raw.to_flex_slope_penalty_c_per_pct,
                flex_density_divisor_ft: raw.to_flex_density_divisor_ft,
                flex_shift_penalty_c_per_m: raw.to_flex_shift_penalty_c_per_m,
                flex_packs_penalty_c: raw.to_flex_packs_penalty_c,
                flex_anti_ice_penalty_c: raw.to_flex_anti_ice_penalty_c,
                flex_ceiling_c: raw.to_flex_ceiling_c,
                trim_reference_cg_pct: raw.to_trim_reference_cg_pct,
                trim_cg_span_pct: raw.to_trim_cg_span_pct,
                accel_height_agl_ft: raw.to_accel_height_agl_ft,
                roll_reference_m: raw.to_roll_reference_m,
                roll_reference_weight_t: raw.to_roll_reference_weight_t,
                roll_slope_divisor: raw.to_roll_slope_divisor,
                roll_wet_factor: raw.to_roll_wet_factor,
                roll_speed_exponent: raw.to_roll_speed_exponent,
                liftoff_margin_kt: raw.to_liftoff_margin_kt,
            },
            landing: LandingCoefficients {
                reference_speed_kt: raw.ldg_reference_speed_kt,
                reference_weight_kg: raw.ldg_reference_weight_kg,
                conf_three_penalty_kt: raw.ldg_conf_three_penalty_kt,
                wind_divisor: raw.ldg_wind_divisor,
                wind_additive_min_kt: raw.ldg_wind_additive_min_kt,
                wind_additive_max_kt: raw.ldg_wind_additive_max_kt,
                distance_base_m: raw.ldg_distance_base_m,
                headwind_credit_per_kt: raw.ldg_headwind_credit_per_kt,
                autobrake_lo_factor: raw.ldg_autobrake_lo_factor,
                autobrake_med_factor: raw.ldg_autobrake_med_factor,
                autobrake_max_factor: raw.ldg_autobrake_max_factor,
                auto_med_margin_m: raw.ldg_auto_med_margin_m,
                auto_max_margin_m: raw.ldg_auto_max_margin_m,
                reverser_credit: raw.ldg_reverser_credit,
                regulatory_factor: raw.ldg_regulatory_factor,
                touchdown_zone_m: raw.ldg_touchdown_zone_m,
            },
        };
        profile.validate()?;
        debug!("loaded profile '{}'", profile.name);
        Ok(profile)
    }

    fn validate(&self) -> Result<(), PerfError> {
        let to = &self.takeoff;
        let ldg = &self.landing;
        if to.weight_hi_kg <= to.weight_lo_kg {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': degenerate weight span",
                self.name
            )));
        }
        if to.v1_lo_kt <= 0.0 || to.vr_lo_kt <= 0.0 || to.roll_reference_m <= 0.0 {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': speeds and roll reference must be positive",
                self.name
            )));
        }
        if ldg.reference_weight_kg <= 0.0 || ldg.reference_speed_kt <= 0.0 {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': landing reference pair must be positive",
                self.name
            )));
        }
        if ldg.autobrake_lo_factor < ldg.autobrake_med_factor
            || ldg.autobrake_med_factor < ldg.autobrake_max_factor
        {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': autobrake factors must not increase with tier",
                self.name
            )));
        }
        if ldg.wind_additive_min_kt > ldg.wind_additive_max_kt {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': wind additive min {} kt exceeds max {} kt",
                self.name, ldg.wind_additive_min_kt, ldg.wind_additive_max_kt
            )));
        }
        if ldg.auto_max_margin_m > ldg.auto_med_margin_m {
            return Err(PerfError::InvalidInput(format!(
                "profile '{}': AUTO margin thresholds must not decrease with tier",
                self.name
            )));
        }
        Ok(())
    }
}

/// Flat YAML profile layout, mapped into the nested coefficient tables.
#[derive(Debug, Deserialize)]
pub struct RawProfile {
    pub name: String,

    /// Takeoff coefficients
    pub to_weight_lo_kg: f64,
    pub to_weight_hi_kg: f64,
    pub to_v1_lo_kt: f64,
    pub to_v1_hi_kt: f64,
    pub to_vr_lo_kt: f64,
    pub to_vr_hi_kt: f64,
    pub to_v2_margin_kt: i32,
    pub to_conf_one_f_factor: f64,
    pub to_conf_two_factor: f64,
    pub to_conf_three_factor: f64,
    pub to_shift_penalty_kt_per_m: f64,
    pub to_v1_density_divisor_ft: f64,
    pub to_vr_density_divisor_ft: f64,
    pub to_wet_penalty_kt: f64,
    pub to_tailwind_penalty_per_kt: f64,
    pub to_flap_retract_offset_kt: i32,
    pub to_slat_retract_offset_kt: i32,
    pub to_green_dot_base_kt: f64,
    pub to_green_dot_per_tonne_kt: f64,
    pub to_flex_base_c: f64,
    pub to_flex_weight_penalty_c_per_tonne: f64,
    pub to_flex_slope_penalty_c_per_pct: f64,
    pub to_flex_density_divisor_ft: f64,
    pub to_flex_shift_penalty_c_per_m: f64,
    pub to_flex_packs_penalty_c: f64,
    pub to_flex_anti_ice_penalty_c: f64,
    pub to_flex_ceiling_c: i32,
    pub to_trim_reference_cg_pct: f64,
    pub to_trim_cg_span_pct: f64,
    pub to_accel_height_agl_ft: f64,
    pub to_roll_reference_m: f64,
    pub to_roll_reference_weight_t: f64,
    pub to_roll_slope_divisor: f64,
    pub to_roll_wet_factor: f64,
    pub to_roll_speed_exponent: f64,
    pub to_liftoff_margin_kt: i32,

    /// Landing coefficients
    pub ldg_reference_speed_kt: f64,
    pub ldg_reference_weight_kg: f64,
    pub ldg_conf_three_penalty_kt: i32,
    pub ldg_wind_divisor: f64,
    pub ldg_wind_additive_min_kt: i32,
    pub ldg_wind_additive_max_kt: i32,
    pub ldg_distance_base_m: f64,
    pub ldg_headwind_credit_per_kt: f64,
    pub ldg_autobrake_lo_factor: f64,
    pub ldg_autobrake_med_factor: f64,
    pub ldg_autobrake_max_factor: f64,
    pub ldg_auto_med_margin_m: f64,
    pub ldg_auto_max_margin_m: f64,
    pub ldg_reverser_credit: f64,
    pub ldg_regulatory_factor: f64,
    pub ldg_touchdown_zone_m: f64,
}
