use log::warn;
use serde::{Deserialize, Serialize};

use crate::runway::RunwayRecord;
use crate::utils::{
    PerfError, ISA_SEA_LEVEL_TEMP_C, MAX_CG_PCT, MAX_TO_SHIFT_M, MAX_WEIGHT_KG, MIN_CG_PCT,
    MIN_WEIGHT_KG, STANDARD_PRESSURE_HPA,
};

/// Weather observation feeding a computation. Sourced from METAR by an
/// external collaborator; `Default` is the standard-day fallback used when
/// the lookup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub oat_c: f64,
    pub qnh_hpa: f64,
    pub wind_dir_deg: f64,
    pub wind_speed_kt: f64,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            oat_c: ISA_SEA_LEVEL_TEMP_C,
            qnh_hpa: STANDARD_PRESSURE_HPA,
            wind_dir_deg: 0.0,
            wind_speed_kt: 0.0,
        }
    }
}

/// Takeoff flap/slat configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TakeoffFlaps {
    #[serde(rename = "1+F")]
    OneF,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

/// Landing flap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingFlaps {
    #[serde(rename = "CONF 3")]
    Conf3,
    #[serde(rename = "FULL")]
    Full,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwayCondition {
    #[default]
    Dry,
    Wet,
}

/// Autobrake selector position. `Auto` lets the engine pick a tier from the
/// remaining runway margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutobrakeMode {
    Auto,
    Lo,
    Med,
    Max,
}

/// Autobrake tier actually applied to the distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutobrakeSetting {
    Lo,
    Med,
    Max,
}

/// Flat input record for a takeoff computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeoffInput {
    pub weight_kg: f64,
    pub cg_pct: f64,
    pub flaps: TakeoffFlaps,
    pub packs: bool,
    pub anti_ice: bool,
    pub to_shift_m: f64,
    #[serde(default)]
    pub runway_condition: RunwayCondition,
    #[serde(default)]
    pub weather: Weather,
    pub runway: RunwayRecord,
}

/// Flat input record for a landing computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingInput {
    pub weight_kg: f64,
    pub cg_pct: f64,
    pub flaps: LandingFlaps,
    pub autobrake: AutobrakeMode,
    pub reversers: bool,
    #[serde(default)]
    pub weather: Weather,
    pub runway: RunwayRecord,
}

fn validate_common(weight_kg: f64, cg_pct: f64, weather: &Weather) -> Result<(), PerfError> {
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        warn!("rejected weight {weight_kg} kg");
        return Err(PerfError::InvalidInput(format!(
            "weight {weight_kg} kg outside [{MIN_WEIGHT_KG}, {MAX_WEIGHT_KG}]"
        )));
    }
    if !(MIN_CG_PCT..=MAX_CG_PCT).contains(&cg_pct) {
        warn!("rejected CG {cg_pct}%");
        return Err(PerfError::InvalidInput(format!(
            "CG {cg_pct}% outside [{MIN_CG_PCT}, {MAX_CG_PCT}]"
        )));
    }
    if weather.wind_speed_kt < 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "wind speed {} kt is negative",
            weather.wind_speed_kt
        )));
    }
    Ok(())
}

impl TakeoffInput {
    pub fn validate(&self) -> Result<(), PerfError> {
        validate_common(self.weight_kg, self.cg_pct, &self.weather)?;
        if !(0.0..=MAX_TO_SHIFT_M).contains(&self.to_shift_m) {
            return Err(PerfError::InvalidInput(format!(
                "takeoff shift {} m outside [0, {MAX_TO_SHIFT_M}]",
                self.to_shift_m
            )));
        }
        Ok(())
    }
}

impl LandingInput {
    pub fn validate(&self) -> Result<(), PerfError> {
        validate_common(self.weight_kg, self.cg_pct, &self.weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runway() -> RunwayRecord {
        RunwayRecord {
            identifier: "27".to_string(),
            length_ft: 8202.0,
            elevation_ft: 0.0,
            slope_pct: 0.0,
        }
    }

    #[test]
    fn test_weather_default_is_standard_day() {
        let weather = Weather::default();
        assert_eq!(weather.oat_c, 15.0);
        assert_eq!(weather.qnh_hpa, 1013.0);
        assert_eq!(weather.wind_speed_kt, 0.0);
    }

    #[test]
    fn test_weight_bounds_rejected() {
        let mut input = TakeoffInput {
            weight_kg: 39999.0,
            cg_pct: 25.0,
            flaps: TakeoffFlaps::OneF,
            packs: false,
            anti_ice: false,
            to_shift_m: 0.0,
            runway_condition: RunwayCondition::Dry,
            weather: Weather::default(),
            runway: test_runway(),
        };
        assert!(input.validate().is_err());
        input.weight_kg = 40000.0;
        assert!(input.validate().is_ok());
        input.weight_kg = 80001.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_shift_bounds_rejected() {
        let mut input = TakeoffInput {
            weight_kg: 68000.0,
            cg_pct: 25.0,
            flaps: TakeoffFlaps::OneF,
            packs: false,
            anti_ice: false,
            to_shift_m: 1001.0,
            runway_condition: RunwayCondition::Dry,
            weather: Weather::default(),
            runway: test_runway(),
        };
        assert!(input.validate().is_err());
        input.to_shift_m = 1000.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_flap_selector_wire_names() {
        assert_eq!(serde_json::to_string(&TakeoffFlaps::OneF).unwrap(), "\"1+F\"");
        assert_eq!(serde_json::to_string(&LandingFlaps::Conf3).unwrap(), "\"CONF 3\"");
    }
}
