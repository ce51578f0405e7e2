use perfcalc::{
    AutobrakeMode, LandingFlaps, LandingInput, RunwayCondition, RunwayRecord, TakeoffFlaps,
    TakeoffInput, Weather,
};

/// Sea-level 2500 m runway with no slope.
pub fn create_test_runway() -> RunwayRecord {
    RunwayRecord {
        identifier: "27".to_string(),
        // 2500 m
        length_ft: 8202.1,
        elevation_ft: 0.0,
        slope_pct: 0.0,
    }
}

/// Standard-day takeoff input at the regression baseline weight.
pub fn create_test_takeoff_input() -> TakeoffInput {
    TakeoffInput {
        weight_kg: 68000.0,
        cg_pct: 33.1,
        flaps: TakeoffFlaps::OneF,
        packs: false,
        anti_ice: false,
        to_shift_m: 0.0,
        runway_condition: RunwayCondition::Dry,
        weather: Weather::default(),
        runway: create_test_runway(),
    }
}

/// Standard-day landing input at the landing reference weight.
pub fn create_test_landing_input() -> LandingInput {
    LandingInput {
        weight_kg: 61000.0,
        cg_pct: 28.0,
        flaps: LandingFlaps::Full,
        autobrake: AutobrakeMode::Auto,
        reversers: false,
        weather: Weather::default(),
        runway: create_test_runway(),
    }
}

/// Weather with a wind vector, otherwise standard day.
pub fn weather_with_wind(dir_deg: f64, speed_kt: f64) -> Weather {
    Weather {
        wind_dir_deg: dir_deg,
        wind_speed_kt: speed_kt,
        ..Weather::default()
    }
}
