pub const STANDARD_PRESSURE_HPA: f64 = 1013.0; // hPa
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0; // degC
pub const ISA_LAPSE_C_PER_1000_FT: f64 = 2.0; // degC per 1000 ft, rule-of-thumb lapse
pub const FT_PER_HPA: f64 = 27.0; // ft per hPa near sea level, rule-of-thumb
pub const DENSITY_ALT_FT_PER_C: f64 = 120.0; // ft per degC of ISA deviation, rule-of-thumb

pub const FT_TO_M: f64 = 0.3048;

// Input limits
pub const MIN_WEIGHT_KG: f64 = 40000.0;
pub const MAX_WEIGHT_KG: f64 = 80000.0;
pub const MIN_CG_PCT: f64 = 10.0;
pub const MAX_CG_PCT: f64 = 45.0;
pub const MAX_TO_SHIFT_M: f64 = 1000.0;
