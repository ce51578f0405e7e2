use crate::utils::{
    DENSITY_ALT_FT_PER_C, FT_PER_HPA, ISA_LAPSE_C_PER_1000_FT, ISA_SEA_LEVEL_TEMP_C,
    STANDARD_PRESSURE_HPA,
};

/// Pressure altitude from field elevation and altimeter setting (ft).
#[inline]
pub fn pressure_altitude(elevation_ft: f64, qnh_hpa: f64) -> f64 {
    elevation_ft + (STANDARD_PRESSURE_HPA - qnh_hpa) * FT_PER_HPA
}

/// ISA temperature at the given elevation (degC).
#[inline]
pub fn isa_temperature(elevation_ft: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP_C - (elevation_ft / 1000.0) * ISA_LAPSE_C_PER_1000_FT
}

/// Density altitude: pressure altitude corrected for non-standard temperature (ft).
/// May be negative on a cold, high-pressure day; callers clamp where required.
#[inline]
pub fn density_altitude(elevation_ft: f64, qnh_hpa: f64, oat_c: f64) -> f64 {
    pressure_altitude(elevation_ft, qnh_hpa)
        + DENSITY_ALT_FT_PER_C * (oat_c - isa_temperature(elevation_ft))
}
