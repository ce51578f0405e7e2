use crate::utils::deg_to_rad;

/// Signed head/tailwind component along a runway heading, rounded to the
/// nearest knot. Positive is headwind, negative tailwind. Angles are
/// normalized before the cosine so out-of-range directions are accepted.
pub fn headwind_component(wind_dir_deg: f64, wind_speed_kt: f64, runway_heading_deg: f64) -> i32 {
    let delta = (wind_dir_deg - runway_heading_deg).rem_euclid(360.0);
    (wind_speed_kt * deg_to_rad(delta).cos()).round() as i32
}
