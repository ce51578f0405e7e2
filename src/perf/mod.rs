pub mod input;
pub mod landing;
pub mod markers;
pub mod profile;
pub mod takeoff;

pub use input::{
    AutobrakeMode, AutobrakeSetting, LandingFlaps, LandingInput, RunwayCondition, TakeoffFlaps,
    TakeoffInput, Weather,
};
pub use landing::LandingPerf;
pub use markers::{MarkerLabel, RunwayMarker};
pub use profile::{PerfProfile, ProfileSource, ProfileVariant};
pub use takeoff::{TakeoffPerf, TrimDirection, TrimSetting};

use log::debug;

use crate::atmosphere::density_altitude;
use crate::runway::RunwayState;
use crate::utils::PerfError;

/// Computes the takeoff variant of the performance result. Pure: every call
/// derives its own atmosphere and runway state from the input record.
pub fn compute_takeoff(
    input: &TakeoffInput,
    profile: &PerfProfile,
) -> Result<TakeoffPerf, PerfError> {
    input.validate()?;
    let runway = RunwayState::derive(
        &input.runway,
        input.weather.wind_dir_deg,
        input.weather.wind_speed_kt,
    )?;
    let density_alt_ft = density_altitude(
        runway.elevation_ft,
        input.weather.qnh_hpa,
        input.weather.oat_c,
    );
    debug!(
        "takeoff rwy {} density alt {:.0} ft headwind {} kt",
        runway.ident, density_alt_ft, runway.headwind_kt
    );
    takeoff::calculate(input, &runway, density_alt_ft, profile)
}

/// Computes the landing variant of the performance result.
pub fn compute_landing(
    input: &LandingInput,
    profile: &PerfProfile,
) -> Result<LandingPerf, PerfError> {
    input.validate()?;
    let runway = RunwayState::derive(
        &input.runway,
        input.weather.wind_dir_deg,
        input.weather.wind_speed_kt,
    )?;
    let density_alt_ft = density_altitude(
        runway.elevation_ft,
        input.weather.qnh_hpa,
        input.weather.oat_c,
    );
    debug!(
        "landing rwy {} density alt {:.0} ft headwind {} kt",
        runway.ident, density_alt_ft, runway.headwind_kt
    );
    landing::calculate(input, &runway, density_alt_ft, profile)
}
