mod atmosphere;
mod perf;
mod runway;
mod utils;
mod wind;

pub use atmosphere::{density_altitude, isa_temperature, pressure_altitude};
pub use perf::{
    compute_landing, compute_takeoff, AutobrakeMode, AutobrakeSetting, LandingFlaps, LandingInput,
    LandingPerf, MarkerLabel, PerfProfile, ProfileSource, ProfileVariant, RunwayCondition,
    RunwayMarker, TakeoffFlaps, TakeoffInput, TakeoffPerf, TrimDirection, TrimSetting, Weather,
};
pub use runway::{length_m, slope_pct, RunwayIdent, RunwayRecord, RunwayState, Side};
pub use utils::errors::PerfError;
pub use wind::headwind_component;
