use crate::core::data::region::Region;
use crate::core::data::run_params::RunParams;
use crate::core::fractals::mandelbrot::errors::EngineError;

pub const DEFAULT_X_MIN: f64 = -2.25;
pub const DEFAULT_X_MAX: f64 = 0.75;
pub const DEFAULT_Y_MIN: f64 = -1.5;
pub const DEFAULT_Y_MAX: f64 = 1.5;
pub const DEFAULT_DENSITY: usize = 1000;
pub const DEFAULT_THRESHOLD: u32 = 120;
pub const DEFAULT_LIMIT: f64 = 4.0;

pub fn default_region() -> Result<Region, EngineError> {
    Region::new(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_Y_MIN, DEFAULT_Y_MAX)
}

pub fn default_run_params() -> Result<RunParams, EngineError> {
    RunParams::new(DEFAULT_THRESHOLD, DEFAULT_LIMIT)
}
