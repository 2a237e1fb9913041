use std::path::PathBuf;

use clap::Parser;

use crate::controllers::data::atlas_request::AtlasRequest;
use crate::core::data::region::Region;
use crate::core::data::run_params::RunParams;
use crate::core::fractals::mandelbrot::defaults::{
    DEFAULT_DENSITY, DEFAULT_LIMIT, DEFAULT_THRESHOLD, DEFAULT_X_MAX, DEFAULT_X_MIN,
    DEFAULT_Y_MAX, DEFAULT_Y_MIN,
};
use crate::core::fractals::mandelbrot::errors::EngineError;

/// Render the Mandelbrot set over a region of the complex plane
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot-atlas", version, long_about = None)]
pub struct CliArgs {
    /// Real axis lower bound
    #[arg(long, default_value_t = DEFAULT_X_MIN, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Real axis upper bound
    #[arg(long, default_value_t = DEFAULT_X_MAX, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Imaginary axis lower bound
    #[arg(long, default_value_t = DEFAULT_Y_MIN, allow_negative_numbers = true)]
    pub y_min: f64,

    /// Imaginary axis upper bound
    #[arg(long, default_value_t = DEFAULT_Y_MAX, allow_negative_numbers = true)]
    pub y_max: f64,

    /// Samples per axis
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: usize,

    /// Iterations attempted per point
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Magnitude above which a point is considered unbounded
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: f64,

    /// Overlay a coordinate grid
    #[arg(long)]
    pub grid: bool,

    /// Output image path (binary PPM)
    #[arg(short, long, value_name = "FILE", default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl CliArgs {
    pub fn to_request(&self) -> Result<AtlasRequest, EngineError> {
        Ok(AtlasRequest {
            region: Region::new(self.x_min, self.x_max, self.y_min, self.y_max)?,
            density: self.density,
            params: RunParams::new(self.threshold, self.limit)?,
            show_grid: self.grid,
        })
    }
}
