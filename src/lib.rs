mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::compute_atlas::compute_atlas::{
    ComputeAtlasError, compute_atlas, compute_atlas_cancelable, compute_atlas_serial,
};
pub use crate::core::actions::render_atlas::ports::colour_map::ColourMap;
pub use crate::core::actions::render_atlas::render_atlas::{RenderAtlasError, nice_ticks, render_atlas};
pub use crate::core::colour_maps::errors::ColourMapError;
pub use crate::core::colour_maps::jet::JetColourMap;
pub use crate::core::data::atlas::ResultAtlas;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::region::Region;
pub use crate::core::data::run_params::RunParams;
pub use crate::core::data::sampling_grid::SamplingGrid;
pub use crate::core::fractals::mandelbrot::algorithm::evaluate_point;
pub use crate::core::fractals::mandelbrot::defaults;
pub use crate::core::fractals::mandelbrot::errors::{Axis, EngineError, ParameterError};

pub use crate::controllers::background::{
    AtlasController, AtlasEvent, AtlasFailure, AtlasFrame, AtlasPresenterPort,
};
pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::data::atlas_request::AtlasRequest;
pub use crate::controllers::errors::RequestError;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::input::cli::args::CliArgs;
pub use crate::presenters::channel::channel_presenter::ChannelPresenter;
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
