use thiserror::Error;

use crate::core::actions::render_atlas::render_atlas::RenderAtlasError;
use crate::core::fractals::mandelbrot::errors::EngineError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Render(#[from] RenderAtlasError),
}
