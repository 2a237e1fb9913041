use thiserror::Error;
use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_atlas::generate_atlas_parallel_rayon::{
    generate_atlas_parallel_rayon, generate_atlas_parallel_rayon_cancelable,
};
use crate::core::actions::compute_atlas::generate_atlas_serial::generate_atlas_serial;
use crate::core::data::atlas::ResultAtlas;
use crate::core::data::region::Region;
use crate::core::data::run_params::RunParams;
use crate::core::data::sampling_grid::SamplingGrid;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::EngineError;

/// Failure of a cancel-aware atlas computation.
///
/// Cancellation is expected control flow for callers that supersede a
/// request, so it is kept apart from input errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComputeAtlasError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn build_algorithm(region: Region, density: usize, params: RunParams) -> Result<MandelbrotAlgorithm, EngineError> {
    let grid = SamplingGrid::new(region, density)?;

    debug!(
        x_min = region.x_min(),
        x_max = region.x_max(),
        y_min = region.y_min(),
        y_max = region.y_max(),
        density,
        threshold = params.threshold(),
        limit = params.limit(),
        "computing atlas"
    );

    Ok(MandelbrotAlgorithm::new(grid, params))
}

/// Evaluates the escape-time recurrence over a `density × density` grid
/// spanning `region`, distributing rows over the rayon pool.
///
/// Inputs are validated before any point is evaluated; no partial atlas is
/// ever returned.
#[tracing::instrument(level = "debug", skip_all, fields(density = density, threshold = params.threshold()))]
pub fn compute_atlas(region: Region, density: usize, params: RunParams) -> Result<ResultAtlas, EngineError> {
    let algorithm = build_algorithm(region, density, params)?;
    let counts = generate_atlas_parallel_rayon(&algorithm);

    Ok(ResultAtlas::from_counts(region, density, params.threshold(), counts))
}

/// Like [`compute_atlas`], but aborts with [`ComputeAtlasError::Cancelled`]
/// once `cancel` reports true between point evaluations.
pub fn compute_atlas_cancelable<C: CancelToken>(
    region: Region,
    density: usize,
    params: RunParams,
    cancel: &C,
) -> Result<ResultAtlas, ComputeAtlasError> {
    let algorithm = build_algorithm(region, density, params)?;
    let counts = generate_atlas_parallel_rayon_cancelable(&algorithm, cancel)?;

    Ok(ResultAtlas::from_counts(region, density, params.threshold(), counts))
}

/// Sequential reference evaluation; bit-identical to [`compute_atlas`].
pub fn compute_atlas_serial(region: Region, density: usize, params: RunParams) -> Result<ResultAtlas, EngineError> {
    let algorithm = build_algorithm(region, density, params)?;
    let counts = generate_atlas_serial(&algorithm);

    Ok(ResultAtlas::from_counts(region, density, params.threshold(), counts))
}
