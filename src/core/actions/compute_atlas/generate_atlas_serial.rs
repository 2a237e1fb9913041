use crate::core::actions::compute_atlas::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_index::GridIndex;

/// Evaluates every grid index in row-major order on the calling thread.
pub fn generate_atlas_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let density = algorithm.density();

    (0..density)
        .flat_map(|i| (0..density).map(move |j| GridIndex { i, j }))
        .map(|index| algorithm.compute(index))
        .collect()
}
