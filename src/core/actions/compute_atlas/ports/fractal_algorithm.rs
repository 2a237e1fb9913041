use crate::core::data::grid_index::GridIndex;

pub trait FractalAlgorithm {
    type Success;

    fn density(&self) -> usize;

    fn compute(&self, index: GridIndex) -> Self::Success;
}
