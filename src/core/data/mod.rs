pub mod atlas;
pub mod colour;
pub mod complex;
pub mod grid_index;
pub mod pixel_buffer;
pub mod region;
pub mod run_params;
pub mod sampling_grid;
