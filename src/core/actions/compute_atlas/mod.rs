pub mod compute_atlas;
pub mod generate_atlas_parallel_rayon;
pub mod generate_atlas_serial;
pub mod ports;
