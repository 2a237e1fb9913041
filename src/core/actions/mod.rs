pub mod cancellation;
pub mod compute_atlas;
pub mod render_atlas;
