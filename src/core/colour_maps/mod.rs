pub mod errors;
pub mod jet;
