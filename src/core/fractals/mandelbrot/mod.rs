pub mod algorithm;
pub mod defaults;
pub mod errors;
