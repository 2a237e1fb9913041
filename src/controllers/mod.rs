pub mod background;
pub mod cli;
pub mod data;
pub mod errors;
pub mod ports;
