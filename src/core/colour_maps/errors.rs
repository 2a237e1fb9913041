use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("count {count} exceeds colour scale maximum {max_count}")]
    CountExceedsMax { count: u32, max_count: u32 },
}
