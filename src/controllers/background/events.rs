use std::time::Duration;

use crate::controllers::errors::RequestError;
use crate::core::data::atlas::ResultAtlas;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct AtlasFrame {
    pub generation: u64,
    pub atlas: ResultAtlas,
    pub pixel_buffer: PixelBuffer,
    pub compute_duration: Duration,
}

#[derive(Debug)]
pub struct AtlasFailure {
    pub generation: u64,
    pub error: RequestError,
}

#[derive(Debug)]
pub enum AtlasEvent {
    Completed(AtlasFrame),
    Failed(AtlasFailure),
}

impl AtlasEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Completed(frame) => frame.generation,
            Self::Failed(failure) => failure.generation,
        }
    }
}
