use crate::core::fractals::mandelbrot::errors::{EngineError, ParameterError};

/// Per-run iteration settings, validated once so the per-point loop can
/// rely on `threshold >= 1` and `limit > 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunParams {
    threshold: u32,
    limit: f64,
}

impl RunParams {
    pub fn new(threshold: u32, limit: f64) -> Result<Self, EngineError> {
        if threshold == 0 {
            return Err(ParameterError::ZeroThreshold.into());
        }

        // `!(limit > 0.0)` also rejects NaN
        if !(limit > 0.0) {
            return Err(ParameterError::NonPositiveLimit { limit }.into());
        }

        Ok(Self { threshold, limit })
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Largest count any point can report.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.threshold - 1
    }
}
