use std::fmt;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("density must be at least 1")]
    ZeroDensity,
    #[error("density {density} produces more grid points than can be addressed")]
    DensityTooLarge { density: usize },
    #[error("threshold must be at least 1")]
    ZeroThreshold,
    #[error("divergence limit must be positive, got {limit}")]
    NonPositiveLimit { limit: f64 },
}

/// Caller-input failures raised before any point is evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid {axis} axis bounds: lower {lower} must be finite and below upper {upper}")]
    InvalidRegion { axis: Axis, lower: f64, upper: f64 },
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}
