use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::{Axis, EngineError};

/// Rectangular window of the complex plane, inclusive of its bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    lower: Complex,
    upper: Complex,
}

fn validate_axis(axis: Axis, lower: f64, upper: f64) -> Result<(), EngineError> {
    // `!(lower < upper)` also rejects NaN
    if !lower.is_finite() || !upper.is_finite() || !(lower < upper) {
        return Err(EngineError::InvalidRegion { axis, lower, upper });
    }

    Ok(())
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, EngineError> {
        validate_axis(Axis::Real, x_min, x_max)?;
        validate_axis(Axis::Imaginary, y_min, y_max)?;

        Ok(Self {
            lower: Complex::new(x_min, y_min),
            upper: Complex::new(x_max, y_max),
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.lower.real
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.upper.real
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.lower.imag
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.upper.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper.real - self.lower.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper.imag - self.lower.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.lower.real <= point.real
            && self.lower.imag <= point.imag
            && self.upper.real >= point.real
            && self.upper.imag >= point.imag
    }
}
