use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::errors::{EngineError, ParameterError};

/// `count` evenly spaced samples from `lower` to `upper` inclusive.
///
/// With a single sample only `lower` is produced. The final sample is pinned
/// to `upper` so accumulated rounding never moves the far edge.
fn linspace(lower: f64, upper: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![lower];
    }

    let step = (upper - lower) / (count - 1) as f64;
    let mut samples: Vec<f64> = (0..count).map(|k| lower + k as f64 * step).collect();
    samples[count - 1] = upper;

    samples
}

/// Sample coordinates on both axes of a [`Region`].
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    region: Region,
    real_axis: Vec<f64>,
    imag_axis: Vec<f64>,
}

impl SamplingGrid {
    pub fn new(region: Region, density: usize) -> Result<Self, EngineError> {
        if density == 0 {
            return Err(ParameterError::ZeroDensity.into());
        }

        if density.checked_mul(density).is_none() {
            return Err(ParameterError::DensityTooLarge { density }.into());
        }

        Ok(Self {
            region,
            real_axis: linspace(region.x_min(), region.x_max(), density),
            imag_axis: linspace(region.y_min(), region.y_max(), density),
        })
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn density(&self) -> usize {
        self.real_axis.len()
    }

    #[must_use]
    pub fn real_axis(&self) -> &[f64] {
        &self.real_axis
    }

    #[must_use]
    pub fn imag_axis(&self) -> &[f64] {
        &self.imag_axis
    }

    /// Complex sample at grid indices `(i, j)`.
    ///
    /// Panics when either index is outside the grid.
    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Complex {
        Complex::new(self.real_axis[i], self.imag_axis[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_region() -> Region {
        Region::new(-2.25, 0.75, -1.5, 1.5).unwrap()
    }

    #[test]
    fn test_grid_includes_both_endpoints() {
        let grid = SamplingGrid::new(default_region(), 3).unwrap();

        assert_eq!(grid.real_axis(), &[-2.25, -0.75, 0.75]);
        assert_eq!(grid.imag_axis(), &[-1.5, 0.0, 1.5]);
    }

    #[test]
    fn test_grid_with_density_one_samples_lower_bound() {
        let grid = SamplingGrid::new(default_region(), 1).unwrap();

        assert_eq!(grid.density(), 1);
        assert_eq!(grid.point(0, 0), Complex::new(-2.25, -1.5));
    }

    #[test]
    fn test_grid_last_sample_is_exactly_upper_bound() {
        let region = Region::new(0.1, 0.7, -0.3, 0.9).unwrap();
        let grid = SamplingGrid::new(region, 7).unwrap();

        assert_eq!(grid.real_axis()[6], 0.7);
        assert_eq!(grid.imag_axis()[6], 0.9);
    }

    #[test]
    fn test_grid_samples_are_strictly_increasing() {
        let grid = SamplingGrid::new(default_region(), 50).unwrap();

        assert!(grid.real_axis().windows(2).all(|w| w[0] < w[1]));
        assert!(grid.imag_axis().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_grid_point_pairs_real_and_imaginary_indices() {
        let grid = SamplingGrid::new(default_region(), 3).unwrap();

        assert_eq!(grid.point(0, 2), Complex::new(-2.25, 1.5));
        assert_eq!(grid.point(2, 0), Complex::new(0.75, -1.5));
    }

    #[test]
    fn test_grid_rejects_zero_density() {
        assert_eq!(
            SamplingGrid::new(default_region(), 0),
            Err(EngineError::InvalidParameter(ParameterError::ZeroDensity))
        );
    }

    #[test]
    fn test_grid_rejects_unaddressable_density() {
        let density = usize::MAX / 2;

        assert_eq!(
            SamplingGrid::new(default_region(), density),
            Err(EngineError::InvalidParameter(
                ParameterError::DensityTooLarge { density }
            ))
        );
    }
}
