use crate::core::actions::compute_atlas::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_index::GridIndex;
use crate::core::data::run_params::RunParams;
use crate::core::data::sampling_grid::SamplingGrid;

/// Escape-time count for `c` under `z ← z² + c`, starting from `z = 0`.
///
/// Returns the step index `k` at which `|z|` first exceeds the limit. Points
/// that stay bounded for all `threshold` steps report the last step index,
/// `threshold - 1`, so the result always lies in `[0, threshold - 1]`.
#[must_use]
pub fn evaluate_point(c: Complex, params: RunParams) -> u32 {
    let mut z = Complex::ZERO;

    for step in 0..params.threshold() {
        z = z * z + c;

        if z.magnitude() > params.limit() {
            return step;
        }
    }

    params.max_count()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: SamplingGrid,
    params: RunParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn density(&self) -> usize {
        self.grid.density()
    }

    fn compute(&self, index: GridIndex) -> Self::Success {
        evaluate_point(self.grid.point(index.i, index.j), self.params)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: SamplingGrid, params: RunParams) -> Self {
        Self { grid, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::region::Region;

    fn params(threshold: u32, limit: f64) -> RunParams {
        RunParams::new(threshold, limit).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(evaluate_point(Complex::ZERO, params(10, 4.0)), 9);
        assert_eq!(evaluate_point(Complex::ZERO, params(1, 0.5)), 0);
        assert_eq!(evaluate_point(Complex::ZERO, params(120, 4.0)), 119);
    }

    #[test]
    fn test_point_beyond_limit_escapes_on_first_step() {
        assert_eq!(evaluate_point(Complex::new(5.0, 0.0), params(10, 4.0)), 0);
    }

    #[test]
    fn test_escape_step_is_reported_as_step_index() {
        // z1 = 3 stays within 4, z2 = 12 does not
        assert_eq!(evaluate_point(Complex::new(3.0, 0.0), params(10, 4.0)), 1);
    }

    #[test]
    fn test_default_region_corner_escapes_within_two_steps() {
        // z1 = c (|c| ≈ 2.70), z2 = 0.5625 + 5.25i (|z2| ≈ 5.28)
        assert_eq!(evaluate_point(Complex::new(-2.25, -1.5), params(10, 4.0)), 1);
    }

    #[test]
    fn test_bounded_points_report_threshold_minus_one() {
        // -2 settles on the fixed point 2, i cycles between -1+i and -i
        assert_eq!(evaluate_point(Complex::new(-2.0, 0.0), params(50, 4.0)), 49);
        assert_eq!(evaluate_point(Complex::new(0.0, 1.0), params(50, 4.0)), 49);
        assert_eq!(evaluate_point(Complex::new(0.25, 0.0), params(50, 4.0)), 49);
    }

    #[test]
    fn test_comparison_is_strictly_greater_than_limit() {
        // z1 = 2 exactly equals the limit and does not escape, z2 = 6 does
        assert_eq!(evaluate_point(Complex::new(2.0, 0.0), params(10, 2.0)), 1);
    }

    #[test]
    fn test_threshold_of_one_always_reports_zero() {
        assert_eq!(evaluate_point(Complex::new(100.0, 100.0), params(1, 4.0)), 0);
        assert_eq!(evaluate_point(Complex::new(0.1, 0.1), params(1, 4.0)), 0);
    }

    #[test]
    fn test_evaluate_point_is_deterministic() {
        let c = Complex::new(-0.7436, 0.1318);
        let p = params(500, 4.0);

        assert_eq!(evaluate_point(c, p), evaluate_point(c, p));
    }

    #[test]
    fn test_algorithm_computes_grid_sample() {
        let region = Region::new(-2.25, 0.75, -1.5, 1.5).unwrap();
        let grid = SamplingGrid::new(region, 3).unwrap();
        let algorithm = MandelbrotAlgorithm::new(grid, params(10, 4.0));

        assert_eq!(algorithm.density(), 3);
        assert_eq!(algorithm.compute(GridIndex { i: 0, j: 0 }), 1);
        assert_eq!(
            algorithm.compute(GridIndex { i: 1, j: 1 }),
            evaluate_point(Complex::new(-0.75, 0.0), params(10, 4.0))
        );
    }
}
