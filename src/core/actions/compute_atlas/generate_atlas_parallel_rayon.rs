use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_POINTS,
};
use crate::core::actions::compute_atlas::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_index::GridIndex;

/// Evaluates the grid in parallel using rayon's work-stealing scheduler.
///
/// Each real-axis row is one unit of work. Results come back in the same
/// row-major order as [`generate_atlas_serial`](super::generate_atlas_serial::generate_atlas_serial).
pub fn generate_atlas_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    match generate_atlas_parallel_rayon_cancelable(algorithm, &NeverCancel) {
        Ok(results) => results,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_atlas_parallel_rayon`], but polls `cancel` at the start of
/// every row and every [`CANCEL_CHECK_INTERVAL_POINTS`] points within a row.
///
/// On cancellation no partial results are returned.
pub fn generate_atlas_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    C: CancelToken,
{
    let density = algorithm.density();

    let rows: Result<Vec<Vec<Alg::Success>>, Cancelled> = (0..density)
        .into_par_iter()
        .map(|i| {
            let mut row = Vec::with_capacity(density);

            for j in 0..density {
                if j % CANCEL_CHECK_INTERVAL_POINTS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                row.push(algorithm.compute(GridIndex { i, j }));
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_atlas::generate_atlas_serial::generate_atlas_serial;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct StubAlgorithm {
        density: usize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn density(&self) -> usize {
            self.density
        }

        fn compute(&self, index: GridIndex) -> Self::Success {
            (index.i * 1000 + index.j) as u64
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubAlgorithm { density: 10 };

        assert_eq!(
            generate_atlas_parallel_rayon(&algorithm),
            generate_atlas_serial(&algorithm)
        );
    }

    #[test]
    fn test_rayon_with_single_point() {
        let algorithm = StubAlgorithm { density: 1 };

        assert_eq!(generate_atlas_parallel_rayon(&algorithm), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubAlgorithm { density: 200 };

        assert_eq!(
            generate_atlas_parallel_rayon(&algorithm),
            generate_atlas_serial(&algorithm)
        );
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubAlgorithm { density: 10 };
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_atlas_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancelable_cancels_after_k_polls() {
        let algorithm = StubAlgorithm { density: 6 };
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = generate_atlas_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert_eq!(result, Err(Cancelled));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let algorithm = StubAlgorithm { density: 5 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_atlas_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "Expected at least 5 polls for 5 rows, got {}", polls);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        // 2049 points per row polls at 0, 1024 and 2048
        let algorithm = StubAlgorithm { density: 2049 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_atlas_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert_eq!(polls, 3 * 2049);
    }
}
