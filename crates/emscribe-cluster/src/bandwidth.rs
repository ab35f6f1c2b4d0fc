//! Cross-validated bandwidth selection over a log-spaced grid

use crate::kde::DensityEstimator;
use emscribe_core::PipelineError;
use rayon::prelude::*;

/// Natural-log-spaced grid of `count` values from `min` to `max` inclusive.
/// Denser at small scales, where most files cluster tightly.
pub fn log_spaced_grid(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count <= 1 || min >= max {
        return vec![min];
    }
    let (ln_min, ln_max) = (min.ln(), max.ln());
    let step = (ln_max - ln_min) / (count - 1) as f64;
    (0..count)
        .map(|i| (ln_min + step * i as f64).exp())
        .collect()
}

/// Pick the bandwidth maximizing total held-out log-likelihood.
///
/// Each candidate's score is independent, so the grid is scored in
/// parallel. Ties keep the smallest candidate for determinism.
pub fn select_bandwidth<E: DensityEstimator + Sync>(
    estimator: &E,
    samples: &[f64],
    grid: &[f64],
) -> Result<f64, PipelineError> {
    let scores: Vec<(f64, f64)> = grid
        .par_iter()
        .map(|&h| (h, estimator.loo_log_likelihood(samples, h)))
        .collect();

    let mut best: Option<(f64, f64)> = None;
    for &(h, score) in &scores {
        if !score.is_finite() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((h, score)),
        }
    }

    best.map(|(h, _)| h).ok_or(PipelineError::BandwidthSearch {
        candidates: grid.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kde::GaussianKde;

    #[test]
    fn test_grid_endpoints_and_size() {
        let grid = log_spaced_grid(0.5, 98.0, 35);
        assert_eq!(grid.len(), 35);
        assert!((grid[0] - 0.5).abs() < 1e-9);
        assert!((grid[34] - 98.0).abs() < 1e-6);
    }

    #[test]
    fn test_grid_log_spacing_denser_at_small_scales() {
        let grid = log_spaced_grid(1.0, 100.0, 35);
        let first_step = grid[1] - grid[0];
        let last_step = grid[34] - grid[33];
        assert!(
            first_step < last_step,
            "log grid should widen toward large scales: {} vs {}",
            first_step,
            last_step
        );
    }

    #[test]
    fn test_grid_degenerate_range() {
        assert_eq!(log_spaced_grid(2.0, 2.0, 35), vec![2.0]);
    }

    #[test]
    fn test_grid_monotonic() {
        let grid = log_spaced_grid(0.01, 500.0, 35);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_select_returns_grid_member() {
        let kde = GaussianKde::new();
        let samples = [0.0, 1.0, 2.0, 100.0, 101.0];
        let grid = log_spaced_grid(1.0, 98.0, 35);
        let h = select_bandwidth(&kde, &samples, &grid).unwrap();
        assert!(grid.iter().any(|&g| (g - h).abs() < 1e-12));
    }

    #[test]
    fn test_select_fails_without_finite_scores() {
        struct AlwaysNan;
        impl DensityEstimator for AlwaysNan {
            fn loo_log_likelihood(&self, _: &[f64], _: f64) -> f64 {
                f64::NAN
            }
            fn log_density(&self, _: &[f64], _: f64, points: &[f64]) -> Vec<f64> {
                vec![f64::NAN; points.len()]
            }
        }

        let result = select_bandwidth(&AlwaysNan, &[0.0, 1.0], &[0.5, 1.0]);
        assert!(matches!(
            result,
            Err(PipelineError::BandwidthSearch { candidates: 2 })
        ));
    }
}
