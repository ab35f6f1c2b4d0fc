//! Gaussian kernel density estimation over 1-D timestamp samples

const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Pluggable density backend so the numerical engine can be swapped
pub trait DensityEstimator {
    /// Total leave-one-out cross-validated log-likelihood of `samples`
    /// under the given bandwidth.
    fn loo_log_likelihood(&self, samples: &[f64], bandwidth: f64) -> f64;

    /// Log-density at each of `points`, fit over the full `samples` set.
    fn log_density(&self, samples: &[f64], bandwidth: f64, points: &[f64]) -> Vec<f64>;
}

/// From-scratch Gaussian KDE
#[derive(Debug, Clone, Default)]
pub struct GaussianKde;

impl GaussianKde {
    pub fn new() -> Self {
        Self
    }

    /// Log of the kernel mixture at `x`, excluding sample index `skip`
    /// (usize::MAX to include all). Uses log-sum-exp so wide gaps between
    /// clusters never underflow to a flat minus-infinity plateau.
    fn log_mixture(samples: &[f64], bandwidth: f64, x: f64, skip: usize) -> f64 {
        let mut exponents = Vec::with_capacity(samples.len());
        for (j, &s) in samples.iter().enumerate() {
            if j == skip {
                continue;
            }
            let z = (x - s) / bandwidth;
            exponents.push(-0.5 * z * z);
        }
        let n = exponents.len() as f64;
        log_sum_exp(&exponents) - n.ln() - bandwidth.ln() - LN_SQRT_2PI
    }
}

impl DensityEstimator for GaussianKde {
    fn loo_log_likelihood(&self, samples: &[f64], bandwidth: f64) -> f64 {
        if samples.len() < 2 || bandwidth <= 0.0 {
            return f64::NEG_INFINITY;
        }
        samples
            .iter()
            .enumerate()
            .map(|(i, &x)| Self::log_mixture(samples, bandwidth, x, i))
            .sum()
    }

    fn log_density(&self, samples: &[f64], bandwidth: f64, points: &[f64]) -> Vec<f64> {
        points
            .iter()
            .map(|&x| Self::log_mixture(samples, bandwidth, x, usize::MAX))
            .collect()
    }
}

fn log_sum_exp(exponents: &[f64]) -> f64 {
    let max = exponents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    let sum: f64 = exponents.iter().map(|&e| (e - max).exp()).sum();
    max + sum.ln()
}
