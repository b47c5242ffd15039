//! Method-of-moments fit of an exponential distribution.
//!
//! For an exponential distribution E[Y] = 1/λ, so the moment estimator of the
//! rate is the reciprocal of the sample mean:
//!
//! ```text
//! ȳ = (Σ yᵢ) / n        λ̂ = 1 / ȳ
//! ```
//!
//! # Examples
//!
//! ```
//! use ilidash::ExponentialFit;
//!
//! let fit = ExponentialFit::estimate(&[1.0, 3.0]).unwrap();
//! assert_eq!(fit.lambda(), 0.5);
//! assert_eq!(fit.pdf(0.0), 0.5);
//! ```

use crate::error::EstimateError;

/// Number of points the density overlay is evaluated at.
pub const DEFAULT_CURVE_POINTS: usize = 500;

/// A fitted exponential distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit {
    mean: f64,
    lambda: f64,
    sample_size: usize,
}

impl ExponentialFit {
    /// Estimates λ̂ = 1/ȳ from a sample of non-negative values.
    ///
    /// # Errors
    /// * `EmptySample` - nothing to average
    /// * `NonFinite` - a value is NaN, infinite or negative
    /// * `ZeroMean` - every value is 0, so λ̂ would be infinite
    /// * `RateOverflow` - the mean is so close to 0 that 1/ȳ is not finite
    pub fn estimate(sample: &[f64]) -> Result<Self, EstimateError> {
        if sample.is_empty() {
            return Err(EstimateError::EmptySample);
        }
        if let Some(&bad) = sample.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(EstimateError::NonFinite(bad));
        }

        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        if mean == 0.0 {
            return Err(EstimateError::ZeroMean);
        }
        let lambda = 1.0 / mean;
        if !lambda.is_finite() {
            return Err(EstimateError::RateOverflow(mean));
        }

        Ok(Self {
            mean,
            lambda,
            sample_size: sample.len(),
        })
    }

    /// Sample mean ȳ.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Estimated rate λ̂.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Scale parameter 1/λ̂ (equal to the sample mean).
    pub fn scale(&self) -> f64 {
        1.0 / self.lambda
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Density f(x) = λ̂·e^(−λ̂x), zero for negative x.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    /// Evaluates the density at `points` evenly spaced x values in `[0, max]`.
    ///
    /// Both ends are included; a single point is placed at 0.
    pub fn density_curve(&self, max: f64, points: usize) -> Vec<[f64; 2]> {
        linspace(0.0, max, points)
            .into_iter()
            .map(|x| [x, self.pdf(x)])
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_sample() {
        let fit = ExponentialFit::estimate(&[2.0, 2.0, 2.0, 2.0]).unwrap();
        assert_eq!(fit.mean(), 2.0);
        assert_eq!(fit.lambda(), 0.5);
        assert_eq!(fit.scale(), 2.0);
        assert_eq!(fit.sample_size(), 4);
    }

    #[test]
    fn test_two_point_sample() {
        let fit = ExponentialFit::estimate(&[1.0, 3.0]).unwrap();
        assert_eq!(fit.lambda(), 0.5);
    }

    #[test]
    fn test_all_zero_sample_is_rejected() {
        assert_eq!(
            ExponentialFit::estimate(&[0.0, 0.0, 0.0]),
            Err(EstimateError::ZeroMean)
        );
    }

    #[test]
    fn test_subnormal_mean_is_rejected() {
        assert_eq!(
            ExponentialFit::estimate(&[1e-309]),
            Err(EstimateError::RateOverflow(1e-309))
        );
        assert!(matches!(
            ExponentialFit::estimate(&[1e-309, 1e-309]),
            Err(EstimateError::RateOverflow(_))
        ));
    }

    #[test]
    fn test_empty_and_invalid_samples() {
        assert_eq!(ExponentialFit::estimate(&[]), Err(EstimateError::EmptySample));
        assert!(matches!(
            ExponentialFit::estimate(&[1.0, f64::NAN]),
            Err(EstimateError::NonFinite(_))
        ));
        assert_eq!(
            ExponentialFit::estimate(&[1.0, -2.0]),
            Err(EstimateError::NonFinite(-2.0))
        );
    }

    #[test]
    fn test_pdf_reference_points() {
        let fit = ExponentialFit::estimate(&[2.0]).unwrap();

        assert_eq!(fit.pdf(0.0), 0.5);
        let at_scale = fit.pdf(1.0 / fit.lambda());
        assert!((at_scale - 0.5 / std::f64::consts::E).abs() < 1e-15);
        assert_eq!(fit.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_density_curve_spans_zero_to_max() {
        let fit = ExponentialFit::estimate(&[1.0, 3.0]).unwrap();
        let curve = fit.density_curve(7.3, DEFAULT_CURVE_POINTS);

        assert_eq!(curve.len(), 500);
        assert_eq!(curve[0], [0.0, 0.5]);
        assert_eq!(curve[499][0], 7.3);
        assert!(curve.windows(2).all(|w| w[1][0] > w[0][0]));
    }

    #[test]
    fn test_linspace_edge_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
