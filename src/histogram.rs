//! Equal-width, density-normalised histograms.

use crate::error::HistogramError;
use crate::estimator::linspace;

/// Number of bins used for the ILI distribution chart.
pub const DEFAULT_BINS: usize = 30;

/// Histogram whose bar areas sum to 1.
///
/// Bins are half-open `[edgeᵢ, edgeᵢ₊₁)` except the last, which also holds
/// the sample maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHistogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
    densities: Vec<f64>,
    sample_max: f64,
}

impl DensityHistogram {
    /// Bins `sample` into `bins` equal-width bins over its observed range.
    ///
    /// A sample whose values are all equal has no range; it is binned over
    /// `[v - 0.5, v + 0.5]` so exactly one bin is occupied.
    pub fn build(sample: &[f64], bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if sample.is_empty() {
            return Err(HistogramError::EmptySample);
        }
        if let Some(&bad) = sample.iter().find(|v| !v.is_finite()) {
            return Err(HistogramError::NonFinite(bad));
        }

        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (low, high) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };

        let edges = linspace(low, high, bins + 1);
        let width = (high - low) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &x in sample {
            let bin = ((x - low) / width).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        let norm = sample.len() as f64 * width;
        let densities = counts.iter().map(|&c| c as f64 / norm).collect();

        Ok(Self {
            edges,
            counts,
            densities,
            sample_max: max,
        })
    }

    /// Bin edges, one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Bar heights (count / (n · width)).
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Largest sample value, the right end of the density overlay.
    pub fn sample_max(&self) -> f64 {
        self.sample_max
    }

    /// `(center, width, density)` of every bin, for drawing bars.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(edge, &density)| ((edge[0] + edge[1]) / 2.0, edge[1] - edge[0], density))
    }

    /// Total bar area; 1 up to rounding.
    pub fn area(&self) -> f64 {
        self.bars().map(|(_, width, density)| width * density).sum()
    }
}
