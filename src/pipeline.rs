//! From a weekly table and a selected state to everything the dashboard draws.
//!
//! `recompute` is a pure function: it never touches the table, so the host UI
//! can call it on every selection change and get the same artifacts back for
//! the same input.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EstimateError, PipelineError};
use crate::estimator::{ExponentialFit, DEFAULT_CURVE_POINTS};
use crate::filter::{filter_state, StateSeries};
use crate::histogram::{DensityHistogram, DEFAULT_BINS};
use crate::index::WeeklyTable;

/// Tunables of the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub histogram_bins: usize,
    pub curve_points: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_BINS,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

/// What the distribution area shows for the selected state.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionPanel {
    /// Histogram with the fitted exponential density over `[0, max]`.
    Fitted {
        histogram: DensityHistogram,
        fit: ExponentialFit,
        curve: Vec<[f64; 2]>,
    },
    /// The state has no observed `ili` values.
    NoData,
    /// The sample exists but λ̂ is undefined.
    CannotFit {
        histogram: DensityHistogram,
        reason: EstimateError,
    },
}

impl DistributionPanel {
    /// Horizontal extent of the chart; always starts at 0.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match self {
            DistributionPanel::Fitted { histogram, .. }
            | DistributionPanel::CannotFit { histogram, .. } => {
                let right = histogram.edges().last().copied().unwrap_or(0.0);
                Some((0.0, right.max(histogram.sample_max())))
            }
            DistributionPanel::NoData => None,
        }
    }

    pub fn fit(&self) -> Option<&ExponentialFit> {
        match self {
            DistributionPanel::Fitted { fit, .. } => Some(fit),
            _ => None,
        }
    }
}

/// Everything needed to draw one state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArtifacts {
    pub series: StateSeries,
    pub distribution: DistributionPanel,
}

impl RenderArtifacts {
    pub fn state(&self) -> &str {
        self.series.state()
    }
}

/// Recomputes the artifacts for `state`.
///
/// # Errors
/// Fails only when `state` has no rows in `table` or the settings ask for
/// zero bins. A state without observed values, or one whose mean is zero or
/// too small to invert, is reported through [`DistributionPanel`] instead.
pub fn recompute(
    table: &WeeklyTable,
    state: &str,
    settings: &PipelineSettings,
) -> Result<RenderArtifacts, PipelineError> {
    let series = filter_state(table, state)?;
    let sample = series.clean_sample();

    if sample.is_empty() {
        debug!(state, "no observed ili values");
        return Ok(RenderArtifacts {
            series,
            distribution: DistributionPanel::NoData,
        });
    }

    let histogram = DensityHistogram::build(&sample, settings.histogram_bins)?;

    let distribution = match ExponentialFit::estimate(&sample) {
        Ok(fit) => {
            debug!(state, n = sample.len(), lambda = fit.lambda(), "fitted exponential");
            let curve = fit.density_curve(histogram.sample_max(), settings.curve_points);
            DistributionPanel::Fitted { histogram, fit, curve }
        }
        Err(reason) => {
            warn!(state, %reason, "cannot fit exponential model");
            DistributionPanel::CannotFit { histogram, reason }
        }
    };

    Ok(RenderArtifacts { series, distribution })
}
