//! Error types for the ILI analysis pipeline.
//!
//! Each stage reports its own failure type so callers can tell a fatal load
//! problem apart from a recoverable per-state condition (no data, zero mean).

use thiserror::Error;

/// Failure while reading or validating an ILI dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("required column '{0}' is missing from the header")]
    MissingColumn(&'static str),

    #[error("malformed row at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("dataset contains no observations")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// The requested state is not one of the choices offered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown state '{0}'")]
    UnknownState(String),

    #[error("no states to choose from")]
    NoStates,
}

/// Failure while restricting the weekly table to one state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("no rows for state '{0}'")]
    NoRows(String),
}

/// The exponential rate could not be estimated from the sample.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimateError {
    #[error("sample is empty")]
    EmptySample,

    #[error("sample value {0} is not a finite non-negative number")]
    NonFinite(f64),

    #[error("sample mean is zero, rate is undefined")]
    ZeroMean,

    #[error("sample mean {0} is too small, rate overflows")]
    RateOverflow(f64),
}

/// Failure while binning a sample into a histogram.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistogramError {
    #[error("cannot bin an empty sample")]
    EmptySample,

    #[error("bin count must be positive")]
    ZeroBins,

    #[error("sample value {0} is not finite")]
    NonFinite(f64),
}

/// Fatal pipeline failure. Recoverable conditions are reported through
/// [`crate::pipeline::DistributionPanel`] instead.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Histogram(#[from] HistogramError),
}
