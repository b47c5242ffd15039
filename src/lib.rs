pub mod error;
pub mod intern;
pub mod dataset;
pub mod index;
pub mod selection;
pub mod filter;
pub mod estimator;
pub mod histogram;
pub mod pipeline;
pub mod narrative;
pub mod config;
pub mod synthetic;
pub mod writer;
pub mod theme;

// Export error types
pub use error::{
    DatasetError, SelectionError, FilterError,
    EstimateError, HistogramError, PipelineError
};

// Export data loading and indexing
pub use dataset::{IliDataset, Observation, load_dataset, DEFAULT_DATASET_PATH};
pub use index::{IndexedRow, WeeklyTable, derive_weeks};
pub use intern::StateInterner;

// Export selection and per-state analysis
pub use selection::StateSelector;
pub use filter::{StateSeries, SeriesPoint, filter_state};
pub use estimator::ExponentialFit;
pub use histogram::DensityHistogram;
pub use pipeline::{recompute, DistributionPanel, PipelineSettings, RenderArtifacts};

// Export configuration and data generation
pub use config::DashboardConfig;
pub use synthetic::{SyntheticConfig, generate_dataset};
pub use writer::IliWriter;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
