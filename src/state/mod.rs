//! State management for the dashboard.
//!
//! State-only logic, no UI concerns:
//! - Dataset state (loaded observations and their weekly table)
//! - Analysis state (selected state and its computed artifacts)
//! - Theme state (available themes and the active one)

mod dataset_state;
mod analysis_state;
mod theme_state;

pub use dataset_state::{DatasetState, LoadedDataset};
pub use analysis_state::AnalysisState;
pub use theme_state::ThemeState;
