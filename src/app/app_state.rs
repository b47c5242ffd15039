//! Centralized application state for the dashboard.
//!
//! Composes the focused state components; each keeps its own invariants and
//! exposes intent-revealing methods.

use ilidash::PipelineSettings;

use crate::state::{AnalysisState, DatasetState, ThemeState};

pub struct AppState {
    /// Loaded dataset and its weekly table
    pub dataset: DatasetState,

    /// Selected state and computed chart artifacts
    pub analysis: AnalysisState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Histogram bins and density curve resolution
    pub settings: PipelineSettings,

    /// Current load error to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the state with persisted preferences applied.
    pub fn with_preferences(
        theme_name: String,
        remembered_state: Option<String>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            dataset: DatasetState::new(),
            analysis: AnalysisState::remembering(remembered_state),
            theme: ThemeState::with_theme(theme_name),
            settings,
            error_message: None,
        }
    }

    /// Clears dataset-related state before a new load.
    pub fn reset_dataset_state(&mut self) {
        self.dataset.clear();
        self.analysis.clear();
        self.error_message = None;
    }
}
