//! Current state selection and the artifacts computed for it.
//!
//! Artifacts are recomputed from scratch whenever the selection or the
//! dataset changes; the cache only avoids redoing that work every frame.

use ilidash::{recompute, PipelineSettings, RenderArtifacts, StateSelector, WeeklyTable};
use tracing::{debug, error};

#[derive(Debug, Default)]
pub struct AnalysisState {
    selector: Option<StateSelector>,
    artifacts: Option<RenderArtifacts>,
    /// Selection to restore once a dataset is loaded (from persisted settings)
    remembered_state: Option<String>,
    /// Fatal recompute failure for the current selection
    error_message: Option<String>,
}

impl AnalysisState {
    /// Creates an analysis state that will try to reselect `state` after loading.
    pub fn remembering(state: Option<String>) -> Self {
        Self {
            remembered_state: state,
            ..Self::default()
        }
    }

    /// Drops the selection and cached artifacts, keeping the remembered state.
    pub fn clear(&mut self) {
        if let Some(selector) = &self.selector {
            self.remembered_state = Some(selector.selected().to_string());
        }
        self.selector = None;
        self.artifacts = None;
        self.error_message = None;
    }

    /// Sets up the selector for a freshly loaded table and computes its artifacts.
    pub fn reset_for_table(&mut self, table: &WeeklyTable, settings: &PipelineSettings) {
        self.clear();
        match StateSelector::from_table(table) {
            Ok(mut selector) => {
                if let Some(state) = &self.remembered_state {
                    selector.select_or_default(state);
                }
                self.selector = Some(selector);
                self.refresh(table, settings);
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Changes the selection; returns true if it actually changed.
    pub fn select(&mut self, state: &str, table: &WeeklyTable, settings: &PipelineSettings) -> bool {
        let Some(selector) = self.selector.as_mut() else {
            return false;
        };
        if selector.selected() == state {
            return false;
        }

        match selector.select(state) {
            Ok(()) => {
                self.refresh(table, settings);
                true
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                false
            }
        }
    }

    /// Recomputes the artifacts for the current selection.
    pub fn refresh(&mut self, table: &WeeklyTable, settings: &PipelineSettings) {
        let Some(selector) = &self.selector else {
            return;
        };
        let state = selector.selected();

        match recompute(table, state, settings) {
            Ok(artifacts) => {
                debug!(state, "recomputed artifacts");
                self.artifacts = Some(artifacts);
                self.error_message = None;
            }
            Err(e) => {
                error!(state, error = %e, "recompute failed");
                self.artifacts = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn selector(&self) -> Option<&StateSelector> {
        self.selector.as_ref()
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.selector
            .as_ref()
            .map(StateSelector::selected)
            .or(self.remembered_state.as_deref())
    }

    pub fn artifacts(&self) -> Option<&RenderArtifacts> {
        self.artifacts.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilidash::{IliDataset, derive_weeks};

    fn table() -> WeeklyTable {
        let csv = "state,epiweek,ili\nOhio,201701,1.0\nOhio,201702,3.0\nIowa,201701,2.0\n";
        derive_weeks(&IliDataset::from_reader(csv.as_bytes()).unwrap())
    }

    #[test]
    fn test_reset_selects_first_state() {
        let table = table();
        let mut analysis = AnalysisState::default();
        analysis.reset_for_table(&table, &PipelineSettings::default());

        assert_eq!(analysis.selected_state(), Some("Iowa"));
        assert_eq!(analysis.artifacts().map(|a| a.state()), Some("Iowa"));
    }

    #[test]
    fn test_select_recomputes() {
        let table = table();
        let settings = PipelineSettings::default();
        let mut analysis = AnalysisState::default();
        analysis.reset_for_table(&table, &settings);

        assert!(analysis.select("Ohio", &table, &settings));
        assert!(!analysis.select("Ohio", &table, &settings));
        let lambda = analysis.artifacts().and_then(|a| a.distribution.fit()).map(|f| f.lambda());
        assert_eq!(lambda, Some(0.5));
    }

    #[test]
    fn test_remembered_state_is_restored() {
        let table = table();
        let mut analysis = AnalysisState::remembering(Some("Ohio".to_string()));
        analysis.reset_for_table(&table, &PipelineSettings::default());
        assert_eq!(analysis.selected_state(), Some("Ohio"));
    }
}
