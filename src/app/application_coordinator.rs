//! Application-level workflows: loading datasets and reacting to selection.

use std::path::PathBuf;
use tracing::info;

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::LoadedDataset;

pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading `path` in the background.
    ///
    /// Previous data is dropped immediately so the loading indicator shows and
    /// nothing from the old file is rendered against the new one.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        info!(path = %path.display(), "opening dataset");
        state.reset_dataset_state();
        loader.start_file_load(path, ctx);
    }

    /// Applies a finished background load. Returns true if a load completed.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                Self::install_dataset(state, data, path);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading dataset: {}", error_msg));
                state.dataset.clear();
                state.analysis.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and installs the demo dataset.
    pub fn open_demo_dataset(state: &mut AppState, loader: &mut AsyncLoader) {
        state.reset_dataset_state();
        match loader.load_demo_dataset() {
            Ok(data) => Self::install_dataset(state, data, None),
            Err(e) => {
                state.error_message = Some(format!("Error generating demo dataset: {}", e));
            }
        }
    }

    /// Switches the analysis to `selected`.
    pub fn handle_state_selected(state: &mut AppState, selected: &str) {
        if let Some(table) = state.dataset.table() {
            if state.analysis.select(selected, table, &state.settings) {
                info!(state = selected, "state selected");
            }
        }
    }

    fn install_dataset(state: &mut AppState, data: LoadedDataset, path: Option<PathBuf>) {
        state.analysis.reset_for_table(&data.table, &state.settings);
        state.dataset.load(data, path);
        state.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilidash::PipelineSettings;
    use std::time::{Duration, Instant};

    fn wait_for_load(state: &mut AppState, loader: &mut AsyncLoader) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !ApplicationCoordinator::check_loading_completion(state, loader) {
            assert!(Instant::now() < deadline, "load did not finish");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_missing_file_is_reported() {
        let mut state = AppState::with_preferences("Dark".to_string(), None, PipelineSettings::default());
        let mut loader = AsyncLoader::new();
        let ctx = egui::Context::default();

        ApplicationCoordinator::open_file(
            &mut state,
            &mut loader,
            PathBuf::from("definitely/not/here/ilidata.csv"),
            &ctx,
        );
        wait_for_load(&mut state, &mut loader);

        let message = state.error_message.as_deref().unwrap_or_default();
        assert!(message.starts_with("Error loading dataset"), "got {message:?}");
        assert!(!state.dataset.is_loaded());
        assert!(state.analysis.artifacts().is_none());
    }

    #[test]
    fn test_demo_dataset_selects_first_state() {
        let mut state = AppState::with_preferences("Dark".to_string(), None, PipelineSettings::default());
        let mut loader = AsyncLoader::new();

        ApplicationCoordinator::open_demo_dataset(&mut state, &mut loader);
        assert!(state.error_message.is_none());
        assert!(state.dataset.is_loaded());
        assert_eq!(state.analysis.selected_state(), Some("Alabama"));
    }
}
