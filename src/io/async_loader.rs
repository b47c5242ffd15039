//! Background dataset loading.
//!
//! Parsing and indexing a multi-year surveillance export takes long enough to
//! freeze a frame or two, so it runs on a worker thread and the result comes
//! back over a channel.

use eframe::egui;
use ilidash::{derive_weeks, generate_dataset, load_dataset, IliDataset, SyntheticConfig};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

use crate::io::LoadingState;
use crate::state::LoadedDataset;

/// Result of a completed load.
pub enum LoadResult {
    Success {
        data: LoadedDataset,
        /// Path of the loaded file (None for demo data)
        path: Option<PathBuf>,
    },
    Error(String),
    /// Nothing finished since the last check
    None,
}

/// Runs dataset loads off the UI thread.
pub struct AsyncLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    loading_receiver: Option<Receiver<Result<LoadedDataset, String>>>,
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.loading_state).in_progress()
    }

    /// Time spent on the current load, if one is running.
    pub fn elapsed(&self) -> Option<Duration> {
        lock(&self.loading_state).elapsed()
    }

    /// Starts loading `path` on a worker thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result; the
    /// worker requests a repaint when it is done.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.pending_load_path = Some(path.clone());
        lock(&self.loading_state).start();

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = load_dataset(&path)
                .map(index_dataset)
                .map_err(|e| e.to_string());

            if let Err(e) = &result {
                warn!(path = %path.display(), error = %e, "dataset load failed");
            }
            let _ = sender.send(result);

            if let Some(took) = lock(&loading_state).finish() {
                info!(path = %path.display(), ?took, "dataset load finished");
            }
            ctx_handle.request_repaint();
        });
    }

    /// Generates the demo dataset synchronously.
    pub fn load_demo_dataset(&mut self) -> Result<LoadedDataset, String> {
        generate_dataset(&SyntheticConfig::default())
            .map(index_dataset)
            .map_err(|e| e.to_string())
    }

    /// Returns the result of a finished load, if any.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match result {
            Ok(data) => LoadResult::Success { data, path },
            Err(error_msg) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn index_dataset(dataset: IliDataset) -> LoadedDataset {
    let table = derive_weeks(&dataset);
    LoadedDataset { dataset, table }
}

/// Locks the shared state, recovering it if a worker panicked while holding it.
fn lock(state: &Mutex<LoadingState>) -> MutexGuard<'_, LoadingState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
