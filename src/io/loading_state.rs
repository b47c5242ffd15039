//! Shared flag for an in-flight dataset load.

use std::time::{Duration, Instant};

/// State of a background load, shared between the UI thread and the loader
/// thread behind an `Arc<Mutex<_>>`. Results travel through a channel; only
/// progress lives here.
#[derive(Debug, Default)]
pub struct LoadingState {
    started_at: Option<Instant>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Marks the load finished and returns how long it took.
    pub fn finish(&mut self) -> Option<Duration> {
        self.started_at.take().map(|t| t.elapsed())
    }

    pub fn in_progress(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }
}
