//! Loaded dataset state.
//!
//! Holds the parsed observations together with the weekly table derived from
//! them. Both are replaced wholesale when a new file is opened and are never
//! mutated in between.

use ilidash::{IliDataset, WeeklyTable};
use std::path::PathBuf;

/// A dataset ready for analysis.
pub struct LoadedDataset {
    pub dataset: IliDataset,
    pub table: WeeklyTable,
}

/// State related to the currently loaded dataset.
#[derive(Default)]
pub struct DatasetState {
    loaded: Option<LoadedDataset>,
    /// Path of the loaded file (None for generated demo data)
    file_path: Option<PathBuf>,
}

impl DatasetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current dataset.
    pub fn load(&mut self, loaded: LoadedDataset, path: Option<PathBuf>) {
        self.loaded = Some(loaded);
        self.file_path = path;
    }

    pub fn clear(&mut self) {
        self.loaded = None;
        self.file_path = None;
    }

    pub fn dataset(&self) -> Option<&IliDataset> {
        self.loaded.as_ref().map(|l| &l.dataset)
    }

    pub fn table(&self) -> Option<&WeeklyTable> {
        self.loaded.as_ref().map(|l| &l.table)
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
}
