//! Optional on-disk defaults for the dashboard.
//!
//! `<config dir>/ilidash/config.json` may set any subset of the fields below;
//! command-line flags take precedence over it.
//!
//! ```json
//! { "dataset_path": "data/ilidata.csv.br", "histogram_bins": 40, "theme": "Light" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::DEFAULT_DATASET_PATH;
use crate::pipeline::PipelineSettings;
use crate::theme::DEFAULT_THEME;

const CONFIG_DIR: &str = "ilidash";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    #[serde(flatten)]
    pub pipeline: PipelineSettings,
    pub theme: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            pipeline: PipelineSettings::default(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Standard location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads the config at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Reads the standard config file, or returns defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading dashboard config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "histogram_bins": 12, "theme": "Light" }}"#)?;

        let config = DashboardConfig::from_file(file.path())?;
        assert_eq!(config.pipeline.histogram_bins, 12);
        assert_eq!(config.pipeline.curve_points, 500);
        assert_eq!(config.theme, "Light");
        assert_eq!(config.dataset_path, PathBuf::from("ilidata.csv"));
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_an_error() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "not json")?;
        assert!(DashboardConfig::from_file(file.path()).is_err());
        Ok(())
    }
}
