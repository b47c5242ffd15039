//! Persistence of typed preferences in eframe storage.
//!
//! Values are stored as JSON strings, so anything serde can handle (the last
//! selected state, pipeline settings) survives restarts.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SELECTED_STATE_KEY: &str = "selected_state";

pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads `key`, returning None if it is absent or no longer parses.
    ///
    /// ```ignore
    /// let state: Option<String> =
    ///     SettingsCoordinator::try_load_setting(cc.storage, SELECTED_STATE_KEY);
    /// ```
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Serializes `value` under `key`. Nothing is written if serialization fails.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => warn!(key, error = %e, "failed to serialize setting"),
        }
    }
}
