//! Theme persistence and application.

use ilidash::theme::DEFAULT_THEME;

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Reads the saved theme name; None when nothing was saved.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> Option<String> {
        storage.and_then(|s| s.get_string(THEME_KEY))
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
    }

    /// Applies the active theme to the egui context.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager
            .get_theme(state.theme.current_theme_name())
            .or_else(|| manager.get_theme(DEFAULT_THEME));

        if let Some(theme) = theme {
            ctx.set_visuals(manager.visuals(theme));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_theme_is_absent_until_saved() {
        let mut storage = MockStorage::default();
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), None);
        assert_eq!(ThemeCoordinator::load_theme_from_storage(None), None);

        ThemeCoordinator::save_theme_to_storage(&mut storage, "Dracula");
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)).as_deref(),
            Some("Dracula")
        );
    }
}
