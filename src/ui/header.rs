//! Header panel: dataset controls, state selector and theme selector.

use eframe::egui;
use ilidash::narrative;
use std::path::PathBuf;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a file with "Open Dataset"
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Data"
    OpenDemoRequested,
    /// User picked a different state
    StateSelected(String),
}

pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Dataset").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("ILI Datasets", &["csv", "br"])
                .add_filter("CSV", &["csv"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Demo Data").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        if let Some(selector) = state.analysis.selector() {
            ui.label(narrative::SELECT_LABEL);

            let current = selector.selected().to_string();
            let mut chosen = current.clone();
            egui::ComboBox::from_id_salt("state_selector")
                .selected_text(&chosen)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for name in selector.states() {
                        ui.selectable_value(&mut chosen, name.clone(), name.as_str());
                    }
                });

            if chosen != current {
                interaction = Some(HeaderInteraction::StateSelected(chosen));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().error, err);
    }
    if let Some(err) = state.analysis.error_message() {
        ui.colored_label(state.theme.colors().error, err);
    }

    interaction
}
