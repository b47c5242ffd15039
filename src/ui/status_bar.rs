//! Bottom status bar with a summary of the loaded dataset.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let Some(dataset) = state.dataset.dataset() else {
            ui.label(RichText::new("No dataset loaded").strong());
            return;
        };

        let source = match state.dataset.file_path() {
            Some(path) => path.display().to_string(),
            None => "Demo data".to_string(),
        };

        ui.label(RichText::new(format!(
            "{} | Rows: {} | States: {} | Missing ILI: {}",
            source,
            format_count(dataset.len()),
            format_count(dataset.state_count()),
            format_count(dataset.missing_ili()),
        )).strong());

        if let Some(selected) = state.analysis.selected_state() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Selected: {}", selected))
                .strong()
                .color(state.theme.colors().selection));
        }
    });
}
