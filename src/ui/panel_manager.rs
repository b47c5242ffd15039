//! Panel orchestration and layout.
//!
//! Header on top, status bar at the bottom, and one scrollable central column
//! holding the charts and their descriptions.

use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{charts_panel, description_panel, header, status_bar};
use ilidash::narrative;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(PathBuf),
    /// User requested generated demo data
    OpenDemoRequested,
    /// User picked a different state
    StateSelected(String),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders every panel, returning the interaction the user triggered this frame.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme.colors().clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                    header::HeaderInteraction::StateSelected(name) => {
                        PanelInteraction::StateSelected(name)
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let central_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            if loader.is_loading() {
                charts_panel::render_loading_indicator(ui, &colors, loader);
                return;
            }

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.heading(narrative::TITLE);
                ui.separator();

                let Some(artifacts) = state.analysis.artifacts() else {
                    if !state.dataset.is_loaded() {
                        ui.label(
                            egui::RichText::new("No dataset loaded. Open a CSV file or use demo data.")
                                .color(colors.text_dim),
                        );
                    }
                    return;
                };

                charts_panel::render_time_series(ui, artifacts, &colors);
                description_panel::render_descriptions(ui, &colors);
                charts_panel::render_distribution(ui, artifacts, &colors);
            });
        });

        interaction
    }
}
