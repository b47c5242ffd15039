//! Fixed explanatory text shown between the two charts.

use eframe::egui;
use egui::RichText;
use ilidash::{narrative, ThemeColors};

pub fn render_descriptions(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.add_space(8.0);
    ui.heading(narrative::DESCRIPTIONS_HEADER);
    ui.separator();

    render_block(ui, colors, narrative::TIME_SERIES_HEADING, narrative::TIME_SERIES_TEXT);
    render_block(ui, colors, narrative::DISTRIBUTION_HEADING, narrative::DISTRIBUTION_TEXT);
}

fn render_block(ui: &mut egui::Ui, colors: &ThemeColors, heading: &str, text: &str) {
    ui.label(RichText::new(heading).strong().size(15.0));
    for paragraph in text.split("\n\n") {
        ui.label(RichText::new(paragraph).color(colors.text));
        ui.add_space(4.0);
    }
    ui.add_space(6.0);
}
