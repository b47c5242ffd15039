//! Chart rendering: the weekly ILI line and the distribution figure.
//!
//! Everything drawn here comes precomputed in [`RenderArtifacts`]; this module
//! only maps it onto egui_plot items.

use eframe::egui;
use egui::RichText;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use ilidash::{narrative, DensityHistogram, DistributionPanel, RenderArtifacts, ThemeColors};

use crate::io::AsyncLoader;
use crate::utils::{format_duration, format_memory_mb, get_current_memory_mb};

const TIME_SERIES_HEIGHT: f32 = 260.0;
const DISTRIBUTION_HEIGHT: f32 = 320.0;

/// Draws `ili` against the per-state week index. Missing weeks are gaps.
pub fn render_time_series(ui: &mut egui::Ui, artifacts: &RenderArtifacts, colors: &ThemeColors) {
    let segments = artifacts.series.segments();

    Plot::new("ili_time_series")
        .height(TIME_SERIES_HEIGHT)
        .x_axis_label(narrative::WEEKS_AXIS)
        .y_axis_label(narrative::ILI_AXIS)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for segment in segments {
                let line = Line::new("ILI", PlotPoints::from(segment))
                    .color(colors.series)
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}

/// Draws the histogram with the fitted density, or explains why it can't.
pub fn render_distribution(ui: &mut egui::Ui, artifacts: &RenderArtifacts, colors: &ThemeColors) {
    ui.label(RichText::new(narrative::histogram_title(artifacts.state())).strong().size(16.0));

    match &artifacts.distribution {
        DistributionPanel::Fitted { histogram, fit, curve } => {
            ui.label(format!(
                "λ̂ = {:.2}   (ȳ = {:.3}, n = {})",
                fit.lambda(),
                fit.mean(),
                fit.sample_size()
            ));

            let fit_line = Line::new(narrative::fit_legend(fit.lambda()), PlotPoints::from(curve.clone()))
                .color(colors.fit_curve)
                .width(2.0);

            let chart = BarChart::new(narrative::HISTOGRAM_LEGEND, histogram_bars(histogram, colors))
                .color(colors.histogram)
                .element_formatter(Box::new(|bar, _chart| format!("density {:.4}", bar.value)));

            distribution_plot(&artifacts.distribution).show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
                plot_ui.line(fit_line);
            });
        }
        DistributionPanel::CannotFit { histogram, reason } => {
            ui.colored_label(colors.warning, narrative::cannot_fit(reason));

            let chart = BarChart::new(narrative::HISTOGRAM_LEGEND, histogram_bars(histogram, colors))
                .color(colors.histogram);

            distribution_plot(&artifacts.distribution).show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
        }
        DistributionPanel::NoData => {
            ui.colored_label(colors.warning, narrative::NO_DATA);
        }
    }
}

/// Horizontal bounds of the distribution chart; the left edge is always 0.
fn distribution_x_bounds(panel: &DistributionPanel) -> (f64, f64) {
    match panel.x_range() {
        Some((left, right)) if right > left => (left, right),
        _ => (0.0, 1.0),
    }
}

fn distribution_plot(panel: &DistributionPanel) -> Plot<'static> {
    let (left, right) = distribution_x_bounds(panel);
    Plot::new("ili_distribution")
        .height(DISTRIBUTION_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(narrative::ILI_AXIS)
        .y_axis_label(narrative::DENSITY_AXIS)
        .default_x_bounds(left, right)
        .include_y(0.0)
        .allow_scroll(false)
}

fn histogram_bars(histogram: &DensityHistogram, colors: &ThemeColors) -> Vec<Bar> {
    histogram
        .bars()
        .map(|(center, width, density)| Bar::new(center, density).width(width).fill(colors.histogram))
        .collect()
}

/// Placeholder shown while a dataset is being loaded.
pub fn render_loading_indicator(ui: &mut egui::Ui, colors: &ThemeColors, loader: &AsyncLoader) {
    let center_pos = ui.available_rect_before_wrap().center();
    let color = colors.text_dim;

    let title = match loader.elapsed() {
        Some(elapsed) => format!("Loading... {}", format_duration(elapsed)),
        None => "Loading...".to_string(),
    };
    ui.painter().text(
        center_pos,
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(40.0),
        color,
    );

    ui.painter().text(
        egui::pos2(center_pos.x, center_pos.y + 50.0),
        egui::Align2::CENTER_CENTER,
        format_memory_mb(get_current_memory_mb()),
        egui::FontId::proportional(20.0),
        color,
    );
}
