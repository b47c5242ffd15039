//! ILI Dashboard GUI application.
//!
//! Loads a weekly influenza-like-illness surveillance CSV, lets the user pick a
//! state, and shows that state's ILI series next to a density histogram with
//! a fitted exponential curve.
//!
//! Module layout:
//! - `app/` - application state and coordinators
//! - `io/` - background dataset loading
//! - `state/` - dataset, analysis and theme state
//! - `ui/` - panel rendering and layout
//! - `utils/` - formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{ensure, Result};
use clap::Parser;
use eframe::egui;
use ilidash::{DashboardConfig, PipelineSettings};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use app::SELECTED_STATE_KEY;
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

const APP_NAME: &str = "ILI Dashboard";

#[derive(Parser)]
#[command(name = "ili-dashboard", about = "Influenza-like illness dashboard")]
struct Args {
    /// Dataset to open on startup (CSV, optionally Brotli-compressed as .br).
    /// Defaults to the configured path, normally ./ilidata.csv
    #[arg(value_name = "DATASET")]
    dataset: Option<PathBuf>,

    /// Number of histogram bins
    #[arg(long)]
    bins: Option<usize>,

    /// Number of points on the fitted density curve
    #[arg(long)]
    curve_points: Option<usize>,

    /// Theme to start with (overrides the saved preference)
    #[arg(long)]
    theme: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Settings resolved from the config file and the command line.
struct Startup {
    /// Opened on the first frame; a missing file shows up as a load error
    dataset: PathBuf,
    settings: PipelineSettings,
    /// Theme given with --theme
    theme_override: Option<String>,
    /// Theme from the config file, used when nothing was saved
    config_theme: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = DashboardConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        DashboardConfig::default()
    });
    let startup = resolve_startup(args, config)?;
    info!(
        dataset = %startup.dataset.display(),
        bins = startup.settings.histogram_bins,
        curve_points = startup.settings.curve_points,
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, startup)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard: {}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["ilidash", "ili_dashboard"] {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("invalid log directive for {}: {}", target, e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_startup(args: Args, config: DashboardConfig) -> Result<Startup> {
    let settings = PipelineSettings {
        histogram_bins: args.bins.unwrap_or(config.pipeline.histogram_bins),
        curve_points: args.curve_points.unwrap_or(config.pipeline.curve_points),
    };
    ensure!(settings.histogram_bins >= 1, "--bins must be at least 1");
    ensure!(settings.curve_points >= 2, "--curve-points must be at least 2");

    Ok(Startup {
        dataset: args.dataset.unwrap_or(config.dataset_path),
        settings,
        theme_override: args.theme,
        config_theme: config.theme,
    })
}

/// The dashboard application. Work is delegated to the coordinators:
/// `ApplicationCoordinator` loads data and reacts to selection,
/// `ThemeCoordinator` persists and applies the theme, and `PanelManager`
/// lays out the panels.
struct DashboardApp {
    state: AppState,
    loader: AsyncLoader,
    /// Dataset to open on the first frame
    pending_file_load: Option<PathBuf>,
}

impl DashboardApp {
    fn new(cc: &eframe::CreationContext, startup: Startup) -> Self {
        // --theme, then the saved preference, then the config file.
        let theme_name = startup
            .theme_override
            .or_else(|| ThemeCoordinator::load_theme_from_storage(cc.storage))
            .unwrap_or(startup.config_theme);

        let remembered_state: Option<String> =
            SettingsCoordinator::try_load_setting(cc.storage, SELECTED_STATE_KEY);

        Self {
            state: AppState::with_preferences(theme_name, remembered_state, startup.settings),
            loader: AsyncLoader::new(),
            pending_file_load: Some(startup.dataset),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_dataset(&mut self.state, &mut self.loader);
            }
            PanelInteraction::StateSelected(name) => {
                ApplicationCoordinator::handle_state_selected(&mut self.state, &name);
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        if let Some(selected) = self.state.analysis.selected_state() {
            SettingsCoordinator::save_setting(storage, SELECTED_STATE_KEY, &selected);
        }
    }
}

impl eframe::App for DashboardApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(storage) = frame.storage_mut() {
            self.save_preferences(storage);
        }

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("ili-dashboard").chain(argv.iter().copied()))
    }

    #[test]
    fn test_default_dataset_is_always_opened() -> Result<()> {
        let config = DashboardConfig {
            dataset_path: PathBuf::from("definitely/not/here/ilidata.csv"),
            ..DashboardConfig::default()
        };
        let startup = resolve_startup(parse(&[]), config)?;
        assert_eq!(startup.dataset, PathBuf::from("definitely/not/here/ilidata.csv"));
        Ok(())
    }

    #[test]
    fn test_flags_override_config() -> Result<()> {
        let startup = resolve_startup(
            parse(&["other.csv", "--bins", "12", "--theme", "Light"]),
            DashboardConfig::default(),
        )?;
        assert_eq!(startup.dataset, PathBuf::from("other.csv"));
        assert_eq!(startup.settings.histogram_bins, 12);
        assert_eq!(startup.settings.curve_points, 500);
        assert_eq!(startup.theme_override.as_deref(), Some("Light"));
        Ok(())
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(resolve_startup(parse(&["--bins", "0"]), DashboardConfig::default()).is_err());
    }
}
