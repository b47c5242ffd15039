//! Color themes for the dashboard.
//!
//! Each theme pairs a few egui visual overrides with the colors of the three
//! chart elements: the weekly ILI line, the histogram bars and the fitted
//! density curve.
//!
//! ```
//! use ilidash::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! assert_ne!(dark.colors.histogram, dark.colors.fit_curve);
//! ```

use egui::Color32;
use std::collections::BTreeMap;

pub const DEFAULT_THEME: &str = "Dark";

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,

    // Chart elements
    pub series: Color32,
    pub histogram: Color32,
    pub fit_curve: Color32,

    pub error: Color32,
    pub warning: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// The built-in themes, looked up by name.
pub struct ThemeManager {
    themes: BTreeMap<String, Theme>,
    default_colors: ThemeColors,
}

impl ThemeManager {
    pub fn new() -> Self {
        let default_colors = dark_theme().colors;
        let themes = [light_theme(), dark_theme(), dracula_theme()]
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        Self { themes, default_colors }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in alphabetical order.
    pub fn list_themes(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Colors of `name`, or of the default theme when `name` is unknown.
    pub fn colors_or_default(&self, name: &str) -> &ThemeColors {
        self.themes
            .get(name)
            .map(|theme| &theme.colors)
            .unwrap_or(&self.default_colors)
    }

    /// Builds egui visuals for `theme`.
    pub fn visuals(&self, theme: &Theme) -> egui::Visuals {
        let colors = &theme.colors;
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);
        visuals.selection.bg_fill = colors.selection;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::WHITE,
            text: Color32::BLACK,
            text_dim: Color32::from_rgb(110, 110, 110),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(225, 225, 225),
            series: Color32::from_rgb(31, 119, 180),
            histogram: with_alpha(Color32::from_rgb(40, 80, 220), 150),
            fit_curve: Color32::from_rgb(214, 39, 40),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(200, 120, 0),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            series: Color32::from_rgb(52, 152, 219),
            histogram: with_alpha(Color32::from_rgb(70, 110, 240), 150),
            fit_curve: Color32::from_rgb(231, 76, 60),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            series: hex_to_color32("#8be9fd"),
            histogram: with_alpha(hex_to_color32("#bd93f9"), 150),
            fit_curve: hex_to_color32("#ff5555"),
            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
        },
    }
}

/// Parses `#rrggbb`; anything else yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };

    match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => Color32::BLACK,
    }
}

/// Same color with alpha `alpha`, premultiplied as egui expects.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
