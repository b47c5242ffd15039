//! Application-level modules for the dashboard.
//!
//! The coordinator drives loading and selection; the theme and settings
//! coordinators persist preferences between sessions.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::{SettingsCoordinator, SELECTED_STATE_KEY};
