//! UI panel rendering for the dashboard:
//! - Header (dataset controls, state selector, theme selector)
//! - Charts panel (time series, distribution with fitted density)
//! - Description panel (fixed explanatory text)
//! - Status bar (dataset summary)
//! - Panel manager (layout and interaction routing)

pub mod header;
pub mod charts_panel;
pub mod description_panel;
pub mod status_bar;
pub mod panel_manager;
