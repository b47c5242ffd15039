//! Utility modules for the dashboard.

pub mod formatting;

pub use formatting::{format_count, format_duration, get_current_memory_mb, format_memory_mb};
