//! Settings persistence.

pub mod settings;

pub use settings::{default_settings_path, format_target, parse_target, SettingsStore};
