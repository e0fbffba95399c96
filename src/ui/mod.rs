//! User interface module.
//!
//! ## overlay/
//! - the countdown label, settings button, drag and context menu
//!
//! ## settings/
//! - form.rs: `SettingsForm` and validation
//! - save.rs: `save_settings`, `commit_config`
//! - window.rs: `SettingsPanel` viewport

pub mod overlay;
pub mod settings;

pub use overlay::show_overlay;
pub use settings::{save_settings, SaveOutcome, SettingsForm, SettingsPanel};
