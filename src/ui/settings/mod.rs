//! Settings panel.
//!
//! - [`form`]: buffered, validated form state
//! - [`save`]: commit to store, overlay and autostart
//! - [`window`]: the egui viewport

pub mod form;
pub mod save;
pub mod window;

pub use form::{days_in_month, SettingsForm};
pub use save::{commit_config, save_settings, SaveOutcome};
pub use window::{Notice, NoticeKind, SettingsPanel};
