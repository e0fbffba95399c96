//! Committing a validated configuration.
//!
//! Order: persist, push into the overlay, then update the OS autostart
//! registration. A store write failure is only logged; an autostart failure
//! is returned as a warning and does not undo the first two steps.

use std::time::Instant;

use chrono::NaiveDateTime;

use super::form::SettingsForm;
use crate::countdown::CountdownSurface;
use crate::error::{AutostartError, FormError};
use crate::model::CountdownConfig;
use crate::platform::Autostart;
use crate::storage::SettingsStore;

/// Result of a successful save.
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Set when the autostart registration could not be updated.
    pub autostart_warning: Option<AutostartError>,
}

impl SaveOutcome {
    /// Text for the warning notice, if any.
    pub fn warning_message(&self) -> Option<String> {
        self.autostart_warning
            .as_ref()
            .map(|e| format!("Settings were saved, but autostart could not be updated: {e}"))
    }
}

/// Validate the form and commit it. On a validation error nothing changes.
pub fn save_settings(
    form: &SettingsForm,
    store: &mut SettingsStore,
    surface: &mut CountdownSurface,
    autostart: &dyn Autostart,
    wall: NaiveDateTime,
    mono: Instant,
) -> Result<SaveOutcome, FormError> {
    let config = form.validate()?;
    Ok(commit_config(config, store, surface, autostart, wall, mono))
}

/// Commit an already validated configuration.
pub fn commit_config(
    config: CountdownConfig,
    store: &mut SettingsStore,
    surface: &mut CountdownSurface,
    autostart: &dyn Autostart,
    wall: NaiveDateTime,
    mono: Instant,
) -> SaveOutcome {
    if let Err(e) = store.save_config(&config) {
        tracing::warn!(error = %e, path = %store.path().display(), "failed to write settings");
    } else {
        tracing::info!(path = %store.path().display(), "settings saved");
    }

    let auto_start = config.auto_start;
    surface.apply_config(config, wall, mono);

    let autostart_warning = match autostart.set_enabled(auto_start) {
        Ok(()) => {
            tracing::info!(enabled = auto_start, "autostart updated");
            None
        }
        Err(e) => {
            tracing::warn!(enabled = auto_start, error = %e, "autostart update failed");
            Some(e)
        }
    };

    SaveOutcome { autostart_warning }
}
