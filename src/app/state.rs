//! Overlay application state.
//!
//! Owns the single settings store, the countdown surface, the autostart
//! registrar and the settings panel, and reacts to dispatched events.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use eframe::egui;

use crate::countdown::CountdownSurface;
use crate::events::EventPublisher;
use crate::handlers::EventHandler;
use crate::model::CountdownConfig;
use crate::platform::Autostart;
use crate::storage::SettingsStore;
use crate::ui::settings::{commit_config, SettingsPanel};

/// Local wall-clock time with second precision semantics.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct OverlayState {
    store: SettingsStore,
    surface: CountdownSurface,
    autostart: Box<dyn Autostart>,
    publisher: EventPublisher,
    settings: Option<SettingsPanel>,
    monitor_size: Option<egui::Vec2>,
    quit_requested: bool,
}

impl OverlayState {
    /// Load the config from `store` and build the surface (auto-resuming
    /// when configured).
    pub fn new(
        store: SettingsStore,
        autostart: Box<dyn Autostart>,
        publisher: EventPublisher,
        wall: NaiveDateTime,
        mono: Instant,
    ) -> Self {
        let config = store.load_config(wall);
        tracing::info!(
            path = %store.path().display(),
            until = %config.target,
            auto_resume = config.auto_resume,
            "loaded settings"
        );
        match autostart.is_enabled() {
            Ok(registered) if registered != config.auto_start => tracing::warn!(
                registered,
                configured = config.auto_start,
                "autostart registration differs from settings"
            ),
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "cannot query autostart registration"),
        }

        let surface = CountdownSurface::new(config, wall, mono);
        Self {
            store,
            surface,
            autostart,
            publisher,
            settings: None,
            monitor_size: None,
            quit_requested: false,
        }
    }

    pub fn surface(&self) -> &CountdownSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut CountdownSurface {
        &mut self.surface
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn settings(&self) -> Option<&SettingsPanel> {
        self.settings.as_ref()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Monitor size in points, used to center the settings panel.
    pub fn set_monitor_size(&mut self, size: Option<egui::Vec2>) {
        self.monitor_size = size;
    }

    /// Draw the settings viewport if it is open.
    pub fn show_settings(&mut self, ctx: &egui::Context) {
        if let Some(panel) = self.settings.as_mut() {
            panel.show(ctx);
        }
    }
}

impl EventHandler for OverlayState {
    fn open_settings(&mut self) {
        match self.settings.as_mut() {
            Some(panel) => panel.request_focus(),
            None => {
                tracing::debug!("opening settings panel");
                self.settings = Some(SettingsPanel::new(
                    self.surface.config(),
                    self.monitor_size,
                    self.publisher.clone(),
                ));
            }
        }
    }

    fn settings_closed(&mut self) {
        if self.settings.take().is_some() {
            tracing::debug!("settings panel closed");
        }
    }

    fn apply_config(&mut self, config: CountdownConfig) {
        let outcome = commit_config(
            config,
            &mut self.store,
            &mut self.surface,
            self.autostart.as_ref(),
            local_now(),
            Instant::now(),
        );
        tracing::debug!(state = ?self.surface.state(), "applied new configuration");
        if let Some(panel) = self.settings.as_mut() {
            panel.report_saved(&outcome);
        }
    }

    fn quit(&mut self) {
        tracing::info!("quit requested");
        self.quit_requested = true;
    }
}
