//! Application events for inter-module communication.
//!
//! These events represent high-level application actions published by the
//! overlay and the settings panel and handled by the dispatcher.
//! This module is pure Rust, making it fully testable.

use crate::model::CountdownConfig;

/// Application-level events.
///
/// Events flow from producers (overlay button, context menu, settings panel)
/// through the EventBus to the dispatcher, which executes the appropriate
/// actions on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Open the settings panel, or focus it if already open
    OpenSettings,

    /// Settings panel was closed (saved or cancelled)
    SettingsClosed,

    /// Replace the live countdown configuration
    ApplyConfig(Box<CountdownConfig>),

    /// Quit the application
    RequestQuit,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::OpenSettings => "Open settings panel",
            AppEvent::SettingsClosed => "Settings panel closed",
            AppEvent::ApplyConfig(_) => "Apply countdown configuration",
            AppEvent::RequestQuit => "Quit application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_config() -> CountdownConfig {
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        CountdownConfig::default_at(now)
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(AppEvent::OpenSettings, AppEvent::OpenSettings);
        assert_ne!(AppEvent::OpenSettings, AppEvent::SettingsClosed);
    }

    #[test]
    fn test_apply_config_carries_config() {
        let cfg = sample_config();
        let event = AppEvent::ApplyConfig(Box::new(cfg.clone()));
        match event {
            AppEvent::ApplyConfig(inner) => assert_eq!(*inner, cfg),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::OpenSettings,
            AppEvent::SettingsClosed,
            AppEvent::ApplyConfig(Box::new(sample_config())),
            AppEvent::RequestQuit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
