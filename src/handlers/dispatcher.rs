//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It's called once per overlay frame
//! and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → EventHandler methods
//! ```

use crate::events::{AppEvent, EventBus};
use crate::model::CountdownConfig;

/// Actions the dispatcher can trigger.
///
/// The overlay app implements this; tests use a recording mock.
pub trait EventHandler {
    /// Open the settings panel (or focus it if already open).
    fn open_settings(&mut self);

    /// Forget the settings panel after it closed.
    fn settings_closed(&mut self);

    /// Replace the live countdown configuration.
    fn apply_config(&mut self, config: CountdownConfig);

    /// Shut the application down.
    fn quit(&mut self);
}

/// Dispatch all pending events from the bus, oldest first.
///
/// Returns the number of events handled.
pub fn dispatch_events<H: EventHandler + ?Sized>(bus: &EventBus, handler: &mut H) -> usize {
    let events = bus.drain();
    let count = events.len();

    for event in events {
        dispatch_single_event(handler, event);
    }

    count
}

fn dispatch_single_event<H: EventHandler + ?Sized>(handler: &mut H, event: AppEvent) {
    tracing::debug!(event = event.description(), "dispatch");

    match event {
        AppEvent::OpenSettings => handler.open_settings(),
        AppEvent::SettingsClosed => handler.settings_closed(),
        AppEvent::ApplyConfig(config) => handler.apply_config(*config),
        AppEvent::RequestQuit => handler.quit(),
    }
}
