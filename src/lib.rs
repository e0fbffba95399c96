//! Desktop countdown overlay.
//!
//! Only `app`, `ui` and `platform` talk to the window system or the OS, so the
//! countdown, settings and storage logic can be tested as plain Rust.

pub mod app;
pub mod countdown;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod platform;
pub mod storage;
pub mod ui;

// Re-export model types for convenience
pub use model::{Alignment, CountdownConfig, Rgb, ThemePreset};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

pub use app::run;

/// Clamp a value to [lo, hi]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
