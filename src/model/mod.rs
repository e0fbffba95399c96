//! Application domain model.
//!
//! This module contains pure business logic (no platform dependencies)
//! including the countdown configuration, colors and constants.
//!
//! Persistence is in `storage::settings`.

pub mod color;
pub mod config;
pub mod constants;

pub use color::{ParseRgbError, Rgb};
pub use config::{Alignment, CountdownConfig, PresetValues, ThemePreset};
pub use constants::*;
