//! Overlay view module.
//!
//! Contains the drawing logic for the countdown overlay.

pub mod drawing;

pub use drawing::{show_overlay, OverlayLayout};
