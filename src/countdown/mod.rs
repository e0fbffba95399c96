//! Countdown logic (pure Rust, no window system).
//!
//! - [`format`]: remaining seconds to label text
//! - [`surface`]: the Idle/Running state machine behind the overlay
//! - [`geometry`]: overlay size and alignment math

pub mod format;
pub mod geometry;
pub mod surface;

pub use format::{display_text, format_remaining, placeholder_text};
pub use geometry::{aligned_origin, label_width, window_size, window_width, ScreenRect};
pub use surface::{CountdownState, CountdownSurface, TICK_INTERVAL};
