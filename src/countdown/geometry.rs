//! Overlay sizing and screen alignment.
//!
//! All values are logical points.

use crate::clamp;
use crate::model::constants::*;
use crate::model::Alignment;

/// A screen rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Convert from physical pixels.
    pub fn scaled(self, pixels_per_point: f32) -> Self {
        if pixels_per_point <= 0.0 {
            return self;
        }
        Self::new(
            self.x / pixels_per_point,
            self.y / pixels_per_point,
            self.width / pixels_per_point,
            self.height / pixels_per_point,
        )
    }
}

/// Natural label width: text plus padding on both sides.
pub fn label_width(text_width: f32) -> f32 {
    text_width + 2.0 * LABEL_PADDING
}

/// Overlay width for a label of the given natural width, within [300, 800].
pub fn window_width(label_natural_width: f32) -> f32 {
    clamp(
        label_natural_width + OVERLAY_WIDTH_EXTRA,
        MIN_WINDOW_WIDTH,
        MAX_WINDOW_WIDTH,
    )
}

/// Overlay size for a label of the given natural width.
pub fn window_size(label_natural_width: f32) -> (f32, f32) {
    (window_width(label_natural_width), WINDOW_HEIGHT)
}

/// Top-left corner that places a window of `size` inside `area`.
///
/// Bottom-right is inset 20 from both edges; top-right is inset 20 from the
/// right edge and 20 down from the top.
pub fn aligned_origin(area: ScreenRect, size: (f32, f32), alignment: Alignment) -> (f32, f32) {
    let (w, h) = size;
    match alignment {
        Alignment::Center => (
            area.x + (area.width - w) / 2.0,
            area.y + (area.height - h) / 2.0,
        ),
        Alignment::BottomRight => (area.right() - w - EDGE_INSET, area.bottom() - h - EDGE_INSET),
        Alignment::TopRight => (area.right() - w - EDGE_INSET, area.y + EDGE_INSET),
    }
}
