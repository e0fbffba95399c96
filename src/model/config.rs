//! Countdown configuration (pure Rust, no UI).
//!
//! This module defines the single persisted entity and the enums it is made
//! of. Persistence lives in `storage::settings`.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::constants::*;
use crate::clamp;

/// Where the overlay sits inside the available screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Center,
    BottomRight,
    TopRight,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [
        Alignment::Center,
        Alignment::BottomRight,
        Alignment::TopRight,
    ];

    /// Value stored in the settings file.
    pub fn as_key(self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::BottomRight => "bottom_right",
            Alignment::TopRight => "top_right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Center => "Center",
            Alignment::BottomRight => "Bottom right",
            Alignment::TopRight => "Top right",
        }
    }
}

/// One-click theme presets offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    Dark,
    Light,
    Blue,
}

/// Values a preset overwrites. Everything else is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetValues {
    pub background: Rgb,
    pub text_color: Rgb,
    pub font_size: u32,
    pub background_opacity: u8,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [ThemePreset::Dark, ThemePreset::Light, ThemePreset::Blue];

    pub fn values(self) -> PresetValues {
        match self {
            ThemePreset::Dark => PresetValues {
                background: Rgb::new(40, 40, 40),
                text_color: Rgb::new(255, 255, 255),
                font_size: 42,
                background_opacity: 200,
            },
            ThemePreset::Light => PresetValues {
                background: Rgb::new(220, 220, 220),
                text_color: Rgb::new(0, 0, 0),
                font_size: 42,
                background_opacity: 180,
            },
            ThemePreset::Blue => PresetValues {
                background: Rgb::new(30, 80, 150),
                text_color: Rgb::new(255, 255, 255),
                font_size: 42,
                background_opacity: 180,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark theme",
            ThemePreset::Light => "Light theme",
            ThemePreset::Blue => "Blue theme",
        }
    }
}

/// Complete countdown configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Text rendered in front of the remaining time.
    pub display_prefix: String,
    /// Target instant, local wall-clock time with second precision.
    pub target: NaiveDateTime,
    pub background: Rgb,
    pub text_color: Rgb,
    pub background_opacity: u8,
    /// Font size in pixels [12, 72].
    pub font_size: u32,
    pub alignment: Alignment,
    /// Run at login. Mirrors the OS registration on a best-effort basis.
    pub auto_start: bool,
    /// Start the tick at launch when the target is still ahead.
    pub auto_resume: bool,
    /// Persisted for compatibility; nothing reads it yet.
    pub adapt_to_wallpaper: bool,
}

impl CountdownConfig {
    /// Defaults, with the target one hour after `now`.
    pub fn default_at(now: NaiveDateTime) -> Self {
        Self {
            display_prefix: DEFAULT_DISPLAY_TEXT.to_string(),
            target: default_target(now),
            background: Rgb::from_tuple(DEFAULT_BG_COLOR),
            text_color: Rgb::from_tuple(DEFAULT_TEXT_COLOR),
            background_opacity: DEFAULT_BG_OPACITY,
            font_size: DEFAULT_FONT_SIZE,
            alignment: Alignment::default(),
            auto_start: DEFAULT_AUTO_START,
            auto_resume: DEFAULT_AUTO_CONTINUE,
            adapt_to_wallpaper: DEFAULT_AUTO_WALLPAPER,
        }
    }

    /// Clamps values that can drift out of range to their limits.
    pub fn validate(&mut self) {
        self.font_size = clamp(self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Overwrite colors, font size and opacity from a preset.
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        let v = preset.values();
        self.background = v.background;
        self.text_color = v.text_color;
        self.font_size = v.font_size;
        self.background_opacity = v.background_opacity;
    }

    /// True when the target lies strictly after `now`.
    pub fn target_is_future(&self, now: NaiveDateTime) -> bool {
        self.target > now
    }

    /// Background fill composited with the configured opacity.
    pub fn background_fill(&self) -> eframe::egui::Color32 {
        self.background.with_alpha(self.background_opacity)
    }

    pub fn text_fill(&self) -> eframe::egui::Color32 {
        self.text_color.with_alpha(u8::MAX)
    }
}

/// Target used when none is stored: one hour from `now`, whole seconds.
pub fn default_target(now: NaiveDateTime) -> NaiveDateTime {
    let now = now.with_nanosecond(0).unwrap_or(now);
    now + TimeDelta::seconds(DEFAULT_TARGET_OFFSET_SECS)
}
