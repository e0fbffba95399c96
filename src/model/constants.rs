//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! settings-file keys, validation limits and overlay geometry.

// === Application Identity ===

/// Organization half of the settings namespace.
pub const ORGANIZATION: &str = "CountdownApp";

/// Application half of the settings namespace.
pub const APPLICATION: &str = "DesktopCountdown";

/// Name used for the autostart registration.
pub const AUTOSTART_NAME: &str = "DesktopCountdown";

/// Overlay window title.
pub const WINDOW_TITLE: &str = "桌面倒计时";

/// Settings window title.
pub const SETTINGS_TITLE: &str = "Countdown Settings";

/// Icon file looked up at startup.
pub const ICON_FILE: &str = "logo.png";

/// Environment variable overriding the settings file path.
pub const CONFIG_PATH_ENV: &str = "DESK_COUNTDOWN_CONFIG";

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "DESK_COUNTDOWN_LOG";

// === Settings Keys ===

/// Key for the text shown before the remaining time.
pub const PREF_DISPLAY_TEXT: &str = "display_text";

/// Key for the target date-time (ISO-8601, second precision).
pub const PREF_TARGET_TIME: &str = "target_time";

/// Key for background opacity (0-255).
pub const PREF_BG_OPACITY: &str = "bg_opacity";

/// Key for background color ("R,G,B").
pub const PREF_BG_COLOR: &str = "bg_color";

/// Key for text color ("R,G,B").
pub const PREF_TEXT_COLOR: &str = "text_color";

/// Key for font size in pixels.
pub const PREF_FONT_SIZE: &str = "font_size";

/// Key for screen alignment.
pub const PREF_ALIGNMENT: &str = "alignment";

/// Key for the wallpaper adaptation flag.
pub const PREF_AUTO_WALLPAPER: &str = "auto_wallpaper";

/// Key for the run-at-login flag.
pub const PREF_AUTO_START: &str = "auto_start";

/// Key for resuming the countdown at launch.
pub const PREF_AUTO_CONTINUE: &str = "auto_continue";

// === Defaults ===

/// Default display prefix.
pub const DEFAULT_DISPLAY_TEXT: &str = "目标时间还有: ";

/// Default target offset from "now" when nothing is stored, in seconds.
pub const DEFAULT_TARGET_OFFSET_SECS: i64 = 3600;

/// Default background color.
pub const DEFAULT_BG_COLOR: (u8, u8, u8) = (40, 40, 40);

/// Default text color.
pub const DEFAULT_TEXT_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Default background opacity.
pub const DEFAULT_BG_OPACITY: u8 = 200;

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 42;

pub const DEFAULT_AUTO_START: bool = false;
pub const DEFAULT_AUTO_CONTINUE: bool = true;
pub const DEFAULT_AUTO_WALLPAPER: bool = false;

// === Validation Limits ===

/// Minimum font size in pixels.
pub const MIN_FONT_SIZE: u32 = 12;

/// Maximum font size in pixels.
pub const MAX_FONT_SIZE: u32 = 72;

// === Countdown Text ===

/// Seconds in one day; above this the display switches to whole days.
pub const SECS_PER_DAY: i64 = 86_400;

/// Suffix rendered once the target is reached.
pub const TIMES_UP_SUFFIX: &str = "时间到！";

/// Unit appended to the day count.
pub const DAYS_SUFFIX: &str = "天";

/// Time rendered while idle.
pub const IDLE_PLACEHOLDER: &str = "00:00:00";

/// Serialized form of the target time.
pub const TARGET_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Display format of the target time in the settings panel.
pub const TARGET_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// === Overlay Geometry ===

/// Space around the label inside the overlay, per side.
pub const OVERLAY_MARGIN: f32 = 25.0;

/// Horizontal room the overlay adds around the label (both margins).
pub const OVERLAY_WIDTH_EXTRA: f32 = 50.0;

/// Vertical gap between label and settings button.
pub const OVERLAY_SPACING: f32 = 15.0;

/// Narrowest overlay.
pub const MIN_WINDOW_WIDTH: f32 = 300.0;

/// Widest overlay.
pub const MAX_WINDOW_WIDTH: f32 = 800.0;

/// Overlay height, independent of content.
pub const WINDOW_HEIGHT: f32 = 200.0;

/// Inset from the screen edge for corner alignments.
pub const EDGE_INSET: f32 = 20.0;

/// Label padding, per side.
pub const LABEL_PADDING: f32 = 20.0;

/// Label corner radius.
pub const LABEL_CORNER_RADIUS: u8 = 15;

/// Settings button size.
pub const SETTINGS_BUTTON_SIZE: (f32, f32) = (100.0, 40.0);

/// Settings button fill (RGBA), idle and hovered.
pub const SETTINGS_BUTTON_FILL: (u8, u8, u8, u8) = (60, 60, 60, 150);
pub const SETTINGS_BUTTON_HOVER_FILL: (u8, u8, u8, u8) = (80, 80, 80, 150);

/// Minimum settings window size.
pub const SETTINGS_MIN_SIZE: (f32, f32) = (500.0, 500.0);

/// Initial settings window size.
pub const SETTINGS_SIZE: (f32, f32) = (520.0, 720.0);
