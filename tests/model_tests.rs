//! Tests for the configuration model: defaults, presets, alignment keys.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use desk_countdown::model::constants::*;
use desk_countdown::model::{Alignment, CountdownConfig, Rgb, ThemePreset};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

// === Default Values Tests ===

#[test]
fn default_target_is_one_hour_ahead() {
    let cfg = CountdownConfig::default_at(noon());
    assert_eq!(cfg.target, noon() + TimeDelta::hours(1));
}

#[test]
fn default_theme_values() {
    let cfg = CountdownConfig::default_at(noon());
    assert_eq!(cfg.display_prefix, DEFAULT_DISPLAY_TEXT);
    assert_eq!(cfg.background, Rgb::new(40, 40, 40));
    assert_eq!(cfg.text_color, Rgb::new(255, 255, 255));
    assert_eq!(cfg.background_opacity, 200);
    assert_eq!(cfg.font_size, 42);
    assert_eq!(cfg.alignment, Alignment::Center);
}

#[test]
fn default_flags() {
    let cfg = CountdownConfig::default_at(noon());
    assert!(!cfg.auto_start);
    assert!(cfg.auto_resume);
    assert!(!cfg.adapt_to_wallpaper);
}

// === Validation ===

#[test]
fn validate_clamps_font_size() {
    let mut cfg = CountdownConfig::default_at(noon());
    cfg.font_size = 5;
    cfg.validate();
    assert_eq!(cfg.font_size, MIN_FONT_SIZE);

    cfg.font_size = 500;
    cfg.validate();
    assert_eq!(cfg.font_size, MAX_FONT_SIZE);
}

// === Presets ===

#[test]
fn dark_preset_leaves_other_fields() {
    let mut cfg = CountdownConfig::default_at(noon());
    cfg.background = Rgb::new(1, 2, 3);
    cfg.font_size = 20;
    cfg.display_prefix = "Deadline: ".into();
    cfg.alignment = Alignment::BottomRight;
    cfg.auto_start = true;

    cfg.apply_preset(ThemePreset::Dark);

    assert_eq!(cfg.background, Rgb::new(40, 40, 40));
    assert_eq!(cfg.text_color, Rgb::new(255, 255, 255));
    assert_eq!(cfg.font_size, 42);
    assert_eq!(cfg.background_opacity, 200);
    assert_eq!(cfg.display_prefix, "Deadline: ");
    assert_eq!(cfg.alignment, Alignment::BottomRight);
    assert!(cfg.auto_start);
}

#[test]
fn light_and_blue_presets() {
    let light = ThemePreset::Light.values();
    assert_eq!(light.background, Rgb::new(220, 220, 220));
    assert_eq!(light.text_color, Rgb::new(0, 0, 0));
    assert_eq!(light.background_opacity, 180);

    let blue = ThemePreset::Blue.values();
    assert_eq!(blue.background, Rgb::new(30, 80, 150));
    assert_eq!(blue.text_color, Rgb::new(255, 255, 255));
    assert_eq!(blue.background_opacity, 180);
}

// === Alignment keys ===

#[test]
fn alignment_keys_round_trip() {
    for a in Alignment::ALL {
        let parsed: Alignment = serde_json::from_value(serde_json::json!(a.as_key())).unwrap();
        assert_eq!(parsed, a);
    }
}

#[test]
fn unknown_alignment_key_is_rejected() {
    assert!(serde_json::from_value::<Alignment>(serde_json::json!("left")).is_err());
}

// === Fills ===

#[test]
fn background_fill_carries_opacity() {
    let cfg = CountdownConfig::default_at(noon());
    let fill = cfg.background_fill();
    assert_eq!(fill.a(), 200);
}
