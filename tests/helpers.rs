//! Tests for the small shared helpers: clamping, RGB text, time formatting.

use desk_countdown::clamp;
use desk_countdown::countdown::{display_text, format_remaining, placeholder_text};
use desk_countdown::model::{ParseRgbError, Rgb};

// === clamp ===

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10, 0, 20), 10);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

// === Rgb ===

#[test]
fn rgb_accepts_plain_triple() {
    assert_eq!("255,0,0".parse::<Rgb>(), Ok(Rgb::new(255, 0, 0)));
}

#[test]
fn rgb_rejects_out_of_range() {
    assert_eq!("256,0,0".parse::<Rgb>(), Err(ParseRgbError::OutOfRange(256)));
    assert_eq!("-1,0,0".parse::<Rgb>(), Err(ParseRgbError::OutOfRange(-1)));
}

#[test]
fn rgb_rejects_two_components() {
    assert_eq!("1,2".parse::<Rgb>(), Err(ParseRgbError::ComponentCount(2)));
}

#[test]
fn rgb_rejects_letters() {
    assert!(matches!("a,b,c".parse::<Rgb>(), Err(ParseRgbError::NotAnInteger(_))));
}

#[test]
fn rgb_displays_as_stored_text() {
    assert_eq!(Rgb::new(30, 80, 150).to_string(), "30,80,150");
}

// === Remaining-time text ===

#[test]
fn zero_and_negative_are_times_up() {
    assert_eq!(format_remaining(0), "时间到！");
    assert_eq!(format_remaining(-5), "时间到！");
}

#[test]
fn under_a_day_is_clock_format() {
    assert_eq!(format_remaining(1), "00:00:01");
    assert_eq!(format_remaining(3661), "01:01:01");
    assert_eq!(format_remaining(86_400), "24:00:00");
}

#[test]
fn over_a_day_is_whole_days() {
    assert_eq!(format_remaining(86_401), "1天");
    assert_eq!(format_remaining(90_000), "1天");
    assert_eq!(format_remaining(3 * 86_400 + 10), "3天");
}

#[test]
fn prefix_is_prepended() {
    assert_eq!(display_text("Left: ", "00:00:05"), "Left: 00:00:05");
    assert_eq!(placeholder_text("Left: "), "Left: 00:00:00");
}
