//! Tests for the countdown surface and overlay geometry.

use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use desk_countdown::countdown::*;
use desk_countdown::model::{Alignment, CountdownConfig};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn config_with_target(offset_secs: i64) -> CountdownConfig {
    let mut cfg = CountdownConfig::default_at(noon());
    cfg.display_prefix = "T-".into();
    cfg.target = noon() + TimeDelta::seconds(offset_secs);
    cfg
}

// === Surface states ===

#[test]
fn resumes_when_target_ahead() {
    let s = CountdownSurface::new(config_with_target(3661), noon(), Instant::now());
    assert_eq!(s.state(), CountdownState::Running);
    assert_eq!(s.text(), "T-01:01:01");
}

#[test]
fn stays_idle_without_auto_resume() {
    let mut cfg = config_with_target(3661);
    cfg.auto_resume = false;
    let s = CountdownSurface::new(cfg, noon(), Instant::now());
    assert_eq!(s.state(), CountdownState::Idle);
    assert_eq!(s.text(), "T-00:00:00");
}

#[test]
fn tick_reaching_zero_goes_idle() {
    let mono = Instant::now();
    let mut s = CountdownSurface::new(config_with_target(2), noon(), mono);

    s.tick(noon() + TimeDelta::seconds(2));

    assert_eq!(s.text(), "T-时间到！");
    assert_eq!(s.state(), CountdownState::Idle);
    assert_eq!(s.until_next_tick(mono), None);
}

#[test]
fn more_than_a_day_shows_days() {
    let s = CountdownSurface::new(config_with_target(90_000), noon(), Instant::now());
    assert_eq!(s.text(), "T-1天");
}

#[test]
fn poll_waits_for_the_second_boundary() {
    let mono = Instant::now();
    let mut s = CountdownSurface::new(config_with_target(10), noon(), mono);

    assert!(!s.poll(noon(), mono + Duration::from_millis(500)));
    assert!(s.poll(noon() + TimeDelta::seconds(1), mono + Duration::from_secs(1)));
    assert_eq!(s.text(), "T-00:00:09");
}

#[test]
fn apply_config_with_future_target_starts() {
    let mono = Instant::now();
    let mut cfg = config_with_target(-10);
    cfg.auto_resume = false;
    let mut s = CountdownSurface::new(cfg, noon(), mono);
    let revision = s.style_revision();

    s.apply_config(config_with_target(65), noon(), mono);

    assert_eq!(s.state(), CountdownState::Running);
    assert_eq!(s.text(), "T-00:01:05");
    assert_ne!(s.style_revision(), revision);
}

#[test]
fn apply_config_with_past_target_while_idle_shows_placeholder() {
    let mono = Instant::now();
    let mut cfg = config_with_target(-10);
    cfg.auto_resume = false;
    let mut s = CountdownSurface::new(cfg.clone(), noon(), mono);

    cfg.display_prefix = "Done? ".into();
    s.apply_config(cfg, noon(), mono);

    assert_eq!(s.state(), CountdownState::Idle);
    assert_eq!(s.text(), "Done? 00:00:00");
}

#[test]
fn apply_config_with_past_target_while_running_shows_times_up() {
    let mono = Instant::now();
    let mut s = CountdownSurface::new(config_with_target(100), noon(), mono);

    s.apply_config(config_with_target(-1), noon(), mono);

    assert_eq!(s.state(), CountdownState::Idle);
    assert_eq!(s.text(), "T-时间到！");
}

// === Geometry ===

#[test]
fn narrow_label_clamps_to_minimum_width() {
    assert_eq!(window_width(100.0), 300.0);
    assert_eq!(window_width(249.0), 300.0);
}

#[test]
fn wide_label_clamps_to_maximum_width() {
    assert_eq!(window_width(751.0), 800.0);
    assert_eq!(window_width(2000.0), 800.0);
}

#[test]
fn medium_label_adds_margin() {
    assert_eq!(window_width(400.0), 450.0);
    assert_eq!(window_size(400.0), (450.0, 200.0));
}

#[test]
fn label_width_adds_padding_on_both_sides() {
    assert_eq!(label_width(100.0), 140.0);
}

#[test]
fn alignment_origins() {
    let area = ScreenRect::new(0.0, 0.0, 1920.0, 1040.0);
    let size = (400.0, 200.0);

    assert_eq!(aligned_origin(area, size, Alignment::Center), (760.0, 420.0));
    assert_eq!(aligned_origin(area, size, Alignment::BottomRight), (1500.0, 820.0));
    assert_eq!(aligned_origin(area, size, Alignment::TopRight), (1500.0, 20.0));
}

#[test]
fn alignment_respects_offset_work_area() {
    let area = ScreenRect::new(0.0, 40.0, 1920.0, 1040.0);
    assert_eq!(
        aligned_origin(area, (400.0, 200.0), Alignment::TopRight),
        (1500.0, 60.0)
    );
}

#[test]
fn physical_area_scales_to_points() {
    let area = ScreenRect::new(0.0, 0.0, 3840.0, 2080.0).scaled(2.0);
    assert_eq!(area, ScreenRect::new(0.0, 0.0, 1920.0, 1040.0));
}
