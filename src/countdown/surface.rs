//! Countdown surface state machine.
//!
//! Owns the live configuration, the Idle/Running state and the rendered
//! label. Time is passed in by the caller: wall-clock time for the
//! remaining-seconds computation and a monotonic instant for scheduling the
//! one-second tick.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use super::format::{display_text, format_remaining, placeholder_text};
use crate::model::CountdownConfig;

/// Tick period.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Whether the tick is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct CountdownSurface {
    config: CountdownConfig,
    state: CountdownState,
    text: String,
    next_tick: Option<Instant>,
    /// Bumped whenever the configuration is replaced.
    style_revision: u64,
}

impl CountdownSurface {
    /// Build the surface and resume the countdown if configured to.
    pub fn new(config: CountdownConfig, wall: NaiveDateTime, mono: Instant) -> Self {
        let text = placeholder_text(&config.display_prefix);
        let mut surface = Self {
            config,
            state: CountdownState::Idle,
            text,
            next_tick: None,
            style_revision: 0,
        };

        if surface.config.auto_resume && surface.config.target_is_future(wall) {
            surface.start(wall, mono);
        }
        surface
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// The label as currently rendered.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style_revision(&self) -> u64 {
        self.style_revision
    }

    /// Idle → Running. Renders immediately, then every second.
    pub fn start(&mut self, wall: NaiveDateTime, mono: Instant) {
        tracing::debug!(until = %self.config.target, "countdown started");
        self.state = CountdownState::Running;
        self.next_tick = Some(mono + TICK_INTERVAL);
        self.tick(wall);
    }

    /// Recompute the label. Reaching zero stops the tick.
    pub fn tick(&mut self, wall: NaiveDateTime) {
        let remaining = (self.config.target - wall).num_seconds();
        self.text = display_text(&self.config.display_prefix, &format_remaining(remaining));

        if remaining <= 0 && self.is_running() {
            tracing::info!("countdown reached zero");
            self.stop();
        }
    }

    /// Fire the tick if it is due. Returns true when the label was recomputed.
    pub fn poll(&mut self, wall: NaiveDateTime, mono: Instant) -> bool {
        let Some(due) = self.next_tick else {
            return false;
        };
        if mono < due {
            return false;
        }

        self.tick(wall);
        if self.is_running() {
            let mut next = due + TICK_INTERVAL;
            // Re-anchor after a stall (sleep, suspended window).
            if next <= mono {
                next = mono + TICK_INTERVAL;
            }
            self.next_tick = Some(next);
        }
        true
    }

    /// Time until the next tick, `None` while idle.
    pub fn until_next_tick(&self, mono: Instant) -> Option<Duration> {
        self.next_tick
            .map(|due| due.saturating_duration_since(mono))
    }

    /// Replace the whole configuration and redraw right away.
    ///
    /// A future target (re)starts the tick; a running tick with a past target
    /// renders "time's up" and stops; otherwise the idle placeholder shows.
    pub fn apply_config(&mut self, config: CountdownConfig, wall: NaiveDateTime, mono: Instant) {
        self.config = config;
        self.style_revision = self.style_revision.wrapping_add(1);

        if self.config.target_is_future(wall) {
            self.start(wall, mono);
        } else if self.is_running() {
            self.tick(wall);
        } else {
            self.text = placeholder_text(&self.config.display_prefix);
        }
    }

    fn stop(&mut self) {
        self.state = CountdownState::Idle;
        self.next_tick = None;
    }
}
