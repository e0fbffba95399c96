//! Remaining-time to text.

use crate::model::constants::{DAYS_SUFFIX, IDLE_PLACEHOLDER, SECS_PER_DAY, TIMES_UP_SUFFIX};

/// Time portion of the label for `remaining` whole seconds.
///
/// - `remaining <= 0` → "时间到！"
/// - more than one day → whole days, the sub-day remainder is dropped
/// - otherwise `HH:MM:SS`, zero padded
pub fn format_remaining(remaining: i64) -> String {
    if remaining <= 0 {
        TIMES_UP_SUFFIX.to_string()
    } else if remaining > SECS_PER_DAY {
        format!("{}{}", remaining / SECS_PER_DAY, DAYS_SUFFIX)
    } else {
        let hours = remaining / 3600;
        let minutes = (remaining % 3600) / 60;
        let seconds = remaining % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Full label: prefix followed by the time portion.
pub fn display_text(prefix: &str, time: &str) -> String {
    format!("{prefix}{time}")
}

/// Label shown while no countdown is running.
pub fn placeholder_text(prefix: &str) -> String {
    display_text(prefix, IDLE_PLACEHOLDER)
}
