#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use desk_countdown::logging::{init_tracing, LoggingConfig};

fn main() {
    if let Err(e) = init_tracing(LoggingConfig::from_env()) {
        eprintln!("desk-countdown: logging disabled: {e}");
    }

    if let Err(e) = desk_countdown::run() {
        tracing::error!(error = %e, "desk-countdown failed");
        eprintln!("desk-countdown error: {e}");
        std::process::exit(1);
    }
}
