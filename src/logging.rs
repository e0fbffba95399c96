//! Logging setup.
//!
//! The filter comes from `DESK_COUNTDOWN_LOG`, then `RUST_LOG`, then the
//! configured default level for this crate.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::model::constants::LOG_FILTER_ENV;

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("failed to parse log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate when no filter is set in the environment.
    pub default_level: Level,
    /// Whether to include file/line information
    pub include_location: bool,
    /// Explicit filter directive, overriding the environment.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            include_location: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Read the filter directive from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let env_filter = std::env::var(LOG_FILTER_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self {
            env_filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Filter used when nothing is configured: this crate at the default
    /// level, everything else (winit, wgpu, ...) at warn.
    pub fn fallback_directive(&self) -> String {
        format!("warn,desk_countdown={}", self.default_level)
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_tracing(config: LoggingConfig) -> Result<(), TracingError> {
    let env_filter = if let Some(ref filter) = config.env_filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.fallback_directive()))
    };

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .compact()
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_target(true),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_level, Level::INFO);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn fallback_directive_scopes_crate_level() {
        let config = LoggingConfig::default().with_level(Level::DEBUG);
        assert_eq!(config.fallback_directive(), "warn,desk_countdown=DEBUG");
    }
}
