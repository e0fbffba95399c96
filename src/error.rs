//! Error types.
//!
//! Validation problems are shown to the user, OS-integration problems are
//! shown as warnings, and storage problems are only logged.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::logging::TracingError;
use crate::model::color::ParseRgbError;

/// Which color field of the settings form failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Background,
    Text,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorField::Background => f.write_str("Background color"),
            ColorField::Text => f.write_str("Text color"),
        }
    }
}

/// Settings form validation failure. Nothing is committed when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} must be R,G,B with each value between 0 and 255 ({source})")]
    InvalidColor {
        field: ColorField,
        #[source]
        source: ParseRgbError,
    },

    #[error("target time {0} is not a valid calendar date")]
    InvalidTarget(String),
}

/// Settings file failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Autostart registration failures.
#[derive(Debug, Error)]
pub enum AutostartError {
    #[error("cannot determine the executable path: {0}")]
    Executable(#[source] std::io::Error),

    #[error("cannot determine the home directory")]
    NoHomeDir,

    #[error("autostart file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry {op} failed with error code {code}")]
    Registry { op: &'static str, code: u32 },

    #[error("autostart is not supported on this platform")]
    Unsupported,
}

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tracing(#[from] TracingError),

    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

pub type AppResult<T> = Result<T, AppError>;
