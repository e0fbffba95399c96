//! OS integration.
//!
//! - Autostart: [`Autostart`] with one implementation per platform
//!   (Windows Run key, macOS LaunchAgent, XDG autostart entry).
//! - Work area: the screen rectangle not covered by taskbars/docks.

use std::path::PathBuf;

use crate::countdown::ScreenRect;
use crate::error::AutostartError;

pub mod launch_agent;
pub mod xdg_autostart;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

pub use launch_agent::LaunchAgent;
pub use xdg_autostart::XdgAutostart;

/// Run-at-login registration.
pub trait Autostart {
    /// Whether a registration currently exists.
    fn is_enabled(&self) -> Result<bool, AutostartError>;

    /// Register (`true`) or remove (`false`) the registration. Removing a
    /// registration that does not exist succeeds.
    fn set_enabled(&self, enabled: bool) -> Result<(), AutostartError>;
}

/// Platforms with no autostart mechanism.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl Autostart for Unsupported {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        Ok(false)
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), AutostartError> {
        if enabled {
            Err(AutostartError::Unsupported)
        } else {
            Ok(())
        }
    }
}

/// Autostart implementation for the current platform.
pub fn system_autostart() -> Box<dyn Autostart> {
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::registry::RunKey::default())
    }

    #[cfg(target_os = "macos")]
    {
        match LaunchAgent::for_current_user() {
            Ok(agent) => Box::new(agent),
            Err(e) => {
                tracing::warn!(error = %e, "LaunchAgent autostart unavailable");
                Box::new(Unsupported)
            }
        }
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        match XdgAutostart::for_current_user() {
            Ok(entry) => Box::new(entry),
            Err(e) => {
                tracing::warn!(error = %e, "XDG autostart unavailable");
                Box::new(Unsupported)
            }
        }
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    {
        Box::new(Unsupported)
    }
}

/// Absolute path of the running executable.
pub fn current_executable() -> Result<PathBuf, AutostartError> {
    std::env::current_exe().map_err(AutostartError::Executable)
}

/// Available screen area in physical pixels (Windows) or points (macOS).
/// `None` when the platform has no query; callers fall back to the monitor
/// size reported by the window system.
pub fn work_area() -> Option<ScreenRect> {
    #[cfg(target_os = "windows")]
    {
        windows::work_area::primary_work_area()
    }

    #[cfg(target_os = "macos")]
    {
        macos::work_area::main_screen_visible_frame()
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        None
    }
}

/// Whether [`work_area`] reports physical pixels that must be divided by
/// the display scale.
pub const WORK_AREA_IS_PHYSICAL: bool = cfg!(target_os = "windows");
