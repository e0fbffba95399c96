//! XDG autostart entry (Linux and other freedesktop systems).
//!
//! Writes `$XDG_CONFIG_HOME/autostart/desktop-countdown.desktop`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{current_executable, Autostart};
use crate::error::AutostartError;
use crate::model::constants::{APPLICATION, AUTOSTART_NAME};

/// Desktop entry file name.
pub const DESKTOP_FILE: &str = "desktop-countdown.desktop";

#[derive(Debug, Clone)]
pub struct XdgAutostart {
    dir: PathBuf,
    executable: PathBuf,
}

impl XdgAutostart {
    /// Entry for `executable` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            executable: executable.into(),
        }
    }

    /// Entry for the running executable in the user's autostart directory.
    pub fn for_current_user() -> Result<Self, AutostartError> {
        let dir = dirs::config_dir()
            .ok_or(AutostartError::NoHomeDir)?
            .join("autostart");
        Ok(Self::new(dir, current_executable()?))
    }

    pub fn entry_path(&self) -> PathBuf {
        self.dir.join(DESKTOP_FILE)
    }

    /// Desktop entry contents.
    pub fn render(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name={APPLICATION}\n\
             Comment=Desktop countdown overlay\n\
             Exec={}\n\
             Terminal=false\n\
             X-GNOME-Autostart-enabled=true\n\
             X-Desktop-Countdown-Id={AUTOSTART_NAME}\n",
            quote_exec_arg(&self.executable)
        )
    }
}

impl Autostart for XdgAutostart {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        Ok(self.entry_path().is_file())
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), AutostartError> {
        let path = self.entry_path();
        if enabled {
            fs::create_dir_all(&self.dir)?;
            fs::write(&path, self.render())?;
            tracing::info!(path = %path.display(), "autostart entry written");
        } else {
            match fs::remove_file(&path) {
                Ok(()) => tracing::info!(path = %path.display(), "autostart entry removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Quote a path for an `Exec=` key: wrap in double quotes and escape the
/// characters the desktop entry format reserves inside quotes.
pub fn quote_exec_arg(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
