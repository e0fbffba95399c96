//! macOS LaunchAgent.
//!
//! Writes `~/Library/LaunchAgents/com.countdownapp.desktopcountdown.plist`
//! with `RunAtLoad`, which launchd picks up at the next login.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{current_executable, Autostart};
use crate::error::AutostartError;

/// launchd job label.
pub const AGENT_LABEL: &str = "com.countdownapp.desktopcountdown";

#[derive(Debug, Clone)]
pub struct LaunchAgent {
    dir: PathBuf,
    executable: PathBuf,
}

impl LaunchAgent {
    pub fn new(dir: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            executable: executable.into(),
        }
    }

    pub fn for_current_user() -> Result<Self, AutostartError> {
        let dir = dirs::home_dir()
            .ok_or(AutostartError::NoHomeDir)?
            .join("Library")
            .join("LaunchAgents");
        Ok(Self::new(dir, current_executable()?))
    }

    pub fn plist_path(&self) -> PathBuf {
        self.dir.join(format!("{AGENT_LABEL}.plist"))
    }

    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{AGENT_LABEL}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#,
            xml_escape(&self.executable)
        )
    }
}

impl Autostart for LaunchAgent {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        Ok(self.plist_path().is_file())
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), AutostartError> {
        let path = self.plist_path();
        if enabled {
            fs::create_dir_all(&self.dir)?;
            fs::write(&path, self.render())?;
            tracing::info!(path = %path.display(), "launch agent written");
        } else {
            match fs::remove_file(&path) {
                Ok(()) => tracing::info!(path = %path.display(), "launch agent removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

fn xml_escape(path: &Path) -> String {
    path.to_string_lossy()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_writes_plist_with_program_path() {
        let dir = tempfile::tempdir().unwrap();
        let agent = LaunchAgent::new(dir.path(), "/Applications/Count & Down.app/Contents/MacOS/app");
        agent.set_enabled(true).unwrap();

        let body = fs::read_to_string(agent.plist_path()).unwrap();
        assert!(body.contains("<string>/Applications/Count &amp; Down.app/Contents/MacOS/app</string>"));
        assert!(body.contains("<key>RunAtLoad</key>"));
        assert!(agent.is_enabled().unwrap());
    }

    #[test]
    fn disable_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let agent = LaunchAgent::new(dir.path(), "/usr/local/bin/app");
        agent.set_enabled(true).unwrap();
        agent.set_enabled(false).unwrap();
        agent.set_enabled(false).unwrap();
        assert!(!agent.is_enabled().unwrap());
    }
}
