//! Windows Registry operations
//!
//! Safe wrappers around the registry APIs used for the autostart entry under
//! `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Run`.

use std::ffi::OsStr;
use std::iter;
use std::os::windows::ffi::OsStrExt;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_PATH_NOT_FOUND, ERROR_SUCCESS, WIN32_ERROR,
};
use windows::Win32::System::Registry::{
    RegCloseKey, RegDeleteValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW, HKEY,
    HKEY_CURRENT_USER, KEY_READ, KEY_SET_VALUE, KEY_WRITE, REG_SAM_FLAGS, REG_SZ,
};

use crate::error::AutostartError;
use crate::model::constants::AUTOSTART_NAME;
use crate::platform::{current_executable, Autostart};

/// Registry key path for Windows Run (autostart) entries
pub const REGISTRY_RUN_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Run";

/// Convert a Rust string to a null-terminated UTF-16 wide string for Win32 APIs
fn to_wide(input: &str) -> Vec<u16> {
    OsStr::new(input)
        .encode_wide()
        .chain(iter::once(0))
        .collect()
}

fn registry_error(op: &'static str, code: WIN32_ERROR) -> AutostartError {
    AutostartError::Registry { op, code: code.0 }
}

fn is_not_found(code: WIN32_ERROR) -> bool {
    code == ERROR_FILE_NOT_FOUND || code == ERROR_PATH_NOT_FOUND
}

/// An open HKCU key, closed on drop.
struct OpenKey(HKEY);

impl OpenKey {
    /// Open `key_path` under HKCU. `Ok(None)` when the key does not exist.
    fn open(key_path: &str, access: REG_SAM_FLAGS) -> Result<Option<Self>, AutostartError> {
        let key_path_wide = to_wide(key_path);
        let mut key_handle = HKEY::default();

        // SAFETY:
        // - key_path_wide is a valid null-terminated UTF-16 buffer that outlives this call
        // - key_handle is a valid pointer to receive the opened key
        let result = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(key_path_wide.as_ptr()),
                Some(0),
                access,
                &mut key_handle,
            )
        };

        if result == ERROR_SUCCESS {
            Ok(Some(Self(key_handle)))
        } else if is_not_found(result) {
            Ok(None)
        } else {
            Err(registry_error("open", result))
        }
    }
}

impl Drop for OpenKey {
    fn drop(&mut self) {
        // SAFETY: the handle came from a successful RegOpenKeyExW
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// Check if a value exists under HKEY_CURRENT_USER\`key_path`.
pub fn value_exists(key_path: &str, value_name: &str) -> Result<bool, AutostartError> {
    let Some(key) = OpenKey::open(key_path, KEY_READ)? else {
        return Ok(false);
    };
    let value_name_wide = to_wide(value_name);

    // SAFETY:
    // - value_name_wide is a valid null-terminated UTF-16 buffer
    // - No data buffer is passed, this only queries existence
    let result = unsafe {
        RegQueryValueExW(
            key.0,
            PCWSTR::from_raw(value_name_wide.as_ptr()),
            None,
            None,
            None,
            None,
        )
    };

    // ERROR_MORE_DATA means value exists but buffer too small
    if result == ERROR_SUCCESS || result == ERROR_MORE_DATA {
        Ok(true)
    } else if result == ERROR_FILE_NOT_FOUND {
        Ok(false)
    } else {
        Err(registry_error("query", result))
    }
}

/// Write a REG_SZ value. The key must already exist.
pub fn write_string(key_path: &str, value_name: &str, value: &str) -> Result<(), AutostartError> {
    let key = OpenKey::open(key_path, KEY_WRITE)?
        .ok_or_else(|| registry_error("open", ERROR_PATH_NOT_FOUND))?;
    let value_name_wide = to_wide(value_name);
    let value_wide = to_wide(value);

    // Byte view including the null terminator (UTF-16 = 2 bytes per unit)
    let data_bytes: Vec<u8> = value_wide.iter().flat_map(|u| u.to_le_bytes()).collect();

    // SAFETY:
    // - key.0 is valid for the lifetime of `key`
    // - value_name_wide is a valid null-terminated UTF-16 buffer
    let result = unsafe {
        RegSetValueExW(
            key.0,
            PCWSTR::from_raw(value_name_wide.as_ptr()),
            None,
            REG_SZ,
            Some(&data_bytes),
        )
    };

    if result == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(registry_error("write", result))
    }
}

/// Delete a value. A missing key or value counts as success.
pub fn delete_value(key_path: &str, value_name: &str) -> Result<(), AutostartError> {
    let Some(key) = OpenKey::open(key_path, KEY_SET_VALUE)? else {
        return Ok(());
    };
    let value_name_wide = to_wide(value_name);

    // SAFETY: key.0 is valid, value_name_wide is null-terminated UTF-16
    let result = unsafe { RegDeleteValueW(key.0, PCWSTR::from_raw(value_name_wide.as_ptr())) };

    if result == ERROR_SUCCESS || result == ERROR_FILE_NOT_FOUND {
        Ok(())
    } else {
        Err(registry_error("delete", result))
    }
}

/// Autostart through the Run key.
#[derive(Debug, Clone)]
pub struct RunKey {
    key_path: String,
    value_name: String,
}

impl Default for RunKey {
    fn default() -> Self {
        Self {
            key_path: REGISTRY_RUN_KEY.to_string(),
            value_name: AUTOSTART_NAME.to_string(),
        }
    }
}

impl Autostart for RunKey {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        value_exists(&self.key_path, &self.value_name)
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), AutostartError> {
        if enabled {
            let exe_path = current_executable()?;
            // Quote the path to handle spaces
            let command = format!("\"{}\"", exe_path.display());
            write_string(&self.key_path, &self.value_name, &command)?;
            tracing::info!(exe = %exe_path.display(), "autostart enabled");
        } else {
            delete_value(&self.key_path, &self.value_name)?;
            tracing::info!("autostart disabled");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_VALUE_NAME: &str = "DesktopCountdown_Test_Value_Delete_Me";

    #[test]
    fn registry_roundtrip() {
        write_string(REGISTRY_RUN_KEY, TEST_VALUE_NAME, "test_data").unwrap();
        assert!(value_exists(REGISTRY_RUN_KEY, TEST_VALUE_NAME).unwrap());

        delete_value(REGISTRY_RUN_KEY, TEST_VALUE_NAME).unwrap();
        assert!(!value_exists(REGISTRY_RUN_KEY, TEST_VALUE_NAME).unwrap());
    }

    #[test]
    fn missing_key_reads_as_absent() {
        let exists = value_exists("Software\\DesktopCountdown\\NonExistent", "Nope").unwrap();
        assert!(!exists);
        assert!(delete_value("Software\\DesktopCountdown\\NonExistent", "Nope").is_ok());
    }
}
