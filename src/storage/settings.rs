//! JSON settings file.
//!
//! Stores settings in `<config dir>/CountdownApp/DesktopCountdown.json`
//! as a flat key-value object.
//!
//! Uses an in-memory cache; `set()` only touches the cache and `flush()`
//! persists it. Reads always take an explicit default: a missing key or a
//! value of the wrong type yields the default, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::model::config::default_target;
use crate::model::constants::*;
use crate::model::{Alignment, CountdownConfig, Rgb};

/// Key-value settings store backed by one JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: Map<String, Value>,
    dirty: bool,
}

/// Default settings path: `$DESK_COUNTDOWN_CONFIG` or the per-user config dir.
pub fn default_settings_path() -> PathBuf {
    if let Some(p) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(p);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ORGANIZATION)
        .join(format!("{APPLICATION}.json"))
}

impl SettingsStore {
    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_from_disk(&path);
        tracing::debug!(path = %path.display(), keys = values.len(), "settings loaded");
        Self {
            path,
            values,
            dirty: false,
        }
    }

    pub fn open_default() -> Self {
        Self::open(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Read a string, returning `default` if not set or not a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Read an integer. Numeric strings are accepted too.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Read a boolean. `"true"`/`"false"` strings are accepted too.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    /// Deserialize a value, `None` if missing or of the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Write a value to the cache (flush later).
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the cache to disk if dirty.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.dirty = false;
        tracing::debug!(path = %self.path.display(), "settings written");
        Ok(())
    }

    /// Build the configuration, substituting defaults for anything missing
    /// or malformed.
    pub fn load_config(&self, now: NaiveDateTime) -> CountdownConfig {
        let defaults = CountdownConfig::default_at(now);

        let target = self
            .values
            .get(PREF_TARGET_TIME)
            .and_then(Value::as_str)
            .and_then(parse_target)
            .unwrap_or_else(|| default_target(now));

        let mut config = CountdownConfig {
            display_prefix: self.get_string(PREF_DISPLAY_TEXT, &defaults.display_prefix),
            target,
            background: self.get_rgb(PREF_BG_COLOR, defaults.background),
            text_color: self.get_rgb(PREF_TEXT_COLOR, defaults.text_color),
            background_opacity: self
                .get_int(PREF_BG_OPACITY, i64::from(defaults.background_opacity))
                .clamp(0, i64::from(u8::MAX)) as u8,
            font_size: self
                .get_int(PREF_FONT_SIZE, i64::from(defaults.font_size))
                .clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE))
                as u32,
            alignment: self
                .get::<Alignment>(PREF_ALIGNMENT)
                .unwrap_or(defaults.alignment),
            auto_start: self.get_bool(PREF_AUTO_START, defaults.auto_start),
            auto_resume: self.get_bool(PREF_AUTO_CONTINUE, defaults.auto_resume),
            adapt_to_wallpaper: self.get_bool(PREF_AUTO_WALLPAPER, defaults.adapt_to_wallpaper),
        };
        config.validate();
        config
    }

    /// Write every field and flush once.
    pub fn save_config(&mut self, config: &CountdownConfig) -> Result<(), StoreError> {
        self.set(PREF_DISPLAY_TEXT, config.display_prefix.clone());
        self.set(PREF_TARGET_TIME, format_target(config.target));
        self.set(PREF_AUTO_START, config.auto_start);
        self.set(PREF_AUTO_CONTINUE, config.auto_resume);
        self.set(PREF_AUTO_WALLPAPER, config.adapt_to_wallpaper);
        self.set(PREF_BG_COLOR, config.background.to_string());
        self.set(PREF_TEXT_COLOR, config.text_color.to_string());
        self.set(PREF_FONT_SIZE, config.font_size);
        self.set(PREF_BG_OPACITY, config.background_opacity);
        self.set(PREF_ALIGNMENT, config.alignment.as_key());
        self.flush()
    }

    fn get_rgb(&self, key: &str, default: Rgb) -> Rgb {
        match self.values.get(key) {
            Some(Value::String(s)) => s.parse().unwrap_or(default),
            _ => default,
        }
    }
}

/// Serialize a target time (`YYYY-MM-DDTHH:MM:SS`).
pub fn format_target(target: NaiveDateTime) -> String {
    target.format(TARGET_TIME_FORMAT).to_string()
}

/// Parse a stored target time. Fractional seconds and offsets written by
/// other tools are accepted; the offset is dropped.
pub fn parse_target(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TARGET_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Load the JSON object from disk, returning an empty map if not found or
/// invalid.
fn load_from_disk(path: &Path) -> Map<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Map::new(),
    };
    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::warn!(path = %path.display(), "settings file is not a JSON object, using defaults");
            Map::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let s = SettingsStore::open(dir.path().join("settings.json"));
        (dir, s)
    }

    #[test]
    fn missing_keys_yield_defaults() {
        let (_dir, s) = store();
        assert_eq!(s.get_string("nope", "x"), "x");
        assert_eq!(s.get_int("nope", 7), 7);
        assert!(s.get_bool("nope", true));
    }

    #[test]
    fn wrong_types_yield_defaults() {
        let (_dir, mut s) = store();
        s.set("n", "twelve");
        s.set("b", 3);
        s.set("t", true);
        assert_eq!(s.get_int("n", 1), 1);
        assert!(!s.get_bool("b", false));
        assert_eq!(s.get_string("t", "d"), "d");
    }

    #[test]
    fn lenient_string_forms() {
        let (_dir, mut s) = store();
        s.set("n", " 42 ");
        s.set("b", "True");
        assert_eq!(s.get_int("n", 0), 42);
        assert!(s.get_bool("b", false));
    }

    #[test]
    fn flush_without_changes_writes_nothing() {
        let (_dir, mut s) = store();
        s.flush().unwrap();
        assert!(!s.path().exists());
    }

    #[test]
    fn flush_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("settings.json");
        let mut s = SettingsStore::open(&path);
        s.set("k", "v");
        s.flush().unwrap();
        assert!(path.exists());
        assert!(!s.is_dirty());
    }

    #[test]
    fn non_object_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let s = SettingsStore::open(&path);
        assert!(!s.contains(PREF_FONT_SIZE));
    }

    #[test]
    fn parse_target_accepts_fraction_and_offset() {
        let expected = parse_target("2030-01-01T00:00:00").unwrap();
        assert_eq!(parse_target("2030-01-01T00:00:00.000"), Some(expected));
        assert_eq!(parse_target("2030-01-01T00:00:00+08:00"), Some(expected));
        assert_eq!(parse_target("tomorrow"), None);
    }
}
