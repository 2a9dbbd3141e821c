//! User preference persistence for shadegen.
//!
//! A tiny JSON-backed store recording the preferred start color and step
//! counts. The file lives in the standard configuration directory
//! (`~/.config/shadegen/preferences.json` on most platforms). Palettes
//! themselves are never stored; they are always recomputed.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use shadegen_engine::HexColor;
use thiserror::Error;
use tracing::warn;

use crate::paths::{config_file, expand_tilde};

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "SHADEGEN_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values. Every field is optional; absent fields fall
/// through to the next configuration layer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_steps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_steps: Option<u32>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Open the store at the default path (or `SHADEGEN_PREFERENCES_PATH`).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(default_preferences_path())
    }

    /// Open the store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current payload.
    pub fn snapshot(&self) -> PreferencesPayload {
        self.payload.lock().expect("preferences lock poisoned").clone()
    }

    pub fn base_color(&self) -> Option<HexColor> {
        self.payload.lock().expect("preferences lock poisoned").base_color
    }

    /// Persist a new preferred start color.
    pub fn set_base_color(&self, color: Option<HexColor>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.base_color = color)
    }

    /// Persist new step counts.
    pub fn set_steps(&self, light_steps: Option<u32>, dark_steps: Option<u32>) -> Result<(), PreferencesError> {
        self.update(|payload| {
            payload.light_steps = light_steps;
            payload.dark_steps = dark_steps;
        })
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        apply(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    config_file(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let prefs = UserPreferences::at_path(dir.path().join("nope.json")).unwrap();
        assert_eq!(prefs.snapshot(), PreferencesPayload::default());
    }

    #[test]
    fn writes_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = UserPreferences::at_path(&path).unwrap();
        prefs.set_base_color(Some("#336699".parse().unwrap())).unwrap();
        prefs.set_steps(Some(5), None).unwrap();
        drop(prefs);

        let reloaded = UserPreferences::at_path(&path).unwrap();
        let payload = reloaded.snapshot();
        assert_eq!(payload.base_color.map(|c| c.to_string()).as_deref(), Some("#336699"));
        assert_eq!(payload.light_steps, Some(5));
        assert_eq!(payload.dark_steps, None);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"base_color\": \"#336699\""), "{raw}");
        assert!(!raw.contains("dark_steps"), "{raw}");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        let prefs = UserPreferences::at_path(&path).unwrap();
        assert_eq!(prefs.snapshot(), PreferencesPayload::default());

        fs::write(&path, r##"{ "base_color": "#12" }"##).unwrap();
        let prefs = UserPreferences::at_path(&path).unwrap();
        assert_eq!(prefs.base_color(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_steps(Some(4), Some(4)).unwrap();
        assert_eq!(prefs.snapshot().light_steps, Some(4));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/tmp/shadegen/prefs.json"), || {
            assert_eq!(default_preferences_path(), PathBuf::from("/tmp/shadegen/prefs.json"));
        });
    }
}
