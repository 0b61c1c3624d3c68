//! User preference persistence for the TrackChain TUI.
//!
//! A tiny JSON-backed store recording the preferred theme and whether the
//! navigation rail was left collapsed. The file lives in the standard
//! configuration directory (`~/.config/trackchain/preferences.json` on most
//! platforms) and is safe to read/write from multiple threads thanks to the
//! internal `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{APP_DIR_NAME, env_path};

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "TRACKCHAIN_PREFERENCES_PATH";

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

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected via the TUI.
    pub preferred_theme: Option<String>,
    /// Last collapsed state chosen with the rail toggle.
    #[serde(default)]
    pub rail_collapsed: Option<bool>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location (or the env override).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at(default_preferences_path())
    }

    /// Opens the store backed by `path`. A missing file yields defaults.
    pub fn at(path: PathBuf) -> Result<Self, PreferencesError> {
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

    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    pub fn rail_collapsed(&self) -> Option<bool> {
        self.lock().rail_collapsed
    }

    pub fn set_rail_collapsed(&self, collapsed: bool) -> Result<(), PreferencesError> {
        self.update(|payload| payload.rail_collapsed = Some(collapsed))
    }

    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().expect("preferences lock poisoned")
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
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
    env_path(PREFERENCES_PATH_ENV).unwrap_or_else(|| {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(PREFERENCES_FILE_NAME)
    })
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
        let prefs = UserPreferences::at(dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs.preferred_theme(), None);
        assert_eq!(prefs.rail_collapsed(), None);
    }

    #[test]
    fn values_persist_across_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = UserPreferences::at(path.clone()).unwrap();
        prefs.set_preferred_theme(Some("nord".into())).unwrap();
        prefs.set_rail_collapsed(true).unwrap();
        drop(prefs);

        let reloaded = UserPreferences::at(path).unwrap();
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("nord"));
        assert_eq!(reloaded.rail_collapsed(), Some(true));
    }

    #[test]
    fn corrupt_file_is_replaced_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        let prefs = UserPreferences::at(path).unwrap();
        assert_eq!(prefs.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_rail_collapsed(false).unwrap();
        assert_eq!(prefs.rail_collapsed(), Some(false));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/tmp/tc/prefs.json"), || {
            assert_eq!(default_preferences_path(), PathBuf::from("/tmp/tc/prefs.json"));
        });
    }
}
