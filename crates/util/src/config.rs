//! Application configuration.
//!
//! The config file is optional. Its location is resolved in order from an
//! explicit path (the `--config` flag), the [`CONFIG_PATH_ENV`] variable, and
//! `<config_dir>/trackchain/config.yaml`. Explicit and env paths must exist;
//! the default location is only read when present. Files ending in `.json`
//! are parsed as JSON, everything else as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use trackchain_types::nav::{DEFAULT_OPEN_PARENTS, NavEntryDef, NavKey, NavTable, NavTableError};
use trackchain_types::route::{DEFAULT_ROUTE, MatchMode};

use crate::path_processing::{APP_DIR_NAME, env_path};

/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "TRACKCHAIN_CONFIG";

/// Default config filename under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid navigation table: {0}")]
    NavTable(#[from] NavTableError),
    #[error("open_parents lists '{0}', which is not an expandable root entry")]
    NotExpandable(NavKey),
}

/// How the navigation rail starts out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailMode {
    /// Use the saved preference, otherwise collapse on narrow terminals.
    #[default]
    Auto,
    Expanded,
    Collapsed,
}

/// Raw configuration as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub route_matching: MatchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_path: Option<String>,
    /// Parents expanded when the rail mounts. `None` keeps the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_parents: Option<Vec<NavKey>>,
    pub rail: RailMode,
    /// Replaces the built-in navigation table when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_entries: Option<Vec<NavEntryDef>>,
}

/// Validated configuration ready for the UI and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub table: NavTable,
    pub route_matching: MatchMode,
    pub initial_path: String,
    pub open_parents: Vec<NavKey>,
    pub rail: RailMode,
    /// File the configuration came from, if any.
    pub source: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            table: NavTable::builtin(),
            route_matching: MatchMode::default(),
            initial_path: DEFAULT_ROUTE.to_string(),
            open_parents: DEFAULT_OPEN_PARENTS.to_vec(),
            rail: RailMode::default(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Parses a config file, choosing the format by extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_for(path, &data)
    }

    fn from_str_for(path: &Path, data: &str) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(data).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else if data.trim().is_empty() {
            Ok(Self::default())
        } else {
            serde_yaml::from_str(data).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Validates the navigation table and fills in defaults.
    pub fn resolve(self, source: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
        let table = match self.nav_entries {
            Some(defs) => NavTable::from_defs(defs)?,
            None => NavTable::builtin(),
        };
        let initial_path = self
            .initial_path
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_ROUTE.to_string());
        let open_parents = self.open_parents.unwrap_or_else(|| DEFAULT_OPEN_PARENTS.to_vec());
        if let Some(key) = open_parents.iter().find(|key| !table.expandable_roots().any(|root| root == **key)) {
            return Err(ConfigError::NotExpandable(*key));
        }
        Ok(ResolvedConfig {
            table,
            route_matching: self.route_matching,
            initial_path,
            open_parents,
            rail: self.rail,
            source,
        })
    }
}

/// Finds the config file to read, if any.
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_path(CONFIG_PATH_ENV) {
        return Some(path);
    }
    let default = config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    default.exists().then_some(default)
}

/// Locates, parses, and resolves the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    let Some(path) = locate_config(explicit) else {
        debug!("no config file found; using built-in defaults");
        return Ok(ResolvedConfig::default());
    };
    debug!(path = %path.display(), "loading config");
    AppConfig::from_path(&path)?.resolve(Some(path))
}

/// Reads a standalone navigation table: a flat list of entries in YAML, or
/// JSON when the file ends in `.json`.
pub fn load_nav_table(path: &Path) -> Result<NavTable, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let defs: Vec<NavEntryDef> = if is_json {
        serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&data).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(NavTable::from_defs(defs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = AppConfig::default().resolve(None).unwrap();
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.open_parents, vec![NavKey::Manage]);
    }

    #[test]
    fn yaml_config_overrides_matching_and_initial_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "route_matching: substring\ninitial_path: /(tabs)/qr\nopen_parents: []\nrail: collapsed\n",
        )
        .unwrap();
        let resolved = load_config(Some(&path)).unwrap();
        assert_eq!(resolved.route_matching, MatchMode::Substring);
        assert_eq!(resolved.initial_path, "/(tabs)/qr");
        assert!(resolved.open_parents.is_empty());
        assert_eq!(resolved.rail, RailMode::Collapsed);
        assert_eq!(resolved.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn json_config_is_parsed_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "route_matching": "segment", "rail": "expanded" }"#).unwrap();
        let resolved = load_config(Some(&path)).unwrap();
        assert_eq!(resolved.rail, RailMode::Expanded);
    }

    #[test]
    fn custom_nav_entries_replace_the_builtin_table() {
        let yaml = r#"
open_parents: []
nav_entries:
  - { key: dashboard, label: Home, icon: apps-outline, path: /(tabs) }
  - { key: shipments, label: Shipments, icon: car-outline, path: /(tabs)/shipments }
"#;
        let config = AppConfig::from_str_for(Path::new("config.yaml"), yaml).unwrap();
        let resolved = config.resolve(None).unwrap();
        assert_eq!(resolved.table.len(), 2);
    }

    #[test]
    fn malformed_nav_entries_are_rejected() {
        let yaml = r#"
nav_entries:
  - { key: manage, label: Manage, icon: create-outline }
  - { key: batches, label: Batches, icon: briefcase-outline, parent: manage }
"#;
        let config = AppConfig::from_str_for(Path::new("config.yaml"), yaml).unwrap();
        let error = config.resolve(None).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::NavTable(NavTableError::ParentNotExpandable { .. })
        ));
    }

    #[test]
    fn open_parents_must_name_expandable_roots() {
        let path = Path::new("config.yaml");
        let config = AppConfig::from_str_for(path, "open_parents: [manage, shipments]\n").unwrap();
        assert!(matches!(
            config.resolve(None),
            Err(ConfigError::NotExpandable(NavKey::Shipments))
        ));

        let custom = r#"
open_parents: [manage]
nav_entries:
  - { key: dashboard, label: Home, icon: apps-outline, path: /(tabs) }
"#;
        let config = AppConfig::from_str_for(path, custom).unwrap();
        assert!(
            matches!(config.resolve(None), Err(ConfigError::NotExpandable(NavKey::Manage))),
            "the default open parent is checked against a replacement table too"
        );
    }

    #[test]
    fn unknown_fields_and_keys_are_reported() {
        let path = Path::new("config.yaml");
        assert!(matches!(
            AppConfig::from_str_for(path, "colour: red\n"),
            Err(ConfigError::Yaml { .. })
        ));
        assert!(matches!(
            AppConfig::from_str_for(path, "open_parents: [alerts]\n"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let error = load_config(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn standalone_nav_tables_load_as_yaml_or_json() {
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("nav.yaml");
        fs::write(&yaml, "- { key: dashboard, label: Home, icon: apps-outline, path: /(tabs) }\n").unwrap();
        assert_eq!(load_nav_table(&yaml).unwrap().len(), 1);

        let json = dir.path().join("nav.json");
        fs::write(&json, serde_json::to_string(&NavTable::builtin().to_defs()).unwrap()).unwrap();
        assert_eq!(load_nav_table(&json).unwrap(), NavTable::builtin());

        fs::write(&json, "[]").unwrap();
        assert!(matches!(
            load_nav_table(&json),
            Err(ConfigError::NavTable(NavTableError::Empty))
        ));
    }

    #[test]
    fn env_variable_points_at_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("env.yaml");
        fs::write(&path, "initial_path: /(tabs)/shipments\n").unwrap();
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.as_os_str()), || {
            let resolved = load_config(None).unwrap();
            assert_eq!(resolved.initial_path, "/(tabs)/shipments");
        });
    }
}
