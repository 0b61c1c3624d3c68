use std::env;
use std::path::PathBuf;

use dirs_next::{cache_dir, home_dir};

/// Environment variable overriding where the TUI writes its log file.
pub const LOG_FILE_ENV: &str = "TRACKCHAIN_LOG_FILE";

/// Directory name used under the platform config and cache directories.
pub const APP_DIR_NAME: &str = "trackchain";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Reads a path from `var`, ignoring unset or blank values.
pub fn env_path(var: &str) -> Option<PathBuf> {
    let value = env::var(var).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| expand_tilde(trimmed))
}

/// Log file used while the TUI owns the terminal.
pub fn default_log_path() -> PathBuf {
    env_path(LOG_FILE_ENV).unwrap_or_else(|| {
        cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("trackchain.log")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("  /tmp/trackchain.yaml "), PathBuf::from("/tmp/trackchain.yaml"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/x/config.yaml"), home.join("x/config.yaml"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn log_path_honors_env_override() {
        temp_env::with_var(LOG_FILE_ENV, Some("/var/tmp/tc.log"), || {
            assert_eq!(default_log_path(), PathBuf::from("/var/tmp/tc.log"));
        });
        temp_env::with_var(LOG_FILE_ENV, Some("   "), || {
            assert!(default_log_path().ends_with("trackchain/trackchain.log"));
        });
    }
}
