pub mod config;
pub mod path_processing;
pub mod preferences;

pub use config::{AppConfig, ConfigError, RailMode, ResolvedConfig, load_config, load_nav_table};
pub use path_processing::{default_log_path, expand_tilde};
pub use preferences::{PreferencesError, UserPreferences};
