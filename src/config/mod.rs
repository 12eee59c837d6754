//! Layered configuration
//!
//! Settings explorer configuration merges four layers:
//! 1. Built-in defaults
//! 2. User config (~/.config/settings-explorer/config.toml)
//! 3. Project config (.settings-explorer.toml, or --config)
//! 4. CLI flags

mod defaults;
mod effective;
mod merge;

pub use defaults::BuiltinDefaults;
pub use effective::{
    ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig, SCHEMA_ID, SCHEMA_VERSION,
};
pub use merge::{deep_merge, merge_layers};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".settings-explorer.toml";

/// Location of the user config file, relative to `$HOME`.
pub const USER_CONFIG_PATH: &str = ".config/settings-explorer/config.toml";

/// Default user config path, when `$HOME` is set.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME").map(|home| std::path::PathBuf::from(home).join(USER_CONFIG_PATH))
}
