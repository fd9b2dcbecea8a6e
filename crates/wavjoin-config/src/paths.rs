//! Platform-specific paths for the configuration file.
//!
//! - **User config**: `~/.config/wavjoin/` (Linux), `~/Library/Application Support/wavjoin/` (macOS), `%APPDATA%\wavjoin\` (Windows)
//!
//! # Example
//!
//! ```rust,no_run
//! use wavjoin_config::paths;
//!
//! println!("Config file: {:?}", paths::user_config_file());
//! ```

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "wavjoin";

/// File name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user configuration file.
pub fn user_config_file() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}
