//! Configuration for wavjoin.
//!
//! Settings live in a small TOML file; every key is optional and falls back to
//! the `.L.wav` / `.R.wav` naming convention.
//!
//! # Features
//!
//! - **Config file**: [`JoinConfig`] load/save from TOML
//! - **Validation**: [`JoinConfig::validate`] rejects unusable markers
//! - **Paths**: platform-specific location of the user config file
//!
//! # Example
//!
//! ```rust,no_run
//! use wavjoin_config::{JoinConfig, user_config_file};
//!
//! let config = JoinConfig::load_or_default(user_config_file()).unwrap();
//! let scheme = config.naming();
//! println!("left files end in {}", scheme.left_marker);
//! ```

mod config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

pub use config::JoinConfig;
pub use error::ConfigError;
pub use paths::{user_config_dir, user_config_file};
