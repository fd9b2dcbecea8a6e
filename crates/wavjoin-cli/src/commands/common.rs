//! Shared CLI helpers used across multiple commands.

use clap::Args;
use std::path::PathBuf;
use wavjoin_config::{JoinConfig, user_config_file};

/// Naming flags shared by `merge` and `pairs`.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Default)]
pub struct NamingArgs {
    /// Marker identifying left-channel files
    #[arg(long, value_name = "MARKER")]
    pub left: Option<String>,

    /// Marker identifying right-channel files
    #[arg(long, value_name = "MARKER")]
    pub right: Option<String>,

    /// Replacement for the marker in output names
    #[arg(long, value_name = "MARKER")]
    pub stereo: Option<String>,

    /// Only consider files with this extension (no dot)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Config file (defaults to the user config, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Load the config file and apply command-line overrides.
///
/// An explicit `--config` must exist; the user config file is optional.
pub fn load_config(args: &NamingArgs) -> anyhow::Result<JoinConfig> {
    let mut config = match &args.config {
        Some(path) => JoinConfig::load(path)?,
        None => JoinConfig::load_or_default(user_config_file())?,
    };

    if let Some(left) = &args.left {
        config.left_marker.clone_from(left);
    }
    if let Some(right) = &args.right {
        config.right_marker.clone_from(right);
    }
    if let Some(stereo) = &args.stereo {
        config.stereo_marker.clone_from(stereo);
    }
    if let Some(ext) = &args.ext {
        config.extension.clone_from(ext);
    }

    config.validate()?;
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}

/// Format a byte count for display.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "left_marker = \"_l.wav\"\nextension = \"WAV\"\n").unwrap();

        let args = NamingArgs {
            right: Some("_r.wav".to_string()),
            config: Some(path),
            ..NamingArgs::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.left_marker, "_l.wav");
        assert_eq!(config.right_marker, "_r.wav");
        assert_eq!(config.stereo_marker, ".wav");
        assert_eq!(config.extension, "WAV");
    }

    #[test]
    fn overrides_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let args = NamingArgs {
            left: Some(".R.wav".to_string()),
            config: Some(path),
            ..NamingArgs::default()
        };
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("right_marker"), "got: {err}");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = NamingArgs {
            config: Some(PathBuf::from("/nonexistent/wavjoin.toml")),
            ..NamingArgs::default()
        };
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
