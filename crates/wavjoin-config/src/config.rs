//! Config file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wavjoin_core::NamingScheme;

use crate::error::ConfigError;

/// Settings for a join run.
///
/// # TOML Format
///
/// ```toml
/// left_marker = ".L.wav"
/// right_marker = ".R.wav"
/// stereo_marker = ".wav"
/// extension = "wav"
/// delete_sources = false
/// overwrite = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct JoinConfig {
    /// Substring marking a left-channel file.
    pub left_marker: String,

    /// Substring marking a right-channel file.
    pub right_marker: String,

    /// Replacement for the marker in the output name.
    pub stereo_marker: String,

    /// Only files with this extension (no dot) are considered.
    pub extension: String,

    /// Remove both sources after a successful join.
    pub delete_sources: bool,

    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for JoinConfig {
    fn default() -> Self {
        let naming = NamingScheme::default();
        Self {
            left_marker: naming.left_marker,
            right_marker: naming.right_marker,
            stereo_marker: naming.stereo_marker,
            extension: "wav".to_string(),
            delete_sources: false,
            overwrite: true,
        }
    }
}

impl JoinConfig {
    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a config from `path`, or the defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: JoinConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
            }
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the markers and extension are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.left_marker.is_empty() {
            return Err(ConfigError::invalid("left_marker", "must not be empty"));
        }
        if self.right_marker.is_empty() {
            return Err(ConfigError::invalid("right_marker", "must not be empty"));
        }
        if self.left_marker == self.right_marker {
            return Err(ConfigError::invalid(
                "right_marker",
                format!("must differ from left_marker ('{}')", self.left_marker),
            ));
        }
        if self.stereo_marker == self.left_marker || self.stereo_marker == self.right_marker {
            return Err(ConfigError::invalid(
                "stereo_marker",
                format!(
                    "'{}' would name the output after one of its sources",
                    self.stereo_marker
                ),
            ));
        }
        if self.extension.is_empty() {
            return Err(ConfigError::invalid("extension", "must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::invalid(
                "extension",
                format!("give it without the leading dot ('{}')", &self.extension[1..]),
            ));
        }
        Ok(())
    }

    /// Naming markers as a pairing scheme.
    pub fn naming(&self) -> NamingScheme {
        NamingScheme::new(
            self.left_marker.clone(),
            self.right_marker.clone(),
            self.stereo_marker.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_use_l_r_markers() {
        let config = JoinConfig::default();
        assert_eq!(config.naming(), NamingScheme::default());
        assert_eq!(config.extension, "wav");
        assert!(!config.delete_sources);
        assert!(config.overwrite);
        config.validate().unwrap();
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(JoinConfig::from_toml("").unwrap(), JoinConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = JoinConfig::from_toml(
            r#"
            left_marker = "_L.wav"
            right_marker = "_R.wav"
            delete_sources = true
            "#,
        )
        .unwrap();
        assert_eq!(config.left_marker, "_L.wav");
        assert_eq!(config.right_marker, "_R.wav");
        assert_eq!(config.stereo_marker, ".wav");
        assert!(config.delete_sources);
        assert!(config.overwrite);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = JoinConfig::from_toml("left = \".L.wav\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn identical_markers_are_invalid() {
        let err = JoinConfig::from_toml("left_marker = \".x\"\nright_marker = \".x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "right_marker", .. }));
    }

    #[test]
    fn stereo_marker_equal_to_a_source_marker_is_invalid() {
        for toml in [
            "stereo_marker = \".L.wav\"",
            "stereo_marker = \".R.wav\"",
        ] {
            let err = JoinConfig::from_toml(toml).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { key: "stereo_marker", .. }),
                "{toml}: {err}"
            );
        }
    }

    #[test]
    fn empty_marker_is_invalid() {
        let err = JoinConfig::from_toml("left_marker = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "left_marker", .. }));
    }

    #[test]
    fn dotted_extension_is_invalid() {
        let err = JoinConfig::from_toml("extension = \".wav\"").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("extension"), "got: {msg}");
        assert!(msg.contains("'wav'"), "got: {msg}");
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = JoinConfig {
            delete_sources: true,
            stereo_marker: ".st.wav".to_string(),
            ..JoinConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(JoinConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = JoinConfig::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, JoinConfig::default());
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = JoinConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
