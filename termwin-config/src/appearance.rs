//! User-facing appearance settings read from `config.yaml`.
//!
//! The file is optional. A missing or empty file yields the defaults:
//!
//! ```yaml
//! appearance:
//!   frame: native      # omit for the custom (frameless) window chrome
//!   vibrancy: true     # translucent background where the OS supports it
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    /// Toolkit-drawn chrome without OS decorations.
    #[default]
    Custom,
    /// OS-provided title bar and borders.
    Native,
}

/// The `appearance` section of the startup config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub frame: FrameStyle,
    pub vibrancy: bool,
}

/// Top-level startup config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub appearance: AppearanceConfig,
}

impl StartupConfig {
    /// Load the startup config from the default location, falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let path = crate::paths::config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load startup config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load the startup config from a specific file.
    ///
    /// A missing or empty file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No startup config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: StartupConfig =
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "Loaded startup config from {:?} (frame={:?}, vibrancy={})",
            path,
            config.appearance.frame,
            config.appearance.vibrancy
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = StartupConfig::load_from(&temp.path().join("config.yaml")).unwrap();
        assert_eq!(config, StartupConfig::default());
        assert_eq!(config.appearance.frame, FrameStyle::Custom);
        assert!(!config.appearance.vibrancy);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "\n  \n").unwrap();
        assert_eq!(
            StartupConfig::load_from(&path).unwrap(),
            StartupConfig::default()
        );
    }

    #[test]
    fn test_parses_native_frame_and_vibrancy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "appearance:\n  frame: native\n  vibrancy: true\n").unwrap();

        let config = StartupConfig::load_from(&path).unwrap();
        assert_eq!(config.appearance.frame, FrameStyle::Native);
        assert!(config.appearance.vibrancy);
    }

    #[test]
    fn test_partial_appearance_section() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "appearance:\n  vibrancy: true\n").unwrap();

        let config = StartupConfig::load_from(&path).unwrap();
        assert_eq!(config.appearance.frame, FrameStyle::Custom);
        assert!(config.appearance.vibrancy);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "terminal:\n  font: mono\n").unwrap();

        assert_eq!(
            StartupConfig::load_from(&path).unwrap(),
            StartupConfig::default()
        );
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "appearance: [[[").unwrap();

        let err = StartupConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
