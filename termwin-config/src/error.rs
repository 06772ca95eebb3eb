//! Typed error variants for the termwin-config crate.
//!
//! Covers the two persisted files this crate owns: the appearance YAML and
//! the JSON settings store. The binary wraps these in `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving configuration and state.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a config file.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The appearance config contained invalid YAML.
    #[error("YAML parse error in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The settings store contained invalid JSON, or a value could not be
    /// converted to or from its JSON form.
    #[error("JSON error in settings store: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings store file parsed but is not a JSON object.
    #[error("settings store {0:?} is not a JSON object")]
    NotAnObject(PathBuf),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
