//! Namespaced key/value settings store.
//!
//! Each namespace is a single JSON object on disk (`<config dir>/<namespace>.json`).
//! Every `set`/`delete` writes the whole object back atomically, so the file
//! always reflects the latest value even if the process dies afterwards.

use crate::error::{ConfigError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A JSON-backed key/value store for one namespace.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    namespace: String,
    /// `None` keeps the store in memory only.
    path: Option<PathBuf>,
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Open the store for `namespace` at its default location.
    pub fn open(namespace: &str) -> Result<Self> {
        Self::open_at(namespace, crate::paths::store_path(namespace))
    }

    /// Open the store backed by a specific file. A missing or empty file
    /// starts an empty store.
    pub fn open_at(namespace: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = load_values(&path)?;
        log::debug!(
            "Opened settings store '{}' at {:?} ({} keys)",
            namespace,
            path,
            values.len()
        );
        Ok(Self {
            namespace: namespace.to_string(),
            path: Some(path),
            values,
        })
    }

    /// A store that never touches the filesystem.
    pub fn in_memory(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            path: None,
            values: Map::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Read and decode a value. A stored value that does not decode as `T`
    /// is reported as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed '{}.{}' in settings store: {}",
                    self.namespace,
                    key,
                    e
                );
                None
            }
        }
    }

    /// Encode and store a value, then persist the namespace.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    /// Remove a key, then persist the namespace. Returns whether it existed.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let existed = self.values.remove(key).is_some();
        if existed {
            self.flush()?;
        }
        Ok(existed)
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;

        // Write to a sibling temp file and rename so a crash never leaves a
        // half-written store behind.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|e| ConfigError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| ConfigError::io(path, e))?;
        Ok(())
    }
}

fn load_values(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&contents)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject(path.to_path_buf())),
    }
}
