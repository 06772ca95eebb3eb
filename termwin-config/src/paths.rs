//! Path resolution for termwin's config directory.
//!
//! Uses the XDG layout (`~/.config/termwin`) on macOS and Linux, and the
//! platform config dir (`%APPDATA%\termwin`) on Windows.

use std::path::PathBuf;

/// Application directory name under the user's config root.
pub const APP_DIR: &str = "termwin";

/// File name of the appearance config.
pub const CONFIG_FILE: &str = "config.yaml";

/// Get the termwin config directory.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join(APP_DIR)
        } else {
            PathBuf::from(".").join(APP_DIR)
        }
    }
}

/// Path of the optional appearance config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Path of the settings store for a namespace, e.g. `window.json`.
pub fn store_path(namespace: &str) -> PathBuf {
    config_dir().join(format!("{namespace}.json"))
}
