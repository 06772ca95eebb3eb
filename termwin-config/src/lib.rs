//! Configuration and persisted state for the termwin window host.
//!
//! This crate provides:
//!
//! - The optional appearance config (`config.yaml`)
//! - A namespaced JSON key/value settings store
//! - Persisted window geometry (bounds + maximized flag)
//! - Config directory path helpers

pub mod appearance;
pub mod error;
pub mod geometry;
pub mod paths;
pub mod store;
pub mod window_state;

pub use appearance::{AppearanceConfig, FrameStyle, StartupConfig};
pub use error::ConfigError;
pub use geometry::Rect;
pub use store::SettingsStore;
pub use window_state::{KEY_BOUNDARIES, KEY_MAXIMIZED, PersistedWindowState, WINDOW_NAMESPACE};
