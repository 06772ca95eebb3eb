//! Persisted window geometry: the last non-maximized bounds and the
//! maximized flag, stored in the `window` namespace.

use crate::error::Result;
use crate::geometry::Rect;
use crate::store::SettingsStore;

/// Namespace of the window settings store.
pub const WINDOW_NAMESPACE: &str = "window";
/// Store key for the last non-maximized bounds.
pub const KEY_BOUNDARIES: &str = "windowBoundaries";
/// Store key for the maximized flag.
pub const KEY_MAXIMIZED: &str = "maximized";

/// Window state restored at startup and saved on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersistedWindowState {
    /// Last known non-maximized geometry, if one was ever saved.
    pub boundaries: Option<Rect>,
    pub maximized: bool,
}

impl PersistedWindowState {
    /// Read the state from a store. Missing, malformed, or zero-area values
    /// fall back to defaults.
    pub fn load(store: &SettingsStore) -> Self {
        let boundaries = store
            .get::<Rect>(KEY_BOUNDARIES)
            .filter(|rect| !rect.is_empty());
        let maximized = store.get::<bool>(KEY_MAXIMIZED).unwrap_or(false);
        Self {
            boundaries,
            maximized,
        }
    }

    /// Write the state to a store. Absent bounds leave the stored bounds
    /// untouched.
    pub fn save(&self, store: &mut SettingsStore) -> Result<()> {
        if let Some(rect) = &self.boundaries {
            store.set(KEY_BOUNDARIES, rect)?;
        }
        store.set(KEY_MAXIMIZED, &self.maximized)
    }
}
