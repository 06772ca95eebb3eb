//! Window vibrancy (translucent blurred background).
//!
//! The platform backends are plain functions over a winit window; the
//! [`NativeWindow`](crate::window::NativeWindow) adapter owns handle
//! allocation and decides which backend to call.
//!
//! - macOS: CGS background blur radius plus winit's `set_blur`
//! - Windows: DWM system backdrop (acrylic)
//! - elsewhere: unsupported

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod win32;

use anyhow::Result;
use winit::window::Window;

/// Blur radius used for the dark macOS material.
pub const MACOS_BLUR_RADIUS: u32 = 30;

/// Material applied when vibrancy is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibrancyStyle {
    /// Windows acrylic backdrop.
    Acrylic,
    /// macOS dark blurred background.
    Dark,
}

/// Opaque identifier of an active vibrancy effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VibrancyHandle(pub u64);

/// Apply the effect to a window.
pub fn apply(window: &Window, style: VibrancyStyle) -> Result<()> {
    match style {
        #[cfg(target_os = "macos")]
        VibrancyStyle::Dark => {
            window.set_blur(true);
            macos::set_blur_radius(window, MACOS_BLUR_RADIUS)
        }
        #[cfg(target_os = "windows")]
        VibrancyStyle::Acrylic => win32::set_backdrop(window, win32::Backdrop::Acrylic),
        #[allow(unreachable_patterns)]
        other => {
            let _ = window;
            anyhow::bail!("{other:?} vibrancy is not available on this platform")
        }
    }
}

/// Remove a previously applied effect.
pub fn clear(window: &Window, style: VibrancyStyle) -> Result<()> {
    match style {
        #[cfg(target_os = "macos")]
        VibrancyStyle::Dark => {
            window.set_blur(false);
            // A radius of 0 can permanently disable blur for the window on
            // some macOS versions; 1 is visually equivalent.
            macos::set_blur_radius(window, 1)
        }
        #[cfg(target_os = "windows")]
        VibrancyStyle::Acrylic => win32::set_backdrop(window, win32::Backdrop::None),
        #[allow(unreachable_patterns)]
        other => {
            let _ = window;
            anyhow::bail!("{other:?} vibrancy is not available on this platform")
        }
    }
}
