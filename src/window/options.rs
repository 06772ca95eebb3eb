//! Window creation options.
//!
//! [`build_window_options`] is a pure function of the platform, the user's
//! appearance config, and the persisted window state; the winit adapter turns
//! the result into `WindowAttributes`.

use crate::platform::Platform;
use termwin_config::{AppearanceConfig, FrameStyle, PersistedWindowState};

pub const DEFAULT_TITLE: &str = "termwin";
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 300;

/// How the title bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlebarStyle {
    Default,
    /// Traffic-light buttons inset into full-size content (macOS).
    HiddenInset,
}

/// Options the native window is created with. Immutable once the window
/// exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    /// Outer position restored from the last session, if any.
    pub position: Option<(i32, i32)>,
    pub title: String,
    pub min_width: u32,
    pub min_height: u32,
    pub frame: FrameStyle,
    pub titlebar_style: TitlebarStyle,
    pub transparent: bool,
    /// Fixed background as a `#rrggbb` string.
    pub background_color: Option<String>,
}

impl WindowOptions {
    /// Whether the OS should draw window decorations.
    pub fn decorations(&self) -> bool {
        self.frame == FrameStyle::Native || self.titlebar_style == TitlebarStyle::HiddenInset
    }
}

/// Compute the creation options for the window.
pub fn build_window_options(
    platform: Platform,
    appearance: &AppearanceConfig,
    persisted: &PersistedWindowState,
) -> WindowOptions {
    let (width, height, position) = match persisted.boundaries {
        Some(rect) => (
            rect.width.max(MIN_WIDTH),
            rect.height.max(MIN_HEIGHT),
            Some((rect.x, rect.y)),
        ),
        None => (DEFAULT_WIDTH, DEFAULT_HEIGHT, None),
    };

    let titlebar_style =
        if appearance.frame == FrameStyle::Custom && platform.uses_inset_titlebar() {
            TitlebarStyle::HiddenInset
        } else {
            TitlebarStyle::Default
        };

    WindowOptions {
        width,
        height,
        position,
        title: DEFAULT_TITLE.to_string(),
        min_width: MIN_WIDTH,
        min_height: MIN_HEIGHT,
        frame: appearance.frame,
        titlebar_style,
        transparent: platform.supports_vibrancy() && appearance.vibrancy,
        background_color: platform.fallback_background().map(str::to_string),
    }
}
