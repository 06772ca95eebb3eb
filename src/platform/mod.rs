//! Platform rules for the window host.
//!
//! All OS-conditional window behaviour is expressed as methods on
//! [`Platform`] so it can be exercised in tests for every OS from any OS.
//! Only [`Platform::current`] looks at the build target.
//!
//! | Rule | macOS | Windows | Linux |
//! |---|---|---|---|
//! | vibrancy supported | yes | yes | no |
//! | vibrancy material | dark | acrylic | - |
//! | inset title bar (custom frame) | yes | no | no |
//! | keeps menu bar | yes | no | no |
//! | fixed background color | no | no | yes |

use crate::vibrancy::VibrancyStyle;

/// Background color used where the window cannot be translucent.
pub const FALLBACK_BACKGROUND: &str = "#131d27";

/// The desktop platform the window host runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// The platform of the running build. BSDs and other Unix-likes are
    /// treated as Linux.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    pub const fn supports_vibrancy(self) -> bool {
        matches!(self, Platform::MacOs | Platform::Windows)
    }

    /// Material used when vibrancy is enabled. macOS always gets the dark
    /// material regardless of the user's theme.
    pub const fn vibrancy_style(self) -> Option<VibrancyStyle> {
        match self {
            Platform::MacOs => Some(VibrancyStyle::Dark),
            Platform::Windows => Some(VibrancyStyle::Acrylic),
            Platform::Linux => None,
        }
    }

    pub const fn uses_inset_titlebar(self) -> bool {
        matches!(self, Platform::MacOs)
    }

    /// macOS keeps its application menu; elsewhere the window has no menu bar.
    pub const fn keeps_menu_bar(self) -> bool {
        matches!(self, Platform::MacOs)
    }

    pub const fn fallback_background(self) -> Option<&'static str> {
        if self.supports_vibrancy() {
            None
        } else {
            Some(FALLBACK_BACKGROUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibrancy_support_matrix() {
        assert!(Platform::MacOs.supports_vibrancy());
        assert!(Platform::Windows.supports_vibrancy());
        assert!(!Platform::Linux.supports_vibrancy());
    }

    #[test]
    fn test_vibrancy_style_per_platform() {
        assert_eq!(Platform::MacOs.vibrancy_style(), Some(VibrancyStyle::Dark));
        assert_eq!(
            Platform::Windows.vibrancy_style(),
            Some(VibrancyStyle::Acrylic)
        );
        assert_eq!(Platform::Linux.vibrancy_style(), None);
    }

    #[test]
    fn test_background_only_without_vibrancy() {
        assert_eq!(Platform::Linux.fallback_background(), Some("#131d27"));
        assert_eq!(Platform::MacOs.fallback_background(), None);
        assert_eq!(Platform::Windows.fallback_background(), None);
    }

    #[test]
    fn test_menu_bar_kept_on_macos_only() {
        assert!(Platform::MacOs.keeps_menu_bar());
        assert!(!Platform::Windows.keeps_menu_bar());
        assert!(!Platform::Linux.keeps_menu_bar());
    }
}
