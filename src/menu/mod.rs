//! Native menu support using the `muda` crate.
//!
//! - macOS: global application menu bar (the only platform that keeps one)
//! - all platforms: context menus popped up from renderer templates

mod context;
mod template;

pub use context::{build_context_menu, show_for_window};
pub use template::{MenuError, MenuItemKind, MenuItemTemplate, clickable_ids, validate_template};

use muda::Menu;

/// The application menu shown in the macOS menu bar.
pub struct AppMenu {
    #[allow(dead_code)]
    menu: Menu,
}

impl AppMenu {
    /// Build the default application menu: app, Edit and Window submenus
    /// made of predefined items.
    pub fn new() -> Result<Self, MenuError> {
        use muda::{PredefinedMenuItem, Submenu};

        let menu = Menu::new();

        let app_menu = Submenu::new("termwin", true);
        app_menu.append(&PredefinedMenuItem::about(None, None))?;
        app_menu.append(&PredefinedMenuItem::separator())?;
        app_menu.append(&PredefinedMenuItem::hide(None))?;
        app_menu.append(&PredefinedMenuItem::hide_others(None))?;
        app_menu.append(&PredefinedMenuItem::show_all(None))?;
        app_menu.append(&PredefinedMenuItem::separator())?;
        app_menu.append(&PredefinedMenuItem::quit(None))?;
        menu.append(&app_menu)?;

        let edit_menu = Submenu::new("Edit", true);
        edit_menu.append(&PredefinedMenuItem::copy(None))?;
        edit_menu.append(&PredefinedMenuItem::paste(None))?;
        edit_menu.append(&PredefinedMenuItem::select_all(None))?;
        menu.append(&edit_menu)?;

        let window_menu = Submenu::new("Window", true);
        window_menu.append(&PredefinedMenuItem::minimize(None))?;
        window_menu.append(&PredefinedMenuItem::maximize(None))?;
        window_menu.append(&PredefinedMenuItem::fullscreen(None))?;
        menu.append(&window_menu)?;

        Ok(Self { menu })
    }

    /// Install as the global menu bar. No-op outside macOS.
    pub fn install(&self) {
        #[cfg(target_os = "macos")]
        {
            self.menu.init_for_nsapp();
            log::info!("Initialized macOS application menu");
        }
    }
}
