//! Native context menus built from renderer templates.

use super::template::{MenuError, MenuItemKind, MenuItemTemplate};
use muda::accelerator::Accelerator;
#[cfg(any(target_os = "macos", target_os = "windows"))]
use muda::ContextMenu;
use muda::{CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use winit::window::Window;

/// Build a native menu from a validated template.
pub fn build_context_menu(items: &[MenuItemTemplate]) -> Result<Menu, MenuError> {
    let menu = Menu::new();
    append_items(items, &mut |item| menu.append(item))?;
    Ok(menu)
}

fn append_items(
    items: &[MenuItemTemplate],
    append: &mut dyn FnMut(&dyn IsMenuItem) -> muda::Result<()>,
) -> Result<(), MenuError> {
    for item in items {
        match item.effective_kind() {
            MenuItemKind::Separator => append(&PredefinedMenuItem::separator())?,
            MenuItemKind::Normal => {
                let accelerator = parse_accelerator(item)?;
                let entry = match &item.id {
                    Some(id) => {
                        MenuItem::with_id(id.as_str(), item.label_text(), item.enabled, accelerator)
                    }
                    None => MenuItem::new(item.label_text(), item.enabled, accelerator),
                };
                append(&entry)?;
            }
            MenuItemKind::Checkbox => {
                let accelerator = parse_accelerator(item)?;
                let entry = match &item.id {
                    Some(id) => CheckMenuItem::with_id(
                        id.as_str(),
                        item.label_text(),
                        item.enabled,
                        item.checked,
                        accelerator,
                    ),
                    None => CheckMenuItem::new(
                        item.label_text(),
                        item.enabled,
                        item.checked,
                        accelerator,
                    ),
                };
                append(&entry)?;
            }
            MenuItemKind::Submenu => {
                let submenu = Submenu::new(item.label_text(), item.enabled);
                append_items(&item.submenu, &mut |child| submenu.append(child))?;
                append(&submenu)?;
            }
        }
    }
    Ok(())
}

fn parse_accelerator(item: &MenuItemTemplate) -> Result<Option<Accelerator>, MenuError> {
    let Some(text) = item.accelerator.as_deref() else {
        return Ok(None);
    };
    // muda spells the cross-platform primary modifier "CmdOrCtrl" too.
    text.parse::<Accelerator>()
        .map(Some)
        .map_err(|e| MenuError::InvalidAccelerator {
            label: item.label_text().to_string(),
            accelerator: text.to_string(),
            reason: e.to_string(),
        })
}

/// Pop up a menu at the cursor, anchored to `window`. Returns whether the
/// platform supports showing it.
pub fn show_for_window(menu: &Menu, window: &Window) -> bool {
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};

    let handle = match window.window_handle() {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("Cannot show context menu without a window handle: {e}");
            return false;
        }
    };

    let raw: RawWindowHandle = handle.as_raw();
    match raw {
        #[cfg(target_os = "macos")]
        RawWindowHandle::AppKit(appkit) => {
            // SAFETY: the NSView pointer comes from winit and is valid while
            // `window` is alive; we are on the main thread.
            let _ = unsafe { menu.show_context_menu_for_nsview(appkit.ns_view.as_ptr(), None) };
            true
        }
        #[cfg(target_os = "windows")]
        RawWindowHandle::Win32(win32) => {
            // SAFETY: the HWND comes from winit and is valid while `window`
            // is alive; we are on the thread that owns it.
            let _ = unsafe { menu.show_context_menu_for_hwnd(win32.hwnd.get() as _, None) };
            true
        }
        other => {
            let _ = menu;
            log::warn!("Context menus are not supported for {:?} windows", other);
            false
        }
    }
}
