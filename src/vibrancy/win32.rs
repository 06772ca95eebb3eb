//! Windows 11 system backdrop through DWM.

use anyhow::{Context, Result, bail};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};
use winit::window::Window;

// DWMWA_SYSTEMBACKDROP_TYPE (Windows 11 22H2+)
const DWMWA_SYSTEMBACKDROP_TYPE: i32 = 38;

/// Values of `DWM_SYSTEMBACKDROP_TYPE`.
#[derive(Debug, Clone, Copy)]
#[repr(i32)]
pub(super) enum Backdrop {
    None = 1,
    Acrylic = 3,
}

pub(super) fn set_backdrop(window: &Window, backdrop: Backdrop) -> Result<()> {
    let hwnd = match window.window_handle()?.as_raw() {
        RawWindowHandle::Win32(handle) => HWND(handle.hwnd.get() as *mut _),
        _ => bail!("Not a Win32 window"),
    };
    let value = backdrop as i32;

    // SAFETY: hwnd is the live top-level window owned by `window`, and the
    // attribute payload points at a stack i32 whose size is passed alongside.
    unsafe {
        DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(DWMWA_SYSTEMBACKDROP_TYPE),
            &value as *const i32 as *const _,
            std::mem::size_of::<i32>() as u32,
        )
    }
    .with_context(|| format!("DwmSetWindowAttribute(SYSTEMBACKDROP={backdrop:?}) failed"))?;

    log::info!("Window backdrop set to {:?}", backdrop);
    Ok(())
}
