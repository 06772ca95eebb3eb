//! macOS background blur through the private CGS API.
//!
//! `CGSSetWindowBackgroundBlurRadius` is what iTerm2 and Alacritty use for
//! their blurred backgrounds. Symbols are resolved once with `dlsym`.

use anyhow::{Result, anyhow, bail};
use objc2_app_kit::NSView;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use std::sync::OnceLock;
use winit::window::Window;

type ConnectionId = u32;
type CgError = i32;
type SetBlurRadiusFn = unsafe extern "C" fn(ConnectionId, u32, u32) -> CgError;
type DefaultConnectionFn = unsafe extern "C" fn() -> ConnectionId;

const APPLICATION_SERVICES: &std::ffi::CStr =
    c"/System/Library/Frameworks/ApplicationServices.framework/ApplicationServices";

struct CgsFns {
    set_blur_radius: SetBlurRadiusFn,
    default_connection: DefaultConnectionFn,
}

static CGS: OnceLock<Option<CgsFns>> = OnceLock::new();

fn cgs() -> Option<&'static CgsFns> {
    CGS.get_or_init(|| {
        // SAFETY: dlopen/dlsym are called with NUL-terminated literals. Each
        // returned symbol is null-checked before being transmuted to a
        // function pointer whose signature matches the CGS C declaration.
        unsafe {
            let handle = libc::dlopen(APPLICATION_SERVICES.as_ptr(), libc::RTLD_LAZY);
            if handle.is_null() {
                log::warn!("Failed to open ApplicationServices framework for blur");
                return None;
            }
            let blur = libc::dlsym(handle, c"CGSSetWindowBackgroundBlurRadius".as_ptr());
            let conn = libc::dlsym(handle, c"CGSDefaultConnectionForThread".as_ptr());
            if blur.is_null() || conn.is_null() {
                log::warn!("CGS blur symbols not found");
                return None;
            }
            Some(CgsFns {
                set_blur_radius: std::mem::transmute::<*mut libc::c_void, SetBlurRadiusFn>(blur),
                default_connection: std::mem::transmute::<*mut libc::c_void, DefaultConnectionFn>(
                    conn,
                ),
            })
        }
    })
    .as_ref()
}

/// Set the background blur radius of a window, clamped to 0..=64 points.
pub(super) fn set_blur_radius(window: &Window, radius: u32) -> Result<()> {
    let fns = cgs().ok_or_else(|| anyhow!("CGS blur API not available"))?;

    let ns_view_ptr = match window.window_handle()?.as_raw() {
        RawWindowHandle::AppKit(handle) => handle.ns_view.as_ptr(),
        _ => bail!("Not a macOS AppKit window"),
    };

    // SAFETY: ns_view_ptr comes from winit's AppKit handle and stays valid
    // for the lifetime of `window`; we are on the main thread as AppKit
    // requires. `window` and `windowNumber` are plain NSView/NSWindow
    // getters, and the NSWindow pointer is null-checked before use.
    unsafe {
        let view = &*(ns_view_ptr as *mut NSView);
        let ns_window: *const objc2::runtime::AnyObject = objc2::msg_send![view, window];
        if ns_window.is_null() {
            bail!("NSView is not attached to a window");
        }
        let window_number: i64 = objc2::msg_send![ns_window, windowNumber];

        let cid = (fns.default_connection)();
        let status = (fns.set_blur_radius)(cid, window_number as u32, radius.min(64));
        if status != 0 {
            bail!("CGSSetWindowBackgroundBlurRadius failed with error code {status}");
        }
    }

    log::info!("Window blur radius set to {}", radius.min(64));
    Ok(())
}
