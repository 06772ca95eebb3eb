//! [`NativeWindow`] implementation over a winit window.
//!
//! winit reports fewer lifecycle events than the controller consumes, so the
//! adapter derives the rest: show/hide from its own visibility calls and
//! from occlusion, full-screen transitions from resizes, and `Closed` right
//! after `Close` (the window is dropped with the controller's handle).

use crate::content::RendererTarget;
use crate::error::WindowError;
use crate::menu::{MenuItemTemplate, build_context_menu, show_for_window};
use crate::vibrancy::{self, VibrancyHandle, VibrancyStyle};
use crate::window::{HostWindowEvent, NativeWindow, WindowOptions};
use std::sync::Arc;
use termwin_config::Rect;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowLevel};

/// Translate creation options into winit attributes. The window starts
/// hidden; the controller shows it once the first frame is ready.
pub fn window_attributes(options: &WindowOptions) -> WindowAttributes {
    let mut attrs = Window::default_attributes()
        .with_title(&options.title)
        .with_inner_size(LogicalSize::new(options.width, options.height))
        .with_min_inner_size(LogicalSize::new(options.min_width, options.min_height))
        .with_decorations(options.decorations())
        .with_transparent(options.transparent)
        .with_visible(false);

    if let Some((x, y)) = options.position {
        attrs = attrs.with_position(LogicalPosition::new(x, y));
    }

    #[cfg(target_os = "macos")]
    if options.titlebar_style == crate::window::TitlebarStyle::HiddenInset {
        use winit::platform::macos::WindowAttributesExtMacOS;
        attrs = attrs
            .with_titlebar_transparent(true)
            .with_title_hidden(true)
            .with_fullsize_content_view(true);
    }
    attrs
}

pub struct WinitWindow {
    window: Arc<Window>,
    pending: Vec<HostWindowEvent>,
    visible: bool,
    fullscreen: bool,
    next_vibrancy: u64,
    active_vibrancy: Option<(VibrancyHandle, VibrancyStyle)>,
    renderer: Option<RendererTarget>,
    background_color: Option<String>,
    /// Kept alive while the popup may still be on screen.
    context_menu: Option<muda::Menu>,
}

impl WinitWindow {
    pub fn create(
        event_loop: &ActiveEventLoop,
        options: &WindowOptions,
    ) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(window_attributes(options))
            .map_err(|e| WindowError::Create(e.to_string()))?;
        if let Some(color) = &options.background_color {
            log::info!("Window background fixed to {}", color);
        }
        Ok(Self::from_window(
            Arc::new(window),
            options.background_color.clone(),
        ))
    }

    pub fn from_window(window: Arc<Window>, background_color: Option<String>) -> Self {
        let fullscreen = window.fullscreen().is_some();
        Self {
            window,
            pending: Vec::new(),
            visible: false,
            fullscreen,
            next_vibrancy: 0,
            active_vibrancy: None,
            renderer: None,
            background_color,
            context_menu: None,
        }
    }

    pub fn winit_window(&self) -> &Arc<Window> {
        &self.window
    }

    /// The content loaded into this window, once loaded.
    pub fn renderer_target(&self) -> Option<&RendererTarget> {
        self.renderer.as_ref()
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Map a raw winit event onto controller events.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<HostWindowEvent> {
        match event {
            WindowEvent::Resized(_) => {
                let mut events = vec![HostWindowEvent::Resize];
                let fullscreen = self.window.fullscreen().is_some();
                if fullscreen != self.fullscreen {
                    self.fullscreen = fullscreen;
                    events.push(if fullscreen {
                        HostWindowEvent::EnterFullScreen
                    } else {
                        HostWindowEvent::LeaveFullScreen
                    });
                }
                events
            }
            WindowEvent::Moved(_) => vec![HostWindowEvent::Move],
            WindowEvent::Occluded(occluded) => {
                let visible = !occluded;
                if visible == self.visible {
                    return Vec::new();
                }
                self.visible = visible;
                vec![if visible {
                    HostWindowEvent::Show
                } else {
                    HostWindowEvent::Hide
                }]
            }
            WindowEvent::CloseRequested => vec![HostWindowEvent::Close, HostWindowEvent::Closed],
            WindowEvent::Destroyed => vec![HostWindowEvent::Closed],
            _ => Vec::new(),
        }
    }

    fn mark_visible(&mut self) {
        if !self.visible {
            self.visible = true;
            self.pending.push(HostWindowEvent::Show);
        }
    }
}

impl NativeWindow for WinitWindow {
    fn id(&self) -> u64 {
        u64::from(self.window.id())
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.mark_visible();
    }

    fn focus(&mut self) {
        self.window.focus_window();
    }

    fn maximize(&mut self) {
        self.window.set_maximized(true);
        self.window.set_visible(true);
        self.mark_visible();
    }

    fn unmaximize(&mut self) {
        self.window.set_maximized(false);
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn bounds(&self) -> Rect {
        let scale = self.window.scale_factor();
        let position = self
            .window
            .outer_position()
            .map(|p| p.to_logical::<i32>(scale))
            .unwrap_or(LogicalPosition::new(0, 0));
        let size = self.window.inner_size().to_logical::<u32>(scale);
        Rect::new(position.x, position.y, size.width, size.height)
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.window
            .set_outer_position(LogicalPosition::new(bounds.x, bounds.y));
        let _ = self
            .window
            .request_inner_size(LogicalSize::new(bounds.width, bounds.height));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.window.set_window_level(if on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        });
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn enable_vibrancy(&mut self, style: VibrancyStyle) -> Option<VibrancyHandle> {
        match vibrancy::apply(&self.window, style) {
            Ok(()) => {
                self.next_vibrancy += 1;
                let handle = VibrancyHandle(self.next_vibrancy);
                self.active_vibrancy = Some((handle, style));
                Some(handle)
            }
            Err(e) => {
                log::warn!("Failed to enable vibrancy: {:#}", e);
                None
            }
        }
    }

    fn disable_vibrancy(&mut self, handle: VibrancyHandle) {
        match self.active_vibrancy {
            Some((active, style)) if active == handle => {
                if let Err(e) = vibrancy::clear(&self.window, style) {
                    log::warn!("Failed to disable vibrancy: {:#}", e);
                }
                self.active_vibrancy = None;
            }
            _ => log::warn!("Unknown vibrancy handle {:?}", handle),
        }
    }

    fn load_renderer(&mut self, target: &RendererTarget) {
        log::info!(
            "Loading renderer {} (headers: {:?})",
            target.url,
            target.extra_headers
        );
        self.renderer = Some(target.clone());
        // Rendering happens elsewhere; the surface is presentable as soon as
        // the content is attached.
        self.pending.push(HostWindowEvent::ReadyToShow);
        self.window.request_redraw();
    }

    fn remove_menu_bar(&mut self) {
        // Nothing to remove: on Windows and Linux a winit window never gets
        // a default menu bar (muda menus are attached only on request), and
        // macOS keeps its application menu, so this is never called there.
        crate::debug_log!("WINDOW", "No menu bar attached to window {}", self.id());
    }

    fn popup_context_menu(&mut self, template: &[MenuItemTemplate]) {
        match build_context_menu(template) {
            Ok(menu) => {
                show_for_window(&menu, &self.window);
                self.context_menu = Some(menu);
            }
            Err(e) => log::error!("Failed to build context menu: {}", e),
        }
    }

    fn take_pending_events(&mut self) -> Vec<HostWindowEvent> {
        std::mem::take(&mut self.pending)
    }
}
