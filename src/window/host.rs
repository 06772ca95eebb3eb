//! The seam between the window controller and the native toolkit.

use crate::content::RendererTarget;
use crate::menu::MenuItemTemplate;
use crate::vibrancy::{VibrancyHandle, VibrancyStyle};
use termwin_config::Rect;

/// OS-level window events, in the order the toolkit delivers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostWindowEvent {
    /// First frame can be presented; the window is still hidden.
    ReadyToShow,
    Show,
    Hide,
    EnterFullScreen,
    LeaveFullScreen,
    Resize,
    Move,
    /// The user asked to close; the window still exists.
    Close,
    /// The window is gone.
    Closed,
}

/// Window primitives the controller delegates to. Calls on a live window are
/// infallible from the controller's point of view; implementations log
/// their own failures.
pub trait NativeWindow {
    /// Toolkit-assigned numeric id.
    fn id(&self) -> u64;

    fn show(&mut self);
    fn focus(&mut self);
    fn maximize(&mut self);
    fn unmaximize(&mut self);
    fn minimize(&mut self);
    fn is_maximized(&self) -> bool;

    /// Outer position and content size, in logical pixels.
    fn bounds(&self) -> Rect;
    fn set_bounds(&mut self, bounds: Rect);
    fn set_always_on_top(&mut self, on_top: bool);
    fn set_title(&mut self, title: &str);

    /// Start a vibrancy effect. `None` when the platform refused it.
    fn enable_vibrancy(&mut self, style: VibrancyStyle) -> Option<VibrancyHandle>;
    fn disable_vibrancy(&mut self, handle: VibrancyHandle);

    /// Load the renderer content.
    fn load_renderer(&mut self, target: &RendererTarget);
    fn remove_menu_bar(&mut self);

    /// Show a context menu anchored to this window.
    fn popup_context_menu(&mut self, template: &[MenuItemTemplate]);

    /// Events the implementation generated itself (e.g. a `Show` caused by
    /// `show()`), to be dispatched after the call that produced them.
    fn take_pending_events(&mut self) -> Vec<HostWindowEvent> {
        Vec::new()
    }
}
