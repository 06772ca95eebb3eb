//! The window controller: one native window, its persisted geometry, its
//! visibility stream, and the renderer's remote-control surface.
//!
//! Everything runs on the event-loop thread. OS events arrive through
//! [`WindowController::handle_event`], renderer messages through
//! [`WindowController::handle_message`]; both are applied immediately and in
//! delivery order.

use super::host::{HostWindowEvent, NativeWindow};
use super::options::{WindowOptions, build_window_options};
use super::visibility::{VisibilityReceiver, VisibilityStream};
use crate::content::RendererTarget;
use crate::error::WindowError;
use crate::ipc::{Inbound, IpcMessage, RendererLink, WindowCommand, channels};
use crate::menu::clickable_ids;
use crate::platform::Platform;
use crate::vibrancy::VibrancyHandle;
use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;
use termwin_config::{AppearanceConfig, PersistedWindowState, Rect, SettingsStore};
use tokio::sync::oneshot;

/// Host dependencies injected at construction.
pub struct WindowContext<L> {
    pub platform: Platform,
    pub appearance: AppearanceConfig,
    /// Store for the `window` namespace.
    pub store: SettingsStore,
    pub link: L,
    /// Renderer entry file loaded into the window.
    pub renderer_entry: PathBuf,
}

/// Resolves once the window's renderer sends `app:ready`.
#[derive(Debug)]
pub struct ReadySignal {
    window_id: u64,
    rx: oneshot::Receiver<()>,
}

impl ReadySignal {
    pub fn window_id(&self) -> u64 {
        self.window_id
    }

    pub async fn wait(self) -> Result<(), WindowError> {
        self.rx
            .await
            .map_err(|_| WindowError::ClosedBeforeReady(self.window_id))
    }

    /// Non-blocking check: `Some(Ok(()))` once ready, `Some(Err(_))` if the
    /// window closed first, `None` while still pending.
    pub fn try_ready(&mut self) -> Option<Result<(), WindowError>> {
        match self.rx.try_recv() {
            Ok(()) => Some(Ok(())),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(Err(WindowError::ClosedBeforeReady(self.window_id)))
            }
        }
    }
}

pub struct WindowController<W: NativeWindow, L: RendererLink> {
    id: u64,
    /// `None` once the OS reported the window closed.
    window: Option<W>,
    link: L,
    store: SettingsStore,
    platform: Platform,
    appearance: AppearanceConfig,
    options: WindowOptions,
    /// Persisted maximized flag, applied on first show.
    restore_maximized: bool,
    /// Last known non-maximized bounds.
    bounds: Rect,
    visible: VisibilityStream,
    vibrancy: Option<VibrancyHandle>,
    ready_tx: Option<oneshot::Sender<()>>,
    presented: bool,
    context_menu_ids: HashSet<String>,
}

impl<W: NativeWindow, L: RendererLink> WindowController<W, L> {
    /// Create the native window (hidden) and load its renderer.
    ///
    /// `factory` receives the computed options and must return a window that
    /// is not yet visible. Events the window queues during creation (such as
    /// `ReadyToShow`) stay queued until the first [`pump`](Self::pump), so
    /// callers can subscribe to [`visible`](Self::visible) beforehand.
    pub fn create<F>(ctx: WindowContext<L>, factory: F) -> Result<(Self, ReadySignal), WindowError>
    where
        F: FnOnce(&WindowOptions) -> Result<W, WindowError>,
    {
        let WindowContext {
            platform,
            appearance,
            store,
            link,
            renderer_entry,
        } = ctx;

        let persisted = PersistedWindowState::load(&store);
        let options = build_window_options(platform, &appearance, &persisted);
        log::info!(
            "Creating window {}x{} (frame={:?}, titlebar={:?}, transparent={}, maximized={})",
            options.width,
            options.height,
            options.frame,
            options.titlebar_style,
            options.transparent,
            persisted.maximized
        );

        let mut window = factory(&options)?;
        let id = window.id();

        let target = RendererTarget::new(&renderer_entry, id).map_err(WindowError::Content)?;
        window.load_renderer(&target);

        if !platform.keeps_menu_bar() {
            window.remove_menu_bar();
        }

        let bounds = persisted.boundaries.unwrap_or_else(|| window.bounds());
        let (ready_tx, rx) = oneshot::channel();

        let controller = Self {
            id,
            window: Some(window),
            link,
            store,
            platform,
            appearance,
            options,
            restore_maximized: persisted.maximized,
            bounds,
            visible: VisibilityStream::new(),
            vibrancy: None,
            ready_tx: Some(ready_tx),
            presented: false,
            context_menu_ids: HashSet::new(),
        };

        Ok((controller, ReadySignal { window_id: id, rx }))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    pub fn is_destroyed(&self) -> bool {
        self.window.is_none()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.current()
    }

    /// Last known non-maximized bounds.
    pub fn bounds_snapshot(&self) -> Rect {
        self.bounds
    }

    pub fn vibrancy_handle(&self) -> Option<VibrancyHandle> {
        self.vibrancy
    }

    /// Subscribe to visibility changes: `true` on show, `false` on hide.
    /// The stream ends when the window is destroyed.
    pub fn visible(&mut self) -> VisibilityReceiver {
        self.visible.subscribe()
    }

    pub fn show(&mut self) {
        if let Some(window) = self.live_window("show") {
            window.show();
        }
        self.pump();
    }

    pub fn focus(&mut self) {
        if let Some(window) = self.live_window("focus") {
            window.focus();
        }
        self.pump();
    }

    /// Forward a named event to the renderer.
    pub fn send(&self, event: &str, args: Vec<Value>) {
        if self.window.is_none() {
            log::warn!("Window {} destroyed, dropped '{}'", self.id, event);
            return;
        }
        self.link.send(event, args);
    }

    /// Turn the vibrancy effect on or off. Repeating the current state is a
    /// no-op.
    pub fn set_vibrancy(&mut self, enabled: bool) {
        let Some(window) = self.window.as_mut() else {
            log::warn!("Window {} destroyed, ignoring set_vibrancy", self.id);
            return;
        };

        match (enabled, self.vibrancy) {
            (true, Some(_)) | (false, None) => {}
            (true, None) => match self.platform.vibrancy_style() {
                Some(style) => {
                    self.vibrancy = window.enable_vibrancy(style);
                    log::info!("Vibrancy enabled ({:?}) -> {:?}", style, self.vibrancy);
                }
                None => log::info!("Vibrancy is not supported on {:?}", self.platform),
            },
            (false, Some(handle)) => {
                window.disable_vibrancy(handle);
                self.vibrancy = None;
                log::info!("Vibrancy disabled");
            }
        }
    }

    /// Apply an OS window event.
    pub fn handle_event(&mut self, event: HostWindowEvent) {
        self.dispatch(event);
        self.pump();
    }

    /// Apply a renderer message. Returns `false` for messages addressed to
    /// another window.
    pub fn handle_message(&mut self, message: &IpcMessage) -> bool {
        if message.sender != self.id {
            return false;
        }

        match Inbound::parse(message) {
            Ok(Inbound::Ready) => {
                if let Some(tx) = self.ready_tx.take() {
                    crate::debug_info!("IPC", "Renderer of window {} is ready", self.id);
                    let _ = tx.send(());
                }
            }
            Ok(Inbound::Command(command)) => {
                crate::debug_log!("IPC", "Window {} <- {:?}", self.id, command);
                self.execute(command);
            }
            Err(e) => log::warn!("Dropping message for window {}: {}", self.id, e),
        }
        true
    }

    /// Forward a native menu activation if it belongs to the last context
    /// menu this window showed.
    pub fn handle_menu_activation(&mut self, item_id: &str) -> bool {
        if !self.context_menu_ids.contains(item_id) {
            return false;
        }
        self.send(
            channels::HOST_CONTEXT_MENU_CLICK,
            vec![Value::String(item_id.to_string())],
        );
        true
    }

    /// Dispatch events the native window queued on its own.
    pub fn pump(&mut self) {
        loop {
            let pending = match self.window.as_mut() {
                Some(window) => window.take_pending_events(),
                None => return,
            };
            if pending.is_empty() {
                return;
            }
            for event in pending {
                self.dispatch(event);
            }
        }
    }

    fn execute(&mut self, command: WindowCommand) {
        let Some(window) = self.window.as_mut() else {
            log::warn!("Window {} destroyed, ignoring {:?}", self.id, command);
            return;
        };

        match command {
            WindowCommand::Focus => window.focus(),
            WindowCommand::Maximize => window.maximize(),
            WindowCommand::Unmaximize => window.unmaximize(),
            WindowCommand::ToggleMaximize => {
                if window.is_maximized() {
                    window.unmaximize();
                } else {
                    window.maximize();
                }
            }
            WindowCommand::Minimize => window.minimize(),
            WindowCommand::SetBounds(rect) => window.set_bounds(rect),
            WindowCommand::SetAlwaysOnTop(on_top) => window.set_always_on_top(on_top),
            WindowCommand::SetTitle(title) => window.set_title(&title),
            WindowCommand::PopupContextMenu(template) => {
                self.context_menu_ids = clickable_ids(&template);
                window.popup_context_menu(&template);
            }
            WindowCommand::SetVibrancy(enabled) => self.set_vibrancy(enabled),
        }
        self.pump();
    }

    fn dispatch(&mut self, event: HostWindowEvent) {
        if self.window.is_none() {
            if event != HostWindowEvent::Closed {
                log::warn!("Window {} destroyed, ignoring {:?}", self.id, event);
            }
            return;
        }

        crate::debug_trace!("WINDOW", "Window {} event {:?}", self.id, event);
        match event {
            HostWindowEvent::ReadyToShow => self.present(),
            HostWindowEvent::Show => {
                self.visible.emit(true);
                self.link.send(channels::HOST_WINDOW_SHOWN, Vec::new());
            }
            HostWindowEvent::Hide => self.visible.emit(false),
            HostWindowEvent::EnterFullScreen => {
                self.link
                    .send(channels::HOST_WINDOW_ENTER_FULL_SCREEN, Vec::new());
            }
            HostWindowEvent::LeaveFullScreen => {
                self.link
                    .send(channels::HOST_WINDOW_LEAVE_FULL_SCREEN, Vec::new());
            }
            HostWindowEvent::Close => self.persist_state(),
            HostWindowEvent::Closed => self.teardown(),
            HostWindowEvent::Resize | HostWindowEvent::Move => self.track_bounds(),
        }
    }

    /// First paint is ready: apply vibrancy, then maximize or show, then
    /// focus.
    fn present(&mut self) {
        if self.presented {
            return;
        }
        self.presented = true;

        if self.appearance.vibrancy {
            self.set_vibrancy(true);
        }

        let restore_maximized = self.restore_maximized;
        if let Some(window) = self.window.as_mut() {
            if restore_maximized {
                window.maximize();
            } else {
                window.show();
            }
            window.focus();
        }
    }

    /// Minimized windows report a zero-area rect (and a far off-screen
    /// position on Windows); those never replace the snapshot.
    fn track_bounds(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        if window.is_maximized() {
            return;
        }
        let bounds = window.bounds();
        if bounds.is_empty() {
            crate::debug_trace!("WINDOW", "Ignoring empty bounds {:?}", bounds);
            return;
        }
        self.bounds = bounds;
    }

    fn persist_state(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let state = PersistedWindowState {
            boundaries: Some(self.bounds),
            maximized: window.is_maximized(),
        };
        match state.save(&mut self.store) {
            Ok(()) => log::info!(
                "Saved window state: {:?} maximized={}",
                self.bounds,
                state.maximized
            ),
            Err(e) => log::error!("Failed to save window state: {}", e),
        }
    }

    fn teardown(&mut self) {
        log::info!("Window {} closed", self.id);
        self.window = None;
        self.vibrancy = None;
        self.visible.close();
        self.ready_tx = None;
        self.context_menu_ids.clear();
    }

    fn live_window(&mut self, op: &str) -> Option<&mut W> {
        if self.window.is_none() {
            log::warn!("Window {} destroyed, ignoring {}", self.id, op);
        }
        self.window.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::HostLink;
    use crate::menu::MenuItemTemplate;
    use crate::vibrancy::VibrancyStyle;

    /// Minimal window for unit-level checks; the full recording mock lives in
    /// the integration tests.
    #[derive(Default)]
    struct StubWindow {
        maximized: bool,
        bounds: Rect,
        pending: Vec<HostWindowEvent>,
    }

    impl NativeWindow for StubWindow {
        fn id(&self) -> u64 {
            9
        }
        fn show(&mut self) {
            self.pending.push(HostWindowEvent::Show);
        }
        fn focus(&mut self) {}
        fn maximize(&mut self) {
            self.maximized = true;
        }
        fn unmaximize(&mut self) {
            self.maximized = false;
        }
        fn minimize(&mut self) {}
        fn is_maximized(&self) -> bool {
            self.maximized
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
        fn set_bounds(&mut self, bounds: Rect) {
            self.bounds = bounds;
        }
        fn set_always_on_top(&mut self, _on_top: bool) {}
        fn set_title(&mut self, _title: &str) {}
        fn enable_vibrancy(&mut self, _style: VibrancyStyle) -> Option<VibrancyHandle> {
            Some(VibrancyHandle(1))
        }
        fn disable_vibrancy(&mut self, _handle: VibrancyHandle) {}
        fn load_renderer(&mut self, _target: &RendererTarget) {}
        fn remove_menu_bar(&mut self) {}
        fn popup_context_menu(&mut self, _template: &[MenuItemTemplate]) {}
        fn take_pending_events(&mut self) -> Vec<HostWindowEvent> {
            std::mem::take(&mut self.pending)
        }
    }

    fn controller() -> (
        WindowController<StubWindow, HostLink>,
        ReadySignal,
        crate::ipc::RendererEndpoint,
    ) {
        let (link, _inbox, renderer) = crate::ipc::bus();
        let ctx = WindowContext {
            platform: Platform::Linux,
            appearance: AppearanceConfig::default(),
            store: SettingsStore::in_memory("window"),
            link,
            renderer_entry: PathBuf::from("/tmp/index.html"),
        };
        let (controller, ready) = WindowController::create(ctx, |_| {
            Ok(StubWindow {
                bounds: Rect::new(0, 0, 800, 600),
                ..StubWindow::default()
            })
        })
        .unwrap();
        (controller, ready, renderer)
    }

    #[test]
    fn test_show_round_trips_through_pending_events() {
        let (mut controller, _ready, mut renderer) = controller();
        let mut rx = controller.visible();

        controller.show();

        assert_eq!(rx.try_recv(), Ok(true));
        assert!(controller.is_visible());
        assert_eq!(
            renderer.try_recv().map(|e| e.channel),
            Some(channels::HOST_WINDOW_SHOWN.to_string())
        );
    }

    #[test]
    fn test_ready_signal_only_for_own_window() {
        let (mut controller, mut ready, _renderer) = controller();

        assert!(!controller.handle_message(&IpcMessage::new(1, channels::APP_READY, vec![])));
        assert!(ready.try_ready().is_none());

        assert!(controller.handle_message(&IpcMessage::new(9, channels::APP_READY, vec![])));
        assert!(matches!(ready.try_ready(), Some(Ok(()))));
    }

    #[test]
    fn test_ready_signal_fails_when_closed_first() {
        let (mut controller, mut ready, _renderer) = controller();
        controller.handle_event(HostWindowEvent::Closed);
        assert!(matches!(
            ready.try_ready(),
            Some(Err(WindowError::ClosedBeforeReady(9)))
        ));
    }

    #[test]
    fn test_initial_bounds_snapshot_from_window() {
        let (controller, _ready, _renderer) = controller();
        assert_eq!(controller.bounds_snapshot(), Rect::new(0, 0, 800, 600));
    }
}
