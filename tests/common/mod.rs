//! Shared integration test helpers for termwin.
//!
//! Include with `mod common;` at the top of each test file. The
//! `#[allow(dead_code)]` keeps files that use only part of the helpers quiet.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use termwin::content::RendererTarget;
use termwin::ipc::{self, HostInbox, HostLink, RendererEndpoint};
use termwin::menu::MenuItemTemplate;
use termwin::vibrancy::{VibrancyHandle, VibrancyStyle};
use termwin::window::{HostWindowEvent, NativeWindow, WindowOptions};
use termwin::{Platform, ReadySignal, WindowContext, WindowController};
use termwin_config::{AppearanceConfig, Rect, SettingsStore, WINDOW_NAMESPACE};

pub const MOCK_WINDOW_ID: u64 = 42;

/// Everything the mock window saw, shared with the test after the window
/// has been moved into (and dropped by) the controller.
#[derive(Debug, Default)]
pub struct MockState {
    pub calls: Vec<String>,
    pub visible: bool,
    pub maximized: bool,
    pub bounds: Rect,
    pub title: Option<String>,
    pub always_on_top: bool,
    pub vibrancy_enabled: usize,
    pub vibrancy_disabled: usize,
    pub active_vibrancy: Option<(VibrancyHandle, VibrancyStyle)>,
    pub renderer: Option<RendererTarget>,
    pub menu_bar_removed: bool,
    pub context_menus: Vec<Vec<MenuItemTemplate>>,
    pub options: Option<WindowOptions>,
    pending: Vec<HostWindowEvent>,
}

pub type SharedState = Rc<RefCell<MockState>>;

pub struct MockWindow {
    state: SharedState,
    next_handle: u64,
}

impl MockWindow {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            next_handle: 0,
        }
    }

    fn record(&self, call: &str) {
        self.state.borrow_mut().calls.push(call.to_string());
    }

    fn mark_visible(&self) {
        let mut state = self.state.borrow_mut();
        if !state.visible {
            state.visible = true;
            state.pending.push(HostWindowEvent::Show);
        }
    }
}

impl NativeWindow for MockWindow {
    fn id(&self) -> u64 {
        MOCK_WINDOW_ID
    }

    fn show(&mut self) {
        self.record("show");
        self.mark_visible();
    }

    fn focus(&mut self) {
        self.record("focus");
    }

    fn maximize(&mut self) {
        self.record("maximize");
        self.state.borrow_mut().maximized = true;
        self.mark_visible();
    }

    fn unmaximize(&mut self) {
        self.record("unmaximize");
        self.state.borrow_mut().maximized = false;
    }

    fn minimize(&mut self) {
        self.record("minimize");
    }

    fn is_maximized(&self) -> bool {
        self.state.borrow().maximized
    }

    fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.record("set_bounds");
        self.state.borrow_mut().bounds = bounds;
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.record("set_always_on_top");
        self.state.borrow_mut().always_on_top = on_top;
    }

    fn set_title(&mut self, title: &str) {
        self.record("set_title");
        self.state.borrow_mut().title = Some(title.to_string());
    }

    fn enable_vibrancy(&mut self, style: VibrancyStyle) -> Option<VibrancyHandle> {
        self.record("enable_vibrancy");
        self.next_handle += 1;
        let handle = VibrancyHandle(self.next_handle);
        let mut state = self.state.borrow_mut();
        state.vibrancy_enabled += 1;
        state.active_vibrancy = Some((handle, style));
        Some(handle)
    }

    fn disable_vibrancy(&mut self, handle: VibrancyHandle) {
        self.record("disable_vibrancy");
        let mut state = self.state.borrow_mut();
        assert_eq!(state.active_vibrancy.map(|(h, _)| h), Some(handle));
        state.vibrancy_disabled += 1;
        state.active_vibrancy = None;
    }

    fn load_renderer(&mut self, target: &RendererTarget) {
        self.record("load_renderer");
        let mut state = self.state.borrow_mut();
        state.renderer = Some(target.clone());
        // Same as the winit adapter: presentable once content is attached.
        state.pending.push(HostWindowEvent::ReadyToShow);
    }

    fn remove_menu_bar(&mut self) {
        self.record("remove_menu_bar");
        self.state.borrow_mut().menu_bar_removed = true;
    }

    fn popup_context_menu(&mut self, template: &[MenuItemTemplate]) {
        self.record("popup_context_menu");
        self.state.borrow_mut().context_menus.push(template.to_vec());
    }

    fn take_pending_events(&mut self) -> Vec<HostWindowEvent> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}

/// A controller wired to a [`MockWindow`] and an in-process bus.
pub struct Harness {
    pub controller: WindowController<MockWindow, HostLink>,
    pub ready: ReadySignal,
    pub state: SharedState,
    pub inbox: HostInbox,
    pub renderer: RendererEndpoint,
}

impl Harness {
    pub fn new(platform: Platform, appearance: AppearanceConfig, store: SettingsStore) -> Self {
        Self::with_window_bounds(platform, appearance, store, Rect::new(100, 80, 1000, 600))
    }

    pub fn with_window_bounds(
        platform: Platform,
        appearance: AppearanceConfig,
        store: SettingsStore,
        initial_bounds: Rect,
    ) -> Self {
        let state = SharedState::default();
        state.borrow_mut().bounds = initial_bounds;

        let (link, inbox, renderer) = ipc::bus();
        let ctx = WindowContext {
            platform,
            appearance,
            store,
            link,
            renderer_entry: PathBuf::from("/opt/termwin/dist/index.html"),
        };
        let window_state = Rc::clone(&state);
        let (controller, ready) = WindowController::create(ctx, move |options| {
            window_state.borrow_mut().options = Some(options.clone());
            Ok(MockWindow::new(window_state))
        })
        .expect("controller creation failed");

        Self {
            controller,
            ready,
            state,
            inbox,
            renderer,
        }
    }

    /// Linux, default appearance, in-memory store.
    pub fn linux() -> Self {
        Self::new(
            Platform::Linux,
            AppearanceConfig::default(),
            SettingsStore::in_memory(WINDOW_NAMESPACE),
        )
    }

    /// Run the first show the window queued at creation, then forget the
    /// calls and renderer events it produced.
    pub fn present(&mut self) {
        self.controller.pump();
        self.clear_calls();
        self.renderer_channels();
    }

    /// Drain every event the host sent to the renderer so far.
    pub fn renderer_channels(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.renderer.try_recv())
            .map(|event| event.channel)
            .collect()
    }

    /// Post a renderer message and route it through the controller, the way
    /// the app does after a wakeup.
    pub fn renderer_sends(&mut self, channel: &str, args: Vec<serde_json::Value>) {
        assert!(self.renderer.send(MOCK_WINDOW_ID, channel, args));
        for message in self.inbox.drain() {
            self.controller.handle_message(&message);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }
}
