//! The winit application: owns the event loop, the window controller and
//! the renderer bus, and routes OS events, renderer messages and menu
//! activations to the controller.

use crate::cli::RuntimeOptions;
use crate::content;
use crate::headless_renderer;
use crate::ipc::{self, HostInbox, HostLink};
use crate::menu::AppMenu;
use crate::platform::Platform;
use crate::window::{WindowContext, WindowController};
use crate::winit_host::WinitWindow;
use anyhow::{Context, Result};
use std::sync::Arc;
use termwin_config::{SettingsStore, StartupConfig, WINDOW_NAMESPACE};
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::window::WindowId;

/// Events injected into the winit loop from other threads.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Renderer messages are waiting in the inbox.
    IpcPending,
    /// A native menu item was activated.
    MenuActivated(String),
}

pub struct App {
    options: RuntimeOptions,
    runtime: Arc<Runtime>,
    proxy: EventLoopProxy<AppEvent>,
    controller: Option<WindowController<WinitWindow, HostLink>>,
    inbox: Option<HostInbox>,
    app_menu: Option<AppMenu>,
    fatal: Option<anyhow::Error>,
}

impl App {
    /// Build the event loop and run until the window is closed.
    pub fn run(options: RuntimeOptions, runtime: Arc<Runtime>) -> Result<()> {
        let event_loop = EventLoop::<AppEvent>::with_user_event()
            .build()
            .context("Failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let proxy = event_loop.create_proxy();
        let menu_proxy = proxy.clone();
        muda::MenuEvent::set_event_handler(Some(move |event: muda::MenuEvent| {
            let _ = menu_proxy.send_event(AppEvent::MenuActivated(event.id.0));
        }));

        let mut app = App {
            options,
            runtime,
            proxy,
            controller: None,
            inbox: None,
            app_menu: None,
            fatal: None,
        };
        event_loop
            .run_app(&mut app)
            .context("Event loop terminated abnormally")?;

        match app.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let platform = Platform::current();

        let startup = match &self.options.config_path {
            Some(path) => StartupConfig::load_from(path).unwrap_or_else(|e| {
                log::error!("Failed to load {:?}, using defaults: {}", path, e);
                StartupConfig::default()
            }),
            None => StartupConfig::load(),
        };

        let store = match &self.options.state_path {
            Some(path) => SettingsStore::open_at(WINDOW_NAMESPACE, path),
            None => SettingsStore::open(WINDOW_NAMESPACE),
        }
        .unwrap_or_else(|e| {
            log::error!("Window state unavailable, it will not be saved: {}", e);
            SettingsStore::in_memory(WINDOW_NAMESPACE)
        });

        let renderer_entry = self
            .options
            .content_path
            .clone()
            .unwrap_or_else(content::default_entry);

        if platform.keeps_menu_bar() && self.app_menu.is_none() {
            match AppMenu::new() {
                Ok(menu) => {
                    menu.install();
                    self.app_menu = Some(menu);
                }
                Err(e) => log::error!("Failed to build application menu: {}", e),
            }
        }

        let (link, inbox, endpoint) = ipc::bus();
        let ctx = WindowContext {
            platform,
            appearance: startup.appearance,
            store,
            link,
            renderer_entry,
        };
        let (mut controller, ready) =
            WindowController::create(ctx, |options| WinitWindow::create(event_loop, options))
                .context("Failed to create window")?;

        let url = controller
            .window()
            .and_then(|w| w.renderer_target())
            .map(|target| target.url.clone())
            .context("Window has no renderer loaded")?;
        let wake = self.proxy.clone();
        self.runtime.spawn(headless_renderer::run(endpoint, url, move || {
            let _ = wake.send_event(AppEvent::IpcPending);
        }));

        let window_id = controller.id();
        self.runtime.spawn(async move {
            match ready.wait().await {
                Ok(()) => log::info!("Window {} renderer ready", window_id),
                Err(e) => log::warn!("{}", e),
            }
        });

        let mut visible = controller.visible();
        self.runtime.spawn(async move {
            while let Some(is_visible) = visible.recv().await {
                crate::debug_log!("WINDOW", "Window {} visible={}", window_id, is_visible);
            }
            crate::debug_log!("WINDOW", "Window {} visibility stream ended", window_id);
        });

        // Dispatch what the window queued during creation (its first show)
        // now that the visibility subscriber is in place.
        controller.pump();

        self.controller = Some(controller);
        self.inbox = Some(inbox);
        Ok(())
    }

    fn drain_inbox(&mut self) {
        let (Some(controller), Some(inbox)) = (self.controller.as_mut(), self.inbox.as_mut())
        else {
            return;
        };
        for message in inbox.drain() {
            if !controller.handle_message(&message) {
                crate::debug_log!(
                    "IPC",
                    "Message from unknown window {} on '{}'",
                    message.sender,
                    message.channel
                );
            }
        }
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            crate::debug_error!("APP", "Startup failed: {:#}", e);
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        if controller.id() != u64::from(window_id) {
            return;
        }

        let events = controller
            .window_mut()
            .map(|window| window.translate(&event))
            .unwrap_or_default();
        for host_event in events {
            controller.handle_event(host_event);
        }

        if controller.is_destroyed() {
            log::info!("Window closed, exiting");
            self.controller = None;
            self.inbox = None;
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::IpcPending => self.drain_inbox(),
            AppEvent::MenuActivated(id) => {
                if let Some(controller) = self.controller.as_mut()
                    && !controller.handle_menu_activation(&id)
                {
                    crate::debug_log!("MENU", "Unhandled menu item '{}'", id);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.drain_inbox();
    }
}
