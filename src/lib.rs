// Library exports for the binary and the integration tests.
//
// Everything that touches window state runs on the winit event-loop thread.
// Renderer-side work and log consumers run as tasks on the tokio runtime and
// talk to the loop only through channels and `EventLoopProxy` wakeups.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod app;
pub mod cli;
pub mod content;
pub mod error;
pub mod headless_renderer;
pub mod ipc;
pub mod menu;
pub mod platform;
pub mod vibrancy;
pub mod window;
pub mod winit_host;

pub use error::WindowError;
pub use platform::Platform;
pub use window::{ReadySignal, WindowContext, WindowController};
