//! Window lifecycle: creation options, the native-window seam, visibility,
//! and the controller that ties them to the renderer and the settings store.

mod controller;
mod host;
mod options;
mod visibility;

pub use controller::{ReadySignal, WindowContext, WindowController};
pub use host::{HostWindowEvent, NativeWindow};
pub use options::{
    DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH, TitlebarStyle,
    WindowOptions, build_window_options,
};
pub use visibility::{VisibilityReceiver, VisibilityStream};
