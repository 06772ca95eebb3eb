//! Renderer <-> host messaging.
//!
//! Inbound messages carry the id of the window whose renderer sent them so a
//! controller only acts on its own traffic. Outbound events are
//! fire-and-forget.

mod bus;
mod message;

pub use bus::{HostInbox, HostLink, RendererEndpoint, RendererLink, bus};
pub use message::{Inbound, IpcError, IpcMessage, RendererEvent, WindowCommand, channels};
