//! In-process message bus between the window host and renderers.
//!
//! Both directions are tokio unbounded channels: sending never blocks the
//! winit main thread, and the host drains its inbox from `about_to_wait`.

use super::message::{IpcMessage, RendererEvent};
use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Outbound seam from the window controller to its renderer.
pub trait RendererLink {
    /// Fire-and-forget delivery of a named event.
    fn send(&self, channel: &str, args: Vec<Value>);
}

/// Host-side sender to a renderer.
#[derive(Debug, Clone)]
pub struct HostLink {
    tx: UnboundedSender<RendererEvent>,
}

impl RendererLink for HostLink {
    fn send(&self, channel: &str, args: Vec<Value>) {
        let event = RendererEvent {
            channel: channel.to_string(),
            args,
        };
        if self.tx.send(event).is_err() {
            log::debug!("Renderer gone, dropped '{}'", channel);
        }
    }
}

/// Host-side receiver of renderer messages.
#[derive(Debug)]
pub struct HostInbox {
    rx: UnboundedReceiver<IpcMessage>,
}

impl HostInbox {
    /// Take every message queued so far, in arrival order.
    pub fn drain(&mut self) -> Vec<IpcMessage> {
        std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
    }
}

/// The renderer's end of the bus.
#[derive(Debug)]
pub struct RendererEndpoint {
    tx: UnboundedSender<IpcMessage>,
    rx: UnboundedReceiver<RendererEvent>,
}

impl RendererEndpoint {
    /// Send a message on behalf of window `sender`.
    pub fn send(&self, sender: u64, channel: &str, args: Vec<Value>) -> bool {
        self.tx
            .send(IpcMessage::new(sender, channel, args))
            .is_ok()
    }

    /// Wait for the next host event; `None` once the host link is gone.
    pub async fn recv(&mut self) -> Option<RendererEvent> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<RendererEvent> {
        self.rx.try_recv().ok()
    }
}

/// Create a connected host/renderer pair.
pub fn bus() -> (HostLink, HostInbox, RendererEndpoint) {
    let (to_renderer, from_host) = unbounded_channel();
    let (to_host, from_renderer) = unbounded_channel();
    (
        HostLink { tx: to_renderer },
        HostInbox { rx: from_renderer },
        RendererEndpoint {
            tx: to_host,
            rx: from_host,
        },
    )
}
