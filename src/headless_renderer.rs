//! Stand-in renderer used by the binary.
//!
//! Terminal rendering lives in another component. This task plays the
//! renderer's side of the bus: it announces readiness for the window encoded
//! in its load URL, then logs every event the host sends until the host link
//! goes away.

use crate::content::RendererTarget;
use crate::ipc::{RendererEndpoint, RendererEvent, channels};
use url::Url;

/// Run until the host side of the bus is dropped. `wake` nudges the event
/// loop after each message posted to the host. Returns the events received.
pub async fn run<F>(mut endpoint: RendererEndpoint, url: Url, wake: F) -> Vec<RendererEvent>
where
    F: Fn() + Send + 'static,
{
    let mut received = Vec::new();
    let Some(window_id) = RendererTarget::window_id(&url) else {
        log::error!("Renderer URL {} carries no window id", url);
        return received;
    };

    crate::debug_info!("RENDERER", "Renderer for window {} loaded", window_id);
    if endpoint.send(window_id, channels::APP_READY, Vec::new()) {
        wake();
    }

    while let Some(event) = endpoint.recv().await {
        crate::debug_info!(
            "RENDERER",
            "window {} <- {} {:?}",
            window_id,
            event.channel,
            event.args
        );
        received.push(event);
    }
    crate::debug_info!("RENDERER", "Host link for window {} closed", window_id);
    received
}
