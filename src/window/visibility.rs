//! Observable window visibility.
//!
//! Every subscriber gets its own unbounded channel so that no show/hide
//! transition is coalesced away. Closing the stream drops every sender; a
//! subscriber's `recv().await` then returns `None` after draining what was
//! already delivered.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Receiving end of a visibility subscription.
pub type VisibilityReceiver = UnboundedReceiver<bool>;

#[derive(Debug, Default)]
pub struct VisibilityStream {
    subscribers: Vec<UnboundedSender<bool>>,
    current: bool,
    closed: bool,
}

impl VisibilityStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to future visibility changes. After [`close`](Self::close)
    /// the returned receiver is already at end-of-stream.
    pub fn subscribe(&mut self) -> VisibilityReceiver {
        let (tx, rx) = unbounded_channel();
        if !self.closed {
            self.subscribers.push(tx);
        }
        rx
    }

    /// Record and broadcast a visibility change. Ignored once closed.
    pub fn emit(&mut self, visible: bool) {
        if self.closed {
            log::debug!("Visibility change after close ignored ({visible})");
            return;
        }
        self.current = visible;
        // Dropped receivers are pruned as we go.
        self.subscribers.retain(|tx| tx.send(visible).is_ok());
    }

    /// Terminate the stream.
    pub fn close(&mut self) {
        self.closed = true;
        self.subscribers.clear();
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
