//! Typed errors for the window host.

use termwin_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    /// The native toolkit refused to create the window.
    #[error("failed to create native window: {0}")]
    Create(String),

    /// The renderer entry point cannot be expressed as a file URL.
    #[error("invalid renderer entry: {0:#}")]
    Content(anyhow::Error),

    /// The window was destroyed before its renderer reported ready.
    #[error("window {0} closed before its renderer became ready")]
    ClosedBeforeReady(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
