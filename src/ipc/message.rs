//! Messages exchanged between the window host and its renderer.

use crate::menu::{MenuError, MenuItemTemplate, validate_template};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use termwin_config::Rect;
use thiserror::Error;

/// Channel names on the wire.
pub mod channels {
    // renderer -> host
    pub const APP_READY: &str = "app:ready";
    pub const WINDOW_FOCUS: &str = "window-focus";
    pub const WINDOW_MAXIMIZE: &str = "window-maximize";
    pub const WINDOW_UNMAXIMIZE: &str = "window-unmaximize";
    pub const WINDOW_TOGGLE_MAXIMIZE: &str = "window-toggle-maximize";
    pub const WINDOW_MINIMIZE: &str = "window-minimize";
    pub const WINDOW_SET_BOUNDS: &str = "window-set-bounds";
    pub const WINDOW_SET_ALWAYS_ON_TOP: &str = "window-set-always-on-top";
    pub const WINDOW_SET_VIBRANCY: &str = "window-set-vibrancy";
    pub const WINDOW_SET_TITLE: &str = "window-set-title";
    pub const WINDOW_POPUP_CONTEXT_MENU: &str = "window-popup-context-menu";

    // host -> renderer
    pub const HOST_WINDOW_SHOWN: &str = "host:window-shown";
    pub const HOST_WINDOW_ENTER_FULL_SCREEN: &str = "host:window-enter-full-screen";
    pub const HOST_WINDOW_LEAVE_FULL_SCREEN: &str = "host:window-leave-full-screen";
    pub const HOST_CONTEXT_MENU_CLICK: &str = "host:context-menu-click";
}

#[derive(Debug, Error)]
pub enum IpcError {
    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    #[error("'{channel}' expects an argument at position {index}")]
    MissingArgument { channel: String, index: usize },

    #[error("'{channel}' argument {index} is invalid: {source}")]
    InvalidArgument {
        channel: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{channel}' carries an invalid menu template: {source}")]
    InvalidMenu {
        channel: String,
        #[source]
        source: MenuError,
    },
}

/// A message from a renderer to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Id of the window whose renderer sent the message.
    pub sender: u64,
    pub channel: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl IpcMessage {
    pub fn new(sender: u64, channel: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sender,
            channel: channel.into(),
            args,
        }
    }

    fn arg<T: DeserializeOwned>(&self, index: usize) -> Result<T, IpcError> {
        let value = self
            .args
            .get(index)
            .ok_or_else(|| IpcError::MissingArgument {
                channel: self.channel.clone(),
                index,
            })?;
        serde_json::from_value(value.clone()).map_err(|source| IpcError::InvalidArgument {
            channel: self.channel.clone(),
            index,
            source,
        })
    }
}

/// A message from the host to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererEvent {
    pub channel: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Remote-control commands a renderer can issue to its window.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Focus,
    Maximize,
    Unmaximize,
    ToggleMaximize,
    Minimize,
    SetBounds(Rect),
    SetAlwaysOnTop(bool),
    SetVibrancy(bool),
    SetTitle(String),
    PopupContextMenu(Vec<MenuItemTemplate>),
}

/// A decoded inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// The renderer finished loading.
    Ready,
    Command(WindowCommand),
}

impl Inbound {
    pub fn parse(message: &IpcMessage) -> Result<Self, IpcError> {
        use channels::*;

        let command = match message.channel.as_str() {
            APP_READY => return Ok(Inbound::Ready),
            WINDOW_FOCUS => WindowCommand::Focus,
            WINDOW_MAXIMIZE => WindowCommand::Maximize,
            WINDOW_UNMAXIMIZE => WindowCommand::Unmaximize,
            WINDOW_TOGGLE_MAXIMIZE => WindowCommand::ToggleMaximize,
            WINDOW_MINIMIZE => WindowCommand::Minimize,
            WINDOW_SET_BOUNDS => WindowCommand::SetBounds(message.arg(0)?),
            WINDOW_SET_ALWAYS_ON_TOP => WindowCommand::SetAlwaysOnTop(message.arg(0)?),
            WINDOW_SET_VIBRANCY => WindowCommand::SetVibrancy(message.arg(0)?),
            WINDOW_SET_TITLE => WindowCommand::SetTitle(message.arg(0)?),
            WINDOW_POPUP_CONTEXT_MENU => {
                let template: Vec<MenuItemTemplate> = message.arg(0)?;
                validate_template(&template).map_err(|source| IpcError::InvalidMenu {
                    channel: message.channel.clone(),
                    source,
                })?;
                WindowCommand::PopupContextMenu(template)
            }
            other => return Err(IpcError::UnknownChannel(other.to_string())),
        };
        Ok(Inbound::Command(command))
    }
}
