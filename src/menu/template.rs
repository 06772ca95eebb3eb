//! Declarative context-menu templates sent by the renderer.
//!
//! The wire shape follows the usual desktop-menu template convention:
//!
//! ```json
//! [
//!   { "id": "copy", "label": "Copy", "accelerator": "CmdOrCtrl+C" },
//!   { "type": "separator" },
//!   { "label": "More", "submenu": [ { "id": "split", "label": "Split" } ] }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("context menu template is empty")]
    EmptyTemplate,

    #[error("menu item at {path} has no label")]
    MissingLabel { path: String },

    #[error("submenu '{label}' has no items")]
    EmptySubmenu { label: String },

    #[error("invalid accelerator '{accelerator}' on '{label}': {reason}")]
    InvalidAccelerator {
        label: String,
        accelerator: String,
        reason: String,
    },

    #[error("native menu error: {0}")]
    Native(#[from] muda::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    #[default]
    Normal,
    Separator,
    Checkbox,
    Submenu,
}

fn default_true() -> bool {
    true
}

/// One entry of a context-menu template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemTemplate {
    /// Reported back to the renderer when the item is activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: MenuItemKind,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<MenuItemTemplate>,
}

impl MenuItemTemplate {
    /// An item with a non-empty `submenu` is a submenu even if `type` was
    /// left out.
    pub fn effective_kind(&self) -> MenuItemKind {
        if self.kind == MenuItemKind::Normal && !self.submenu.is_empty() {
            MenuItemKind::Submenu
        } else {
            self.kind
        }
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }
}

/// Check a template before it reaches the native menu builder.
pub fn validate_template(items: &[MenuItemTemplate]) -> Result<(), MenuError> {
    if items.is_empty() {
        return Err(MenuError::EmptyTemplate);
    }
    validate_items(items, "")
}

fn validate_items(items: &[MenuItemTemplate], prefix: &str) -> Result<(), MenuError> {
    for (index, item) in items.iter().enumerate() {
        let path = format!("{prefix}{index}");
        let kind = item.effective_kind();
        if kind == MenuItemKind::Separator {
            continue;
        }
        if item.label.as_deref().is_none_or(str::is_empty) {
            return Err(MenuError::MissingLabel { path });
        }
        if kind == MenuItemKind::Submenu {
            if item.submenu.is_empty() {
                return Err(MenuError::EmptySubmenu {
                    label: item.label_text().to_string(),
                });
            }
            validate_items(&item.submenu, &format!("{path}."))?;
        }
    }
    Ok(())
}

/// Ids of every item that can be activated, including nested ones.
pub fn clickable_ids(items: &[MenuItemTemplate]) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids(items, &mut ids);
    ids
}

fn collect_ids(items: &[MenuItemTemplate], ids: &mut HashSet<String>) {
    for item in items {
        match item.effective_kind() {
            MenuItemKind::Separator => {}
            MenuItemKind::Submenu => collect_ids(&item.submenu, ids),
            MenuItemKind::Normal | MenuItemKind::Checkbox => {
                if item.enabled
                    && let Some(id) = &item.id
                {
                    ids.insert(id.clone());
                }
            }
        }
    }
}
