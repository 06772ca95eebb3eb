//! Window geometry types shared by the store and the window host.

use serde::{Deserialize, Serialize};

/// A window rectangle in logical pixels: position of the outer top-left
/// corner plus content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle with no area cannot be restored as a window.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
