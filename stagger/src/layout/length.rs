//! Padding and text metrics.

use serde::{Deserialize, Serialize};

/// Estimated advance of one display cell of text.
pub const CHAR_WIDTH: u32 = 8;
/// Estimated height of one line of text.
pub const LINE_HEIGHT: u32 = 18;

/// Padding around content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Uniform padding on all sides.
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
