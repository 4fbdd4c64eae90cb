//! Leaf and wrapper measurables: padding and topic chips.

use unicode_width::UnicodeWidthStr;

use crate::primitives::{Point, Size};

use super::constraints::Constraints;
use super::length::{Padding, CHAR_WIDTH, LINE_HEIGHT};
use super::measure::Measurable;

// =========================================================================
// Padded
// =========================================================================

/// Wraps a child with padding on each side.
///
/// The child is measured against the incoming constraints shrunk by the
/// padding; the padding is then added back and the result coerced into the
/// incoming envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padded<M> {
    child: M,
    padding: Padding,
}

impl<M: Measurable> Padded<M> {
    pub fn new(child: M, padding: Padding) -> Self {
        Self { child, padding }
    }

    pub fn child(&self) -> &M {
        &self.child
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Where the child sits relative to the padded box's origin.
    pub fn content_offset(&self) -> Point {
        Point::new(self.padding.left, self.padding.top)
    }
}

impl<M: Measurable> Measurable for Padded<M> {
    fn measure(&self, constraints: Constraints) -> Size {
        let inner = self.child.measure(constraints.deflate(&self.padding));
        constraints.constrain(Size::new(
            inner.width.saturating_add(self.padding.horizontal()),
            inner.height.saturating_add(self.padding.vertical()),
        ))
    }
}

// =========================================================================
// Chip
// =========================================================================

/// Inner padding of a chip around its swatch and label.
const CHIP_PADDING: Padding = Padding { top: 4, right: 8, bottom: 4, left: 8 };
/// Side of the square color swatch.
const SWATCH_SIZE: u32 = 16;
/// Gap between swatch and label.
const SWATCH_GAP: u32 = 4;

/// A topic chip: a swatch followed by a single-line label, inside a card.
///
/// Text is not shaped; the label is estimated at [`CHAR_WIDTH`] per display
/// cell, so wide (CJK) characters count twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    label: String,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Unconstrained chip size.
    pub fn intrinsic_size(&self) -> Size {
        let text_width = u32::try_from(self.label.width())
            .unwrap_or(u32::MAX)
            .saturating_mul(CHAR_WIDTH);
        let width = SWATCH_SIZE
            .saturating_add(SWATCH_GAP)
            .saturating_add(text_width)
            .saturating_add(CHIP_PADDING.horizontal());
        let height = SWATCH_SIZE.max(LINE_HEIGHT) + CHIP_PADDING.vertical();
        Size::new(width, height)
    }
}

impl Measurable for Chip {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.intrinsic_size())
    }
}
