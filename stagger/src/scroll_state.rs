//! Scroll State
//!
//! Vertical scroll offset for a list laid out by a [`Column`](crate::layout::Column),
//! kept inside `[0, content - viewport]`.

use std::ops::Range;

use crate::layout::{MeasuredLayout, Placeable};

/// Scroll position of a vertically scrolling list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScrollState {
    /// Current scroll offset (0 = top).
    offset: u32,
    /// Maximum scroll offset.
    max: u32,
    /// Height of the visible window.
    viewport: u32,
}

impl ListScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    /// Record the latest content and viewport heights (call after each
    /// layout pass). The offset is pulled back in range if the content shrank.
    pub fn update_extents(&mut self, content_height: u32, viewport_height: u32) {
        self.viewport = viewport_height;
        self.max = content_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max);
    }

    /// Scroll by a delta (positive = scroll content up / towards start).
    pub fn scroll_by(&mut self, delta: i64) {
        let target = (i64::from(self.offset) - delta).clamp(0, i64::from(self.max));
        self.offset = u32::try_from(target).unwrap_or(self.max);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = self.max;
    }

    /// Bring the item at `index` to the top of the viewport, as far as the
    /// content allows. Returns `false` if there is no such placed item.
    pub fn scroll_to_item(&mut self, index: usize, layout: &MeasuredLayout) -> bool {
        match layout.placeables.get(index).and_then(Placeable::rect) {
            Some(rect) => {
                self.offset = rect.y.min(self.max);
                true
            }
            None => false,
        }
    }

    /// Indices of the items intersecting the viewport. Items must be placed
    /// top to bottom in index order, as a column places them.
    pub fn visible_range(&self, layout: &MeasuredLayout) -> Range<usize> {
        if self.viewport == 0 {
            return 0..0;
        }
        let top = self.offset;
        let bottom = self.offset.saturating_add(self.viewport);
        let placeables = &layout.placeables;

        let start = placeables.partition_point(|p| p.rect().is_none_or(|r| r.bottom() <= top));
        let end = placeables.partition_point(|p| p.rect().is_none_or(|r| r.y < bottom));
        start..end.max(start)
    }
}
