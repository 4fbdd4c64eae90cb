//! Placement sinks.
//!
//! A [`PlacementSink`] receives the outcome of a layout pass: the container's
//! bounding size and the final bounds of each child. [`LayoutSnapshot`] is the
//! in-memory sink used for hit-testing and for checking layouts in tests.

use crate::primitives::{Point, Rect, Size};

/// Receives container size and child placements from a layout pass.
pub trait PlacementSink {
    /// Accept the container's bounding size.
    fn set_container_size(&mut self, size: Size);

    /// Accept the final bounds of the child at `index`.
    fn place(&mut self, index: usize, rect: Rect);
}

/// Recorded layout: container size plus one rect per child index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSnapshot {
    container_size: Size,
    rects: Vec<Option<Rect>>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Bounds of the child at `index`, if it was placed.
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }

    /// All placed children as `(index, rect)`, in index order.
    pub fn placed(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.rects
            .iter()
            .enumerate()
            .filter_map(|(index, rect)| rect.map(|rect| (index, rect)))
    }

    /// Number of placed children.
    pub fn len(&self) -> usize {
        self.placed().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the child under `point`. Children later in the list are on
    /// top, so the last hit wins.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.placed()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(index, _)| index)
            .last()
    }

    /// Every pair of children whose bounds intersect, as `(lower, higher)`
    /// index pairs.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let placed: Vec<(usize, Rect)> = self.placed().collect();
        let mut pairs = Vec::new();
        for (i, (a_index, a)) in placed.iter().enumerate() {
            for (b_index, b) in &placed[i + 1..] {
                if a.intersects(b) {
                    pairs.push((*a_index, *b_index));
                }
            }
        }
        pairs
    }

    /// Drop all recorded placements.
    pub fn clear(&mut self) {
        self.container_size = Size::ZERO;
        self.rects.clear();
    }
}

impl PlacementSink for LayoutSnapshot {
    fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
    }

    fn place(&mut self, index: usize, rect: Rect) {
        if index >= self.rects.len() {
            self.rects.resize(index + 1, None);
        }
        self.rects[index] = Some(rect);
    }
}
