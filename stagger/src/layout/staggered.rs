//! Staggered grid - children dealt round-robin into a fixed number of rows.
//!
//! Child `i` lands in row `i % rows`. Each row grows to the right as children
//! are added and is as tall as its tallest child; rows stack top to bottom.
//! The container is as wide as its widest row and as tall as all rows
//! together, clamped into the outer constraints.
//!
//! Only the first `min(rows, children)` rows can hold a child. Rows past that
//! are empty (zero height, top edge at the total height) and are never
//! materialized, so the row count costs nothing beyond the child count.

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::primitives::{Point, Size};

use super::constraints::Constraints;
use super::measure::{LayoutPolicy, Measurable, MeasuredLayout, Placeable};

/// Row count used when none is given.
pub const DEFAULT_ROWS: usize = 3;

/// Bookkeeping for one row after measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowMetrics {
    /// Row index, `0..rows`.
    pub index: usize,
    /// Sum of the widths of the row's children.
    pub width: u32,
    /// Height of the row's tallest child (0 for an empty row).
    pub height: u32,
    /// Top edge of the row: the summed heights of all rows above it.
    pub y: u32,
    /// Indices of the children in this row, in placement order.
    pub children: Vec<usize>,
}

impl RowMetrics {
    fn empty(index: usize) -> Self {
        Self {
            index,
            width: 0,
            height: 0,
            y: 0,
            children: Vec::new(),
        }
    }
}

/// The staggered grid layout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredGrid {
    rows: usize,
}

impl StaggeredGrid {
    /// Create a grid with `rows` rows. Zero rows is rejected.
    pub fn new(rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(LayoutError::InvalidRowCount(rows));
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row that the child at `index` is assigned to.
    #[inline]
    pub fn row_for(&self, index: usize) -> usize {
        index % self.rows
    }

    /// Number of rows that hold at least one of `child_count` children.
    #[inline]
    pub fn active_rows(&self, child_count: usize) -> usize {
        self.rows.min(child_count)
    }

    /// Accumulate row widths, heights and offsets for already-measured sizes.
    /// One entry per active row; trailing empty rows are left out.
    pub fn row_metrics(&self, sizes: &[Size]) -> Vec<RowMetrics> {
        let mut rows: Vec<RowMetrics> = (0..self.active_rows(sizes.len()))
            .map(RowMetrics::empty)
            .collect();

        for (index, size) in sizes.iter().enumerate() {
            let row = &mut rows[self.row_for(index)];
            row.width = row.width.saturating_add(size.width);
            row.height = row.height.max(size.height);
            row.children.push(index);
        }

        let mut y = 0u32;
        for row in &mut rows {
            row.y = y;
            y = y.saturating_add(row.height);
        }

        rows
    }
}

impl Default for StaggeredGrid {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

impl LayoutPolicy for StaggeredGrid {
    fn measure<M: Measurable>(&self, children: &[M], constraints: Constraints) -> Result<MeasuredLayout> {
        constraints.validate()?;

        // First pass: measure every child against the outer envelope.
        let mut placeables: Vec<Placeable> = children
            .iter()
            .map(|child| Placeable::new(child.measure(constraints)))
            .collect();
        let sizes: Vec<Size> = placeables.iter().map(Placeable::size).collect();
        let rows = self.row_metrics(&sizes);

        let width = rows
            .iter()
            .map(|row| row.width)
            .max()
            .map_or(constraints.min_width, |widest| constraints.constrain_width(widest));
        let height = constraints.constrain_height(
            rows.iter().fold(0u32, |total, row| total.saturating_add(row.height)),
        );

        // Second pass: left to right within each row, in input order.
        let mut row_x = vec![0u32; rows.len()];
        for (index, placeable) in placeables.iter_mut().enumerate() {
            let row = self.row_for(index);
            placeable.place(Point::new(row_x[row], rows[row].y));
            row_x[row] = row_x[row].saturating_add(placeable.width());
        }

        tracing::debug!(
            children = children.len(),
            rows = self.rows,
            width,
            height,
            "staggered grid measured"
        );

        Ok(MeasuredLayout {
            size: Size::new(width, height),
            placeables,
            rows,
        })
    }
}
