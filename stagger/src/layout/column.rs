//! Column - children stacked top to bottom at the left edge.
//!
//! Every child is measured against the container's own constraints. A column
//! with bounded constraints fills them; on an unbounded axis it shrinks to
//! its content instead.

use crate::error::Result;
use crate::primitives::{Point, Size};

use super::constraints::Constraints;
use super::measure::{LayoutPolicy, Measurable, MeasuredLayout, Placeable};

/// A vertical layout policy (children flow top to bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Column;

impl Column {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutPolicy for Column {
    fn measure<M: Measurable>(&self, children: &[M], constraints: Constraints) -> Result<MeasuredLayout> {
        constraints.validate()?;

        let mut placeables: Vec<Placeable> = children
            .iter()
            .map(|child| Placeable::new(child.measure(constraints)))
            .collect();

        let mut y = 0u32;
        for placeable in &mut placeables {
            placeable.place(Point::new(0, y));
            y = y.saturating_add(placeable.height());
        }

        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            let widest = placeables.iter().map(Placeable::width).max().unwrap_or(0);
            constraints.constrain_width(widest)
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            constraints.constrain_height(y)
        };

        tracing::debug!(children = children.len(), width, height, content_height = y, "column measured");

        Ok(MeasuredLayout {
            size: Size::new(width, height),
            placeables,
            rows: Vec::new(),
        })
    }
}
