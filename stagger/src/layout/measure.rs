//! The two-pass measure/place protocol.
//!
//! A container hands each child a [`Constraints`] envelope and gets back a
//! [`Placeable`] of fixed size. Once every child is measured the container
//! picks its own size and assigns each placeable a position. Containers
//! implement [`LayoutPolicy`]; children implement [`Measurable`].

use crate::error::Result;
use crate::layout_snapshot::PlacementSink;
use crate::primitives::{Point, Rect, Size};

use super::constraints::Constraints;
use super::staggered::RowMetrics;

/// A child element before its size is determined.
///
/// Measurement must be pure: the same constraints always yield the same size.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Size;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

/// A fixed-size leaf, coerced into whatever envelope it is measured against.
impl Measurable for Size {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(*self)
    }
}

/// A measured child with a position assigned once per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeable {
    size: Size,
    position: Option<Point>,
}

impl Placeable {
    pub fn new(size: Size) -> Self {
        Self { size, position: None }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Assign the position. Placing twice in one pass is a layout bug.
    pub fn place(&mut self, position: Point) {
        debug_assert!(self.position.is_none(), "placeable placed twice in one pass");
        self.position = Some(position);
    }

    /// Final bounds, once placed.
    pub fn rect(&self) -> Option<Rect> {
        self.position.map(|origin| Rect::from_origin_size(origin, self.size))
    }
}

/// Result of a layout pass: the container size and every child, placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredLayout {
    /// Container size, already clamped into the outer constraints.
    pub size: Size,
    /// One placeable per child, in input order.
    pub placeables: Vec<Placeable>,
    /// Per-row bookkeeping for rows holding at least one child (empty for
    /// layouts without rows).
    pub rows: Vec<RowMetrics>,
}

impl MeasuredLayout {
    /// Number of children laid out.
    pub fn len(&self) -> usize {
        self.placeables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeables.is_empty()
    }

    /// Bounds of every placed child, in input order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.placeables.iter().filter_map(Placeable::rect)
    }

    /// Replay the result into a placement sink: the container size first,
    /// then each child in input order.
    pub fn place_into<S: PlacementSink + ?Sized>(&self, sink: &mut S) {
        sink.set_container_size(self.size);
        for (index, placeable) in self.placeables.iter().enumerate() {
            if let Some(rect) = placeable.rect() {
                sink.place(index, rect);
            }
        }
    }

    /// Shift every placed child and every row's top edge by `offset`, e.g.
    /// to account for padding around the container's content box.
    pub fn translate(mut self, offset: Point) -> Self {
        for placeable in &mut self.placeables {
            placeable.position = placeable.position.map(|position| position + offset);
        }
        for row in &mut self.rows {
            row.y = row.y.saturating_add(offset.y);
        }
        self
    }
}

/// A measure-then-place algorithm over a list of children.
pub trait LayoutPolicy {
    /// Measure `children` against `constraints` and place them.
    ///
    /// Fails only on caller-contract violations (inverted constraints).
    fn measure<M: Measurable>(&self, children: &[M], constraints: Constraints) -> Result<MeasuredLayout>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaggeredGrid;

    #[test]
    fn test_fixed_size_is_coerced_into_constraints() {
        let leaf = Size::new(500, 2);
        let c = Constraints::new(0, 100, 10, 50).unwrap();
        assert_eq!(leaf.measure(c), Size::new(100, 10));
        assert_eq!(leaf.measure(Constraints::UNBOUNDED), leaf);
    }

    #[test]
    fn test_boxed_and_borrowed_measurables() {
        let boxed: Vec<Box<dyn Measurable>> = vec![Box::new(Size::new(3, 4))];
        assert_eq!(boxed[0].measure(Constraints::UNBOUNDED), Size::new(3, 4));

        let leaf = Size::new(7, 8);
        let borrowed = &leaf;
        assert_eq!(borrowed.measure(Constraints::UNBOUNDED), Size::new(7, 8));
    }

    #[test]
    fn test_placeable_rect_after_place() {
        let mut p = Placeable::new(Size::new(10, 5));
        assert!(!p.is_placed());
        assert_eq!(p.rect(), None);

        p.place(Point::new(3, 4));
        assert_eq!(p.rect(), Some(Rect::new(3, 4, 10, 5)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "placed twice")]
    fn test_double_place_is_caught_in_debug() {
        let mut p = Placeable::new(Size::new(1, 1));
        p.place(Point::ORIGIN);
        p.place(Point::ORIGIN);
    }

    #[test]
    fn test_translate_moves_only_placed_children() {
        let mut placed = Placeable::new(Size::new(2, 2));
        placed.place(Point::new(1, 1));
        let layout = MeasuredLayout {
            size: Size::new(10, 10),
            placeables: vec![placed, Placeable::new(Size::new(1, 1))],
            rows: Vec::new(),
        };

        let moved = layout.translate(Point::new(8, 8));
        assert_eq!(moved.placeables[0].position(), Some(Point::new(9, 9)));
        assert_eq!(moved.placeables[1].position(), None);
        assert_eq!(moved.rects().count(), 1);
    }

    #[test]
    fn test_translate_keeps_rows_aligned_with_children() {
        let children = [Size::new(10, 5), Size::new(20, 8), Size::new(30, 3)];
        let layout = StaggeredGrid::new(2)
            .unwrap()
            .measure(&children, Constraints::UNBOUNDED)
            .unwrap()
            .translate(Point::new(4, 6));

        assert_eq!(layout.rows[0].y, 6);
        assert_eq!(layout.rows[1].y, 11);
        for row in &layout.rows {
            for &index in &row.children {
                assert_eq!(layout.placeables[index].position().map(|p| p.y), Some(row.y));
            }
        }
    }
}
