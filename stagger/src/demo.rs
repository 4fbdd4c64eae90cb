//! Topic chip demo: a staggered grid of padded chips inside a padded box.

use crate::error::Result;
use crate::layout::{Chip, Constraints, LayoutPolicy, MeasuredLayout, Padded, Padding, StaggeredGrid};
use crate::primitives::{Point, Size};

/// Padding around the grid and around each chip.
pub const DEMO_PADDING: u32 = 8;

const TOPICS: [&str; 19] = [
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

/// Labels of the demo chips, in layout order.
pub fn topics() -> &'static [&'static str] {
    &TOPICS
}

/// The demo children: one chip per topic, each wrapped in [`DEMO_PADDING`].
pub fn demo_chips() -> Vec<Padded<Chip>> {
    TOPICS
        .iter()
        .map(|topic| Padded::new(Chip::new(*topic), Padding::all(DEMO_PADDING)))
        .collect()
}

/// Lay out the demo chips in `rows` rows.
///
/// The grid is measured inside the container's padding; the returned
/// placements are in container coordinates and the returned size includes
/// the padding.
pub fn demo_layout(rows: usize, constraints: Constraints) -> Result<MeasuredLayout> {
    constraints.validate()?;
    let grid = StaggeredGrid::new(rows)?;
    let padding = Padding::all(DEMO_PADDING);

    let inner = grid.measure(&demo_chips(), constraints.deflate(&padding))?;
    let size = constraints.constrain(Size::new(
        inner.size.width.saturating_add(padding.horizontal()),
        inner.size.height.saturating_add(padding.vertical()),
    ));

    let mut layout = inner.translate(Point::new(padding.left, padding.top));
    layout.size = size;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn test_demo_places_every_topic() {
        let layout = demo_layout(3, Constraints::UNBOUNDED).unwrap();
        assert_eq!(layout.len(), topics().len());
        assert_eq!(layout.rows.len(), 3);
        assert_eq!(layout.rows[0].children.len(), 7);
        assert_eq!(layout.rows[2].children.len(), 6);
    }

    #[test]
    fn test_demo_offsets_by_padding() {
        let layout = demo_layout(3, Constraints::UNBOUNDED).unwrap();
        let first = layout.placeables[0].position().unwrap();
        assert_eq!(first, Point::new(DEMO_PADDING, DEMO_PADDING));

        // Each chip is 26 tall plus 16 of its own padding: three rows of 42.
        assert_eq!(layout.size.height, 3 * 42 + 2 * DEMO_PADDING);
    }

    #[test]
    fn test_demo_rows_line_up_with_their_chips() {
        let layout = demo_layout(3, Constraints::UNBOUNDED).unwrap();
        assert_eq!(layout.rows[0].y, DEMO_PADDING);
        for row in &layout.rows {
            for &index in &row.children {
                let position = layout.placeables[index].position().unwrap();
                assert_eq!(position.y, row.y, "chip {index} in row {}", row.index);
            }
        }
    }

    #[test]
    fn test_demo_rejects_zero_rows() {
        assert_eq!(
            demo_layout(0, Constraints::UNBOUNDED),
            Err(LayoutError::InvalidRowCount(0))
        );
    }
}
