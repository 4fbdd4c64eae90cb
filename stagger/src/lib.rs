//! Stagger: a framework-agnostic measure/place layout engine.
//!
//! Stagger lays out opaque children in two passes: every child is measured
//! against a [`Constraints`] envelope, then the container decides its own size
//! and gives each measured child a position. Layouts are pure functions of
//! the children's sizes and the outer constraints.
//!
//! # Usage
//!
//! ```
//! use stagger::{Constraints, LayoutPolicy, Size, StaggeredGrid};
//!
//! let grid = StaggeredGrid::new(2)?;
//! let children = [Size::new(10, 5), Size::new(20, 8), Size::new(30, 3)];
//! let layout = grid.measure(&children, Constraints::UNBOUNDED)?;
//!
//! assert_eq!(layout.size, Size::new(40, 13));
//! # Ok::<(), stagger::LayoutError>(())
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Layout system
pub mod layout;
pub mod layout_snapshot;

// Scrolling lists
pub mod scroll_state;

pub mod demo;

pub use error::{Axis, LayoutError, Result};
pub use layout::{
    Chip, Column, Constraints, LayoutPolicy, Measurable, MeasuredLayout, Padded, Padding,
    Placeable, RowMetrics, StaggeredGrid, DEFAULT_ROWS,
};
pub use layout_snapshot::{LayoutSnapshot, PlacementSink};
pub use primitives::{Point, Rect, Size};
pub use scroll_state::ListScrollState;
