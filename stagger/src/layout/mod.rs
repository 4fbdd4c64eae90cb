//! Layout system for Stagger.
//!
//! Two-pass, constraint-based layout:
//!
//! ```text
//! children + Constraints -> measure() each child -> container size -> place() each child
//! ```
//!
//! Every pass is a pure function of the children's sizes and the outer
//! constraints, so re-running it with the same inputs yields the same result.

pub mod column;
pub mod constraints;
pub mod elements;
pub mod length;
pub mod measure;
pub mod staggered;

pub use column::Column;
pub use constraints::Constraints;
pub use elements::{Chip, Padded};
pub use length::{Padding, CHAR_WIDTH, LINE_HEIGHT};
pub use measure::{LayoutPolicy, Measurable, MeasuredLayout, Placeable};
pub use staggered::{RowMetrics, StaggeredGrid, DEFAULT_ROWS};
