//! Layout constraints for constraint-based layout.
//!
//! Constraints flow down from a container to its children, specifying the
//! min/max bounds that a child can occupy. A child answers with a single
//! [`Size`] inside those bounds; the container then decides where it goes.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, LayoutError, Result};
use crate::primitives::Size;

use super::length::Padding;

/// Min/max bounding envelope for width and height.
///
/// `min <= max` on both axes is a caller contract. Values built through
/// [`Constraints::new`] are checked; values assembled field by field should be
/// passed through [`Constraints::validate`] before use. Layout entry points
/// validate their outer constraints and reject inverted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Constraints {
    /// The unbounded maximum.
    pub const INFINITY: u32 = u32::MAX;

    /// Unbounded constraints (infinite max, zero min).
    pub const UNBOUNDED: Self = Self {
        min_width: 0,
        max_width: Self::INFINITY,
        min_height: 0,
        max_height: Self::INFINITY,
    };

    /// Create checked constraints.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Result<Self> {
        let constraints = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Create tight constraints (exact size required).
    #[inline]
    pub fn tight(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create loose constraints with maximum bounds.
    #[inline]
    pub fn loose(max_width: u32, max_height: u32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Constrained width, unbounded height.
    #[inline]
    pub fn with_max_width(max_width: u32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height: Self::INFINITY,
        }
    }

    /// Reject envelopes whose minimum exceeds their maximum.
    pub fn validate(&self) -> Result<()> {
        if self.min_width > self.max_width {
            return Err(LayoutError::InvalidConstraints {
                axis: Axis::Horizontal,
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.min_height > self.max_height {
            return Err(LayoutError::InvalidConstraints {
                axis: Axis::Vertical,
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }

    /// Clamp a width into `[min_width, max_width]`.
    #[inline]
    pub fn constrain_width(&self, width: u32) -> u32 {
        debug_assert!(self.min_width <= self.max_width, "inverted width constraints");
        width.max(self.min_width).min(self.max_width)
    }

    /// Clamp a height into `[min_height, max_height]`.
    #[inline]
    pub fn constrain_height(&self, height: u32) -> u32 {
        debug_assert!(self.min_height <= self.max_height, "inverted height constraints");
        height.max(self.min_height).min(self.max_height)
    }

    /// Constrain a size to these bounds.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: self.constrain_width(size.width),
            height: self.constrain_height(size.height),
        }
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Whether these are tight constraints (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Drop the minimums, keeping the maximums.
    #[inline]
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            ..*self
        }
    }

    /// Shrink constraints by padding. Unbounded maximums stay unbounded.
    #[inline]
    pub fn deflate(&self, padding: &Padding) -> Self {
        let shrink = |value: u32, by: u32| {
            if value == Self::INFINITY {
                value
            } else {
                value.saturating_sub(by)
            }
        };
        Self {
            min_width: self.min_width.saturating_sub(padding.horizontal()),
            max_width: shrink(self.max_width, padding.horizontal()),
            min_height: self.min_height.saturating_sub(padding.vertical()),
            max_height: shrink(self.max_height, padding.vertical()),
        }
    }

    /// Get the biggest size that satisfies these constraints. Unbounded axes
    /// report zero.
    #[inline]
    pub fn biggest(&self) -> Size {
        Size {
            width: if self.has_bounded_width() { self.max_width } else { 0 },
            height: if self.has_bounded_height() { self.max_height } else { 0 },
        }
    }

    /// Get the smallest size that satisfies these constraints.
    #[inline]
    pub fn smallest(&self) -> Size {
        Size {
            width: self.min_width,
            height: self.min_height,
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_constraints() {
        let c = Constraints::tight(100, 50);
        assert!(c.is_tight());
        assert_eq!(c.min_width, 100);
        assert_eq!(c.max_width, 100);
        assert_eq!(c.min_height, 50);
        assert_eq!(c.max_height, 50);
    }

    #[test]
    fn test_loose_constraints() {
        let c = Constraints::loose(100, 50);
        assert!(!c.is_tight());
        assert_eq!(c.min_width, 0);
        assert_eq!(c.max_width, 100);
    }

    #[test]
    fn test_new_rejects_inverted_width() {
        let err = Constraints::new(20, 10, 0, 5).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidConstraints { axis: Axis::Horizontal, min: 20, max: 10 }
        );
    }

    #[test]
    fn test_new_rejects_inverted_height() {
        let err = Constraints::new(0, 10, 9, 5).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConstraints { axis: Axis::Vertical, .. }));
        assert_eq!(err.to_string(), "invalid constraints: min height 9 exceeds max height 5");
    }

    #[test]
    fn test_constrain() {
        let c = Constraints::new(10, 100, 5, 50).unwrap();

        assert_eq!(c.constrain(Size::new(50, 25)), Size::new(50, 25));
        assert_eq!(c.constrain(Size::new(200, 100)), Size::new(100, 50));
        assert_eq!(c.constrain(Size::ZERO), Size::new(10, 5));
    }

    #[test]
    fn test_deflate() {
        let c = Constraints::tight(100, 50);
        let deflated = c.deflate(&Padding::all(10));

        assert_eq!(deflated.max_width, 80);
        assert_eq!(deflated.max_height, 30);
        assert_eq!(deflated.min_width, 80);
    }

    #[test]
    fn test_deflate_keeps_unbounded_and_never_underflows() {
        let deflated = Constraints::UNBOUNDED.deflate(&Padding::all(10));
        assert_eq!(deflated.max_width, Constraints::INFINITY);
        assert_eq!(deflated.min_width, 0);

        let tiny = Constraints::tight(4, 4).deflate(&Padding::all(10));
        assert_eq!(tiny, Constraints::tight(0, 0));
    }

    #[test]
    fn test_bounded_checks() {
        let unbounded = Constraints::UNBOUNDED;
        assert!(!unbounded.has_bounded_width());
        assert!(!unbounded.has_bounded_height());
        assert_eq!(unbounded.biggest(), Size::ZERO);

        let bounded = Constraints::loose(100, 50);
        assert!(bounded.has_bounded_width());
        assert!(bounded.has_bounded_height());
        assert_eq!(bounded.biggest(), Size::new(100, 50));
    }

    #[test]
    fn test_loosen() {
        let c = Constraints::new(10, 100, 5, 50).unwrap();
        let loose = c.loosen();
        assert_eq!(loose, Constraints::loose(100, 50));
        assert_eq!(loose.smallest(), Size::ZERO);
        assert_eq!(loose.constrain(Size::new(3, 2)), Size::new(3, 2));

        let unbounded = Constraints {
            max_width: Constraints::INFINITY,
            ..Constraints::tight(7, 7)
        }
        .loosen();
        assert!(!unbounded.has_bounded_width());
        assert_eq!(unbounded.max_height, 7);
    }

    #[test]
    fn test_smallest() {
        let c = Constraints::new(10, 100, 5, Constraints::INFINITY).unwrap();
        assert_eq!(c.smallest(), Size::new(10, 5));
        assert_eq!(c.constrain(c.smallest()), c.smallest());
        assert_eq!(Constraints::UNBOUNDED.smallest(), Size::ZERO);
        assert_eq!(Constraints::tight(4, 9).smallest(), Size::new(4, 9));
    }

    #[test]
    fn test_deserialize_fills_missing_fields_unbounded() {
        let c: Constraints = serde_json::from_str(r#"{"max_width": 300}"#).unwrap();
        assert_eq!(c.min_width, 0);
        assert_eq!(c.max_width, 300);
        assert_eq!(c.max_height, Constraints::INFINITY);
    }
}
