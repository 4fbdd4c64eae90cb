//! Layout error types.

use std::fmt;

use thiserror::Error;

/// Which axis a constraint violation was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Caller-contract violations rejected before a layout pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid constraints: min {axis} {min} exceeds max {axis} {max}")]
    InvalidConstraints { axis: Axis, min: u32, max: u32 },

    #[error("invalid row count: {0} (must be at least 1)")]
    InvalidRowCount(usize),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
