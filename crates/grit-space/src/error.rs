//! Error types for topology construction.

use std::fmt;

/// Errors arising from neighbor-table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a topology with zero cells.
    EmptySpace,
    /// A dimension (or the cell count) exceeds the `u32` index space.
    DimensionTooLarge {
        /// Which dimension was too large.
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The largest accepted value.
        max: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
