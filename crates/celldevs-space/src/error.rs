//! Error types for space construction and coupling tables.

use celldevs_core::{CellId, Coord};
use std::fmt;

/// Errors arising from space construction or topology queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// A dimension exceeds what coordinates can address.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A coupling table entry is invalid.
    InvalidCoupling {
        /// The cell whose list is invalid.
        cell: CellId,
        /// The offending neighbour id.
        neighbour: CellId,
        /// What went wrong.
        reason: &'static str,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::InvalidCoupling {
                cell,
                neighbour,
                reason,
            } => write!(f, "invalid coupling {cell} -> {neighbour}: {reason}"),
        }
    }
}

impl std::error::Error for SpaceError {}
