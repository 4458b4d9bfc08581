//! Strongly-typed identifiers, the [`Coord`] type alias, and [`Time`].

use smallvec::SmallVec;
use std::fmt;

/// Identifies a cell within a simulation.
///
/// `CellId(n)` is the n-th entry of the coordinator's model array, which
/// is also the row-major position of the cell in its grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    /// The raw array index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Simulation time.
///
/// Event times are compared with exact equality: two cells are
/// co-scheduled only when their timestamps are bit-identical. Models
/// keep their timestamps aligned by deriving them from a common base
/// plus exactly representable offsets.
pub type Time = f64;

/// A coordinate in simulation space.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for spaces up to
/// 4 dimensions. The 2D lattices store `[row, col]`.
pub type Coord = SmallVec<[i32; 4]>;
