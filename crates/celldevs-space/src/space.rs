//! The core `Space` trait.

use celldevs_core::Coord;
use smallvec::SmallVec;

/// Spatial topology of a cellular model.
///
/// A space enumerates its cells in a canonical order (the order of the
/// coordinator's model array) and defines, for every cell, the cells it
/// is coupled to. Backends are immutable once built.
///
/// # Neighbourhood contract
///
/// `neighbours(c)` is the set of cells whose output `c` receives, in a
/// deterministic backend-defined scan order. It includes `c` itself,
/// and contains each cell at most once.
pub trait Space: Send + Sync + 'static {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Total number of cells in the space.
    fn cell_count(&self) -> usize;

    /// Cells coupled to `coord`, `coord` itself included.
    ///
    /// Returns an empty list for a coordinate outside the space.
    fn neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 9]>;

    /// Graph-geodesic distance between two cells.
    ///
    /// Returns `f64::INFINITY` if either coordinate is outside the space.
    fn distance(&self, a: &Coord, b: &Coord) -> f64;

    /// All cells in deterministic canonical order.
    fn canonical_ordering(&self) -> Vec<Coord>;

    /// Position of a coordinate in the canonical ordering.
    ///
    /// Default implementation performs a linear search; backends should
    /// override with O(1) arithmetic when possible.
    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        self.canonical_ordering().iter().position(|c| c == coord)
    }

    /// Coordinate at a canonical position.
    fn coord_of(&self, rank: usize) -> Option<Coord> {
        self.canonical_ordering().into_iter().nth(rank)
    }
}
