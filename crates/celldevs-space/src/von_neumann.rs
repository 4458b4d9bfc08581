//! 2D square grid with the von Neumann (cross) neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::space::Space;
use celldevs_core::Coord;
use smallvec::SmallVec;

/// N, W, centre, E, S: row-major scan order.
const OFFSETS_5: [(i32, i32); 5] = [(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)];

/// A two-dimensional square grid coupled through the von Neumann
/// neighbourhood: the four cardinal neighbours and the cell itself.
///
/// Distance is Manhattan (L1).
#[derive(Debug, Clone)]
pub struct VonNeumann {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl VonNeumann {
    /// Create a `rows × cols` grid.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        grid2d::check_dims(rows, cols)?;
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }
}

impl Space for VonNeumann {
    fn ndim(&self) -> usize {
        2
    }

    fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    fn neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 9]> {
        grid2d::stencil(coord, self.rows, self.cols, self.edge, &OFFSETS_5)
    }

    fn distance(&self, a: &Coord, b: &Coord) -> f64 {
        match grid2d::axis_distances(a, b, self.rows, self.cols, self.edge) {
            Some((dr, dc)) => dr + dc,
            None => f64::INFINITY,
        }
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
    }

    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        grid2d::canonical_rank_2d(coord, self.rows, self.cols)
    }

    fn coord_of(&self, rank: usize) -> Option<Coord> {
        grid2d::coord_of_2d(rank, self.rows, self.cols)
    }
}
