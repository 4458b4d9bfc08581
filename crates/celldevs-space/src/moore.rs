//! 2D square grid with the Moore (3×3) neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::space::Space;
use celldevs_core::Coord;
use smallvec::SmallVec;

/// The 3×3 kernel in row-major scan order, centre included.
const OFFSETS_9: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A two-dimensional square grid coupled through the Moore neighbourhood.
///
/// Each cell has coordinate `[row, col]` and is coupled to every cell at
/// Chebyshev distance at most 1, itself included. Neighbours are listed
/// by row offset, then column offset, each from −1 to +1.
///
/// With [`EdgeBehavior::Absorb`] corner cells have 4 coupled cells, edge
/// cells 6 and interior cells 9.
#[derive(Debug, Clone)]
pub struct Moore {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Moore {
    /// Create a `rows × cols` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        grid2d::check_dims(rows, cols)?;
        Ok(Self { rows, cols, edge })
    }

    /// Create a `side × side` grid clipped at the border.
    pub fn square(side: u32) -> Result<Self, SpaceError> {
        Self::new(side, side, EdgeBehavior::Absorb)
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

impl Space for Moore {
    fn ndim(&self) -> usize {
        2
    }

    fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    fn neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 9]> {
        grid2d::stencil(coord, self.rows, self.cols, self.edge, &OFFSETS_9)
    }

    fn distance(&self, a: &Coord, b: &Coord) -> f64 {
        // Chebyshev (L-inf) distance, the graph geodesic for 8-connectivity.
        match grid2d::axis_distances(a, b, self.rows, self.cols, self.edge) {
            Some((dr, dc)) => dr.max(dc),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn c(r: i32, col: i32) -> Coord {
        smallvec![r, col]
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_absorb_interior() {
        let s = Moore::square(5).unwrap();
        let n = s.neighbours(&c(2, 2));
        assert_eq!(n.len(), 9);
        assert!(n.contains(&c(2, 2)));
    }

    #[test]
    fn neighbours_absorb_corner() {
        let s = Moore::square(5).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 4);
        assert_eq!(n.as_slice(), &[c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn neighbours_absorb_edge() {
        let s = Moore::square(5).unwrap();
        assert_eq!(s.neighbours(&c(0, 2)).len(), 6);
        assert_eq!(s.neighbours(&c(2, 4)).len(), 6);
    }

    #[test]
    fn neighbours_scan_row_then_column() {
        let s = Moore::square(3).unwrap();
        let n = s.neighbours(&c(1, 1));
        let expected: Vec<Coord> = (0..3)
            .flat_map(|r| (0..3).map(move |col| c(r, col)))
            .collect();
        assert_eq!(n.to_vec(), expected);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let s = Moore::new(5, 5, EdgeBehavior::Wrap).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 9);
        assert!(n.contains(&c(4, 4)));
        assert!(n.contains(&c(4, 0)));
        assert!(n.contains(&c(0, 4)));
    }

    #[test]
    fn neighbours_outside_grid_is_empty() {
        let s = Moore::square(3).unwrap();
        assert!(s.neighbours(&c(3, 0)).is_empty());
        assert!(s.neighbours(&c(-1, 0)).is_empty());
    }

    // ── Distance tests ──────────────────────────────────────────

    #[test]
    fn distance_chebyshev_absorb() {
        let s = Moore::square(10).unwrap();
        assert_eq!(s.distance(&c(0, 0), &c(1, 1)), 1.0);
        assert_eq!(s.distance(&c(0, 0), &c(3, 4)), 4.0);
    }

    #[test]
    fn distance_chebyshev_wrap() {
        let s = Moore::new(10, 10, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.distance(&c(0, 0), &c(9, 9)), 1.0);
    }

    #[test]
    fn distance_to_outside_cell_is_infinite() {
        let s = Moore::new(3, 3, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.distance(&c(0, 0), &c(7, 0)), f64::INFINITY);
        assert_eq!(s.distance(&c(-1, 2), &c(0, 0)), f64::INFINITY);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert!(matches!(
            Moore::new(0, 5, EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Moore::new(big, 5, EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Moore::new(5, big, EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_is_its_own_only_neighbour() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Wrap] {
            let s = Moore::new(1, 1, edge).unwrap();
            assert_eq!(s.neighbours(&c(0, 0)).to_vec(), vec![c(0, 0)]);
        }
    }

    #[test]
    fn wrap_on_two_by_two_has_no_duplicates() {
        let s = Moore::new(2, 2, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.neighbours(&c(0, 0)).len(), 4);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_absorb() {
        let s = Moore::new(8, 8, EdgeBehavior::Absorb).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_wrap() {
        let s = Moore::new(8, 8, EdgeBehavior::Wrap).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_rectangular() {
        let s = Moore::new(3, 7, EdgeBehavior::Absorb).unwrap();
        compliance::run_full_compliance(&s);
    }

    proptest! {
        #[test]
        fn neighbours_within_chebyshev_one(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0i32..12,
            col in 0i32..12,
        ) {
            let s = Moore::new(rows, cols, EdgeBehavior::Absorb).unwrap();
            let r = r % rows as i32;
            let col = col % cols as i32;
            let origin = c(r, col);
            for nb in s.neighbours(&origin) {
                prop_assert!(s.distance(&origin, &nb) <= 1.0);
            }
        }
    }
}
