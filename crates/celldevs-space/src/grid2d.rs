//! Shared helpers for the 2D lattice backends (Moore, VonNeumann).

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use celldevs_core::Coord;
use smallvec::{smallvec, SmallVec};

/// Largest accepted dimension: coordinates use `i32`.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Validate lattice dimensions.
pub(crate) fn check_dims(rows: u32, cols: u32) -> Result<(), SpaceError> {
    if rows == 0 || cols == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if rows > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: MAX_DIM,
        });
    }
    if cols > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Row-major canonical ordering: `[0,0], [0,1], ..., [rows-1, cols-1]`.
pub(crate) fn canonical_ordering_2d(rows: u32, cols: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity((rows as usize) * (cols as usize));
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            out.push(smallvec![r, c]);
        }
    }
    out
}

/// Row-major rank of an in-bounds 2D coordinate.
pub(crate) fn canonical_rank_2d(coord: &Coord, rows: u32, cols: u32) -> Option<usize> {
    if coord.len() != 2 {
        return None;
    }
    let (r, c) = (coord[0], coord[1]);
    if r < 0 || r >= rows as i32 || c < 0 || c >= cols as i32 {
        return None;
    }
    Some((r as usize) * (cols as usize) + (c as usize))
}

/// Inverse of [`canonical_rank_2d`].
pub(crate) fn coord_of_2d(rank: usize, rows: u32, cols: u32) -> Option<Coord> {
    let cols = cols as usize;
    if rank >= (rows as usize) * cols {
        return None;
    }
    Some(smallvec![(rank / cols) as i32, (rank % cols) as i32])
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}

/// Per-axis distances `(rows, cols)` between two in-bounds coordinates.
///
/// `None` if either coordinate lies outside the lattice.
pub(crate) fn axis_distances(
    a: &Coord,
    b: &Coord,
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
) -> Option<(f64, f64)> {
    canonical_rank_2d(a, rows, cols)?;
    canonical_rank_2d(b, rows, cols)?;
    Some((
        axis_distance(a[0], b[0], rows, edge),
        axis_distance(a[1], b[1], cols, edge),
    ))
}

/// 1D distance along a single axis, accounting for wrap.
///
/// Both values must lie in `0..len`.
fn axis_distance(a: i32, b: i32, len: u32, edge: EdgeBehavior) -> f64 {
    let diff = (a - b).unsigned_abs();
    match edge {
        EdgeBehavior::Wrap => {
            let wrap = len - diff;
            diff.min(wrap) as f64
        }
        EdgeBehavior::Absorb => diff as f64,
    }
}

/// Apply a stencil of `(row, col)` offsets to `coord`.
///
/// Offsets are visited in the given order. Out-of-bounds cells are
/// dropped (Absorb) or wrapped (Wrap); a cell reached twice, which
/// happens when wrapping a grid narrower than the stencil, is kept only
/// at its first position.
pub(crate) fn stencil(
    coord: &Coord,
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    offsets: &[(i32, i32)],
) -> SmallVec<[Coord; 9]> {
    let mut out: SmallVec<[Coord; 9]> = SmallVec::new();
    if canonical_rank_2d(coord, rows, cols).is_none() {
        return out;
    }
    let (r, c) = (coord[0], coord[1]);
    for &(dr, dc) in offsets {
        let nr = resolve_axis(r + dr, rows, edge);
        let nc = resolve_axis(c + dc, cols, edge);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            let nb: Coord = smallvec![nr, nc];
            if !out.contains(&nb) {
                out.push(nb);
            }
        }
    }
    out
}
