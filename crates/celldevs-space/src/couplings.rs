//! Flat adjacency table consumed by the root coordinator.
//!
//! [`Couplings`] stores every cell's neighbour list back to back in one
//! buffer, with per-cell offsets. It is built once before a run and never
//! mutated; the coordinator reads neighbour ids by value.

use crate::error::SpaceError;
use crate::space::Space;
use celldevs_core::CellId;
use indexmap::IndexSet;

/// Immutable, per-cell ordered lists of coupled cell ids.
///
/// `neighbours(i)` lists the cells whose output cell `i` receives, in
/// routing order, `i` itself included. No id appears twice in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Couplings {
    /// Neighbour ids of all cells, concatenated.
    ids: Vec<CellId>,
    /// `ids[offsets[i]..offsets[i + 1]]` is the list of cell `i`.
    offsets: Vec<usize>,
}

impl Couplings {
    /// Build the table from a space's neighbourhoods.
    ///
    /// Cell ids are canonical ranks: row-major positions for the 2D
    /// lattices.
    pub fn from_space(space: &dyn Space) -> Result<Self, SpaceError> {
        let n = space.cell_count();
        if n == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let mut ids = Vec::with_capacity(n * 9);
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for coord in space.canonical_ordering() {
            for nb in space.neighbours(&coord) {
                let rank = space
                    .canonical_rank(&nb)
                    .ok_or_else(|| SpaceError::CoordOutOfBounds {
                        coord: nb.clone(),
                        bounds: format!("{n} cells"),
                    })?;
                ids.push(CellId(rank));
            }
            offsets.push(ids.len());
        }
        Ok(Self { ids, offsets })
    }

    /// Build the table from explicit neighbour lists.
    ///
    /// Rejects ids outside `0..lists.len()` and repeated ids within one
    /// list. Lists are not required to contain their own cell.
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Result<Self, SpaceError> {
        let n = lists.len();
        if n == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let mut ids = Vec::with_capacity(lists.iter().map(Vec::len).sum());
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for (cell, list) in lists.into_iter().enumerate() {
            let mut seen = IndexSet::with_capacity(list.len());
            for nb in list {
                if nb >= n {
                    return Err(SpaceError::InvalidCoupling {
                        cell: CellId(cell),
                        neighbour: CellId(nb),
                        reason: "neighbour id out of range",
                    });
                }
                if !seen.insert(nb) {
                    return Err(SpaceError::InvalidCoupling {
                        cell: CellId(cell),
                        neighbour: CellId(nb),
                        reason: "duplicate neighbour",
                    });
                }
            }
            ids.extend(seen.into_iter().map(CellId));
            offsets.push(ids.len());
        }
        Ok(Self { ids, offsets })
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Coupled cells of `cell`, in routing order.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[inline]
    pub fn neighbours(&self, cell: CellId) -> &[CellId] {
        let i = cell.index();
        &self.ids[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Number of coupled cells of `cell`.
    pub fn count(&self, cell: CellId) -> usize {
        let i = cell.index();
        self.offsets[i + 1] - self.offsets[i]
    }

    /// Sum of all list lengths.
    pub fn total_entries(&self) -> usize {
        self.ids.len()
    }

    /// Iterate `(cell, neighbours)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &[CellId])> + '_ {
        (0..self.cell_count()).map(move |i| (CellId(i), self.neighbours(CellId(i))))
    }
}
