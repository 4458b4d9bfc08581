//! Space trait compliance test helpers.
//!
//! These functions verify that a Space implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules.

use crate::couplings::Couplings;
use crate::space::Space;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0.0` for all cells.
pub fn assert_distance_reflexive(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        let d = space.distance(&coord, &coord);
        assert!(
            d.abs() < f64::EPSILON,
            "distance({coord:?}, {coord:?}) = {d}, expected 0.0"
        );
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &dyn Space) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert!(
                (dab - dba).abs() < f64::EPSILON,
                "distance({a:?}, {b:?}) = {dab} != distance({b:?}, {a:?}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(space: &dyn Space) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            for c in &cells {
                let dac = space.distance(a, c);
                let dab = space.distance(a, b);
                let dbc = space.distance(b, c);
                assert!(
                    dac <= dab + dbc + f64::EPSILON,
                    "triangle inequality violated: d({a:?},{c:?})={dac} > d({a:?},{b:?})={dab} + d({b:?},{c:?})={dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(&coord) {
            let nb_neighbours = space.neighbours(&nb);
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every cell is coupled to itself exactly once and to no
/// other cell twice.
pub fn assert_neighbours_include_self_once(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        let nbs = space.neighbours(&coord);
        let selves = nbs.iter().filter(|nb| **nb == coord).count();
        assert_eq!(selves, 1, "{coord:?} appears {selves} times in its own neighbourhood");
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbour of {coord:?}");
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(space: &dyn Space) {
    let a = space.canonical_ordering();
    let b = space.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords
/// and that `canonical_rank` / `coord_of` agree with it.
pub fn assert_canonical_ordering_complete(space: &dyn Space) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (rank, coord) in ordering.iter().enumerate() {
        assert_eq!(space.canonical_rank(coord), Some(rank));
        assert_eq!(space.coord_of(rank).as_ref(), Some(coord));
    }
}

/// Assert that the coupling table mirrors `neighbours()` entry by entry.
pub fn assert_couplings_match_neighbours(space: &dyn Space) {
    let couplings = Couplings::from_space(space).expect("couplings should build");
    assert_eq!(couplings.cell_count(), space.cell_count());
    for (rank, coord) in space.canonical_ordering().iter().enumerate() {
        let expected: Vec<usize> = space
            .neighbours(coord)
            .iter()
            .map(|nb| space.canonical_rank(nb).expect("neighbour in space"))
            .collect();
        let actual: Vec<usize> = couplings
            .neighbours(rank.into())
            .iter()
            .map(|id| id.index())
            .collect();
        assert_eq!(actual, expected, "coupling mismatch at {coord:?}");
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance(space: &dyn Space) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_distance_triangle_inequality(space);
    assert_neighbours_symmetric(space);
    assert_neighbours_include_self_once(space);
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
    assert_couplings_match_neighbours(space);
}
