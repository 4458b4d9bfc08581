//! Spatial edge (boundary) behavior for lattice backends.

/// How a lattice space handles neighbours at its edges.
///
/// # Examples
///
/// ```
/// use celldevs_space::{EdgeBehavior, Moore, Space};
///
/// // Absorb: the corner sees itself plus 3 neighbours, the interior 9.
/// let absorb = Moore::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// let corner: celldevs_core::Coord = vec![0i32, 0].into();
/// let interior: celldevs_core::Coord = vec![1i32, 1].into();
/// assert_eq!(absorb.neighbours(&corner).len(), 4);
/// assert_eq!(absorb.neighbours(&interior).len(), 9);
///
/// // Wrap: every cell has the full kernel (torus).
/// let wrap = Moore::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(&corner).len(), 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
}
