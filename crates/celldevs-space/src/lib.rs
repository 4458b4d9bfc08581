//! Spatial topologies for Cell-DEVS simulations.
//!
//! This crate defines the [`Space`] trait, the 2D lattice backends that
//! implement it, and [`Couplings`], the flat adjacency table the root
//! coordinator routes messages along.
//!
//! # Backends
//!
//! - [`Moore`]: 3×3 neighbourhood, the cell itself included
//! - [`VonNeumann`]: cross-shaped neighbourhood, the cell itself included
//!
//! Both support [`EdgeBehavior::Absorb`] (clipped at the border) and
//! [`EdgeBehavior::Wrap`] (torus).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod couplings;
pub mod edge;
pub mod error;
mod grid2d;
pub mod moore;
pub mod space;
pub mod von_neumann;

#[cfg(test)]
pub(crate) mod compliance;

pub use couplings::Couplings;
pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use moore::Moore;
pub use space::Space;
pub use von_neumann::VonNeumann;
