//! SIR epidemic cell for Cell-DEVS simulations.
//!
//! Each [`SirCell`] holds a population weight and the susceptible,
//! infected and recovered fractions of that population. Every
//! `time_step` it publishes its state and updates from the states of its
//! Moore neighbourhood: infection pressure is the population-weighted
//! mean infected fraction of the received states.
//!
//! [`scenario`] builds the reference run: a square grid of fully
//! susceptible cells with a single seeded cell in the middle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod params;
pub mod scenario;
pub mod state;

pub use cell::SirCell;
pub use params::{SirParams, SirParamsBuilder};
pub use scenario::{reference_config, reference_models};
pub use state::SirState;
