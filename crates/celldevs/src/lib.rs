//! Celldevs: a Cell-DEVS discrete-event simulation kernel.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Celldevs sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use celldevs::prelude::*;
//!
//! // A cell that forwards the largest value it has heard of.
//! struct MaxCell(u32);
//! impl AtomicModel for MaxCell {
//!     type Message = u32;
//!     fn name(&self) -> &str { "max" }
//!     fn time_advance(&self) -> Time { 1.0 }
//!     fn output(&self) -> Option<u32> { Some(self.0) }
//!     fn internal_transition(&mut self) -> Result<(), ModelError> { Ok(()) }
//!     fn external_transition(&mut self, _e: Time, inputs: &[u32]) -> Result<(), ModelError> {
//!         self.0 = inputs.iter().copied().fold(self.0, u32::max);
//!         Ok(())
//!     }
//! }
//!
//! // A 5x5 grid with one hot cell in the corner.
//! let space = Moore::square(5).unwrap();
//! let couplings = Couplings::from_space(&space).unwrap();
//! let models = (0..25).map(|id| MaxCell(if id == 0 { 7 } else { 0 })).collect();
//! let mut root = RootCoordinator::new(SimConfig { models, couplings, horizon: 10.0 }).unwrap();
//! root.run().unwrap();
//! // Four hops reach the opposite corner.
//! assert!(root.models().all(|m| m.0 == 7));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `celldevs-core` | IDs, time, errors, the atomic model contract |
//! | [`space`] | `celldevs-space` | Lattice backends and the coupling table |
//! | [`engine`] | `celldevs-engine` | Root coordinator, configuration, metrics, CSV log |
//! | [`sir`] | `celldevs-sir` | Reference SIR cell and scenario |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the atomic model contract (`celldevs-core`).
///
/// Contains [`types::AtomicModel`], the [`types::Atomic`] clock and bag
/// wrapper, and the error types models and the coordinator report.
pub use celldevs_core as types;

/// Spatial backends and couplings (`celldevs-space`).
///
/// Provides the [`space::Space`] trait, [`space::Moore`],
/// [`space::VonNeumann`] and [`space::Couplings`].
pub use celldevs_space as space;

/// The simulation engine (`celldevs-engine`).
///
/// [`engine::RootCoordinator`] drives every cell through synchronized
/// cycles; [`engine::CsvLogger`] writes the results.
pub use celldevs_engine as engine;

/// The reference epidemic model (`celldevs-sir`).
pub use celldevs_sir as sir;

/// Common imports for typical Celldevs usage.
///
/// ```rust
/// use celldevs::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use celldevs_core::{AtomicModel, CellId, Coord, Time, Transition};

    // Errors
    pub use celldevs_core::{ModelError, StepError};
    pub use celldevs_engine::ConfigError;
    pub use celldevs_space::SpaceError;

    // Space
    pub use celldevs_space::{Couplings, EdgeBehavior, Moore, Space, VonNeumann};

    // Engine
    pub use celldevs_engine::{
        CancelToken, CsvLogger, CycleMetrics, RootCoordinator, RunSummary, SimConfig,
    };

    // Reference model
    pub use celldevs_sir::{SirCell, SirParams, SirState};
}
