//! Core types and traits for the Cell-DEVS simulation kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: cell
//! identifiers, simulation time, the error taxonomy, and the
//! [`AtomicModel`] contract every cell type implements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod atomic;
pub mod display;
pub mod error;
pub mod id;
pub mod transition;

pub use atomic::{Atomic, AtomicModel, Bag};
pub use display::General;
pub use error::{ModelError, StepError};
pub use id::{CellId, Coord, Time};
pub use transition::{Transition, TransitionCounts};
