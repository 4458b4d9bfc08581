//! Command-line runner for the reference SIR scenario.
//!
//! `celldevs-sir GRID_DIMENSIONS SIMULATION_TIME` simulates a
//! `GRID_DIMENSIONS × GRID_DIMENSIONS` grid until `SIMULATION_TIME`,
//! writes the final state of every cell to
//! `celldevs_sir_sequential_log.csv`, and prints the elapsed wall-clock
//! seconds to stdout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod logging;
pub mod run;

pub use args::{parse_args, usage, ArgError, Command, RunConfig, DEFAULT_OUTPUT};
pub use logging::init_tracing;
pub use run::{run, RunError, RunReport};
