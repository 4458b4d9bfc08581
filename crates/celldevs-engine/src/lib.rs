//! Simulation engine for Cell-DEVS models.
//!
//! Provides the [`RootCoordinator`], which owns every cell of a model
//! and drives them through barrier-separated cycles (output, routing,
//! transition, clock advance) until the simulation horizon is reached,
//! together with its configuration, per-cycle metrics, cooperative
//! cancellation, and a CSV result sink.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod coordinator;
pub mod metrics;
pub mod report;

pub use cancel::CancelToken;
pub use config::{ConfigError, SimConfig};
pub use coordinator::RootCoordinator;
pub use metrics::{CycleMetrics, RunSummary};
pub use report::{CsvLogger, LOG_HEADER};
