//! Test utilities and mock models for Cell-DEVS development.
//!
//! Provides [`AtomicModel`](celldevs_core::AtomicModel) fixtures that
//! record what the coordinator asks of them, for engine and scenario
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailingModel, FiredTransition, PassiveModel, ScriptedModel};
