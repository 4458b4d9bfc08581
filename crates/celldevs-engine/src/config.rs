//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for a [`RootCoordinator`]. It is
//! checked once, before any simulation state is constructed.
//!
//! [`RootCoordinator`]: crate::RootCoordinator

use std::error::Error;
use std::fmt;

use celldevs_core::{AtomicModel, CellId, ModelError, Time};
use celldevs_space::{Couplings, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No models were supplied.
    NoModels,
    /// The model array and the coupling table disagree on the cell count.
    CellCountMismatch {
        /// Number of models.
        models: usize,
        /// Number of cells in the coupling table.
        couplings: usize,
    },
    /// The horizon is NaN or negative.
    InvalidHorizon {
        /// The rejected value.
        value: Time,
    },
    /// A model's initial `time_advance()` is NaN or negative.
    InitialTimeAdvance {
        /// The offending cell.
        cell: CellId,
        /// The underlying model error.
        reason: ModelError,
    },
    /// The topology could not be built.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoModels => write!(f, "no models supplied"),
            Self::CellCountMismatch { models, couplings } => write!(
                f,
                "{models} models but the coupling table has {couplings} cells"
            ),
            Self::InvalidHorizon { value } => {
                write!(f, "horizon must be non-negative, got {value}")
            }
            Self::InitialTimeAdvance { cell, reason } => {
                write!(f, "cell {cell}: {reason}")
            }
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InitialTimeAdvance { reason, .. } => Some(reason),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything a [`RootCoordinator`](crate::RootCoordinator) needs.
///
/// `models[i]` is cell `i`; `couplings.neighbours(i)` lists the cells
/// whose output it receives.
pub struct SimConfig<M: AtomicModel> {
    /// One model per cell, in cell-id order.
    pub models: Vec<M>,
    /// Static adjacency, immutable for the run.
    pub couplings: Couplings,
    /// The run stops once the global clock reaches this time.
    ///
    /// `Time::INFINITY` runs until every cell is passive.
    pub horizon: Time,
}

impl<M: AtomicModel> SimConfig<M> {
    /// Check structural invariants.
    ///
    /// Model-level checks (initial time advance) happen when the
    /// coordinator wraps each model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::NoModels);
        }
        if self.models.len() != self.couplings.cell_count() {
            return Err(ConfigError::CellCountMismatch {
                models: self.models.len(),
                couplings: self.couplings.cell_count(),
            });
        }
        // Also rejects NaN.
        if !(self.horizon >= 0.0) {
            return Err(ConfigError::InvalidHorizon {
                value: self.horizon,
            });
        }
        Ok(())
    }
}

impl<M: AtomicModel> fmt::Debug for SimConfig<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimConfig")
            .field("models", &self.models.len())
            .field("couplings", &self.couplings.total_entries())
            .field("horizon", &self.horizon)
            .finish()
    }
}
