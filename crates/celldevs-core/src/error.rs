//! Error types for the Cell-DEVS kernel.
//!
//! Organized by subsystem: [`ModelError`] is raised by a cell's own
//! transition logic, [`StepError`] by the root coordinator while it
//! drives a cycle. Configuration errors live next to the engine's
//! configuration types.

use std::error::Error;
use std::fmt;

use crate::id::{CellId, Time};

/// Errors from an individual atomic model.
///
/// Returned by the transition functions of
/// [`AtomicModel`](crate::AtomicModel) and wrapped in
/// [`StepError::ModelFailed`] by the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// The transition function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The model found its local state (or an input message) invalid.
    InvalidState {
        /// Description of the offending state.
        reason: String,
    },
    /// `time_advance()` returned NaN or a negative duration.
    InvalidTimeAdvance {
        /// The value the model returned.
        value: Time,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
            Self::InvalidTimeAdvance { value } => {
                write!(f, "time advance must be non-negative, got {value}")
            }
        }
    }
}

impl Error for ModelError {}

/// Errors from the root coordinator during `step()`.
///
/// Any of these aborts the run: a skipped transition would leave every
/// downstream neighbour desynchronized in later cycles.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// A model failed during its transition.
    ModelFailed {
        /// The failing cell.
        cell: CellId,
        /// Name of the failing model.
        model: String,
        /// The underlying model error.
        reason: ModelError,
    },
    /// The global clock already reached the horizon.
    HorizonReached {
        /// Clock value at the time of the call.
        next_time: Time,
        /// The configured horizon.
        horizon: Time,
    },
    /// The run was cancelled at a clock-advance boundary.
    Cancelled {
        /// Clock value of the next cycle that would have run.
        at: Time,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelFailed {
                cell,
                model,
                reason,
            } => write!(f, "model '{model}' at cell {cell} failed: {reason}"),
            Self::HorizonReached { next_time, horizon } => write!(
                f,
                "clock {next_time} already reached horizon {horizon}"
            ),
            Self::Cancelled { at } => write!(f, "run cancelled before cycle at {at}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModelFailed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
