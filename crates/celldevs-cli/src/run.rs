//! One reference run: build, simulate, log.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::{Duration, Instant};

use celldevs_core::StepError;
use celldevs_engine::{ConfigError, CsvLogger, RootCoordinator, RunSummary};
use celldevs_sir::reference_config;
use tracing::info;

use crate::args::RunConfig;

/// Errors from [`run`].
#[derive(Debug)]
pub enum RunError {
    /// The scenario could not be built.
    Config(ConfigError),
    /// The simulation aborted.
    Step(StepError),
    /// The log could not be written.
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Step(e) => write!(f, "simulation: {e}"),
            Self::Io(e) => write!(f, "writing log: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Coordinator totals.
    pub summary: RunSummary,
    /// Data rows written to the log.
    pub rows: u64,
    /// Wall-clock time of simulation and logging.
    pub elapsed: Duration,
}

/// Simulate the reference scenario and write the result log.
///
/// Scenario construction is not timed; the clock covers the simulation
/// loop and the log.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let (sim, grid) = reference_config(config.grid_dimension, config.horizon, config.params)?;
    let mut root = RootCoordinator::new(sim)?;

    let start = Instant::now();
    let summary = root.run()?;

    let file = File::create(&config.output_path)?;
    let mut log = CsvLogger::new(BufWriter::new(file))?;
    let rows = log.write_cells(config.horizon, &grid, root.models())?;
    log.finish()?;
    let elapsed = start.elapsed();

    info!(
        path = %config.output_path.display(),
        rows,
        seconds = elapsed.as_secs_f64(),
        "log written"
    );
    Ok(RunReport {
        summary,
        rows,
        elapsed,
    })
}
