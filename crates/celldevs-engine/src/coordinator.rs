//! Root coordinator: the single-threaded Cell-DEVS simulation loop.
//!
//! [`RootCoordinator`] owns every cell and the coupling table, and runs
//! one cycle per distinct event time. Each cycle is four phases, each
//! completed for all cells before the next begins:
//!
//! 1. **Output**: imminent cells (`next_time == clock`) fill their
//!    output bag.
//! 2. **Routing**: every cell collects the output bags of its coupled
//!    cells, itself included, into its input bag.
//! 3. **Transition**: every cell fires internal, external, confluent, or
//!    no transition depending on imminence and input, reschedules, and
//!    clears its bags.
//! 4. **Clock advance**: the clock becomes the minimum `next_time`.
//!
//! The clock starts at `0.0` and the loop halts as soon as it reaches the
//! horizon. No final transition is forced at the horizon: cells keep the
//! state of the last completed cycle.

use std::time::Instant;

use celldevs_core::{
    Atomic, AtomicModel, CellId, StepError, Time, Transition, TransitionCounts,
};
use celldevs_space::Couplings;
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::config::{ConfigError, SimConfig};
use crate::metrics::{CycleMetrics, RunSummary};

// Compile-time assertion: a coordinator can be moved to a worker thread
// whenever its model can.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check<M: AtomicModel>() {
        assert_send::<RootCoordinator<M>>();
    }
};

/// Drives a population of [`AtomicModel`]s through synchronized cycles.
///
/// # Example
///
/// ```ignore
/// let mut root = RootCoordinator::new(SimConfig { models, couplings, horizon: 5.0 })?;
/// let summary = root.run()?;
/// for cell in root.cells() {
///     println!("{}", cell.model());
/// }
/// ```
pub struct RootCoordinator<M: AtomicModel> {
    cells: Vec<Atomic<M>>,
    couplings: Couplings,
    horizon: Time,
    next_time: Time,
    cycles: u64,
    transitions: TransitionCounts,
    messages_routed: u64,
    last_metrics: CycleMetrics,
    fault: Option<StepError>,
}

impl<M: AtomicModel> RootCoordinator<M> {
    /// Validate `config` and wrap every model at time zero.
    pub fn new(config: SimConfig<M>) -> Result<Self, ConfigError> {
        config.validate()?;
        let SimConfig {
            models,
            couplings,
            horizon,
        } = config;

        let cells = models
            .into_iter()
            .enumerate()
            .map(|(i, model)| {
                Atomic::new(model).map_err(|reason| ConfigError::InitialTimeAdvance {
                    cell: CellId(i),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            cells = cells.len(),
            couplings = couplings.total_entries(),
            horizon,
            "root coordinator ready"
        );

        Ok(Self {
            cells,
            couplings,
            horizon,
            next_time: 0.0,
            cycles: 0,
            transitions: TransitionCounts::default(),
            messages_routed: 0,
            last_metrics: CycleMetrics::default(),
            fault: None,
        })
    }

    /// Execute one cycle at the current clock.
    ///
    /// Returns [`StepError::HorizonReached`] if the clock is already at or
    /// past the horizon. A model fault aborts the cycle and empties every
    /// bag; the fault is sticky, and every later `step` or `run` returns
    /// it again without touching any cell.
    pub fn step(&mut self) -> Result<CycleMetrics, StepError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.is_finished() {
            return Err(StepError::HorizonReached {
                next_time: self.next_time,
                horizon: self.horizon,
            });
        }
        let cycle_start = Instant::now();
        let now = self.next_time;

        // 1. Output.
        let mut imminent = 0;
        for cell in self.cells.iter_mut() {
            if cell.is_imminent(now) {
                imminent += 1;
                cell.output();
            }
        }

        // 2. Routing. Only this cycle's output bags are populated.
        let mut routed = 0u64;
        for i in 0..self.cells.len() {
            for nb in self.couplings.neighbours(CellId(i)) {
                if let Some(message) = self.cells[nb.index()].out_bag().cloned() {
                    self.cells[i].insert_in_bag(message);
                    routed += 1;
                }
            }
        }

        // 3. Transition.
        let mut counts = TransitionCounts::default();
        for i in 0..self.cells.len() {
            let cell = &mut self.cells[i];
            let kind = Transition::select(cell.is_imminent(now), !cell.inbag_empty());
            if kind.fires() {
                if let Err(reason) = cell.fire(kind, now) {
                    let model = cell.model().name().to_string();
                    warn!(cell = i, %model, transition = %kind, time = now, error = %reason, "model failed");
                    return Err(self.abort(StepError::ModelFailed {
                        cell: CellId(i),
                        model,
                        reason,
                    }));
                }
                counts.record(kind);
            }
            cell.clear_bags();
        }

        // 4. Clock advance.
        self.next_time = self
            .cells
            .iter()
            .map(Atomic::next_time)
            .fold(Time::INFINITY, Time::min);
        debug_assert!(self.next_time >= now, "clock moved backwards");

        let metrics = CycleMetrics {
            time: now,
            imminent,
            transitions: counts,
            messages_routed: routed,
            duration_us: cycle_start.elapsed().as_micros() as u64,
        };
        self.cycles += 1;
        self.transitions += counts;
        self.messages_routed += routed;
        debug!(
            cycle = self.cycles,
            time = now,
            imminent,
            internal = counts.internal,
            external = counts.external,
            confluent = counts.confluent,
            routed,
            next_time = self.next_time,
            "cycle complete"
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Record `error` as the coordinator's fault and drop every message
    /// still in flight.
    fn abort(&mut self, error: StepError) -> StepError {
        for cell in self.cells.iter_mut() {
            cell.clear_bags();
        }
        self.fault = Some(error.clone());
        error
    }

    /// Run cycles until the clock reaches the horizon.
    pub fn run(&mut self) -> Result<RunSummary, StepError> {
        self.run_inner(None)
    }

    /// Like [`run`](Self::run), polling `cancel` between cycles.
    ///
    /// Returns [`StepError::Cancelled`] with the clock of the cycle that
    /// would have run next. All completed cycles are kept.
    pub fn run_until_cancelled(&mut self, cancel: &CancelToken) -> Result<RunSummary, StepError> {
        self.run_inner(Some(cancel))
    }

    fn run_inner(&mut self, cancel: Option<&CancelToken>) -> Result<RunSummary, StepError> {
        let run_start = Instant::now();
        let first_cycle = self.cycles;
        info!(horizon = self.horizon, start = self.next_time, "run started");

        while !self.is_finished() {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                info!(at = self.next_time, cycles = self.cycles - first_cycle, "run cancelled");
                return Err(StepError::Cancelled { at: self.next_time });
            }
            self.step()?;
        }

        let summary = RunSummary {
            cycles: self.cycles,
            final_time: self.next_time,
            transitions: self.transitions,
            messages_routed: self.messages_routed,
            total_us: run_start.elapsed().as_micros() as u64,
        };
        info!(
            cycles = summary.cycles,
            final_time = summary.final_time,
            transitions = summary.transitions.total(),
            total_us = summary.total_us,
            "run finished"
        );
        Ok(summary)
    }

    /// The model fault that aborted the run, if any.
    pub fn fault(&self) -> Option<&StepError> {
        self.fault.as_ref()
    }

    /// Whether the clock has reached the horizon.
    pub fn is_finished(&self) -> bool {
        self.next_time >= self.horizon
    }

    /// Clock value of the next cycle.
    pub fn next_time(&self) -> Time {
        self.next_time
    }

    /// The configured horizon.
    pub fn horizon(&self) -> Time {
        self.horizon
    }

    /// Cycles executed so far.
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    /// Metrics from the most recent cycle.
    pub fn last_metrics(&self) -> &CycleMetrics {
        &self.last_metrics
    }

    /// All cells, in id order.
    pub fn cells(&self) -> &[Atomic<M>] {
        &self.cells
    }

    /// One cell, or `None` if `id` is out of range.
    pub fn cell(&self, id: CellId) -> Option<&Atomic<M>> {
        self.cells.get(id.index())
    }

    /// Iterate the models, in id order.
    pub fn models(&self) -> impl ExactSizeIterator<Item = &M> + '_ {
        self.cells.iter().map(Atomic::model)
    }

    /// The coupling table.
    pub fn couplings(&self) -> &Couplings {
        &self.couplings
    }

    /// Consume the coordinator, returning the models in id order.
    pub fn into_models(self) -> Vec<M> {
        self.cells.into_iter().map(Atomic::into_model).collect()
    }
}

impl<M: AtomicModel> std::fmt::Debug for RootCoordinator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootCoordinator")
            .field("cells", &self.cells.len())
            .field("next_time", &self.next_time)
            .field("horizon", &self.horizon)
            .field("cycles", &self.cycles)
            .field("fault", &self.fault)
            .finish()
    }
}
