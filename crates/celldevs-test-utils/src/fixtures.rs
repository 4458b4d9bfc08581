//! Reusable model fixtures.
//!
//! - [`ScriptedModel`]: follows a fixed schedule of time advances and
//!   logs every transition it fires.
//! - [`FailingModel`]: fails deterministically after N transitions.
//! - [`PassiveModel`]: never schedules an event; reacts only to input.

use celldevs_core::{AtomicModel, ModelError, Time, Transition};

/// One transition observed by a [`ScriptedModel`].
#[derive(Clone, Debug, PartialEq)]
pub struct FiredTransition {
    pub kind: Transition,
    pub elapsed: Time,
    pub inputs: Vec<u32>,
}

/// Emits its id when imminent and logs every transition.
///
/// `time_advance()` returns `schedule[n]` after `n` transitions, repeating
/// the last entry once the schedule is exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedModel {
    pub id: u32,
    pub schedule: Vec<Time>,
    pub emits: bool,
    pub log: Vec<FiredTransition>,
}

impl ScriptedModel {
    /// A model with a constant time advance.
    pub fn new(id: u32, ta: Time) -> Self {
        Self::with_schedule(id, vec![ta])
    }

    /// A model following `schedule`. Panics if `schedule` is empty.
    pub fn with_schedule(id: u32, schedule: Vec<Time>) -> Self {
        assert!(!schedule.is_empty(), "schedule must have at least one entry");
        Self {
            id,
            schedule,
            emits: true,
            log: Vec::new(),
        }
    }

    /// Stop emitting output.
    pub fn silent(mut self) -> Self {
        self.emits = false;
        self
    }

    fn record(&mut self, kind: Transition, elapsed: Time, inputs: &[u32]) {
        let mut inputs = inputs.to_vec();
        inputs.sort_unstable();
        self.log.push(FiredTransition {
            kind,
            elapsed,
            inputs,
        });
    }
}

impl AtomicModel for ScriptedModel {
    type Message = u32;

    fn name(&self) -> &str {
        "scripted"
    }

    fn time_advance(&self) -> Time {
        let n = self.log.len().min(self.schedule.len() - 1);
        self.schedule[n]
    }

    fn output(&self) -> Option<u32> {
        self.emits.then_some(self.id)
    }

    fn internal_transition(&mut self) -> Result<(), ModelError> {
        self.record(Transition::Internal, 0.0, &[]);
        Ok(())
    }

    fn external_transition(&mut self, elapsed: Time, inputs: &[u32]) -> Result<(), ModelError> {
        self.record(Transition::External, elapsed, inputs);
        Ok(())
    }

    fn confluent_transition(&mut self, elapsed: Time, inputs: &[u32]) -> Result<(), ModelError> {
        self.record(Transition::Confluent, elapsed, inputs);
        Ok(())
    }
}

/// Fails every transition after the first `succeed_count`.
#[derive(Clone, Debug)]
pub struct FailingModel {
    ta: Time,
    succeed_count: usize,
    fired: usize,
}

impl FailingModel {
    pub fn new(ta: Time, succeed_count: usize) -> Self {
        Self {
            ta,
            succeed_count,
            fired: 0,
        }
    }

    pub fn fired(&self) -> usize {
        self.fired
    }

    fn tick(&mut self) -> Result<(), ModelError> {
        if self.fired >= self.succeed_count {
            return Err(ModelError::ExecutionFailed {
                reason: format!("failing after {} transitions", self.succeed_count),
            });
        }
        self.fired += 1;
        Ok(())
    }
}

impl AtomicModel for FailingModel {
    type Message = ();

    fn name(&self) -> &str {
        "failing"
    }

    fn time_advance(&self) -> Time {
        self.ta
    }

    fn output(&self) -> Option<()> {
        Some(())
    }

    fn internal_transition(&mut self) -> Result<(), ModelError> {
        self.tick()
    }

    fn external_transition(&mut self, _elapsed: Time, _inputs: &[()]) -> Result<(), ModelError> {
        self.tick()
    }

    fn confluent_transition(&mut self, _elapsed: Time, _inputs: &[()]) -> Result<(), ModelError> {
        self.tick()
    }
}

/// Infinite time advance; counts the messages it receives.
#[derive(Clone, Debug, Default)]
pub struct PassiveModel {
    pub received: u64,
}

impl AtomicModel for PassiveModel {
    type Message = u32;

    fn name(&self) -> &str {
        "passive"
    }

    fn time_advance(&self) -> Time {
        Time::INFINITY
    }

    fn output(&self) -> Option<u32> {
        None
    }

    fn internal_transition(&mut self) -> Result<(), ModelError> {
        Ok(())
    }

    fn external_transition(&mut self, _elapsed: Time, inputs: &[u32]) -> Result<(), ModelError> {
        self.received += inputs.len() as u64;
        Ok(())
    }
}
