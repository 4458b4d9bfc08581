//! The [`AtomicModel`] contract and the generic [`Atomic`] wrapper.
//!
//! A cell type only describes its behaviour: how long until its next
//! autonomous event, what it emits, and how it changes state. Clock
//! bookkeeping and the per-cycle message bags are handled once, by
//! [`Atomic`], for every cell type.

use smallvec::SmallVec;

use crate::error::ModelError;
use crate::id::Time;
use crate::transition::Transition;

/// Buffer of messages for one cycle.
///
/// Inline capacity of 9 covers a full Moore neighbourhood (8 neighbours
/// plus the cell itself) without touching the heap.
pub type Bag<T> = SmallVec<[T; 9]>;

/// State-transition contract every cell type implements.
///
/// # Contract
///
/// - `output()` is a pure function of the current state. The coordinator
///   calls it only on imminent cells, before any transition of the cycle.
/// - `time_advance()` is evaluated against the state left by the most
///   recent transition. It must be non-negative; `Time::INFINITY` makes
///   the cell passive.
/// - `inputs` has multiset semantics. A model whose result depends on
///   message order must reduce the bag deterministically itself.
/// - A model never sees its neighbours; the coordinator owns topology.
///
/// # Examples
///
/// A cell that counts the messages it has received:
///
/// ```
/// use celldevs_core::{AtomicModel, ModelError, Time};
///
/// struct Counter {
///     seen: u64,
/// }
///
/// impl AtomicModel for Counter {
///     type Message = u64;
///
///     fn name(&self) -> &str { "counter" }
///
///     fn time_advance(&self) -> Time { 1.0 }
///
///     fn output(&self) -> Option<u64> { Some(self.seen) }
///
///     fn internal_transition(&mut self) -> Result<(), ModelError> { Ok(()) }
///
///     fn external_transition(&mut self, _elapsed: Time, inputs: &[u64]) -> Result<(), ModelError> {
///         self.seen += inputs.len() as u64;
///         Ok(())
///     }
/// }
///
/// let c = Counter { seen: 3 };
/// assert_eq!(c.output(), Some(3));
/// ```
pub trait AtomicModel: Send + 'static {
    /// Message type exchanged between cells.
    type Message: Clone + Send;

    /// Human-readable name for error reporting and tracing.
    fn name(&self) -> &str;

    /// Duration until the next autonomous event.
    fn time_advance(&self) -> Time;

    /// The message emitted when the cell is imminent, if any.
    fn output(&self) -> Option<Self::Message>;

    /// Natural evolution when imminent with no pending input.
    fn internal_transition(&mut self) -> Result<(), ModelError>;

    /// Reaction to input when not imminent.
    ///
    /// `elapsed` is the time since this cell's last transition.
    fn external_transition(
        &mut self,
        elapsed: Time,
        inputs: &[Self::Message],
    ) -> Result<(), ModelError>;

    /// Imminent and input pending at the same time.
    ///
    /// Default: internal transition first, then the external transition
    /// with zero elapsed time. Override to define another precedence.
    fn confluent_transition(
        &mut self,
        elapsed: Time,
        inputs: &[Self::Message],
    ) -> Result<(), ModelError> {
        let _ = elapsed;
        self.internal_transition()?;
        self.external_transition(0.0, inputs)
    }
}

/// An [`AtomicModel`] together with its clock and message bags.
///
/// `next_time >= last_time` always holds. Both bags are emptied by
/// [`clear_bags`](Atomic::clear_bags) at the end of every cycle.
pub struct Atomic<M: AtomicModel> {
    model: M,
    last_time: Time,
    next_time: Time,
    in_bag: Bag<M::Message>,
    out_bag: Option<M::Message>,
}

impl<M: AtomicModel> Atomic<M> {
    /// Wrap a model at time zero.
    ///
    /// The first event is scheduled at `0 + model.time_advance()`.
    /// Returns `Err` if that time advance is NaN or negative.
    pub fn new(model: M) -> Result<Self, ModelError> {
        let ta = checked_time_advance(&model)?;
        Ok(Self {
            model,
            last_time: 0.0,
            next_time: ta,
            in_bag: SmallVec::new(),
            out_bag: None,
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Unwrap the model, discarding clock and bags.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Time of the most recent transition.
    pub fn last_time(&self) -> Time {
        self.last_time
    }

    /// Time of the next scheduled internal event.
    pub fn next_time(&self) -> Time {
        self.next_time
    }

    /// Whether the cell is scheduled exactly at `now`.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_imminent(&self, now: Time) -> bool {
        self.next_time == now
    }

    /// Run the model's output function into the output bag.
    ///
    /// Returns `true` if a message was produced.
    pub fn output(&mut self) -> bool {
        self.out_bag = self.model.output();
        self.out_bag.is_some()
    }

    /// The message produced this cycle, if any.
    pub fn out_bag(&self) -> Option<&M::Message> {
        self.out_bag.as_ref()
    }

    /// Append a routed message to the input bag.
    pub fn insert_in_bag(&mut self, message: M::Message) {
        self.in_bag.push(message);
    }

    /// Messages received this cycle.
    pub fn in_bag(&self) -> &[M::Message] {
        &self.in_bag
    }

    /// Whether no message has been received this cycle.
    pub fn inbag_empty(&self) -> bool {
        self.in_bag.is_empty()
    }

    /// Empty both bags.
    pub fn clear_bags(&mut self) {
        self.in_bag.clear();
        self.out_bag = None;
    }

    /// Fire `kind` at `now` and reschedule.
    ///
    /// On success `last_time = now` and `next_time = now + time_advance()`.
    /// `Transition::None` is a no-op. Bags are left for the caller to clear.
    pub fn fire(&mut self, kind: Transition, now: Time) -> Result<(), ModelError> {
        let elapsed = now - self.last_time;
        match kind {
            Transition::None => return Ok(()),
            Transition::Internal => self.model.internal_transition()?,
            Transition::External => self.model.external_transition(elapsed, &self.in_bag)?,
            Transition::Confluent => self.model.confluent_transition(elapsed, &self.in_bag)?,
        }
        let ta = checked_time_advance(&self.model)?;
        self.last_time = now;
        self.next_time = now + ta;
        Ok(())
    }
}

impl<M> std::fmt::Debug for Atomic<M>
where
    M: AtomicModel + std::fmt::Debug,
    M::Message: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Atomic")
            .field("model", &self.model)
            .field("last_time", &self.last_time)
            .field("next_time", &self.next_time)
            .field("in_bag", &self.in_bag)
            .field("out_bag", &self.out_bag)
            .finish()
    }
}

fn checked_time_advance<M: AtomicModel>(model: &M) -> Result<Time, ModelError> {
    let ta = model.time_advance();
    // Rejects NaN as well as negative values.
    if !(ta >= 0.0) {
        return Err(ModelError::InvalidTimeAdvance { value: ta });
    }
    Ok(ta)
}
