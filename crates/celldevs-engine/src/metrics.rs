//! Per-cycle and per-run metrics for the root coordinator.

use celldevs_core::{Time, TransitionCounts};

/// What happened during one cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CycleMetrics {
    /// Global clock value the cycle ran at.
    pub time: Time,
    /// Cells whose next event was scheduled at `time`.
    pub imminent: usize,
    /// Transitions fired, by branch.
    pub transitions: TransitionCounts,
    /// Messages delivered into input bags.
    pub messages_routed: u64,
    /// Wall-clock time for the cycle, in microseconds.
    pub duration_us: u64,
}

/// Totals for a completed run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Cycles executed since construction.
    pub cycles: u64,
    /// Clock value at termination (`>= horizon`).
    pub final_time: Time,
    /// Transitions fired, by branch.
    pub transitions: TransitionCounts,
    /// Messages delivered into input bags.
    pub messages_routed: u64,
    /// Wall-clock time of the run call, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = CycleMetrics::default();
        assert_eq!(m.time, 0.0);
        assert_eq!(m.imminent, 0);
        assert_eq!(m.transitions.total(), 0);
        assert_eq!(m.messages_routed, 0);
        assert_eq!(m.duration_us, 0);

        let s = RunSummary::default();
        assert_eq!(s.cycles, 0);
        assert_eq!(s.transitions, TransitionCounts::default());
    }
}
