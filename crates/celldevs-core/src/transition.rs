//! Transition selection.
//!
//! Which of the four DEVS branches a cell takes in a cycle depends only
//! on whether it is imminent and whether its input bag is non-empty.

use std::fmt;
use std::ops::AddAssign;

/// The transition a cell fires in one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Not imminent and no input: state and clock untouched.
    None,
    /// Imminent with an empty input bag.
    Internal,
    /// Not imminent with pending input.
    External,
    /// Imminent with pending input.
    Confluent,
}

impl Transition {
    /// Select the branch for a cell.
    #[inline]
    pub fn select(imminent: bool, has_input: bool) -> Self {
        match (imminent, has_input) {
            (true, false) => Self::Internal,
            (true, true) => Self::Confluent,
            (false, true) => Self::External,
            (false, false) => Self::None,
        }
    }

    /// Whether this branch mutates the cell and reschedules it.
    #[inline]
    pub fn fires(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Internal => "internal",
            Self::External => "external",
            Self::Confluent => "confluent",
        };
        f.write_str(s)
    }
}

/// Tally of fired transitions, by branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    /// Internal transitions fired.
    pub internal: u64,
    /// External transitions fired.
    pub external: u64,
    /// Confluent transitions fired.
    pub confluent: u64,
}

impl TransitionCounts {
    /// Count one transition. `Transition::None` is not counted.
    pub fn record(&mut self, t: Transition) {
        match t {
            Transition::Internal => self.internal += 1,
            Transition::External => self.external += 1,
            Transition::Confluent => self.confluent += 1,
            Transition::None => {}
        }
    }

    /// Total fired transitions.
    pub fn total(&self) -> u64 {
        self.internal + self.external + self.confluent
    }
}

impl AddAssign for TransitionCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.internal += rhs.internal;
        self.external += rhs.external;
        self.confluent += rhs.confluent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_covers_all_four_cases() {
        assert_eq!(Transition::select(true, false), Transition::Internal);
        assert_eq!(Transition::select(true, true), Transition::Confluent);
        assert_eq!(Transition::select(false, true), Transition::External);
        assert_eq!(Transition::select(false, false), Transition::None);
    }

    #[test]
    fn only_none_does_not_fire() {
        assert!(!Transition::None.fires());
        assert!(Transition::Internal.fires());
        assert!(Transition::External.fires());
        assert!(Transition::Confluent.fires());
    }

    #[test]
    fn counts_skip_none_and_accumulate() {
        let mut a = TransitionCounts::default();
        a.record(Transition::Internal);
        a.record(Transition::None);
        a.record(Transition::Confluent);
        let mut b = TransitionCounts::default();
        b.record(Transition::External);
        a += b;
        assert_eq!(a.internal, 1);
        assert_eq!(a.external, 1);
        assert_eq!(a.confluent, 1);
        assert_eq!(a.total(), 3);
    }
}
