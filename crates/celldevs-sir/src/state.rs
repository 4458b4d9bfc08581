//! Per-cell epidemic state.

use std::fmt;

use celldevs_core::General;

/// Population weight and SIR fractions of one cell.
///
/// `s + i + r` stays at 1 up to rounding. The state is also the message a
/// cell publishes to its neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirState {
    /// Population weight.
    pub p: f64,
    /// Susceptible fraction.
    pub s: f64,
    /// Infected fraction.
    pub i: f64,
    /// Recovered fraction.
    pub r: f64,
}

impl SirState {
    /// Build a state from its four components.
    pub const fn new(p: f64, s: f64, i: f64, r: f64) -> Self {
        Self { p, s, i, r }
    }

    /// A fully susceptible population of weight `p`.
    pub const fn susceptible(p: f64) -> Self {
        Self::new(p, 1.0, 0.0, 0.0)
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.s.is_finite() && self.i.is_finite() && self.r.is_finite()
    }
}

/// Renders as `<p;s;i;r>`, each component with six significant digits.
impl fmt::Display for SirState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{};{};{};{}>",
            General(self.p),
            General(self.s),
            General(self.i),
            General(self.r)
        )
    }
}
