//! The SIR cell model.

use celldevs_core::{AtomicModel, ModelError, Time};

use crate::params::SirParams;
use crate::state::SirState;

/// One grid cell running the SIR update law.
///
/// The cell is imminent every `time_step` and publishes its state. Since
/// every cell receives its own output, an update always happens through
/// the confluent transition; the internal transition alone leaves the
/// state unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SirCell {
    state: SirState,
    params: SirParams,
}

impl SirCell {
    /// Create a cell with the given initial state.
    pub fn new(state: SirState, params: SirParams) -> Self {
        Self { state, params }
    }

    /// Current state.
    pub fn state(&self) -> &SirState {
        &self.state
    }

    /// Parameters the cell was built with.
    pub fn params(&self) -> &SirParams {
        &self.params
    }

    /// Population-weighted mean infected fraction of `inputs`.
    fn pressure(inputs: &[SirState]) -> f64 {
        let (weighted, total) = inputs
            .iter()
            .fold((0.0, 0.0), |(w, t), m| (w + m.p * m.i, t + m.p));
        if total > 0.0 {
            weighted / total
        } else {
            0.0
        }
    }
}

/// Renders the state as `<p;s;i;r>`.
impl std::fmt::Display for SirCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.state, f)
    }
}

impl AtomicModel for SirCell {
    type Message = SirState;

    fn name(&self) -> &str {
        "sir"
    }

    fn time_advance(&self) -> Time {
        self.params.time_step()
    }

    fn output(&self) -> Option<SirState> {
        Some(self.state)
    }

    fn internal_transition(&mut self) -> Result<(), ModelError> {
        Ok(())
    }

    fn external_transition(&mut self, _elapsed: Time, inputs: &[SirState]) -> Result<(), ModelError> {
        if let Some(bad) = inputs.iter().find(|m| !m.is_finite()) {
            return Err(ModelError::InvalidState {
                reason: format!("non-finite neighbour state {bad}"),
            });
        }
        let pressure = Self::pressure(inputs);
        let SirState { s, i, .. } = self.state;
        let new_infected = (self.params.virulence() * s * pressure).min(s);
        let new_recovered = self.params.recovery() * i;

        self.state.s = s - new_infected;
        self.state.i = i + new_infected - new_recovered;
        self.state.r += new_recovered;

        if !self.state.is_finite() {
            return Err(ModelError::InvalidState {
                reason: format!("update produced {}", self.state),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cell(s: f64, i: f64, r: f64) -> SirCell {
        SirCell::new(SirState::new(100.0, s, i, r), SirParams::default())
    }

    #[test]
    fn output_is_current_state_and_idempotent() {
        let c = cell(0.9, 0.1, 0.0);
        assert_eq!(c.output(), Some(*c.state()));
        assert_eq!(c.output(), c.output());
    }

    #[test]
    fn time_advance_is_time_step() {
        let c = SirCell::new(
            SirState::susceptible(1.0),
            SirParams::builder().time_step(0.5).build().unwrap(),
        );
        assert_eq!(c.time_advance(), 0.5);
    }

    #[test]
    fn internal_transition_keeps_state() {
        let mut c = cell(0.9, 0.1, 0.0);
        let before = *c.state();
        c.internal_transition().unwrap();
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn healthy_neighbourhood_stays_healthy() {
        let mut c = cell(1.0, 0.0, 0.0);
        let msgs = [SirState::susceptible(100.0); 9];
        c.external_transition(1.0, &msgs).unwrap();
        assert_eq!(*c.state(), SirState::susceptible(100.0));
    }

    #[test]
    fn infected_neighbour_infects_susceptible_cell() {
        let mut c = cell(1.0, 0.0, 0.0);
        let msgs = [SirState::susceptible(100.0), SirState::new(100.0, 0.9, 0.1, 0.0)];
        c.external_transition(1.0, &msgs).unwrap();
        // pressure 0.05, 0.6 * 1.0 * 0.05 = 0.03
        assert!((c.state().i - 0.03).abs() < 1e-12);
        assert!((c.state().s - 0.97).abs() < 1e-12);
        assert_eq!(c.state().r, 0.0);
    }

    #[test]
    fn seeded_cell_alone_follows_update_law() {
        let mut c = cell(0.9, 0.1, 0.0);
        let own = *c.state();
        c.confluent_transition(1.0, &[own]).unwrap();
        // new_inf = 0.6 * 0.9 * 0.1 = 0.054, new_rec = 0.01
        assert!((c.state().s - 0.846).abs() < 1e-12);
        assert!((c.state().i - 0.144).abs() < 1e-12);
        assert!((c.state().r - 0.01).abs() < 1e-12);
    }

    #[test]
    fn zero_population_bag_has_no_pressure() {
        let mut c = cell(1.0, 0.0, 0.0);
        c.external_transition(1.0, &[SirState::new(0.0, 0.0, 1.0, 0.0)])
            .unwrap();
        assert_eq!(c.state().i, 0.0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut c = cell(1.0, 0.0, 0.0);
        let err = c
            .external_transition(1.0, &[SirState::new(100.0, 1.0, f64::NAN, 0.0)])
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidState { .. }));
    }

    #[test]
    fn display_renders_state() {
        assert_eq!(cell(1.0, 0.0, 0.0).to_string(), "<100;1;0;0>");
    }

    proptest! {
        #[test]
        fn update_conserves_population_fractions(
            s in 0.0f64..=1.0,
            i_frac in 0.0f64..=1.0,
            neighbours in proptest::collection::vec((1.0f64..1000.0, 0.0f64..=1.0), 1..9),
        ) {
            let i = (1.0 - s) * i_frac;
            let r = 1.0 - s - i;
            let mut c = cell(s, i, r);
            let msgs: Vec<SirState> = neighbours
                .iter()
                .map(|&(p, ni)| SirState::new(p, 1.0 - ni, ni, 0.0))
                .collect();
            c.external_transition(1.0, &msgs).unwrap();
            let st = c.state();
            prop_assert!(st.s >= 0.0 && st.i >= 0.0 && st.r >= 0.0);
            prop_assert!((st.s + st.i + st.r - 1.0).abs() < 1e-9);
            prop_assert!(st.s <= s);
        }
    }
}
