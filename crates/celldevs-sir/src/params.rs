//! Epidemic parameters.
//!
//! Constructed via the builder pattern: [`SirParams::builder`].

use celldevs_core::Time;

/// Rates of the SIR update law.
///
/// Per transition, with `pressure` the population-weighted mean infected
/// fraction of the received states:
///
/// ```text
/// new_infected  = min(s, virulence * s * pressure)
/// new_recovered = recovery * i
/// ```
///
/// # Construction
///
/// ```
/// use celldevs_sir::SirParams;
///
/// let params = SirParams::builder()
///     .virulence(0.4)
///     .recovery(0.2)
///     .build()
///     .unwrap();
/// assert_eq!(params.time_step(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirParams {
    virulence: f64,
    recovery: f64,
    time_step: Time,
}

impl SirParams {
    /// Default infection rate.
    pub const DEFAULT_VIRULENCE: f64 = 0.6;
    /// Default recovery rate.
    pub const DEFAULT_RECOVERY: f64 = 0.1;
    /// Default interval between updates.
    pub const DEFAULT_TIME_STEP: Time = 1.0;

    /// Create a new builder, starting from the defaults.
    pub fn builder() -> SirParamsBuilder {
        SirParamsBuilder {
            virulence: Self::DEFAULT_VIRULENCE,
            recovery: Self::DEFAULT_RECOVERY,
            time_step: Self::DEFAULT_TIME_STEP,
        }
    }

    /// Fraction of susceptibles infected per unit of pressure.
    pub fn virulence(&self) -> f64 {
        self.virulence
    }

    /// Fraction of infected that recover per update.
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    /// Time advance of every cell.
    pub fn time_step(&self) -> Time {
        self.time_step
    }
}

impl Default for SirParams {
    fn default() -> Self {
        Self {
            virulence: Self::DEFAULT_VIRULENCE,
            recovery: Self::DEFAULT_RECOVERY,
            time_step: Self::DEFAULT_TIME_STEP,
        }
    }
}

/// Builder for [`SirParams`].
#[derive(Clone, Debug)]
pub struct SirParamsBuilder {
    virulence: f64,
    recovery: f64,
    time_step: Time,
}

impl SirParamsBuilder {
    /// Set the infection rate (default 0.6). Must be in `[0, 1]`.
    pub fn virulence(mut self, v: f64) -> Self {
        self.virulence = v;
        self
    }

    /// Set the recovery rate (default 0.1). Must be in `[0, 1]`.
    pub fn recovery(mut self, r: f64) -> Self {
        self.recovery = r;
        self
    }

    /// Set the update interval (default 1.0). Must be finite and > 0.
    pub fn time_step(mut self, dt: Time) -> Self {
        self.time_step = dt;
        self
    }

    /// Build the parameters, validating all ranges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `virulence` is outside `[0, 1]` or NaN
    /// - `recovery` is outside `[0, 1]` or NaN
    /// - `time_step` is not finite and strictly positive
    pub fn build(self) -> Result<SirParams, String> {
        if !(0.0..=1.0).contains(&self.virulence) {
            return Err(format!(
                "virulence must be in [0, 1], got {}",
                self.virulence
            ));
        }
        if !(0.0..=1.0).contains(&self.recovery) {
            return Err(format!("recovery must be in [0, 1], got {}", self.recovery));
        }
        if !(self.time_step > 0.0) || !self.time_step.is_finite() {
            return Err(format!(
                "time_step must be finite and > 0, got {}",
                self.time_step
            ));
        }
        Ok(SirParams {
            virulence: self.virulence,
            recovery: self.recovery,
            time_step: self.time_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(SirParams::builder().build().unwrap(), SirParams::default());
    }

    #[test]
    fn builder_rejects_out_of_range_virulence() {
        let err = SirParams::builder().virulence(1.5).build().unwrap_err();
        assert!(err.contains("virulence"));
        let err = SirParams::builder().virulence(f64::NAN).build().unwrap_err();
        assert!(err.contains("virulence"));
    }

    #[test]
    fn builder_rejects_negative_recovery() {
        let err = SirParams::builder().recovery(-0.1).build().unwrap_err();
        assert!(err.contains("recovery"));
    }

    #[test]
    fn builder_rejects_bad_time_step() {
        for dt in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = SirParams::builder().time_step(dt).build().unwrap_err();
            assert!(err.contains("time_step"), "{dt}: {err}");
        }
    }

    #[test]
    fn boundary_rates_are_accepted() {
        let p = SirParams::builder()
            .virulence(0.0)
            .recovery(1.0)
            .time_step(0.25)
            .build()
            .unwrap();
        assert_eq!(p.virulence(), 0.0);
        assert_eq!(p.recovery(), 1.0);
        assert_eq!(p.time_step(), 0.25);
    }
}
