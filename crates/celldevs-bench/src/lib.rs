//! Benchmark profiles for the Cell-DEVS simulation kernel.
//!
//! - [`reference_profile`]: 100x100 SIR grid (10K cells)
//! - [`stress_profile`]: 316x316 SIR grid (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use celldevs_engine::{ConfigError, SimConfig};
use celldevs_sir::{reference_config, SirCell, SirParams};
use celldevs_space::Moore;

/// Side of the reference grid.
pub const REFERENCE_SIDE: u32 = 100;

/// Side of the stress grid.
pub const STRESS_SIDE: u32 = 316;

/// The reference SIR scenario on a 100x100 grid, default parameters.
pub fn reference_profile(horizon: f64) -> Result<(SimConfig<SirCell>, Moore), ConfigError> {
    reference_config(REFERENCE_SIDE, horizon, SirParams::default())
}

/// Same scenario at ~10x the cell count.
pub fn stress_profile(horizon: f64) -> Result<(SimConfig<SirCell>, Moore), ConfigError> {
    reference_config(STRESS_SIDE, horizon, SirParams::default())
}
