//! The reference epidemic scenario.
//!
//! A `side × side` Moore grid clipped at the border. Every cell starts
//! fully susceptible with population weight 100, except cell
//! `side * side / 2` (the centre for odd sides), which starts with 10%
//! infected.

use celldevs_core::Time;
use celldevs_engine::{ConfigError, SimConfig};
use celldevs_space::{Couplings, Moore};

use crate::cell::SirCell;
use crate::params::SirParams;
use crate::state::SirState;

/// Population weight of every reference cell.
pub const POPULATION: f64 = 100.0;

/// Initial state of the seeded cell.
pub const SEED_STATE: SirState = SirState::new(POPULATION, 0.9, 0.1, 0.0);

/// Initial models for `n_cells` cells, the one at `n_cells / 2` seeded.
pub fn reference_models(n_cells: usize, params: SirParams) -> Vec<SirCell> {
    let seed = n_cells / 2;
    (0..n_cells)
        .map(|id| {
            let state = if id == seed {
                SEED_STATE
            } else {
                SirState::susceptible(POPULATION)
            };
            SirCell::new(state, params)
        })
        .collect()
}

/// The full reference configuration, and the grid it was built on.
///
/// The grid is returned so results can be labelled with coordinates.
///
/// ```
/// use celldevs_engine::RootCoordinator;
/// use celldevs_sir::{reference_config, SirParams};
///
/// let (config, _grid) = reference_config(3, 5.0, SirParams::default()).unwrap();
/// let mut root = RootCoordinator::new(config).unwrap();
/// root.run().unwrap();
/// let centre = root.models().nth(4).unwrap().state().i;
/// assert!(root.models().all(|m| m.state().i > 0.0 && m.state().i <= centre));
/// ```
pub fn reference_config(
    side: u32,
    horizon: Time,
    params: SirParams,
) -> Result<(SimConfig<SirCell>, Moore), ConfigError> {
    let grid = Moore::square(side)?;
    let couplings = Couplings::from_space(&grid)?;
    let models = reference_models(couplings.cell_count(), params);
    Ok((
        SimConfig {
            models,
            couplings,
            horizon,
        },
        grid,
    ))
}
