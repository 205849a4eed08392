//! Grid search: a row-major sweep over a fixed 5×5 lattice

use rand::RngCore;

use super::{Strategy, StrategyId};
use crate::execution::history::ExplorationHistory;
use crate::execution::state::EngineState;
use crate::landscape::Coordinate;

/// Cells per axis
pub const GRID_SIZE: usize = 5;
/// Lower corner of the lattice on both axes
pub const GRID_ORIGIN: f64 = -15.0;
/// Distance between neighbouring lattice points
pub const GRID_STEP: f64 = 30.0 / GRID_SIZE as f64;
/// Targets per full sweep
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Systematic sweep driven by a monotonically increasing cursor
#[derive(Debug, Default, Clone)]
pub struct GridSearch {
    index: u64,
}

impl GridSearch {
    pub const ID: &'static str = "grid";

    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made since the last reset
    pub fn cursor(&self) -> u64 {
        self.index
    }

    /// Lattice point for a cursor value
    pub fn cell(index: u64) -> Coordinate {
        let cell = (index % GRID_CELLS as u64) as usize;
        let i = cell % GRID_SIZE;
        let j = (cell / GRID_SIZE) % GRID_SIZE;
        Coordinate::new(GRID_ORIGIN + i as f64 * GRID_STEP, GRID_ORIGIN + j as f64 * GRID_STEP)
    }
}

impl Strategy for GridSearch {
    fn id(&self) -> StrategyId {
        StrategyId::new(Self::ID)
    }

    fn name(&self) -> &'static str {
        "Grid Search"
    }

    fn describe(&self) -> &'static str {
        "Systematically sample points in a grid pattern across the landscape."
    }

    fn execute(
        &mut self,
        _state: &EngineState,
        _history: &ExplorationHistory,
        _rng: &mut dyn RngCore,
    ) -> Coordinate {
        let target = Self::cell(self.index);
        self.index = self.index.wrapping_add(1);
        target
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
