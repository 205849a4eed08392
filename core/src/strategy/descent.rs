//! Direct descent: return to the best point seen so far and jitter locally

use rand::RngCore;

use super::{symmetric_uniform, Strategy, StrategyId};
use crate::execution::history::ExplorationHistory;
use crate::execution::state::EngineState;
use crate::landscape::Coordinate;

/// Half-width of the local jitter on each axis
pub const JITTER: f64 = 1.0;

#[derive(Debug, Default, Clone)]
pub struct DirectDescent;

impl DirectDescent {
    pub const ID: &'static str = "direct";

    pub fn new() -> Self {
        Self
    }

    /// Lowest-loss coordinate among the current position and the history.
    ///
    /// The current position wins ties; later history entries only replace
    /// the incumbent when strictly better.
    pub fn best_known(state: &EngineState, history: &ExplorationHistory) -> Coordinate {
        let mut best = state.current_position;
        let mut best_loss = best.loss();

        for sample in history.iter() {
            if sample.loss < best_loss {
                best_loss = sample.loss;
                best = sample.coordinate();
            }
        }

        best
    }
}

impl Strategy for DirectDescent {
    fn id(&self) -> StrategyId {
        StrategyId::new(Self::ID)
    }

    fn name(&self) -> &'static str {
        "Direct Descent"
    }

    fn describe(&self) -> &'static str {
        "Drop directly to the lowest point found, then fine-tune locally."
    }

    fn execute(
        &mut self,
        state: &EngineState,
        history: &ExplorationHistory,
        rng: &mut dyn RngCore,
    ) -> Coordinate {
        let best = Self::best_known(state, history);
        Coordinate::new(
            best.x + symmetric_uniform(rng, JITTER),
            best.z + symmetric_uniform(rng, JITTER),
        )
    }
}
