//! Aerial survey: large random jumps across the landscape

use rand::RngCore;

use super::{symmetric_uniform, Strategy, StrategyId};
use crate::execution::history::ExplorationHistory;
use crate::execution::state::EngineState;
use crate::landscape::Coordinate;

/// Half-width of the surveyed square
pub const SURVEY_HALF_WIDTH: f64 = 15.0;

/// Stateless uniform sampler over `[-15, 15)²`
#[derive(Debug, Default, Clone)]
pub struct AerialSurvey;

impl AerialSurvey {
    pub const ID: &'static str = "aerial";

    pub fn new() -> Self {
        Self
    }
}

impl Strategy for AerialSurvey {
    fn id(&self) -> StrategyId {
        StrategyId::new(Self::ID)
    }

    fn name(&self) -> &'static str {
        "Aerial Survey"
    }

    fn describe(&self) -> &'static str {
        "Make large jumps across parameter space to identify global terrain features."
    }

    fn execute(
        &mut self,
        _state: &EngineState,
        _history: &ExplorationHistory,
        rng: &mut dyn RngCore,
    ) -> Coordinate {
        let x = symmetric_uniform(rng, SURVEY_HALF_WIDTH);
        let z = symmetric_uniform(rng, SURVEY_HALF_WIDTH);
        Coordinate::new(x, z)
    }
}
