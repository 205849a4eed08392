//! Spiral search around the agent's current position
//!
//! Each call turns 45° and widens by half a unit. Once the radius would pass
//! 15 it snaps back to 2, so the emitted radius always lies in (2, 15] after
//! the first call. The spiral is centred on wherever the helicopter stands,
//! not on a fixed anchor.

use std::f64::consts::FRAC_PI_4;

use rand::RngCore;

use super::{Strategy, StrategyId};
use crate::execution::history::ExplorationHistory;
use crate::execution::state::EngineState;
use crate::landscape::Coordinate;

pub const INITIAL_RADIUS: f64 = 2.0;
pub const MAX_RADIUS: f64 = 15.0;
pub const RADIUS_STEP: f64 = 0.5;
pub const ANGLE_STEP: f64 = FRAC_PI_4;

#[derive(Debug, Clone)]
pub struct SpiralSearch {
    angle: f64,
    radius: f64,
}

impl Default for SpiralSearch {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: INITIAL_RADIUS,
        }
    }
}

impl SpiralSearch {
    pub const ID: &'static str = "spiral";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Strategy for SpiralSearch {
    fn id(&self) -> StrategyId {
        StrategyId::new(Self::ID)
    }

    fn name(&self) -> &'static str {
        "Spiral Search"
    }

    fn describe(&self) -> &'static str {
        "Spiral outward from current best position to ensure thorough local exploration."
    }

    fn execute(
        &mut self,
        state: &EngineState,
        _history: &ExplorationHistory,
        _rng: &mut dyn RngCore,
    ) -> Coordinate {
        self.angle += ANGLE_STEP;
        self.radius += RADIUS_STEP;
        if self.radius > MAX_RADIUS {
            self.radius = INITIAL_RADIUS;
        }

        let centre = state.current_position;
        Coordinate::new(
            centre.x + self.angle.cos() * self.radius,
            centre.z + self.angle.sin() * self.radius,
        )
    }

    fn reset(&mut self) {
        self.angle = 0.0;
        self.radius = INITIAL_RADIUS;
    }
}
