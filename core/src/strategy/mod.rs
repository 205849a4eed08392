//! Search strategy abstraction
//!
//! A strategy is a pluggable policy that picks the helicopter's next target
//! from the current engine state and the exploration history. Strategies own
//! their cursors (grid index, spiral angle) and nothing else: they never
//! touch the history or the agent position themselves.
//!
//! The engine only ever talks to `dyn Strategy` through the
//! [`StrategyRegistry`], so new policies plug in without engine changes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Debug};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::execution::history::ExplorationHistory;
use crate::execution::state::EngineState;
use crate::landscape::Coordinate;

pub mod aerial;
pub mod descent;
pub mod grid;
pub mod registry;
pub mod spiral;

pub use self::aerial::AerialSurvey;
pub use self::descent::DirectDescent;
pub use self::grid::GridSearch;
pub use self::registry::StrategyRegistry;
pub use self::spiral::SpiralSearch;

/// Registry key identifying a strategy
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(String);

impl StrategyId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StrategyId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Strategy registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(StrategyId),

    #[error("Strategy already registered: {0}")]
    DuplicateStrategy(StrategyId),

    #[error("Strategy registry is empty")]
    EmptyRegistry,
}

/// Listing entry for strategy pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    pub id: StrategyId,
    pub name: String,
    pub description: String,
}

/// Capability shared by every search policy
pub trait Strategy: Debug + Send {
    /// Registry key, also used as the history-log label
    fn id(&self) -> StrategyId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// One-sentence description shown when the strategy is selected
    fn describe(&self) -> &'static str;

    /// Produces the next target coordinate.
    ///
    /// May advance the strategy's own cursor; must not assume it is called
    /// at any particular cadence.
    fn execute(
        &mut self,
        state: &EngineState,
        history: &ExplorationHistory,
        rng: &mut dyn RngCore,
    ) -> Coordinate;

    /// Restores the cursor to its initial value
    fn reset(&mut self) {}

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor {
            id: self.id(),
            name: self.name().to_string(),
            description: self.describe().to_string(),
        }
    }
}

/// Uniform draw from `[-half_width, half_width)`
pub(crate) fn symmetric_uniform(rng: &mut dyn RngCore, half_width: f64) -> f64 {
    use rand::Rng;

    (rng.gen::<f64>() - 0.5) * 2.0 * half_width
}
