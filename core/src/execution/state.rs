//! Engine state and read-only snapshots
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::execution::history::SamplePoint;
use crate::landscape::Coordinate;
use crate::strategy::StrategyId;

/// Animation mode of the engine.
///
/// Stepping and FastForward are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExplorationMode {
    /// Nothing moves
    #[default]
    Idle,

    /// Continuous interpolated flight toward the current target
    Stepping,

    /// Batched jumps without per-frame interpolation
    FastForward,
}

impl fmt::Display for ExplorationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Stepping => "stepping",
            Self::FastForward => "fast-forward",
        };
        f.write_str(label)
    }
}

/// The single mutable record owned by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Position at the end of the last completed tick
    pub current_position: Coordinate,

    /// Where the helicopter is heading
    pub target_position: Coordinate,

    pub mode: ExplorationMode,

    pub active_strategy: StrategyId,

    /// Fast-forward steps still queued; zero outside fast-forward
    pub steps_remaining: usize,
}

impl EngineState {
    /// Idle at the origin with `active_strategy` selected
    pub fn new(active_strategy: StrategyId) -> Self {
        Self {
            current_position: Coordinate::ORIGIN,
            target_position: Coordinate::ORIGIN,
            mode: ExplorationMode::Idle,
            active_strategy,
            steps_remaining: 0,
        }
    }

    pub fn is_stepping(&self) -> bool {
        self.mode == ExplorationMode::Stepping
    }

    pub fn is_fast_forwarding(&self) -> bool {
        self.mode == ExplorationMode::FastForward
    }

    /// Distance left to the current target
    pub fn distance_to_target(&self) -> f64 {
        self.current_position.distance_to(&self.target_position)
    }
}

/// Read-only view handed to the UI for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current_position: Coordinate,
    pub current_loss: f64,
    pub target_position: Coordinate,
    pub mode: ExplorationMode,
    pub active_strategy: StrategyId,
    pub steps_remaining: usize,
    pub speed: f64,
    pub jump_size: f64,
    pub heatmap_visible: bool,
    pub samples: usize,
    pub segments: usize,
    pub best: Option<SamplePoint>,
}
