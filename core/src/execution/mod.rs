//! Exploration execution: the engine, its state, the sample history and the
//! renderer interface it pushes updates through.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod engine;
pub mod history;
pub mod renderer;
pub mod state;

pub use self::engine::{EngineError, ExplorationEngine, TickOutcome};
pub use self::history::{DensityGrid, ExplorationHistory, SamplePoint};
pub use self::renderer::{NullRenderer, Renderer, FAST_FORWARD_COMPLETE};
pub use self::state::{EngineSnapshot, EngineState, ExplorationMode};
