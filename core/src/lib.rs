//! ROTOR core: the loss landscape exploration engine
//!
//! A helicopter flies over a synthetic loss surface, steered by pluggable
//! search strategies. This crate owns everything with real logic in it:
//!
//! - [`landscape`]: the scalar loss field
//! - [`strategy`]: the strategy trait, the four built-in policies and the
//!   ordered registry
//! - [`execution`]: the tick-driven state machine, the exploration history
//!   with its density estimate, and the renderer interface
//! - [`path`]: lofted, improvement-colored path segments
//! - [`config`]: JSON-loadable engine settings
//!
//! Rendering, cameras and input handling live outside the crate; they see
//! the engine only through [`execution::Renderer`] and the command methods
//! on [`execution::ExplorationEngine`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod config;
pub mod execution;
pub mod landscape;
pub mod path;
pub mod strategy;

pub use crate::config::{ConfigError, ExplorerConfig, HeatmapConfig};
pub use crate::execution::{
    DensityGrid, EngineError, EngineSnapshot, EngineState, ExplorationEngine, ExplorationHistory,
    ExplorationMode, NullRenderer, Renderer, SamplePoint, TickOutcome, FAST_FORWARD_COMPLETE,
};
pub use crate::landscape::{loss, Coordinate};
pub use crate::path::{build_segment, Color, PathSegment, Point3};
pub use crate::strategy::{Strategy, StrategyError, StrategyId, StrategyRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
