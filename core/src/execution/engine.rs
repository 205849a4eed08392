//! Exploration state machine
//!
//! The engine is a single session object that owns everything mutable: the
//! agent state, strategy cursors, the exploration history, the emitted path
//! segments and the RNG. A harness (render loop, timer, test) calls
//! [`ExplorationEngine::tick`] once per frame; UI commands are plain method
//! calls between ticks.
//!
//! # State Machine
//! ```text
//!            start()                    fast_forward(n)
//!   Idle ─────────────▶ Stepping ──────────────────────▶ FastForward
//!    ▲ ◀───────────────   │  ▲                                │
//!    │      stop()        │  └──────── start() ───────────────┤
//!    │                    └──────── fast_forward(n) ──────────┤
//!    └──────────────── steps_remaining == 0 ──────────────────┘
//! ```
//!
//! Stepping interpolates toward the target a fixed distance per frame and
//! asks the active strategy for a new target on arrival. FastForward jumps
//! straight to each target, in bounded batches per frame, cycling through
//! the registered strategies as it goes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, info, trace, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::{ConfigError, ExplorerConfig};
use crate::execution::history::{DensityGrid, ExplorationHistory, SamplePoint};
use crate::execution::renderer::{NullRenderer, Renderer, FAST_FORWARD_COMPLETE};
use crate::execution::state::{EngineSnapshot, EngineState, ExplorationMode};
use crate::landscape::Coordinate;
use crate::path::{build_segment, PathSegment};
use crate::strategy::{StrategyDescriptor, StrategyError, StrategyId, StrategyRegistry};

/// Per-frame distance multiplier applied to the speed slider
pub const STEP_SCALE: f64 = 0.01;
/// Jump-size slider value at which the speed is used as is
pub const NEUTRAL_JUMP_SIZE: f64 = 50.0;

/// Errors raised by engine commands.
///
/// All of them are precondition violations; the engine state is left
/// untouched when one is returned.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error("Invalid fast-forward step count: {0}")]
    InvalidStepCount(usize),

    #[error("Invalid {name}: {value}")]
    InvalidSetting { name: &'static str, value: f64 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Nothing to do
    Idle,

    /// Moved one step toward the target
    Moved { position: Coordinate, loss: f64 },

    /// Reached the target, recorded it and picked the next one
    Arrived { sample: SamplePoint, next_target: Coordinate },

    /// Ran a fast-forward batch; more steps are queued
    Batch { executed: usize, remaining: usize },

    /// Ran the final fast-forward batch and returned to idle
    FastForwardComplete { executed: usize },
}

pub struct ExplorationEngine<R: Renderer = NullRenderer> {
    state: EngineState,
    registry: StrategyRegistry,
    history: ExplorationHistory,
    segments: Vec<PathSegment>,
    heatmap: Option<DensityGrid>,
    /// Where the move currently in flight started
    move_origin: Coordinate,
    config: ExplorerConfig,
    rng: SmallRng,
    renderer: R,
}

impl ExplorationEngine<NullRenderer> {
    /// Engine with the built-in strategies and no renderer attached
    pub fn headless(config: ExplorerConfig) -> Result<Self, EngineError> {
        Self::new(config, NullRenderer)
    }
}

impl<R: Renderer> ExplorationEngine<R> {
    /// Engine with the four built-in strategies
    pub fn new(config: ExplorerConfig, renderer: R) -> Result<Self, EngineError> {
        Self::with_registry(config, StrategyRegistry::with_defaults(), renderer)
    }

    /// Engine over a caller-supplied registry
    pub fn with_registry(
        config: ExplorerConfig,
        registry: StrategyRegistry,
        renderer: R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if registry.is_empty() {
            return Err(StrategyError::EmptyRegistry.into());
        }

        let initial = StrategyId::new(&config.initial_strategy);
        if !registry.contains(&initial) {
            return Err(StrategyError::UnknownStrategy(initial).into());
        }

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        debug!(
            "Exploration engine ready: {} strategies, starting with {}",
            registry.len(),
            initial
        );

        Ok(Self {
            state: EngineState::new(initial),
            registry,
            history: ExplorationHistory::new(),
            segments: Vec::new(),
            heatmap: None,
            move_origin: Coordinate::ORIGIN,
            config,
            rng,
            renderer,
        })
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &ExplorationHistory {
        &self.history
    }

    /// Segments emitted since the last reset, oldest first
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Latest heatmap, if one is displayed
    pub fn heatmap(&self) -> Option<&DensityGrid> {
        self.heatmap.as_ref()
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn strategy_descriptors(&self) -> Vec<StrategyDescriptor> {
        self.registry.descriptors()
    }

    /// Description text for the strategy picker
    pub fn strategy_description(&self, id: &str) -> Result<&'static str, EngineError> {
        Ok(self.registry.get(&StrategyId::new(id))?.describe())
    }

    /// Read-only view for display
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_position: self.state.current_position,
            current_loss: self.state.current_position.loss(),
            target_position: self.state.target_position,
            mode: self.state.mode,
            active_strategy: self.state.active_strategy.clone(),
            steps_remaining: self.state.steps_remaining,
            speed: self.config.speed,
            jump_size: self.config.jump_size,
            heatmap_visible: self.config.show_heatmap,
            samples: self.history.len(),
            segments: self.segments.len(),
            best: self.history.best().cloned(),
        }
    }

    /// Distance covered per stepping frame
    pub fn step_length(&self) -> f64 {
        self.config.speed * STEP_SCALE * (self.config.jump_size / NEUTRAL_JUMP_SIZE)
    }

    /// Makes `id` the active strategy without touching any cursor
    pub fn select_strategy(&mut self, id: &str) -> Result<(), EngineError> {
        let id = StrategyId::new(id);
        if !self.registry.contains(&id) {
            return Err(StrategyError::UnknownStrategy(id).into());
        }
        debug!("Strategy {} -> {}", self.state.active_strategy, id);
        self.state.active_strategy = id;
        Ok(())
    }

    /// Begins continuous exploration.
    ///
    /// On the transition into stepping the active strategy is asked for a
    /// first target. A running fast-forward is cancelled.
    pub fn start(&mut self) {
        if self.state.is_stepping() {
            return;
        }
        if self.state.is_fast_forwarding() {
            debug!(
                "Cancelling fast-forward with {} steps left",
                self.state.steps_remaining
            );
            self.state.steps_remaining = 0;
        }

        self.state.mode = ExplorationMode::Stepping;
        let target = self.plan_next_target();
        debug!("Exploration started toward {}", target);
    }

    /// Halts continuous exploration; fast-forward runs are unaffected
    pub fn stop(&mut self) {
        if self.state.is_stepping() {
            self.state.mode = ExplorationMode::Idle;
            debug!("Exploration stopped at {}", self.state.current_position);
        }
    }

    /// Start/stop button
    pub fn toggle_exploration(&mut self) -> ExplorationMode {
        if self.state.is_stepping() {
            self.stop();
        } else {
            self.start();
        }
        self.state.mode
    }

    /// Queues `count` batched steps, cancelling continuous exploration
    pub fn fast_forward(&mut self, count: usize) -> Result<(), EngineError> {
        if count == 0 {
            return Err(EngineError::InvalidStepCount(count));
        }
        self.state.mode = ExplorationMode::FastForward;
        self.state.steps_remaining = count;
        debug!("Fast-forwarding {} steps", count);
        Ok(())
    }

    /// Fast-forward by the configured default step count
    pub fn fast_forward_default(&mut self) -> Result<(), EngineError> {
        self.fast_forward(self.config.fast_forward_steps)
    }

    pub fn set_speed(&mut self, value: f64) -> Result<(), EngineError> {
        self.config.speed = check_setting("speed", value)?;
        Ok(())
    }

    pub fn set_jump_size(&mut self, value: f64) -> Result<(), EngineError> {
        self.config.jump_size = check_setting("jump size", value)?;
        Ok(())
    }

    pub fn set_heatmap_visible(&mut self, visible: bool) {
        self.config.show_heatmap = visible;
        self.refresh_heatmap();
    }

    /// Returns to a fresh session at the origin.
    ///
    /// Clears history, segments and heatmap and rewinds every strategy
    /// cursor. The active strategy and slider settings are kept.
    pub fn reset(&mut self) {
        self.state.current_position = Coordinate::ORIGIN;
        self.state.target_position = Coordinate::ORIGIN;
        self.state.mode = ExplorationMode::Idle;
        self.state.steps_remaining = 0;
        self.move_origin = Coordinate::ORIGIN;

        self.history.reset();
        self.segments.clear();
        self.heatmap = None;
        self.registry.reset_all();

        self.renderer.on_reset();
        self.renderer.on_heatmap_update(None);
        self.renderer
            .on_position_update(Coordinate::ORIGIN, Coordinate::ORIGIN.loss());
        info!("Exploration session reset");
    }

    /// Advances the engine by one animation frame
    pub fn tick(&mut self) -> TickOutcome {
        match self.state.mode {
            ExplorationMode::Idle => TickOutcome::Idle,
            ExplorationMode::Stepping => self.step_toward_target(),
            ExplorationMode::FastForward => self.run_fast_forward_batch(),
        }
    }

    fn step_toward_target(&mut self) -> TickOutcome {
        let distance = self.state.distance_to_target();
        if distance <= self.config.arrival_threshold {
            return self.arrive();
        }

        let step = distance.min(self.step_length());
        let current = self.state.current_position;
        let target = self.state.target_position;
        let position = Coordinate::new(
            current.x + (target.x - current.x) / distance * step,
            current.z + (target.z - current.z) / distance * step,
        );
        self.state.current_position = position;

        let loss = position.loss();
        trace!("Moved to {} (loss {:.3}, {:.3} to go)", position, loss, distance - step);
        self.renderer.on_position_update(position, loss);
        TickOutcome::Moved { position, loss }
    }

    fn arrive(&mut self) -> TickOutcome {
        let position = self.state.current_position;
        let sample = SamplePoint::at(position, self.state.active_strategy.clone());
        self.history.record_sample(sample.clone());

        let segment = build_segment(self.move_origin, position, None);
        self.renderer.on_segment_added(&segment);
        self.segments.push(segment);

        self.renderer
            .on_history_entry(sample.strategy.as_str(), position, sample.loss);
        self.refresh_heatmap();

        let next_target = self.plan_next_target();
        debug!(
            "{} reached {} (loss {:.3}); next target {}",
            sample.strategy, position, sample.loss, next_target
        );
        TickOutcome::Arrived { sample, next_target }
    }

    fn run_fast_forward_batch(&mut self) -> TickOutcome {
        let mut executed = 0;
        while executed < self.config.fast_forward_batch && self.state.steps_remaining > 0 {
            let previous = self.state.current_position;
            let target = self.plan_next_target();
            self.state.current_position = target;

            self.history
                .record_sample(SamplePoint::at(target, self.state.active_strategy.clone()));

            let segment = build_segment(previous, target, None);
            self.renderer.on_segment_added(&segment);
            self.segments.push(segment);

            if self.state.steps_remaining % self.config.strategy_cycle_interval == 0 {
                self.cycle_strategy();
            }
            self.state.steps_remaining -= 1;
            executed += 1;
        }

        let position = self.state.current_position;
        let loss = position.loss();
        self.renderer.on_position_update(position, loss);
        self.refresh_heatmap();

        if self.state.steps_remaining > 0 {
            trace!(
                "Fast-forward batch of {} done, {} left",
                executed,
                self.state.steps_remaining
            );
            return TickOutcome::Batch {
                executed,
                remaining: self.state.steps_remaining,
            };
        }

        self.state.mode = ExplorationMode::Idle;
        self.renderer
            .on_history_entry(FAST_FORWARD_COMPLETE, position, loss);
        info!("Fast-forward complete at {} (loss {:.3})", position, loss);
        TickOutcome::FastForwardComplete { executed }
    }

    /// Asks the active strategy for a target and makes it the move in flight
    fn plan_next_target(&mut self) -> Coordinate {
        let target = match self.registry.get_mut(&self.state.active_strategy) {
            Ok(strategy) => strategy.execute(&self.state, &self.history, &mut self.rng),
            Err(err) => {
                warn!("{}; holding position", err);
                self.state.current_position
            }
        };

        self.move_origin = self.state.current_position;
        self.state.target_position = target;
        target
    }

    fn cycle_strategy(&mut self) {
        match self.registry.next_after(&self.state.active_strategy) {
            Ok(next) => {
                debug!("Fast-forward cycling {} -> {}", self.state.active_strategy, next);
                self.state.active_strategy = next;
            }
            Err(err) => warn!("Cannot cycle strategy: {}", err),
        }
    }

    fn refresh_heatmap(&mut self) {
        if !self.config.show_heatmap || self.history.is_empty() {
            self.heatmap = None;
            self.renderer.on_heatmap_update(None);
            return;
        }

        let grid = self.history.density_grid(&self.config.heatmap);
        self.renderer.on_heatmap_update(Some(&grid));
        self.heatmap = Some(grid);
    }
}

fn check_setting(name: &'static str, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidSetting { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{GridSearch, SpiralSearch};

    /// Captures every renderer callback
    #[derive(Debug, Default)]
    struct Recorder {
        positions: Vec<Coordinate>,
        segments: usize,
        heatmaps: Vec<Option<usize>>,
        entries: Vec<(String, Coordinate, f64)>,
        resets: usize,
    }

    impl Renderer for Recorder {
        fn on_position_update(&mut self, position: Coordinate, _loss: f64) {
            self.positions.push(position);
        }

        fn on_segment_added(&mut self, _segment: &PathSegment) {
            self.segments += 1;
        }

        fn on_heatmap_update(&mut self, grid: Option<&DensityGrid>) {
            self.heatmaps.push(grid.map(|g| g.values.len()));
        }

        fn on_history_entry(&mut self, label: &str, position: Coordinate, loss: f64) {
            self.entries.push((label.to_string(), position, loss));
        }

        fn on_reset(&mut self) {
            self.resets += 1;
        }
    }

    fn seeded_config() -> ExplorerConfig {
        ExplorerConfig {
            seed: Some(1234),
            ..ExplorerConfig::default()
        }
    }

    fn engine() -> ExplorationEngine<Recorder> {
        ExplorationEngine::new(seeded_config(), Recorder::default()).unwrap()
    }

    /// Debug rendering of a strategy, which includes its cursor
    fn cursor_of(engine: &ExplorationEngine<Recorder>, id: &str) -> String {
        format!("{:?}", engine.registry.get(&StrategyId::new(id)).unwrap())
    }

    #[test]
    fn test_single_step_moves_exactly_step_length() {
        let mut engine = engine();
        engine.state.mode = ExplorationMode::Stepping;
        engine.state.current_position = Coordinate::new(0.0, 0.0);
        engine.state.target_position = Coordinate::new(10.0, 0.0);

        let outcome = engine.tick();

        let position = engine.state().current_position;
        assert!((position.x - 0.05).abs() < 1e-12);
        assert_eq!(position.z, 0.0);
        assert!(matches!(outcome, TickOutcome::Moved { .. }));
        assert!(engine.history().is_empty());
        assert!(engine.segments().is_empty());
        assert_eq!(engine.renderer().positions, vec![position]);
    }

    #[test]
    fn test_step_length_scales_with_sliders() {
        let mut engine = engine();
        assert!((engine.step_length() - 0.05).abs() < 1e-15);

        engine.set_speed(10.0).unwrap();
        engine.set_jump_size(100.0).unwrap();
        assert!((engine.step_length() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_final_step_does_not_overshoot() {
        let mut engine = engine();
        engine.set_speed(100.0).unwrap();
        engine.state.mode = ExplorationMode::Stepping;
        engine.state.target_position = Coordinate::new(0.3, 0.4);

        engine.tick();
        let landed = engine.state().current_position;
        assert!(landed.distance_to(&Coordinate::new(0.3, 0.4)) < 1e-12);
    }

    #[test]
    fn test_arrival_records_sample_and_plans_next() {
        let mut engine = engine();
        engine.select_strategy("grid").unwrap();
        engine.state.mode = ExplorationMode::Stepping;
        engine.state.current_position = Coordinate::new(1.0, 1.0);
        engine.state.target_position = Coordinate::new(1.05, 1.0);
        engine.move_origin = Coordinate::new(-2.0, 1.0);

        let outcome = engine.tick();

        let (sample, next_target) = match outcome {
            TickOutcome::Arrived { sample, next_target } => (sample, next_target),
            other => panic!("expected arrival, got {other:?}"),
        };
        assert_eq!(sample.coordinate(), Coordinate::new(1.0, 1.0));
        assert_eq!(sample.strategy, StrategyId::new("grid"));
        assert_eq!(next_target, Coordinate::new(-15.0, -15.0));

        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.segments().len(), 1);
        assert_eq!(engine.segments()[0].from, Coordinate::new(-2.0, 1.0));
        assert_eq!(engine.segments()[0].to, Coordinate::new(1.0, 1.0));

        let recorder = engine.renderer();
        assert_eq!(recorder.entries.len(), 1);
        assert_eq!(recorder.entries[0].0, "grid");
        // heatmap hidden by default
        assert_eq!(recorder.heatmaps, vec![None]);
        assert_eq!(engine.state().target_position, next_target);
    }

    #[test]
    fn test_start_plans_first_target_on_rising_edge_only() {
        let mut engine = engine();
        engine.select_strategy("grid").unwrap();

        engine.start();
        assert_eq!(engine.state().mode, ExplorationMode::Stepping);
        assert_eq!(engine.state().target_position, Coordinate::new(-15.0, -15.0));

        // already stepping: the grid cursor must not advance
        engine.start();
        assert_eq!(engine.state().target_position, Coordinate::new(-15.0, -15.0));

        assert_eq!(engine.toggle_exploration(), ExplorationMode::Idle);
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.toggle_exploration(), ExplorationMode::Stepping);
        assert_eq!(engine.state().target_position, Coordinate::new(-9.0, -15.0));
    }

    #[test]
    fn test_stepping_reaches_target_eventually() {
        let mut engine = engine();
        engine.set_speed(50.0).unwrap();
        engine.select_strategy("grid").unwrap();
        engine.start();

        let mut arrived = None;
        for _ in 0..1_000 {
            if let TickOutcome::Arrived { sample, .. } = engine.tick() {
                arrived = Some(sample);
                break;
            }
        }

        let sample = arrived.expect("helicopter never arrived");
        assert!(sample.coordinate().distance_to(&Coordinate::new(-15.0, -15.0)) <= 0.1);
        assert_eq!(engine.segments()[0].from, Coordinate::ORIGIN);
    }

    #[test]
    fn test_fast_forward_single_step() {
        let mut engine = engine();
        engine.fast_forward(1).unwrap();

        let outcome = engine.tick();

        assert_eq!(outcome, TickOutcome::FastForwardComplete { executed: 1 });
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.segments().len(), 1);
        assert_eq!(engine.state().mode, ExplorationMode::Idle);
        assert_eq!(engine.state().steps_remaining, 0);
        // no strategy cycle: 1 is not a multiple of 25
        assert_eq!(engine.state().active_strategy, StrategyId::new("aerial"));

        let recorder = engine.renderer();
        assert_eq!(recorder.entries.len(), 1);
        let (label, position, loss) = &recorder.entries[0];
        assert_eq!(label, FAST_FORWARD_COMPLETE);
        assert_eq!(*position, engine.state().current_position);
        assert_eq!(*loss, position.loss());
        assert_eq!(engine.history().last().unwrap().coordinate(), *position);
    }

    #[test]
    fn test_fast_forward_runs_in_batches_and_cycles() {
        let mut engine = engine();
        engine.fast_forward_default().unwrap();

        let first = engine.tick();
        assert_eq!(first, TickOutcome::Batch { executed: 50, remaining: 150 });
        // cycles fired at 200, 175: aerial -> grid -> spiral
        assert_eq!(engine.state().active_strategy, StrategyId::new("spiral"));

        assert_eq!(engine.tick(), TickOutcome::Batch { executed: 50, remaining: 100 });
        assert_eq!(engine.tick(), TickOutcome::Batch { executed: 50, remaining: 50 });
        assert_eq!(engine.tick(), TickOutcome::FastForwardComplete { executed: 50 });
        assert_eq!(engine.tick(), TickOutcome::Idle);

        assert_eq!(engine.history().len(), 200);
        assert_eq!(engine.segments().len(), 200);
        // eight cycles bring us back to the start of the rotation
        assert_eq!(engine.state().active_strategy, StrategyId::new("aerial"));
        // one position update per batch
        assert_eq!(engine.renderer().positions.len(), 4);
        assert_eq!(engine.renderer().entries.len(), 1);

        // segments chain: each starts where the previous ended
        for pair in engine.segments().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(engine.segments()[0].from, Coordinate::ORIGIN);
    }

    #[test]
    fn test_fast_forward_samples_are_tagged_with_their_strategy() {
        let mut engine = engine();
        engine.fast_forward(30).unwrap();
        engine.tick();

        let history = engine.history();
        // the first step runs under aerial; the cycle at 25 remaining fires
        // after the sixth step
        assert_eq!(history.as_slice()[0].strategy, StrategyId::new("aerial"));
        assert_eq!(history.as_slice()[5].strategy, StrategyId::new("aerial"));
        assert_eq!(history.as_slice()[6].strategy, StrategyId::new("grid"));
        assert_eq!(history.by_strategy(&StrategyId::new("grid")).count(), 24);
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut engine = engine();
        engine.start();
        engine.fast_forward(10).unwrap();
        assert_eq!(engine.state().mode, ExplorationMode::FastForward);

        engine.stop();
        assert_eq!(engine.state().mode, ExplorationMode::FastForward);

        engine.start();
        assert_eq!(engine.state().mode, ExplorationMode::Stepping);
        assert_eq!(engine.state().steps_remaining, 0);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut engine = engine();
        engine.set_heatmap_visible(true);
        engine.fast_forward(60).unwrap();
        while engine.tick() != TickOutcome::Idle {}
        assert!(engine.heatmap().is_some());

        engine.reset();

        assert!(engine.history().is_empty());
        assert_eq!(engine.segments().len(), 0);
        assert!(engine.heatmap().is_none());
        assert_eq!(engine.state().current_position, Coordinate::ORIGIN);
        assert_eq!(engine.state().mode, ExplorationMode::Idle);

        let grid = engine.registry.get(&StrategyId::new("grid")).unwrap();
        assert_eq!(format!("{grid:?}"), format!("{:?}", GridSearch::new()));
        let spiral = engine.registry.get(&StrategyId::new("spiral")).unwrap();
        assert_eq!(format!("{spiral:?}"), format!("{:?}", SpiralSearch::new()));

        let recorder = engine.renderer();
        assert_eq!(recorder.resets, 1);
        assert_eq!(recorder.heatmaps.last(), Some(&None));
        assert_eq!(recorder.positions.last(), Some(&Coordinate::ORIGIN));
    }

    #[test]
    fn test_switching_strategy_keeps_cursors() {
        let mut engine = engine();
        engine.select_strategy("grid").unwrap();
        engine.start();
        engine.stop();
        let before = cursor_of(&engine, "grid");

        engine.select_strategy("spiral").unwrap();
        engine.select_strategy("grid").unwrap();
        assert_eq!(cursor_of(&engine, "grid"), before);

        engine.start();
        assert_eq!(engine.state().target_position, Coordinate::new(-9.0, -15.0));
    }

    #[test]
    fn test_heatmap_follows_visibility() {
        let mut engine = engine();
        engine.set_heatmap_visible(true);
        // empty history: nothing to draw yet
        assert_eq!(engine.renderer().heatmaps, vec![None]);

        engine.fast_forward(5).unwrap();
        engine.tick();
        assert_eq!(engine.renderer().heatmaps.last(), Some(&Some(2500)));
        assert!(engine.heatmap().unwrap().max_density() > 0.0);

        engine.set_heatmap_visible(false);
        assert_eq!(engine.renderer().heatmaps.last(), Some(&None));
        assert!(engine.heatmap().is_none());
    }

    #[test]
    fn test_precondition_violations() {
        let mut engine = engine();

        assert!(matches!(
            engine.select_strategy("simulated-annealing"),
            Err(EngineError::Strategy(StrategyError::UnknownStrategy(_)))
        ));
        assert!(matches!(engine.fast_forward(0), Err(EngineError::InvalidStepCount(0))));
        assert!(matches!(
            engine.set_speed(-1.0),
            Err(EngineError::InvalidSetting { name: "speed", .. })
        ));
        assert!(engine.set_jump_size(f64::NAN).is_err());

        // nothing changed
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.active_strategy, StrategyId::new("aerial"));
        assert_eq!(snapshot.mode, ExplorationMode::Idle);
        assert_eq!(snapshot.speed, 5.0);
        assert_eq!(snapshot.jump_size, 50.0);
    }

    #[test]
    fn test_construction_errors() {
        let config = ExplorerConfig {
            initial_strategy: "tabu".to_string(),
            ..ExplorerConfig::default()
        };
        assert!(matches!(
            ExplorationEngine::headless(config),
            Err(EngineError::Strategy(StrategyError::UnknownStrategy(_)))
        ));

        let empty = ExplorationEngine::with_registry(
            ExplorerConfig::default(),
            StrategyRegistry::new(),
            NullRenderer,
        );
        assert!(matches!(
            empty,
            Err(EngineError::Strategy(StrategyError::EmptyRegistry))
        ));

        let invalid = ExplorerConfig {
            arrival_threshold: 0.0,
            ..ExplorerConfig::default()
        };
        assert!(matches!(
            ExplorationEngine::headless(invalid),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let run = || {
            let mut engine = ExplorationEngine::headless(seeded_config()).unwrap();
            engine.fast_forward(120).unwrap();
            while engine.tick() != TickOutcome::Idle {}
            engine.history().as_slice().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_snapshot_reports_best() {
        let mut engine = engine();
        engine.fast_forward(40).unwrap();
        engine.tick();

        let snapshot = engine.snapshot();
        let best = snapshot.best.expect("history is not empty");
        assert!(engine.history().iter().all(|s| s.loss >= best.loss));
        assert_eq!(snapshot.samples, 40);
        assert_eq!(snapshot.segments, 40);
        assert_eq!(
            engine.strategy_description("spiral").unwrap(),
            "Spiral outward from current best position to ensure thorough local exploration."
        );
    }
}
