//! Ordered strategy registry
//!
//! Registration order matters: fast-forward cycles through strategies in the
//! order they were registered, wrapping at the end.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use super::{
    AerialSurvey, DirectDescent, GridSearch, SpiralSearch, Strategy, StrategyDescriptor,
    StrategyError, StrategyId,
};

#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four built-in strategies in canonical order
    pub fn with_defaults() -> Self {
        Self {
            strategies: vec![
                Box::new(AerialSurvey::new()),
                Box::new(GridSearch::new()),
                Box::new(SpiralSearch::new()),
                Box::new(DirectDescent::new()),
            ],
        }
    }

    /// Appends a strategy, rejecting duplicate ids
    pub fn register(&mut self, strategy: Box<dyn Strategy>) -> Result<(), StrategyError> {
        let id = strategy.id();
        if self.contains(&id) {
            return Err(StrategyError::DuplicateStrategy(id));
        }
        debug!("Registered strategy {} ({})", id, strategy.name());
        self.strategies.push(strategy);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn contains(&self, id: &StrategyId) -> bool {
        self.position(id).is_some()
    }

    /// Registration index of `id`
    pub fn position(&self, id: &StrategyId) -> Option<usize> {
        self.strategies.iter().position(|s| &s.id() == id)
    }

    pub fn get(&self, id: &StrategyId) -> Result<&dyn Strategy, StrategyError> {
        self.strategies
            .iter()
            .find(|s| &s.id() == id)
            .map(|s| &**s)
            .ok_or_else(|| StrategyError::UnknownStrategy(id.clone()))
    }

    pub fn get_mut(&mut self, id: &StrategyId) -> Result<&mut dyn Strategy, StrategyError> {
        match self.position(id) {
            Some(index) => Ok(self.strategies[index].as_mut()),
            None => Err(StrategyError::UnknownStrategy(id.clone())),
        }
    }

    /// Id of the first registered strategy
    pub fn first(&self) -> Result<StrategyId, StrategyError> {
        self.strategies
            .first()
            .map(|s| s.id())
            .ok_or(StrategyError::EmptyRegistry)
    }

    /// The strategy registered after `id`, wrapping to the first
    pub fn next_after(&self, id: &StrategyId) -> Result<StrategyId, StrategyError> {
        let index = self
            .position(id)
            .ok_or_else(|| StrategyError::UnknownStrategy(id.clone()))?;
        Ok(self.strategies[(index + 1) % self.strategies.len()].id())
    }

    /// Ids in registration order
    pub fn ids(&self) -> Vec<StrategyId> {
        self.strategies.iter().map(|s| s.id()).collect()
    }

    pub fn descriptors(&self) -> Vec<StrategyDescriptor> {
        self.strategies.iter().map(|s| s.descriptor()).collect()
    }

    /// Restores every strategy cursor
    pub fn reset_all(&mut self) {
        for strategy in &mut self.strategies {
            strategy.reset();
        }
    }
}
