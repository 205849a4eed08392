//! Explorer configuration
//!
//! Every knob the UI exposes (speed and jump sliders, heatmap toggle,
//! fast-forward length) plus the constants that shape the animation, with
//! defaults matching the classic exploration demo. Configurations load from
//! JSON; missing fields fall back to their defaults.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Heatmap sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Samples per axis
    pub resolution: usize,

    /// Side length of the square window, centred on the origin
    pub extent: f64,

    /// Multiplier from raw density to intensity
    pub intensity_scale: f64,

    /// Intensity ceiling
    pub max_intensity: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            resolution: 50,
            extent: 40.0,
            intensity_scale: 50.0,
            max_intensity: 255.0,
        }
    }
}

/// Top-level explorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Speed slider value
    pub speed: f64,

    /// Jump-size slider value; 50 is neutral
    pub jump_size: f64,

    /// Distance under which a move counts as arrived
    pub arrival_threshold: f64,

    /// Steps queued by a fast-forward command
    pub fast_forward_steps: usize,

    /// Sub-steps executed per frame while fast-forwarding
    pub fast_forward_batch: usize,

    /// Fast-forward switches strategy whenever the remaining count is a
    /// multiple of this
    pub strategy_cycle_interval: usize,

    /// Strategy active when the session starts
    pub initial_strategy: String,

    /// Whether the heatmap is displayed
    pub show_heatmap: bool,

    pub heatmap: HeatmapConfig,

    /// Entries kept by the on-screen history log
    pub history_log_capacity: usize,

    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_size: 50.0,
            arrival_threshold: 0.1,
            fast_forward_steps: 200,
            fast_forward_batch: 50,
            strategy_cycle_interval: 25,
            initial_strategy: "aerial".to_string(),
            show_heatmap: false,
            heatmap: HeatmapConfig::default(),
            history_log_capacity: 10,
            seed: None,
        }
    }
}

impl ExplorerConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks every field is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("speed", self.speed)?;
        check_non_negative("jump_size", self.jump_size)?;
        check_positive("arrival_threshold", self.arrival_threshold)?;
        check_positive("heatmap.extent", self.heatmap.extent)?;
        check_non_negative("heatmap.intensity_scale", self.heatmap.intensity_scale)?;
        check_non_negative("heatmap.max_intensity", self.heatmap.max_intensity)?;

        let counts = [
            ("fast_forward_steps", self.fast_forward_steps),
            ("fast_forward_batch", self.fast_forward_batch),
            ("strategy_cycle_interval", self.strategy_cycle_interval),
            ("heatmap.resolution", self.heatmap.resolution),
            ("history_log_capacity", self.history_log_capacity),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        if self.initial_strategy.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "initial_strategy",
                reason: "must name a strategy".to_string(),
            });
        }

        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite positive number, got {value}"),
        });
    }
    Ok(())
}
