//! ROTOR visualization
//!
//! Headless presentation layer for the exploration engine: a scene model
//! that implements the engine's renderer interface, the density heatmap
//! rasterizer and the bounded history panel.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod scene;
pub mod view;

pub use crate::scene::{hover_altitude, SceneModel, SceneSummary, HOVER_HEIGHT};
pub use crate::view::{HeatmapTexture, HeatmapView, HeatmapViewConfig, HistoryLog, LogEntry};
