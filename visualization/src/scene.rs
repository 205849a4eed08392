//! Headless scene model
//!
//! Mirrors what a 3D front end would draw: the helicopter hovering above
//! the terrain, the lofted path segments, the density floor and the history
//! panel. It receives every update through the engine's renderer callbacks
//! and can be summarized for display or serialization.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use serde::{Deserialize, Serialize};

use rotor_core::{Coordinate, DensityGrid, PathSegment, Renderer};

use crate::view::{HeatmapTexture, HeatmapView, HeatmapViewConfig, HistoryLog, LogEntry};

/// Height of the helicopter above the terrain surface
pub const HOVER_HEIGHT: f64 = 2.0;

/// Scene elevation of the helicopter over a point with the given loss
pub fn hover_altitude(loss: f64) -> f64 {
    -loss + HOVER_HEIGHT
}

/// Scene state assembled from renderer callbacks
#[derive(Debug, Clone)]
pub struct SceneModel {
    /// Helicopter ground position
    helicopter: Coordinate,

    /// Loss under the helicopter
    loss: f64,

    /// Completed segments, oldest first
    segments: Vec<PathSegment>,

    /// Density floor
    heatmap: HeatmapView,

    /// History panel
    log: HistoryLog,

    /// Position updates received since the last reset
    position_updates: u64,
}

/// Serializable digest of the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub helicopter: Coordinate,
    pub altitude: f64,
    pub loss: f64,
    pub segments: usize,
    pub improving_segments: usize,
    pub heatmap_visible: bool,
    pub heatmap_peak_alpha: u8,
    pub position_updates: u64,
    pub log: Vec<String>,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(crate::view::DEFAULT_LOG_CAPACITY)
    }
}

impl SceneModel {
    pub fn new(log_capacity: usize) -> Self {
        Self::with_heatmap_config(log_capacity, HeatmapViewConfig::default())
    }

    pub fn with_heatmap_config(log_capacity: usize, heatmap: HeatmapViewConfig) -> Self {
        Self {
            helicopter: Coordinate::ORIGIN,
            loss: Coordinate::ORIGIN.loss(),
            segments: Vec::new(),
            heatmap: HeatmapView::new(heatmap),
            log: HistoryLog::new(log_capacity),
            position_updates: 0,
        }
    }

    pub fn helicopter(&self) -> Coordinate {
        self.helicopter
    }

    pub fn altitude(&self) -> f64 {
        hover_altitude(self.loss)
    }

    pub fn loss(&self) -> f64 {
        self.loss
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn heatmap(&self) -> Option<&HeatmapTexture> {
        self.heatmap.texture()
    }

    pub fn heatmap_view(&self) -> &HeatmapView {
        &self.heatmap
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    pub fn position_updates(&self) -> u64 {
        self.position_updates
    }

    /// Status line for the position display
    pub fn readout(&self) -> String {
        format!(
            "x: {:.2}  z: {:.2}  loss: {:.3}",
            self.helicopter.x, self.helicopter.z, self.loss
        )
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            helicopter: self.helicopter,
            altitude: self.altitude(),
            loss: self.loss,
            segments: self.segments.len(),
            improving_segments: self.segments.iter().filter(|s| s.improvement() > 0.0).count(),
            heatmap_visible: self.heatmap.is_visible(),
            heatmap_peak_alpha: self.heatmap.texture().map_or(0, |t| t.peak_alpha()),
            position_updates: self.position_updates,
            log: self.log.lines(),
        }
    }
}

impl Renderer for SceneModel {
    fn on_position_update(&mut self, position: Coordinate, loss: f64) {
        self.helicopter = position;
        self.loss = loss;
        self.position_updates += 1;
    }

    fn on_segment_added(&mut self, segment: &PathSegment) {
        self.segments.push(segment.clone());
    }

    fn on_heatmap_update(&mut self, grid: Option<&DensityGrid>) {
        match grid {
            Some(grid) => self.heatmap.update(grid),
            None => self.heatmap.clear(),
        }
    }

    fn on_history_entry(&mut self, label: &str, position: Coordinate, loss: f64) {
        self.log.push(LogEntry {
            label: label.to_string(),
            position,
            loss,
        });
    }

    fn on_reset(&mut self) {
        debug!("Clearing scene: {} segments", self.segments.len());
        self.segments.clear();
        self.heatmap.clear();
        self.log.clear();
        self.position_updates = 0;
    }
}
