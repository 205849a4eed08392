//! Heatmap rasterization for exploration density
//!
//! Turns a scalar grid into an RGBA texture ready to be uploaded as a
//! translucent floor under the terrain. The color ramp runs from purple at
//! zero intensity to yellow at full intensity, with alpha tracking intensity
//! so unexplored areas stay transparent.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;
use serde::{Deserialize, Serialize};

use rotor_core::DensityGrid;

/// Data source for heatmap rasterization
pub trait HeatmapDataSource {
    /// Get data dimensions (width, height)
    fn dimensions(&self) -> (usize, usize);

    /// Get display intensity at a cell, already scaled to `[0, max]`
    fn value_at(&self, x: usize, y: usize) -> Option<f64>;

    /// Get value range (min, max)
    fn value_range(&self) -> (f64, f64);
}

impl HeatmapDataSource for DensityGrid {
    fn dimensions(&self) -> (usize, usize) {
        (self.resolution, self.resolution)
    }

    fn value_at(&self, x: usize, y: usize) -> Option<f64> {
        self.intensity(x, y)
    }

    fn value_range(&self) -> (f64, f64) {
        (0.0, self.max_intensity)
    }
}

/// Heatmap view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapViewConfig {
    /// Opacity of the floor material
    pub opacity: f32,

    /// Elevation of the floor plane, below the deepest well
    pub elevation: f64,
}

impl Default for HeatmapViewConfig {
    fn default() -> Self {
        Self {
            opacity: 0.6,
            elevation: -9.5,
        }
    }
}

/// RGBA8 pixels, row-major: pixel `(x, y)` starts at `4 * (x + y * width)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapTexture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl HeatmapTexture {
    /// Pixel at `(x, y)`, if in bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = 4 * (x + y * self.width);
        let p = self.pixels.get(offset..offset + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Highest alpha in the texture
    pub fn peak_alpha(&self) -> u8 {
        self.pixels.chunks_exact(4).map(|p| p[3]).max().unwrap_or(0)
    }
}

/// Purple-to-yellow ramp for a display intensity in `[0, 255]`.
///
/// Channels are rounded and saturated to a byte.
pub fn ramp_color(intensity: f64) -> [u8; 4] {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    [
        channel(100.0 + intensity * 0.6),
        channel(50.0 + intensity * 0.8),
        channel(200.0 - intensity * 0.5),
        channel(intensity),
    ]
}

/// Heatmap visualization view
#[derive(Debug, Clone, Default)]
pub struct HeatmapView {
    /// View configuration
    config: HeatmapViewConfig,

    /// Last rasterized texture, `None` while hidden
    texture: Option<HeatmapTexture>,
}

impl HeatmapView {
    /// Create a new heatmap view
    pub fn new(config: HeatmapViewConfig) -> Self {
        Self { config, texture: None }
    }

    pub fn config(&self) -> &HeatmapViewConfig {
        &self.config
    }

    pub fn texture(&self) -> Option<&HeatmapTexture> {
        self.texture.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.texture.is_some()
    }

    /// Replace the texture from `source`
    pub fn update(&mut self, source: &dyn HeatmapDataSource) {
        self.texture = Some(rasterize(source));
    }

    /// Hide the floor
    pub fn clear(&mut self) {
        self.texture = None;
    }
}

/// Rasterize a data source into an RGBA texture
pub fn rasterize(source: &dyn HeatmapDataSource) -> HeatmapTexture {
    let (width, height) = source.dimensions();
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let intensity = source.value_at(x, y).unwrap_or(0.0);
            pixels.extend_from_slice(&ramp_color(intensity));
        }
    }

    trace!("Rasterized {}x{} heatmap", width, height);
    HeatmapTexture { width, height, pixels }
}
