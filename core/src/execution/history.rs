//! Exploration history and density aggregation
//!
//! The history is an append-only log of every point the helicopter has
//! sampled. Beyond the usual "best so far" and "most recent" queries it
//! backs the heatmap: a kernel-sum estimate that lights up regions with
//! many nearby, low-loss samples.
//!
//! # Mathematical Foundations
//! For a query point `q` the density is
//!
//! ```text
//! d(q) = Σ exp(-|q - p|² / 10) · max(0, (10 - loss(p)) / 10)
//! ```
//!
//! Each term is non-negative and grows as `q` approaches `p`, so the field
//! is non-negative and monotone in proximity to any single sample.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::HeatmapConfig;
use crate::landscape::{Coordinate, LOSS_CEILING};
use crate::strategy::StrategyId;

/// Kernel bandwidth: squared distance is divided by this
pub const KERNEL_BANDWIDTH: f64 = 10.0;

/// One recorded exploration result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub z: f64,
    pub loss: f64,
    pub strategy: StrategyId,
}

impl SamplePoint {
    /// Samples the loss field at `position`
    pub fn at(position: Coordinate, strategy: StrategyId) -> Self {
        Self {
            x: position.x,
            z: position.z,
            loss: position.loss(),
            strategy,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.z)
    }

    /// Contribution weight in the density estimate
    #[inline]
    fn goodness(&self) -> f64 {
        ((LOSS_CEILING - self.loss) / LOSS_CEILING).max(0.0)
    }
}

/// Append-only, insertion-ordered sample log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorationHistory {
    samples: Vec<SamplePoint>,
}

impl ExplorationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sample(&mut self, point: SamplePoint) {
        self.samples.push(point);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in recording order
    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> + '_ {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[SamplePoint] {
        &self.samples
    }

    pub fn last(&self) -> Option<&SamplePoint> {
        self.samples.last()
    }

    /// Up to `n` most recent samples, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SamplePoint> + '_ {
        self.samples.iter().rev().take(n)
    }

    /// Lowest-loss sample; the earliest one wins ties
    pub fn best(&self) -> Option<&SamplePoint> {
        self.samples.iter().fold(None, |best: Option<&SamplePoint>, sample| match best {
            Some(current) if current.loss <= sample.loss => Some(current),
            _ => Some(sample),
        })
    }

    pub fn by_strategy<'a>(
        &'a self,
        strategy: &'a StrategyId,
    ) -> impl Iterator<Item = &'a SamplePoint> + 'a {
        self.samples.iter().filter(move |s| &s.strategy == strategy)
    }

    /// Kernel density at `(x, z)`
    pub fn compute_density(&self, x: f64, z: f64) -> f64 {
        self.samples
            .iter()
            .map(|point| {
                let dist = ((x - point.x).powi(2) + (z - point.z).powi(2)).sqrt();
                (-dist * dist / KERNEL_BANDWIDTH).exp() * point.goodness()
            })
            .sum()
    }

    /// Evaluates the density over the heatmap window.
    ///
    /// Rows are computed in parallel; each cell depends only on the history,
    /// so the grid is identical to a sequential evaluation.
    pub fn density_grid(&self, config: &HeatmapConfig) -> DensityGrid {
        let resolution = config.resolution;
        let extent = config.extent;

        let values: Vec<f64> = (0..resolution)
            .into_par_iter()
            .flat_map_iter(|j| {
                (0..resolution).map(move |i| {
                    let position = DensityGrid::cell_position(i, j, resolution, extent);
                    self.compute_density(position.x, position.z)
                })
            })
            .collect();

        DensityGrid {
            resolution,
            extent,
            intensity_scale: config.intensity_scale,
            max_intensity: config.max_intensity,
            values,
        }
    }

    /// Drops every sample
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// Density samples over the square heatmap window.
///
/// Row-major with `x` varying along a row: `values[i + j * resolution]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityGrid {
    pub resolution: usize,
    pub extent: f64,
    pub intensity_scale: f64,
    pub max_intensity: f64,
    pub values: Vec<f64>,
}

impl DensityGrid {
    /// Domain position sampled by cell `(i, j)`
    pub fn cell_position(i: usize, j: usize, resolution: usize, extent: f64) -> Coordinate {
        let res = resolution as f64;
        Coordinate::new((i as f64 / res - 0.5) * extent, (j as f64 / res - 0.5) * extent)
    }

    pub fn density(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.resolution || j >= self.resolution {
            return None;
        }
        self.values.get(i + j * self.resolution).copied()
    }

    /// Scaled density, clamped to the intensity ceiling
    pub fn intensity(&self, i: usize, j: usize) -> Option<f64> {
        self.density(i, j)
            .map(|d| (d * self.intensity_scale).min(self.max_intensity))
    }

    pub fn max_density(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, z: f64, loss: f64) -> SamplePoint {
        SamplePoint {
            x,
            z,
            loss,
            strategy: StrategyId::new("grid"),
        }
    }

    #[test]
    fn test_empty_history_has_zero_density() {
        let history = ExplorationHistory::new();
        assert_eq!(history.compute_density(3.0, -1.0), 0.0);
        assert!(history.best().is_none());
    }

    #[test]
    fn test_density_at_sample() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(1.0, 2.0, 4.0));
        assert!((history.compute_density(1.0, 2.0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_density_non_negative_even_above_ceiling() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(0.0, 0.0, 10.08));
        history.record_sample(sample(5.0, 5.0, 3.0));

        for i in -20..=20 {
            for j in -20..=20 {
                assert!(history.compute_density(i as f64, j as f64) >= 0.0);
            }
        }
        // the above-ceiling sample contributes nothing
        let expected = (-5.0f64).exp() * 0.7;
        assert!((history.compute_density(0.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_density_monotone_in_proximity() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(-6.0, 4.0, 7.5));
        history.record_sample(sample(2.0, 2.0, 1.0));

        // walk toward (2, 2) along a ray; density must not drop
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=40 {
            let t = step as f64 / 40.0;
            let x = 12.0 + (2.0 - 12.0) * t;
            let z = 9.0 + (2.0 - 9.0) * t;
            let density = history.compute_density(x, z);
            assert!(density >= previous - 1e-15);
            previous = density;
        }
    }

    #[test]
    fn test_best_and_recent() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(0.0, 0.0, 3.0));
        history.record_sample(sample(1.0, 0.0, 1.0));
        history.record_sample(sample(2.0, 0.0, 1.0));
        history.record_sample(sample(3.0, 0.0, 6.0));

        assert_eq!(history.best().map(|s| s.x), Some(1.0));
        let recent: Vec<f64> = history.recent(2).map(|s| s.x).collect();
        assert_eq!(recent, vec![3.0, 2.0]);
        assert_eq!(history.by_strategy(&StrategyId::new("grid")).count(), 4);
        assert_eq!(history.by_strategy(&StrategyId::new("spiral")).count(), 0);
    }

    #[test]
    fn test_density_grid_layout() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(-20.0, 0.0, 0.0));
        let config = HeatmapConfig::default();
        let grid = history.density_grid(&config);

        assert_eq!(grid.values.len(), 50 * 50);
        // cell (0, 25) sits exactly on the sample
        assert_eq!(DensityGrid::cell_position(0, 25, 50, 40.0), Coordinate::new(-20.0, 0.0));
        assert_eq!(grid.density(0, 25), Some(1.0));
        assert_eq!(grid.intensity(0, 25), Some(50.0));
        assert_eq!(grid.density(50, 0), None);
        assert_eq!(grid.max_density(), 1.0);
    }

    #[test]
    fn test_intensity_is_clamped() {
        let mut history = ExplorationHistory::new();
        for _ in 0..20 {
            history.record_sample(sample(0.0, 0.0, 0.0));
        }
        let grid = history.density_grid(&HeatmapConfig::default());
        assert_eq!(grid.intensity(25, 25), Some(255.0));
    }

    #[test]
    fn test_reset_clears() {
        let mut history = ExplorationHistory::new();
        history.record_sample(sample(0.0, 0.0, 2.0));
        history.reset();
        assert!(history.is_empty());
    }
}
