//! Renderer collaborator interface
//!
//! The engine pushes updates; it never pulls from the renderer. Implementors
//! decide what to draw and may ignore any callback.

use crate::execution::history::DensityGrid;
use crate::landscape::Coordinate;
use crate::path::PathSegment;

/// Label used for the history entry that closes a fast-forward run
pub const FAST_FORWARD_COMPLETE: &str = "Fast Forward Complete";

pub trait Renderer {
    /// The helicopter moved
    fn on_position_update(&mut self, position: Coordinate, loss: f64);

    /// A move completed
    fn on_segment_added(&mut self, segment: &PathSegment);

    /// New heatmap, or `None` when hidden or there is nothing to show
    fn on_heatmap_update(&mut self, grid: Option<&DensityGrid>);

    /// A line for the history log; `label` is a strategy id or
    /// [`FAST_FORWARD_COMPLETE`]
    fn on_history_entry(&mut self, label: &str, position: Coordinate, loss: f64);

    /// The session was reset; drop segments, log and heatmap
    fn on_reset(&mut self) {}
}

/// Renderer that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_position_update(&mut self, _position: Coordinate, _loss: f64) {}

    fn on_segment_added(&mut self, _segment: &PathSegment) {}

    fn on_heatmap_update(&mut self, _grid: Option<&DensityGrid>) {}

    fn on_history_entry(&mut self, _label: &str, _position: Coordinate, _loss: f64) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_position_update(&mut self, position: Coordinate, loss: f64) {
        (**self).on_position_update(position, loss)
    }

    fn on_segment_added(&mut self, segment: &PathSegment) {
        (**self).on_segment_added(segment)
    }

    fn on_heatmap_update(&mut self, grid: Option<&DensityGrid>) {
        (**self).on_heatmap_update(grid)
    }

    fn on_history_entry(&mut self, label: &str, position: Coordinate, loss: f64) {
        (**self).on_history_entry(label, position, loss)
    }

    fn on_reset(&mut self) {
        (**self).on_reset()
    }
}
