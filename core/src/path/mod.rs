//! Path segment construction
//!
//! Every completed move becomes a lofted polyline hovering over the terrain.
//! The arc height follows `sin(tπ)`, independent of the move length, and the
//! color encodes whether the move improved the loss (green) or not (red),
//! with saturation and lightness scaling with the size of the change.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::landscape::{loss, Coordinate};

pub mod color;

pub use self::color::Color;

/// Interpolation steps per segment; the polyline has one more point
pub const SEGMENT_STEPS: usize = 20;
/// Clearance above the terrain at both ends
pub const PATH_CLEARANCE: f64 = 0.5;
/// Extra height at the apex of the arc
pub const ARC_HEIGHT: f64 = 2.0;

/// A point in scene space: `y` is elevation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One completed move, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub from: Coordinate,
    pub to: Coordinate,
    pub points: Vec<Point3>,
    pub color: Color,
}

impl PathSegment {
    /// Loss decrease achieved by the move; negative for a regression
    pub fn improvement(&self) -> f64 {
        self.from.loss() - self.to.loss()
    }
}

/// Color for a move with the given loss improvement
pub fn improvement_color(improvement: f64) -> Color {
    let hue = if improvement > 0.0 { 120.0 } else { 0.0 };
    let magnitude = improvement.abs();
    Color::from_hsl(hue, magnitude * 20.0, 50.0 + magnitude * 10.0)
}

/// Builds the lofted polyline for a move from `from` to `to`.
///
/// When `color` is `None` it is derived from the loss improvement.
pub fn build_segment(from: Coordinate, to: Coordinate, color: Option<Color>) -> PathSegment {
    let color = color.unwrap_or_else(|| improvement_color(from.loss() - to.loss()));

    let points = (0..=SEGMENT_STEPS)
        .map(|i| {
            let t = i as f64 / SEGMENT_STEPS as f64;
            let p = from.lerp(&to, t);
            Point3 {
                x: p.x,
                y: -loss(p.x, p.z) + PATH_CLEARANCE + (t * PI).sin() * ARC_HEIGHT,
                z: p.z,
            }
        })
        .collect();

    PathSegment { from, to, points, color }
}
