//! Synthetic loss landscape
//!
//! Defines the scalar field the helicopter explores: a gentle oscillatory
//! base surface, three Gaussian wells and a small high-frequency ripple.
//!
//! # Mathematical Foundations
//! The base surface and the wells are all non-negative and are subtracted
//! from a ceiling of 10, so away from the ripple (at most ±0.1) the loss never
//! exceeds 10 and goes negative inside the wells. The deepest well, centred
//! at (8, -6), is the global minimum.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

/// Baseline the field is measured down from
pub const LOSS_CEILING: f64 = 10.0;

/// A point in the 2D parameter domain
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub z: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean distance in the (x, z) plane
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Loss at this coordinate
    #[inline]
    pub fn loss(&self) -> f64 {
        loss(self.x, self.z)
    }

    /// Linear interpolation toward `other` at parameter `t`
    #[inline]
    pub fn lerp(&self, other: &Coordinate, t: f64) -> Coordinate {
        Coordinate {
            x: self.x + (other.x - self.x) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.z)
    }
}

/// Evaluates the loss field at `(x, z)`.
///
/// Pure and total over all reals; identical inputs give bit-identical output
/// because the operator order is fixed.
pub fn loss(x: f64, z: f64) -> f64 {
    let term1 = 0.5 * ((x * 0.5).sin() * (z * 0.5).cos() + 1.0);
    let term2 = 0.3 * (-((x - 5.0).powi(2) + (z - 5.0).powi(2)) / 20.0).exp();
    let term3 = 0.7 * (-((x + 3.0).powi(2) + (z + 3.0).powi(2)) / 15.0).exp();
    // global minimum
    let term4 = 0.9 * (-((x - 8.0).powi(2) + (z + 6.0).powi(2)) / 25.0).exp();
    let noise = 0.1 * ((x * 2.0).sin() * (z * 2.0).cos());

    LOSS_CEILING - (term1 + term2 + term3 + term4) * 10.0 + noise
}
