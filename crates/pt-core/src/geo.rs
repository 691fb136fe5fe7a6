//! Continuous world coordinates and angle helpers.
//!
//! `WorldPos` uses `f32` like the rest of the engine.  World units are
//! arbitrary; the occupancy grid maps them to cells through its tile size.
//!
//! Angles are radians measured with `atan2(dy, dx)`: 0 points along +x
//! ("east") and angles grow towards +y.  Facings are stored normalised to
//! `[0, 2π)`.

use std::f32::consts::{PI, TAU};

/// A point in continuous world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing from `self` towards `other`, in `(-π, π]`.
    ///
    /// Returns `0.0` when both points coincide.
    #[inline]
    pub fn bearing_to(self, other: WorldPos) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` units away along `angle`.
    #[inline]
    pub fn offset(self, angle: f32, distance: f32) -> WorldPos {
        WorldPos::new(self.x + angle.cos() * distance, self.y + angle.sin() * distance)
    }
}

impl std::fmt::Display for WorldPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Wrap any finite angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

/// Shortest-arc distance between two angles, in `[0, π]`.
#[inline]
pub fn angle_between(a: f32, b: f32) -> f32 {
    let d = normalize_angle(a - b);
    if d > PI { TAU - d } else { d }
}
