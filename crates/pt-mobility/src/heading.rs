//! Facing interpolation.

use std::f32::consts::TAU;

use pt_core::normalize_angle;

/// Move `from` a fraction `t` of the way towards `to` along the shorter arc.
///
/// The result is normalised to `[0, 2π)`.  `t = 0` keeps `from` (normalised),
/// `t = 1` lands on `to`.  When the two angles are exactly opposite the turn
/// goes counter-clockwise (increasing angle).
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut diff = normalize_angle(to - from);
    if diff > TAU / 2.0 {
        diff -= TAU;
    }
    normalize_angle(from + diff * t)
}
