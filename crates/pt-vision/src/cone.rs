//! The perceptual envelope of one observer.

use pt_core::PatrolConfig;

/// Maximum range plus angular half-width, centred on the observer's facing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionCone {
    /// World units.
    pub max_range: f32,
    /// Radians, in `[0, π]`.  `π` sees all around.
    pub half_angle: f32,
}

impl VisionCone {
    pub fn new(max_range: f32, half_angle: f32) -> Self {
        Self { max_range, half_angle }
    }

    /// The cone every agent of a run uses.
    pub fn from_config(config: &PatrolConfig) -> Self {
        Self::new(config.max_range, config.fov_half_angle)
    }
}

impl Default for VisionCone {
    fn default() -> Self {
        Self::from_config(&PatrolConfig::default())
    }
}
