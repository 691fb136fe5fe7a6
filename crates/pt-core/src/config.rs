//! Tunable constants for patrollers and for a simulation run.
//!
//! Both structs are plain data.  Applications typically load them from a JSON
//! or TOML file (enable the `serde` feature) and pass them to the simulation
//! builder, which calls `validate()` once before the first tick.

use std::f32::consts::PI;

use crate::{PtError, PtResult};

/// Hard cap on A* node expansions per search.
///
/// Bounds the work of a single path query in expansion count rather than
/// wall-clock time so that results are identical on every machine.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1000;

// ── PatrolConfig ──────────────────────────────────────────────────────────────

/// Perception, movement, and patrol tuning shared by every agent in a run.
///
/// Distances are world units; speeds are world units per tick.  Defaults
/// assume a tile size of 50 world units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatrolConfig {
    /// Beyond this distance a target is never visible.
    pub max_range: f32,

    /// Half-width of the vision cone, radians, in `[0, π]`.
    pub fov_half_angle: f32,

    /// Visible targets closer than this are pursued.  May be smaller than
    /// `max_range` to model "seen but not worth chasing".
    pub detection_range: f32,

    pub chase_speed: f32,
    pub patrol_speed: f32,

    /// How long an agent searches a last-seen spot before patrolling again.
    pub wait_secs: f32,

    /// Fraction of the remaining turn applied per tick (0 = never turn,
    /// 1 = snap).
    pub turn_factor: f32,

    /// A goal counts as reached within this many cell edges.
    pub arrival_radius_cells: f32,

    /// Random patrol goals are sampled within this radius of the agent.
    pub patrol_radius: f32,

    /// Random samples tried before giving up on a patrol goal for this tick.
    pub patrol_attempts: u32,

    /// Probability of heading for a point of interest instead of a random
    /// spot (when any exist).
    pub interest_bias: f64,

    /// A* expansion cap; see [`DEFAULT_MAX_EXPANSIONS`].
    pub max_expansions: usize,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            max_range:            300.0,
            fov_half_angle:       35.0 * PI / 180.0,
            detection_range:      300.0,
            chase_speed:          1.0,
            patrol_speed:         0.5,
            wait_secs:            1.0,
            turn_factor:          0.02,
            arrival_radius_cells: 1.5,
            patrol_radius:        300.0,
            patrol_attempts:      10,
            interest_bias:        0.7,
            max_expansions:       DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl PatrolConfig {
    /// Reject values that would make the controller misbehave silently.
    pub fn validate(&self) -> PtResult<()> {
        let non_negative = [
            ("max_range", self.max_range),
            ("detection_range", self.detection_range),
            ("chase_speed", self.chase_speed),
            ("patrol_speed", self.patrol_speed),
            ("wait_secs", self.wait_secs),
            ("arrival_radius_cells", self.arrival_radius_cells),
            ("patrol_radius", self.patrol_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PtError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        if !(0.0..=PI).contains(&self.fov_half_angle) {
            return Err(PtError::Config(format!(
                "fov_half_angle must be within [0, π], got {}",
                self.fov_half_angle
            )));
        }
        if !(0.0..=1.0).contains(&self.turn_factor) {
            return Err(PtError::Config(format!(
                "turn_factor must be within [0, 1], got {}",
                self.turn_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.interest_bias) {
            return Err(PtError::Config(format!(
                "interest_bias must be within [0, 1], got {}",
                self.interest_bias
            )));
        }
        if self.max_expansions == 0 {
            return Err(PtError::Config("max_expansions must be > 0".into()));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks per simulated second.  Default: 60.
    pub tick_rate_hz: u32,

    /// Total ticks `Sim::run` simulates.  One minute at 60 Hz: 3600.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Seconds a target must stay continuously visible before it is reported
    /// as spotted.
    pub exposure_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz:            60,
            total_ticks:             3_600,
            seed:                    0,
            snapshot_interval_ticks: 60,
            exposure_secs:           2.0,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.total_ticks)
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::TickClock {
        crate::TickClock::new(self.tick_rate_hz)
    }

    pub fn validate(&self) -> PtResult<()> {
        if self.tick_rate_hz == 0 {
            return Err(PtError::Config("tick_rate_hz must be > 0".into()));
        }
        if !self.exposure_secs.is_finite() || self.exposure_secs < 0.0 {
            return Err(PtError::Config(format!(
                "exposure_secs must be finite and >= 0, got {}",
                self.exposure_secs
            )));
        }
        Ok(())
    }
}
