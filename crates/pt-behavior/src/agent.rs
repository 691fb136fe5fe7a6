//! Agent and target state.

use std::fmt;

use pt_core::{AgentId, TargetId, WorldPos, normalize_angle};
use pt_grid::Path;

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// What an agent is currently doing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Wandering between patrol goals.
    #[default]
    Patrolling,
    /// Pursuing a target, or heading for the spot one was last seen.
    Chasing,
    /// Standing at a last-known target position, frozen until the timer runs out.
    Waiting,
}

impl BehaviorState {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorState::Patrolling => "patrolling",
            BehaviorState::Chasing    => "chasing",
            BehaviorState::Waiting    => "waiting",
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

/// Something agents look for.  The engine reads targets but never moves them.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub position: WorldPos,
}

impl Target {
    #[inline]
    pub fn new(id: TargetId, position: WorldPos) -> Self {
        Self { id, position }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One patroller's complete mutable state.
///
/// Owned by whoever runs the simulation and lent mutably to
/// [`Patroller::update`][crate::Patroller::update] once per tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// World position.
    pub position: WorldPos,

    /// Radians in `[0, 2π)`.
    pub facing: f32,

    /// World units per tick; set from the config on every state change.
    pub speed: f32,

    pub state: BehaviorState,

    /// Where a chased target was last seen.  While set, it is the agent's goal.
    pub last_known: Option<WorldPos>,

    /// Where the agent is wandering to when it has no last-known position.
    pub patrol_goal: Option<WorldPos>,

    /// Ticks left to wait; non-zero only while `Waiting`.
    pub wait_ticks: u32,

    /// The route computed on the agent's latest tick, for visualisation.
    pub path: Path,
}

impl Agent {
    /// A fresh patroller with no goal.
    pub fn new(id: AgentId, position: WorldPos, facing: f32, speed: f32) -> Self {
        Self {
            id,
            position,
            facing:      normalize_angle(facing),
            speed,
            state:       BehaviorState::Patrolling,
            last_known:  None,
            patrol_goal: None,
            wait_ticks:  0,
            path:        Path::empty(),
        }
    }

    /// The position the agent is currently moving towards, if any.
    ///
    /// A last-known target position takes precedence over the patrol goal.
    #[inline]
    pub fn goal(&self) -> Option<WorldPos> {
        self.last_known.or(self.patrol_goal)
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.wait_ticks > 0
    }
}
