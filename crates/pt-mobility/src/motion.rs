//! A single translation step with collision rejection.

use pt_core::WorldPos;
use pt_grid::OccupancyGrid;

/// Result of one call to [`advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The agent moved; this is its new position.
    Moved(WorldPos),
    /// The step would have ended off the grid or inside an `Obstacle`; the
    /// agent stays where it was.
    Blocked,
    /// Nothing to do: already on the waypoint, or zero speed.
    Idle,
}

impl StepOutcome {
    /// The position after the step, given where the agent started.
    #[inline]
    pub fn position_or(self, start: WorldPos) -> WorldPos {
        match self {
            StepOutcome::Moved(p) => p,
            StepOutcome::Blocked | StepOutcome::Idle => start,
        }
    }
}

/// Move from `from` towards `waypoint` by at most `speed` world units.
///
/// The step is clamped so it never overshoots the waypoint.  Before the move
/// is committed, the cell under the new position is looked up; a position
/// outside the grid or inside an `Obstacle` yields [`StepOutcome::Blocked`].
/// `Concealment` is walkable.
pub fn advance(grid: &OccupancyGrid, from: WorldPos, waypoint: WorldPos, speed: f32) -> StepOutcome {
    let distance = from.distance(waypoint);
    if distance == 0.0 || speed <= 0.0 {
        return StepOutcome::Idle;
    }

    let next = if speed >= distance {
        waypoint
    } else {
        let k = speed / distance;
        WorldPos::new(from.x + (waypoint.x - from.x) * k, from.y + (waypoint.y - from.y) * k)
    };

    match grid.cell_at(next) {
        Ok(cell) if grid.is_walkable(cell) => StepOutcome::Moved(next),
        _ => StepOutcome::Blocked,
    }
}
