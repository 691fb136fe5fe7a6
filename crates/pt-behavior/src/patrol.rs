//! Patrol goal selection.

use pt_core::{AgentRng, PatrolConfig, WorldPos};
use pt_grid::{OccupancyGrid, PathFinder};

use crate::Agent;

/// Pick the next place for an idle agent to wander to.
///
/// With probability `config.interest_bias`, and only if there are any, a
/// uniformly chosen point of interest is returned as-is.  Otherwise up to
/// `config.patrol_attempts` random points within `config.patrol_radius` of
/// the agent are tried.  A sample is discarded if it falls off the grid or in
/// an `Obstacle`, or if `finder` finds no route to it; the first sample that
/// survives is returned.
///
/// `None` means "nothing suitable this tick".  It is not an error; the agent
/// idles and the caller asks again next tick.
pub fn select_patrol_target<P: PathFinder + ?Sized>(
    agent:              &Agent,
    points_of_interest: &[WorldPos],
    grid:               &OccupancyGrid,
    config:             &PatrolConfig,
    finder:             &P,
    rng:                &mut AgentRng,
) -> Option<WorldPos> {
    if !points_of_interest.is_empty() && rng.chance(config.interest_bias) {
        return rng.pick(points_of_interest).copied();
    }

    let start = grid.cell_at(agent.position).ok()?;
    for _ in 0..config.patrol_attempts {
        let angle    = rng.angle();
        let distance = rng.unit() * config.patrol_radius;
        let candidate = agent.position.offset(angle, distance);

        let Ok(cell) = grid.cell_at(candidate) else {
            continue;
        };
        if !grid.is_walkable(cell) {
            continue;
        }
        if !finder.find_path(grid, start, cell).is_empty() {
            return Some(candidate);
        }
    }
    tracing::trace!(agent = %agent.id, attempts = config.patrol_attempts, "no patrol target found");
    None
}
