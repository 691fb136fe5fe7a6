//! Route-then-step: the per-tick movement primitive the behavior controller
//! drives.

use pt_core::WorldPos;
use pt_grid::{AStar, Path, PathFinder, OccupancyGrid};

use crate::{StepOutcome, advance};

/// Everything one navigation step produced.
#[derive(Debug, Clone, PartialEq)]
pub struct NavStep {
    /// The route computed this tick.  Empty when no route exists.
    pub path: Path,

    /// What happened to the agent's position.
    pub outcome: StepOutcome,

    /// Bearing from the starting position towards the waypoint, if the agent
    /// had somewhere to go.  Reported even when the step was blocked so the
    /// agent keeps turning towards its route.
    pub heading: Option<f32>,
}

impl NavStep {
    fn stuck(path: Path) -> Self {
        Self { path, outcome: StepOutcome::Idle, heading: None }
    }
}

/// Wraps a [`PathFinder`] to turn "go to this world position" into one tick
/// of movement.
///
/// # Type parameter
///
/// `P` is the search algorithm (default [`AStar`]).  Swap it at compile time
/// for another search with no runtime overhead.
#[derive(Debug, Clone, Default)]
pub struct Navigator<P: PathFinder = AStar> {
    pub finder: P,
}

impl<P: PathFinder> Navigator<P> {
    pub fn new(finder: P) -> Self {
        Self { finder }
    }

    /// Route from `from` to `goal` and advance one step along the route.
    ///
    /// An off-grid start or goal, or a goal with no route, leaves the agent
    /// in place with an empty path.  That is a normal outcome, not an error:
    /// the caller simply tries again next tick.
    pub fn step(&self, grid: &OccupancyGrid, from: WorldPos, goal: WorldPos, speed: f32) -> NavStep {
        let (Ok(start), Ok(end)) = (grid.cell_at(from), grid.cell_at(goal)) else {
            return NavStep::stuck(Path::empty());
        };

        let path = self.finder.find_path(grid, start, end);
        let Some(next) = path.next_step() else {
            return NavStep::stuck(path);
        };

        let waypoint = grid.cell_center(next);
        let heading  = (from != waypoint).then(|| from.bearing_to(waypoint));
        let outcome  = advance(grid, from, waypoint, speed);
        NavStep { path, outcome, heading }
    }
}
