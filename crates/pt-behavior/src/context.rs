//! Read-only world snapshot passed to every controller call.

use pt_core::{Tick, WorldPos};
use pt_grid::OccupancyGrid;

use crate::Target;

/// Everything an agent may look at during one tick.
///
/// Built once per tick by the caller and shared by every agent update, so no
/// agent ever observes another agent's or target's mid-tick state.  The grid
/// is borrowed immutably for the whole tick; edits happen between ticks.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    pub tick: Tick,

    pub grid: &'a OccupancyGrid,

    /// Target positions as of the start of the tick.  Order matters: among
    /// equally near visible targets the first one wins.
    pub targets: &'a [Target],

    /// Places patrollers like to check on.
    pub points_of_interest: &'a [WorldPos],
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:               Tick,
        grid:               &'a OccupancyGrid,
        targets:            &'a [Target],
        points_of_interest: &'a [WorldPos],
    ) -> Self {
        Self { tick, grid, targets, points_of_interest }
    }
}
