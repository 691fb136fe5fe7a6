//! Line-of-sight resolution.
//!
//! A target is visible when three checks pass, cheapest first:
//!
//! 1. **Range** — Euclidean distance ≤ `max_range`.
//! 2. **Cone** — shortest-arc difference between the bearing to the target
//!    and the observer's facing ≤ `half_angle`.
//! 3. **Occlusion** — a ray marched from observer to target in quarter-tile
//!    steps touches no `Obstacle` or `Concealment` cell.  Samples in the
//!    observer's own cell are skipped; samples outside the grid count as
//!    blocked.  The target's own cell *is* sampled, which is what makes a
//!    target standing in cover invisible.

use pt_core::{WorldPos, angle_between};
use pt_grid::OccupancyGrid;

use crate::VisionCone;

/// Ray samples per tile edge.
pub const SAMPLES_PER_TILE: f32 = 4.0;

/// Full visibility test: range, cone, then occlusion.
///
/// A target exactly on the observer's position is always visible.
pub fn can_see(
    grid:     &OccupancyGrid,
    observer: WorldPos,
    facing:   f32,
    cone:     &VisionCone,
    target:   WorldPos,
) -> bool {
    let distance = observer.distance(target);
    if distance > cone.max_range {
        return false;
    }
    if distance == 0.0 {
        return true;
    }
    in_cone(observer, facing, cone, target) && line_of_sight(grid, observer, target)
}

/// Angular test only: is `target` within the cone's half-angle of `facing`?
#[inline]
pub fn in_cone(observer: WorldPos, facing: f32, cone: &VisionCone, target: WorldPos) -> bool {
    angle_between(observer.bearing_to(target), facing) <= cone.half_angle
}

/// Occlusion test only: is the straight segment `from → to` unobstructed?
pub fn line_of_sight(grid: &OccupancyGrid, from: WorldPos, to: WorldPos) -> bool {
    let distance = from.distance(to);
    let step_len = grid.tile_size() / SAMPLES_PER_TILE;
    let steps = (distance / step_len).ceil() as u32;
    if steps == 0 {
        return true;
    }

    let own_cell = grid.cell_at(from).ok();
    let (dx, dy) = ((to.x - from.x) / steps as f32, (to.y - from.y) / steps as f32);

    (1..=steps).all(|i| {
        let sample = WorldPos::new(from.x + dx * i as f32, from.y + dy * i as f32);
        let Ok(cell) = grid.cell_at(sample) else {
            return false;
        };
        if Some(cell) == own_cell {
            return true;
        }
        grid.classification(cell).is_ok_and(|kind| !kind.blocks_sight())
    })
}
