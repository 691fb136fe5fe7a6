//! Unit tests for pt-vision.

#[cfg(test)]
mod helpers {
    use pt_core::WorldPos;
    use pt_grid::{OccupancyGrid, parse_layout};

    pub fn grid(map: &str) -> OccupancyGrid {
        parse_layout(map, 1.0).unwrap().grid
    }

    /// Centre of cell `(c, r)` on a tile-size-1 grid.
    pub fn at(c: u32, r: u32) -> WorldPos {
        WorldPos::new(c as f32 + 0.5, r as f32 + 0.5)
    }
}

// ── Cone ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cone {
    use pt_core::PatrolConfig;

    use crate::VisionCone;

    #[test]
    fn from_config_copies_range_and_angle() {
        let cfg = PatrolConfig { max_range: 120.0, fov_half_angle: 0.5, ..PatrolConfig::default() };
        let cone = VisionCone::from_config(&cfg);
        assert_eq!(cone, VisionCone::new(120.0, 0.5));
    }

    #[test]
    fn default_cone_is_35_degrees_300_units() {
        let cone = VisionCone::default();
        assert_eq!(cone.max_range, 300.0);
        assert!((cone.half_angle - 35f32.to_radians()).abs() < 1e-6);
    }
}

// ── can_see ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod can_see {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use pt_core::WorldPos;
    use pt_grid::{Cell, CellKind, OccupancyGrid};

    use super::helpers::{at, grid};
    use crate::{VisionCone, can_see, in_cone, line_of_sight};

    fn wide() -> VisionCone {
        VisionCone::new(10.0, FRAC_PI_2)
    }

    #[test]
    fn clear_target_ahead_is_visible() {
        let g = OccupancyGrid::new(10, 10, 1.0);
        assert!(can_see(&g, at(0, 0), 0.0, &wide(), at(5, 0)));
    }

    #[test]
    fn obstacle_on_the_line_blocks() {
        let mut g = OccupancyGrid::new(10, 10, 1.0);
        g.set(Cell::new(2, 0), CellKind::Obstacle).unwrap();
        g.set(Cell::new(3, 0), CellKind::Obstacle).unwrap();
        assert!(!can_see(&g, at(0, 0), 0.0, &wide(), at(5, 0)));
    }

    #[test]
    fn single_obstacle_cell_blocks() {
        let g = grid("...#....");
        assert!(!can_see(&g, at(0, 0), 0.0, &wide(), at(6, 0)));
        assert!(can_see(&g, at(0, 0), 0.0, &wide(), at(2, 0)), "target in front of the wall");
    }

    #[test]
    fn beyond_range_is_invisible_regardless_of_obstacles() {
        let g = OccupancyGrid::new(10, 10, 1.0);
        let short = VisionCone::new(3.0, FRAC_PI_2);
        assert!(!can_see(&g, at(0, 0), 0.0, &short, at(5, 0)));
        assert!(can_see(&g, at(0, 0), 0.0, &short, at(3, 0)));
    }

    #[test]
    fn outside_half_angle_is_invisible() {
        let g = OccupancyGrid::new(10, 10, 1.0);
        let narrow = VisionCone::new(10.0, FRAC_PI_4);
        // Straight "down" (+y) is 90° off an east-facing observer.
        assert!(!can_see(&g, at(0, 0), 0.0, &narrow, at(0, 5)));
        // Facing down, it is dead ahead.
        assert!(can_see(&g, at(0, 0), FRAC_PI_2, &narrow, at(0, 5)));
    }

    #[test]
    fn target_behind_is_invisible() {
        let g = OccupancyGrid::new(10, 10, 1.0);
        assert!(!can_see(&g, at(5, 5), PI, &wide(), at(8, 5)));
    }

    #[test]
    fn cone_wraps_across_zero() {
        let g = OccupancyGrid::new(10, 10, 1.0);
        let cone = VisionCone::new(10.0, 35f32.to_radians());
        let facing = 350f32.to_radians();
        // Target slightly "below" east: bearing ≈ 11°, 21° off the facing.
        assert!(can_see(&g, at(0, 0), facing, &cone, WorldPos::new(5.5, 1.5)));
        assert!(in_cone(at(0, 0), facing, &cone, WorldPos::new(5.5, 1.5)));
    }

    #[test]
    fn target_hiding_in_concealment_is_invisible() {
        let g = grid("....~.");
        assert!(!can_see(&g, at(0, 0), 0.0, &wide(), at(4, 0)));
    }

    #[test]
    fn concealment_between_blocks_sight() {
        let g = grid("..~...");
        assert!(!can_see(&g, at(0, 0), 0.0, &wide(), at(5, 0)));
    }

    #[test]
    fn observer_in_concealment_can_see_out() {
        let g = grid("~.....");
        assert!(can_see(&g, at(0, 0), 0.0, &wide(), at(5, 0)));
    }

    #[test]
    fn coincident_target_is_visible() {
        let g = grid("~");
        assert!(can_see(&g, at(0, 0), PI, &wide(), at(0, 0)));
    }

    #[test]
    fn target_off_grid_is_invisible() {
        let g = OccupancyGrid::new(4, 1, 1.0);
        assert!(!line_of_sight(&g, at(0, 0), WorldPos::new(6.5, 0.5)));
    }

    #[test]
    fn ray_samples_at_quarter_tiles() {
        // A one-cell-wide pillar at column 3 must be caught on a diagonal
        // that only clips through it for a fraction of a tile.
        let g = grid(
            "
            ......
            ...#..
            ......
            ",
        );
        assert!(!line_of_sight(&g, at(0, 0), at(5, 2)));
        assert!(line_of_sight(&g, at(0, 2), at(5, 2)));
    }

    #[test]
    fn world_scale_scenario() {
        // 16x12 garden with 50-unit tiles and the default cone.
        let g = OccupancyGrid::new(16, 12, 50.0);
        let cone = VisionCone::default();
        let observer = WorldPos::new(25.0, 25.0);
        assert!(can_see(&g, observer, 0.0, &cone, WorldPos::new(275.0, 25.0)));
        assert!(!can_see(&g, observer, 0.0, &cone, WorldPos::new(375.0, 25.0)), "out of range");
        assert!(!can_see(&g, observer, 0.0, &cone, WorldPos::new(125.0, 175.0)), "outside 35°");
    }

    #[test]
    fn repeated_queries_agree() {
        let g = grid(
            "
            ..#...
            ......
            .~....
            ",
        );
        for _ in 0..10 {
            assert_eq!(
                can_see(&g, at(0, 1), 0.3, &wide(), at(5, 2)),
                can_see(&g, at(0, 1), 0.3, &wide(), at(5, 2)),
            );
        }
    }
}
