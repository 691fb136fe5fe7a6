//! Unit tests for pt-mobility.

#[cfg(test)]
mod helpers {
    use pt_core::WorldPos;
    use pt_grid::{OccupancyGrid, parse_layout};

    pub fn grid(map: &str) -> OccupancyGrid {
        parse_layout(map, 1.0).unwrap().grid
    }

    pub fn at(c: u32, r: u32) -> WorldPos {
        WorldPos::new(c as f32 + 0.5, r as f32 + 0.5)
    }

    pub fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }
}

// ── lerp_angle ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heading {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use super::helpers::close;
    use crate::lerp_angle;

    #[test]
    fn endpoints() {
        assert!(close(lerp_angle(1.0, 2.0, 0.0), 1.0));
        assert!(close(lerp_angle(1.0, 2.0, 1.0), 2.0));
        assert!(close(lerp_angle(1.0, 2.0, 0.5), 1.5));
    }

    #[test]
    fn crosses_zero_the_short_way() {
        // 350° → 10°: the short way is +20°, through 0.
        let from = 350f32.to_radians();
        let to   = 10f32.to_radians();
        let half = lerp_angle(from, to, 0.5);
        assert!(close(half, 0.0) || close(half, TAU), "got {half}");

        let quarter = lerp_angle(from, to, 0.25);
        assert!(close(quarter, 355f32.to_radians()), "got {quarter}");

        // And back the other way: 10° → 350° passes through 0 going down.
        let back = lerp_angle(to, from, 0.25);
        assert!(close(back, 5f32.to_radians()), "got {back}");
    }

    #[test]
    fn never_turns_more_than_half_a_circle() {
        for i in 0..36 {
            for j in 0..36 {
                let from = i as f32 * 10f32.to_radians();
                let to   = j as f32 * 10f32.to_radians();
                let step = lerp_angle(from, to, 0.1);
                let moved = pt_core::angle_between(step, from);
                let total = pt_core::angle_between(to, from);
                assert!(moved <= total * 0.1 + 1e-4, "{i} → {j}: moved {moved} of {total}");
            }
        }
    }

    #[test]
    fn result_is_normalised() {
        let a = lerp_angle(-FRAC_PI_2, -PI, 0.5);
        assert!((0.0..TAU).contains(&a));
        assert!(close(a, 1.25 * PI));
        assert!((0.0..TAU).contains(&lerp_angle(7.0 * PI, 0.0, 0.0)));
    }

    #[test]
    fn small_factor_turns_gradually() {
        let mut facing = 0.0;
        for _ in 0..10 {
            facing = lerp_angle(facing, FRAC_PI_2, 0.02);
        }
        assert!(facing > 0.0 && facing < FRAC_PI_2 * 0.2);
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use pt_core::WorldPos;

    use super::helpers::{at, close, grid};
    use crate::{StepOutcome, advance};

    #[test]
    fn moves_by_speed_towards_waypoint() {
        let g = grid("....");
        let StepOutcome::Moved(p) = advance(&g, at(0, 0), at(3, 0), 0.5) else {
            panic!("expected a move");
        };
        assert!(close(p.x, 1.0) && close(p.y, 0.5));
    }

    #[test]
    fn clamps_at_waypoint() {
        let g = grid("....");
        assert_eq!(advance(&g, at(0, 0), at(1, 0), 5.0), StepOutcome::Moved(at(1, 0)));
    }

    #[test]
    fn diagonal_step_has_length_speed() {
        let g = grid("...\n...\n...");
        let StepOutcome::Moved(p) = advance(&g, at(0, 0), at(2, 2), 1.0) else {
            panic!("expected a move");
        };
        assert!(close(at(0, 0).distance(p), 1.0));
    }

    #[test]
    fn rejects_step_into_obstacle() {
        let g = grid(".#..");
        assert_eq!(advance(&g, at(0, 0), at(1, 0), 1.0), StepOutcome::Blocked);
        // A short step that stays in the open cell is fine.
        assert!(matches!(advance(&g, at(0, 0), at(1, 0), 0.25), StepOutcome::Moved(_)));
    }

    #[test]
    fn rejects_step_off_grid() {
        let g = grid("..");
        assert_eq!(
            advance(&g, at(0, 0), WorldPos::new(-1.0, 0.5), 1.0),
            StepOutcome::Blocked
        );
    }

    #[test]
    fn concealment_is_walkable() {
        let g = grid(".~.");
        assert_eq!(advance(&g, at(0, 0), at(1, 0), 1.0), StepOutcome::Moved(at(1, 0)));
    }

    #[test]
    fn idle_when_on_waypoint_or_stopped() {
        let g = grid("..");
        assert_eq!(advance(&g, at(0, 0), at(0, 0), 1.0), StepOutcome::Idle);
        assert_eq!(advance(&g, at(0, 0), at(1, 0), 0.0), StepOutcome::Idle);
    }

    #[test]
    fn position_or_falls_back_to_start() {
        let start = at(0, 0);
        assert_eq!(StepOutcome::Blocked.position_or(start), start);
        assert_eq!(StepOutcome::Moved(at(1, 0)).position_or(start), at(1, 0));
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod navigator {
    use std::f32::consts::FRAC_PI_2;

    use pt_core::WorldPos;
    use pt_grid::{AStar, Cell};

    use super::helpers::{at, close, grid};
    use crate::{Navigator, StepOutcome};

    #[test]
    fn steps_towards_second_path_cell() {
        let g = grid("......");
        let nav = Navigator::<AStar>::default();
        let step = nav.step(&g, at(0, 0), at(5, 0), 1.0);
        assert_eq!(step.path.len(), 6);
        assert_eq!(step.path.next_step(), Some(Cell::new(1, 0)));
        assert_eq!(step.outcome, StepOutcome::Moved(at(1, 0)));
        assert!(close(step.heading.unwrap(), 0.0));
    }

    #[test]
    fn routes_around_walls() {
        let g = grid(
            "
            .#.
            .#.
            ...
            ",
        );
        let nav = Navigator::new(AStar::default());
        let step = nav.step(&g, at(0, 0), at(2, 0), 0.5);
        assert_eq!(step.path.next_step(), Some(Cell::new(0, 1)));
        assert!(close(step.heading.unwrap(), FRAC_PI_2));
        assert!(matches!(step.outcome, StepOutcome::Moved(p) if close(p.y, 1.0)));
    }

    #[test]
    fn unreachable_goal_leaves_agent_in_place() {
        let g = grid(".#.");
        let nav = Navigator::new(AStar::default());
        let step = nav.step(&g, at(0, 0), at(2, 0), 1.0);
        assert!(step.path.is_empty());
        assert_eq!(step.outcome, StepOutcome::Idle);
        assert_eq!(step.heading, None);
    }

    #[test]
    fn goal_in_own_cell_does_not_move() {
        let g = grid("...");
        let nav = Navigator::new(AStar::default());
        let step = nav.step(&g, at(1, 0), WorldPos::new(1.9, 0.9), 1.0);
        assert_eq!(step.path.len(), 1);
        assert_eq!(step.outcome, StepOutcome::Idle);
    }

    #[test]
    fn off_grid_goal_is_not_an_error() {
        let g = grid("...");
        let nav = Navigator::new(AStar::default());
        let step = nav.step(&g, at(0, 0), WorldPos::new(50.0, 50.0), 1.0);
        assert!(step.path.is_empty());
        assert_eq!(step.outcome, StepOutcome::Idle);
    }

    #[test]
    fn blocked_step_still_reports_heading() {
        // The diagonal is legal (one corner open) but the straight line from
        // this spot clips the obstacle.
        let g = grid(
            "
            .#
            ..
            ",
        );
        let nav = Navigator::new(AStar::default());
        let step = nav.step(&g, WorldPos::new(0.95, 0.05), at(1, 1), 0.2);
        assert_eq!(step.path.cells, vec![Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(step.outcome, StepOutcome::Blocked);
        assert!(step.heading.is_some());
    }
}
