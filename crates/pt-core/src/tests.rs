//! Unit tests for pt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TargetId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TargetId(100) > TargetId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(TargetId(3).to_string(), "target#3");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{WorldPos, angle_between, normalize_angle};

    #[test]
    fn distance_is_euclidean() {
        let a = WorldPos::new(0.0, 0.0);
        let b = WorldPos::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn bearing_axes() {
        let o = WorldPos::new(1.0, 1.0);
        assert!((o.bearing_to(WorldPos::new(2.0, 1.0)) - 0.0).abs() < 1e-6);
        assert!((o.bearing_to(WorldPos::new(1.0, 2.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((o.bearing_to(WorldPos::new(0.0, 1.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn offset_moves_along_angle() {
        let p = WorldPos::new(0.0, 0.0).offset(FRAC_PI_2, 2.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn angle_between_takes_short_arc() {
        // 350° vs 10° is 20° apart, not 340°.
        let a = 350f32.to_radians();
        let b = 10f32.to_radians();
        assert!((angle_between(a, b) - 20f32.to_radians()).abs() < 1e-5);
        assert!((angle_between(b, a) - 20f32.to_radians()).abs() < 1e-5);
        assert!((angle_between(0.0, PI) - PI).abs() < 1e-5);
        // Inputs outside [0, 2π) are fine.
        assert!((angle_between(-PI / 4.0, 3.0 * TAU + PI / 4.0) - PI / 2.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod time {
    use crate::time::ticks_for_secs;
    use crate::{SimConfig, Tick, TickClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.elapsed_secs(), 0.0);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn seconds_to_ticks_is_exact_for_whole_seconds() {
        assert_eq!(ticks_for_secs(1.0, 60), 60);
        assert_eq!(ticks_for_secs(2.0, 60), 120);
        assert_eq!(ticks_for_secs(0.1, 60), 6);
    }

    #[test]
    fn seconds_to_ticks_rounds_up() {
        assert_eq!(ticks_for_secs(0.01, 60), 1);
        assert_eq!(ticks_for_secs(1.01, 60), 61);
    }

    #[test]
    fn non_positive_durations_are_zero_ticks() {
        assert_eq!(ticks_for_secs(0.0, 60), 0);
        assert_eq!(ticks_for_secs(-3.0, 60), 0);
        assert_eq!(ticks_for_secs(f32::NAN, 60), 0);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 600, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(600));
        assert_eq!(cfg.make_clock().tick_rate_hz, 60);
    }
}

#[cfg(test)]
mod config {
    use crate::{DEFAULT_MAX_EXPANSIONS, PatrolConfig, PtError, SimConfig};

    #[test]
    fn defaults_are_valid() {
        PatrolConfig::default().validate().unwrap();
        SimConfig::default().validate().unwrap();
        assert_eq!(PatrolConfig::default().max_expansions, DEFAULT_MAX_EXPANSIONS);
    }

    #[test]
    fn rejects_negative_speed() {
        let cfg = PatrolConfig { chase_speed: -1.0, ..PatrolConfig::default() };
        assert!(matches!(cfg.validate(), Err(PtError::Config(_))));
    }

    #[test]
    fn rejects_wide_fov() {
        let cfg = PatrolConfig { fov_half_angle: 4.0, ..PatrolConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bias_above_one() {
        let cfg = PatrolConfig { interest_bias: 1.5, ..PatrolConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_expansion_cap() {
        let cfg = PatrolConfig { max_expansions: 0, ..PatrolConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let cfg = SimConfig { tick_rate_hz: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use std::f32::consts::TAU;

    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
            assert_eq!(r1.angle(), r2.angle());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<f32> = (0..4).map(|_| r0.unit()).collect();
        let b: Vec<f32> = (0..4).map(|_| r1.unit()).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = AgentRng::new(3, AgentId(5));
        for _ in 0..1_000 {
            assert!((0.0..1.0).contains(&rng.unit()));
            assert!((0.0..TAU).contains(&rng.angle()));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        assert!(rng.chance(7.0), "clamped to 1");
    }

    #[test]
    fn pick_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&[7]), Some(&7));

        let mut sim = SimRng::new(9);
        assert!(sim.pick(&empty).is_none());
        for _ in 0..100 {
            assert!(sim.pick(&[1, 2, 3]).is_some_and(|v| (1..=3).contains(v)));
        }
    }
}
