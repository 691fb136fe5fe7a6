//! Scripted intruders: pure functions of the tick, so every run sees the
//! same movements.

use std::f32::consts::TAU;

use pt_behavior::Target;
use pt_core::{TargetId, Tick, WorldPos};

/// Back and forth along a straight segment at constant speed.
struct Shuttle {
    from:  WorldPos,
    to:    WorldPos,
    speed: f32,
}

impl Shuttle {
    fn at(&self, tick: Tick) -> WorldPos {
        let length = self.from.distance(self.to);
        if length == 0.0 {
            return self.from;
        }
        let travelled = (tick.0 as f32 * self.speed) % (2.0 * length);
        let along = if travelled <= length { travelled } else { 2.0 * length - travelled };
        let k = along / length;
        WorldPos::new(
            self.from.x + (self.to.x - self.from.x) * k,
            self.from.y + (self.to.y - self.from.y) * k,
        )
    }
}

/// Circles a fixed centre.
struct Orbit {
    centre:       WorldPos,
    radius:       f32,
    period_ticks: u64,
}

impl Orbit {
    fn at(&self, tick: Tick) -> WorldPos {
        let phase = (tick.0 % self.period_ticks) as f32 / self.period_ticks as f32;
        self.centre.offset(phase * TAU, self.radius)
    }
}

/// Where every intruder stands at `tick`.
pub fn positions(tick: Tick) -> Vec<Target> {
    let runner = Shuttle {
        from:  WorldPos::new(75.0, 275.0),
        to:    WorldPos::new(725.0, 275.0),
        speed: 0.8,
    };
    let lurker = Orbit {
        centre:       WorldPos::new(400.0, 400.0),
        radius:       100.0,
        period_ticks: 1_200,
    };
    vec![
        Target::new(TargetId(0), runner.at(tick)),
        Target::new(TargetId(1), lurker.at(tick)),
    ]
}
