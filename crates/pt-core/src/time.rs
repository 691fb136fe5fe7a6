//! Tick counter and the seconds ↔ ticks conversion.
//!
//! Every timer in the engine (wait durations, exposure thresholds) counts
//! whole ticks, so countdowns are exact and replay identically.  Durations
//! configured in seconds are converted once, when the simulation is built,
//! with [`ticks_for_secs`].

use std::fmt;

/// An absolute simulation tick.  Tick 0 is the first update.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Current tick plus the fixed update rate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    pub tick_rate_hz: u32,
    /// The tick the next update will run as.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self { tick_rate_hz, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Simulated seconds covered by the ticks run so far.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 / self.tick_rate_hz as f64
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} Hz", self.current_tick, self.tick_rate_hz)
    }
}

/// Number of whole ticks spanning `secs` at `tick_rate_hz`.
///
/// Rounds up so a timer never expires early.  Zero, negative and NaN
/// durations are zero ticks.
pub fn ticks_for_secs(secs: f32, tick_rate_hz: u32) -> u32 {
    if secs.is_nan() || secs <= 0.0 {
        return 0;
    }
    // Snap f32 noise first: 1.0 s at 60 Hz must be 60, not 61.
    let raw = secs as f64 * tick_rate_hz as f64;
    ((raw * 1e6).round() / 1e6).ceil() as u32
}
