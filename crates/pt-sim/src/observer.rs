//! Simulation observer trait for progress reporting and data collection.

use pt_behavior::{Agent, BehaviorState};
use pt_core::{TargetId, Tick};

use crate::TickSummary;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — alarm counter
///
/// ```rust,ignore
/// struct Alarms(u32);
///
/// impl SimObserver for Alarms {
///     fn on_target_spotted(&mut self, tick: Tick, target: TargetId) {
///         self.0 += 1;
///         println!("{tick}: {target} spotted");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is updated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called right after `agent` changed behavior state.  `agent.state` is
    /// the new state.
    fn on_transition(&mut self, _tick: Tick, _agent: &Agent, _previous: BehaviorState) {}

    /// Called when a target has stayed in some agent's sight for longer than
    /// the exposure threshold.  Fires once per exposure streak.
    fn on_target_spotted(&mut self, _tick: Tick, _target: TargetId) {}

    /// Called at the end of each tick with that tick's counts.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to every agent, for position dumps and visualisation.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent]) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
