//! The `Sim` struct and its tick loop.

use pt_behavior::{Agent, BehaviorState, Patroller, Target, TickContext};
use pt_core::{AgentId, AgentRng, PtError, SimConfig, Tick, TickClock, TargetId, WorldPos};
use pt_grid::{AStar, Cell, CellKind, OccupancyGrid, PathFinder};

use crate::{ExposureTracker, SimObserver, SimResult};

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Counts for one tick, handed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:        Tick,
    pub patrolling:  usize,
    pub chasing:     usize,
    pub waiting:     usize,
    /// Agents whose state changed this tick.
    pub transitions: usize,
    /// Targets that crossed the exposure threshold this tick.
    pub spotted:     Vec<TargetId>,
}

/// Totals over one [`Sim::run`] or [`Sim::run_ticks`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:       u64,
    pub transitions: u64,
    pub spotted:     u64,
}

impl RunSummary {
    fn add(&mut self, tick: &TickSummary) {
        self.ticks       += 1;
        self.transitions += tick.transitions as u64;
        self.spotted     += tick.spotted.len() as u64;
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns every agent, the grid and the patroller, and advances them
/// one tick per [`step`][Self::step].  Target positions are supplied by the
/// caller each tick; the engine never moves targets.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathFinder = AStar> {
    /// Run configuration (tick rate, total ticks, seed, …).
    pub config: SimConfig,

    /// Current tick and seconds conversion.
    pub clock: TickClock,

    /// Every patroller, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Per-agent deterministic RNGs, parallel to `agents`.
    pub rngs: Vec<AgentRng>,

    pub(crate) grid: OccupancyGrid,

    pub points_of_interest: Vec<WorldPos>,

    /// Shared state machine; holds tuning only.
    pub patroller: Patroller<P>,

    pub exposure: ExposureTracker,
}

impl<P: PathFinder> Sim<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Look up one agent.
    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        self.agents
            .get(id.index())
            .ok_or_else(|| PtError::AgentNotFound(id).into())
    }

    /// Reclassify one cell.  Takes effect from the next tick on.
    ///
    /// # Errors
    /// `Grid(OutOfBounds)` if `cell` is outside the grid.
    pub fn set_cell(&mut self, cell: Cell, kind: CellKind) -> SimResult<()> {
        self.grid.set(cell, kind)?;
        tracing::debug!(%cell, %kind, tick = %self.clock.current_tick, "grid cell changed");
        Ok(())
    }

    pub fn set_points_of_interest(&mut self, pois: Vec<WorldPos>) {
        self.points_of_interest = pois;
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every agent by one tick against `targets`.
    ///
    /// `targets` is the snapshot for this tick: every agent sees the same
    /// positions regardless of update order.
    pub fn step<O: SimObserver>(&mut self, targets: &[Target], observer: &mut O) -> TickSummary {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let ctx = TickContext::new(now, &self.grid, targets, &self.points_of_interest);
        let mut summary = TickSummary { tick: now, ..TickSummary::default() };
        let mut seen: Vec<TargetId> = Vec::new();

        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            let outcome = self.patroller.update(agent, &ctx, rng);
            match outcome.state {
                BehaviorState::Patrolling => summary.patrolling += 1,
                BehaviorState::Chasing    => summary.chasing += 1,
                BehaviorState::Waiting    => summary.waiting += 1,
            }
            if outcome.transitioned() {
                summary.transitions += 1;
                observer.on_transition(now, agent, outcome.previous);
            }
            seen.extend(outcome.visible);
        }

        summary.spotted = self.exposure.record(targets, &seen);
        for &target in &summary.spotted {
            tracing::debug!(%target, tick = %now, "target spotted");
            observer.on_target_spotted(now, target);
        }

        observer.on_tick_end(now, &summary);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance();
        summary
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// `targets` is called once at the start of every tick with read-only
    /// access to the agents as they stood after the previous tick, and returns
    /// the target snapshot for that tick.
    pub fn run<F, O>(&mut self, mut targets: F, observer: &mut O) -> RunSummary
    where
        F: FnMut(Tick, &[Agent]) -> Vec<Target>,
        O: SimObserver,
    {
        let end = self.config.end_tick();
        tracing::info!(
            agents = self.agents.len(),
            start  = %self.clock.current_tick,
            end    = %end,
            seed   = self.config.seed,
            "simulation started"
        );

        let mut totals = RunSummary::default();
        while self.clock.current_tick < end {
            let snapshot = targets(self.clock.current_tick, &self.agents);
            let tick = self.step(&snapshot, observer);
            totals.add(&tick);
        }
        observer.on_sim_end(self.clock.current_tick);

        tracing::info!(
            ticks       = totals.ticks,
            transitions = totals.transitions,
            spotted     = totals.spotted,
            "simulation finished"
        );
        totals
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<F, O>(&mut self, n: u64, mut targets: F, observer: &mut O) -> RunSummary
    where
        F: FnMut(Tick, &[Agent]) -> Vec<Target>,
        O: SimObserver,
    {
        let mut totals = RunSummary::default();
        for _ in 0..n {
            let snapshot = targets(self.clock.current_tick, &self.agents);
            let tick = self.step(&snapshot, observer);
            totals.add(&tick);
        }
        totals
    }
}
