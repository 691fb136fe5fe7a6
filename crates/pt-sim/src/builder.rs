//! Fluent builder for constructing a [`Sim`].

use pt_behavior::{Agent, Patroller};
use pt_core::{AgentId, AgentRng, PatrolConfig, SimConfig, SimRng, WorldPos, time::ticks_for_secs};
use pt_grid::{CellKind, OccupancyGrid, PathFinder};

use crate::{ExposureTracker, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick rate, total ticks, seed, …
/// - [`PatrolConfig`] — perception, speed and patrol tuning
/// - [`OccupancyGrid`] — the map; its dimensions are fixed for the run
/// - agent count
/// - `P: PathFinder` — the search algorithm (e.g. [`pt_grid::AStar`])
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                  |
/// |----------------------------|------------------------------------------|
/// | `.points_of_interest(v)`   | None: patrols are purely random           |
/// | `.initial_positions(v)`    | Random `Empty` cells drawn from the seed |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, patrol, grid, 4, AStar::default())
///     .points_of_interest(pois)
///     .build()?;
/// ```
pub struct SimBuilder<P: PathFinder> {
    config:      SimConfig,
    patrol:      PatrolConfig,
    grid:        OccupancyGrid,
    agent_count: usize,
    finder:      P,
    pois:        Vec<WorldPos>,
    positions:   Option<Vec<WorldPos>>,
}

impl<P: PathFinder> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:      SimConfig,
        patrol:      PatrolConfig,
        grid:        OccupancyGrid,
        agent_count: usize,
        finder:      P,
    ) -> Self {
        Self {
            config,
            patrol,
            grid,
            agent_count,
            finder,
            pois:      Vec::new(),
            positions: None,
        }
    }

    /// Places patrollers are drawn towards.  Can be replaced later with
    /// [`Sim::set_points_of_interest`].
    pub fn points_of_interest(mut self, pois: Vec<WorldPos>) -> Self {
        self.pois = pois;
        self
    }

    /// Supply the spawn position of each agent (must be length
    /// `agent_count`, each on a walkable cell).
    pub fn initial_positions(mut self, positions: Vec<WorldPos>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place agents, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        self.patrol.validate()?;

        let mut sim_rng = SimRng::new(self.config.seed);

        // ── Resolve spawn positions ───────────────────────────────────────
        let positions = match self.positions {
            Some(p) => {
                if p.len() != self.agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                for (i, &position) in p.iter().enumerate() {
                    check_spawn(&self.grid, AgentId(i as u32), position)?;
                }
                p
            }
            None => random_spawns(&self.grid, self.agent_count, &mut sim_rng)?,
        };

        // ── Agents and their RNGs ─────────────────────────────────────────
        let mut agents = Vec::with_capacity(self.agent_count);
        let mut rngs   = Vec::with_capacity(self.agent_count);
        for (i, position) in positions.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let mut rng = AgentRng::new(self.config.seed, id);
            let facing = rng.angle();
            agents.push(Agent::new(id, position, facing, self.patrol.patrol_speed));
            rngs.push(rng);
        }

        let exposure = ExposureTracker::new(ticks_for_secs(
            self.config.exposure_secs,
            self.config.tick_rate_hz,
        ));
        let patroller = Patroller::with_finder(self.patrol, self.config.tick_rate_hz, self.finder);

        tracing::debug!(
            agents = agents.len(),
            width  = self.grid.width(),
            height = self.grid.height(),
            points_of_interest = self.pois.len(),
            "simulation built"
        );

        Ok(Sim {
            clock:              self.config.make_clock(),
            config:             self.config,
            agents,
            rngs,
            grid:               self.grid,
            points_of_interest: self.pois,
            patroller,
            exposure,
        })
    }
}

fn check_spawn(grid: &OccupancyGrid, agent: AgentId, position: WorldPos) -> SimResult<()> {
    let Ok(cell) = grid.cell_at(position) else {
        return Err(SimError::InvalidSpawn { agent, position, reason: "outside the grid" });
    };
    if !grid.is_walkable(cell) {
        return Err(SimError::InvalidSpawn { agent, position, reason: "inside an obstacle" });
    }
    Ok(())
}

/// Uniformly random `Empty` cell centres, one per agent.  Agents may share a
/// cell.
fn random_spawns(grid: &OccupancyGrid, count: usize, rng: &mut SimRng) -> SimResult<Vec<WorldPos>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let open: Vec<_> = grid.cells_of(CellKind::Empty).collect();
    (0..count)
        .map(|_| {
            rng.pick(&open)
                .map(|&cell| grid.cell_center(cell))
                .ok_or_else(|| SimError::Config("grid has no empty cell to spawn agents on".into()))
        })
        .collect()
}
