//! garden — headless patrol demo.
//!
//! Four patrollers guard a 16 × 12 garden (50-unit tiles) against two
//! scripted intruders: one sprints back and forth across the middle, the
//! other circles the shed.  Every transition and every "spotted"
//! alarm is logged through `tracing`; set `RUST_LOG=debug` for per-agent
//! detail.
//!
//! Usage:
//!
//! ```text
//! garden [config.json]
//! ```
//!
//! The optional JSON file overrides any subset of the run and patrol
//! settings:
//!
//! ```json
//! { "sim": { "seed": 7, "total_ticks": 7200 }, "patrol": { "chase_speed": 1.5 } }
//! ```

mod intruders;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use pt_behavior::{Agent, BehaviorState};
use pt_core::{PatrolConfig, SimConfig, TargetId, Tick};
use pt_grid::{AStar, load_layout_reader};
use pt_sim::{SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:  usize = 4;
const GRID_WIDTH:   u32   = 16;
const GRID_HEIGHT:  u32   = 12;
const TILE_SIZE:    f32   = 50.0;

// ── Layout CSV ────────────────────────────────────────────────────────────────

// Rocks and the shed are obstacles, hedges are concealment, flower beds are
// points of interest.
const GARDEN_CSV: &str = "\
col,row,kind\n\
3,2,obstacle\n\
4,2,obstacle\n\
3,3,obstacle\n\
11,2,obstacle\n\
12,2,obstacle\n\
12,3,obstacle\n\
7,7,obstacle\n\
8,7,obstacle\n\
7,8,obstacle\n\
8,8,obstacle\n\
0,6,concealment\n\
1,6,concealment\n\
14,6,concealment\n\
15,6,concealment\n\
5,10,concealment\n\
6,10,concealment\n\
10,10,concealment\n\
2,9,interest\n\
13,9,interest\n\
8,1,interest\n\
8,4,interest\n\
";

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:    SimConfig,
    patrol: PatrolConfig,
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig {
            sim: SimConfig { seed: 42, ..SimConfig::default() },
            ..DemoConfig::default()
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct GardenObserver {
    transitions: BTreeMap<(BehaviorState, BehaviorState), u32>,
    alarms:      Vec<(Tick, TargetId)>,
    chase_ticks: u64,
}

impl SimObserver for GardenObserver {
    fn on_transition(&mut self, tick: Tick, agent: &Agent, previous: BehaviorState) {
        *self.transitions.entry((previous, agent.state)).or_insert(0) += 1;
        tracing::debug!(%tick, agent = %agent.id, from = %previous, to = %agent.state, "transition");
    }

    fn on_target_spotted(&mut self, tick: Tick, target: TargetId) {
        self.alarms.push((tick, target));
        tracing::info!(%tick, %target, "intruder spotted");
    }

    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.chase_ticks += summary.chasing as u64;
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent]) {
        for agent in agents {
            tracing::trace!(
                %tick,
                agent  = %agent.id,
                state  = %agent.state,
                x      = agent.position.x,
                y      = agent.position.y,
                facing = agent.facing.to_degrees(),
                "snapshot"
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration.
    let config_path = std::env::args().nth(1);
    let demo = load_config(config_path.as_deref().map(Path::new))?;
    tracing::info!(
        seed  = demo.sim.seed,
        ticks = demo.sim.total_ticks,
        hz    = demo.sim.tick_rate_hz,
        "configuration loaded"
    );

    // 2. Garden layout.
    let layout = load_layout_reader(Cursor::new(GARDEN_CSV), GRID_WIDTH, GRID_HEIGHT, TILE_SIZE)?;
    tracing::info!(
        width  = layout.grid.width(),
        height = layout.grid.height(),
        points_of_interest = layout.points_of_interest.len(),
        "garden loaded"
    );

    // 3. Build sim.
    let finder = AStar::new(demo.patrol.max_expansions);
    let mut sim = SimBuilder::new(demo.sim, demo.patrol, layout.grid, AGENT_COUNT, finder)
        .points_of_interest(layout.points_of_interest)
        .build()?;

    // 4. Run.
    let mut obs = GardenObserver::default();
    let t0 = Instant::now();
    let totals = sim.run(|tick, _agents| intruders::positions(tick), &mut obs);
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!(
        "Simulated {} ticks ({:.1} s of game time) in {:.3} s",
        totals.ticks,
        sim.clock.elapsed_secs(),
        elapsed.as_secs_f64()
    );
    println!("  transitions : {}", totals.transitions);
    println!("  alarms      : {}", obs.alarms.len());
    println!("  chase ticks : {}", obs.chase_ticks);
    for ((from, to), n) in &obs.transitions {
        println!("    {from:<10} → {to:<10} {n}");
    }
    println!();

    // 6. Final agent table.
    println!("{:<10} {:<11} {:>8} {:>8} {:>7}", "Agent", "State", "x", "y", "facing");
    println!("{}", "-".repeat(48));
    for agent in &sim.agents {
        println!(
            "{:<10} {:<11} {:>8.1} {:>8.1} {:>6.0}°",
            agent.id.0,
            agent.state,
            agent.position.x,
            agent.position.y,
            agent.facing.to_degrees(),
        );
    }

    Ok(())
}
