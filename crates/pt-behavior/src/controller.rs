//! The patrol / chase / wait state machine.

use pt_core::{AgentRng, PatrolConfig, TargetId, time::ticks_for_secs};
use pt_grid::{AStar, Path, PathFinder};
use pt_mobility::{Navigator, lerp_angle};
use pt_vision::{VisionCone, can_see};

use crate::{Agent, BehaviorState, Target, TickContext, select_patrol_target};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What happened to one agent during one [`Patroller::update`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// State at the start of the tick.
    pub previous: BehaviorState,

    /// State at the end of the tick.
    pub state: BehaviorState,

    /// The target being pursued this tick, if any.
    pub chased: Option<TargetId>,

    /// Every target this agent could see, in input order.  Includes targets
    /// outside the detection range, and is filled while waiting too.
    pub visible: Vec<TargetId>,
}

impl TickOutcome {
    #[inline]
    pub fn transitioned(&self) -> bool {
        self.previous != self.state
    }
}

// ── Patroller ─────────────────────────────────────────────────────────────────

/// Drives agents through one tick at a time.
///
/// One `Patroller` serves every agent of a run: it holds only configuration
/// and the search algorithm, never per-agent state, so updating agents in any
/// order gives the same result for each.
///
/// # Type parameter
///
/// `P` is the path search used both for movement and for validating random
/// patrol goals (default [`AStar`]).
#[derive(Debug, Clone)]
pub struct Patroller<P: PathFinder = AStar> {
    config:     PatrolConfig,
    cone:       VisionCone,
    navigator:  Navigator<P>,
    wait_ticks: u32,
}

impl Patroller<AStar> {
    /// A patroller using A* capped at `config.max_expansions`.
    pub fn new(config: PatrolConfig, tick_rate_hz: u32) -> Self {
        let finder = AStar::new(config.max_expansions);
        Self::with_finder(config, tick_rate_hz, finder)
    }
}

impl<P: PathFinder> Patroller<P> {
    pub fn with_finder(config: PatrolConfig, tick_rate_hz: u32, finder: P) -> Self {
        Self {
            cone:       VisionCone::from_config(&config),
            wait_ticks: ticks_for_secs(config.wait_secs, tick_rate_hz),
            navigator:  Navigator::new(finder),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    /// Length of a search-the-spot wait in ticks.
    #[inline]
    pub fn wait_ticks(&self) -> u32 {
        self.wait_ticks
    }

    /// Advance `agent` by one tick.
    pub fn update(
        &self,
        agent: &mut Agent,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> TickOutcome {
        let mut outcome = TickOutcome {
            previous: agent.state,
            state:    agent.state,
            chased:   None,
            visible:  Vec::new(),
        };

        // ── ① Waiting ─────────────────────────────────────────────────────
        if agent.wait_ticks > 0 {
            agent.wait_ticks -= 1;
            if agent.wait_ticks > 0 {
                // Frozen in place, but still looking: what it sees counts
                // towards exposure even though it cannot start a chase.
                self.perceive(agent, ctx, &mut outcome.visible);
                return outcome;
            }
            agent.last_known = None;
        }

        // ── ② Perception ──────────────────────────────────────────────────
        let nearest = self.perceive(agent, ctx, &mut outcome.visible);

        // ── ③ Decide ──────────────────────────────────────────────────────
        let mut look_at = None;
        if let Some(target) = nearest {
            agent.state      = BehaviorState::Chasing;
            agent.last_known = Some(target.position);
            agent.speed      = self.config.chase_speed;
            outcome.chased   = Some(target.id);
            if agent.position != target.position {
                look_at = Some(agent.position.bearing_to(target.position));
            }
        } else {
            let arrival_radius = self.config.arrival_radius_cells * ctx.grid.tile_size();
            let arrived = agent
                .goal()
                .is_some_and(|goal| agent.position.distance(goal) < arrival_radius);

            if arrived || agent.goal().is_none() {
                if agent.last_known.take().is_some() && self.wait_ticks > 0 {
                    agent.state       = BehaviorState::Waiting;
                    agent.wait_ticks  = self.wait_ticks;
                    agent.patrol_goal = None;
                    agent.path        = Path::empty();
                    return self.finish(agent, outcome);
                }
                agent.patrol_goal = select_patrol_target(
                    agent,
                    ctx.points_of_interest,
                    ctx.grid,
                    &self.config,
                    &self.navigator.finder,
                    rng,
                );
                agent.speed = self.config.patrol_speed;
                agent.state = BehaviorState::Patrolling;
            }
        }

        // ── ④ Move and turn ───────────────────────────────────────────────
        match agent.goal() {
            Some(goal) => {
                let step = self.navigator.step(ctx.grid, agent.position, goal, agent.speed);
                agent.position = step.outcome.position_or(agent.position);
                if let Some(direction) = look_at.or(step.heading) {
                    agent.facing = lerp_angle(agent.facing, direction, self.config.turn_factor);
                }
                agent.path = step.path;
            }
            None => agent.path = Path::empty(),
        }

        self.finish(agent, outcome)
    }

    /// Record every visible target and return the nearest one inside the
    /// detection range.  Ties keep the earlier target.
    fn perceive<'t>(
        &self,
        agent:   &Agent,
        ctx:     &TickContext<'t>,
        visible: &mut Vec<TargetId>,
    ) -> Option<&'t Target> {
        let mut nearest: Option<(&'t Target, f32)> = None;
        for target in ctx.targets {
            if !can_see(ctx.grid, agent.position, agent.facing, &self.cone, target.position) {
                continue;
            }
            visible.push(target.id);
            let distance = agent.position.distance(target.position);
            if distance < self.config.detection_range
                && nearest.is_none_or(|(_, best)| distance < best)
            {
                nearest = Some((target, distance));
            }
        }
        nearest.map(|(target, _)| target)
    }

    fn finish(&self, agent: &Agent, mut outcome: TickOutcome) -> TickOutcome {
        outcome.state = agent.state;
        if outcome.transitioned() {
            tracing::debug!(
                agent = %agent.id,
                from  = %outcome.previous,
                to    = %outcome.state,
                position = %agent.position,
                "behavior transition"
            );
        }
        outcome
    }
}
