//! `pt-behavior` — the per-tick brain of a patroller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`agent`]      | `Agent`, `BehaviorState`, `Target`                            |
//! | [`context`]    | `TickContext<'a>` — read-only world snapshot for one tick     |
//! | [`patrol`]     | `select_patrol_target` — where to wander when nothing is seen |
//! | [`controller`] | `Patroller<P>` — the state machine; `TickOutcome`             |
//!
//! # State machine
//!
//! ```text
//!             target visible
//!   Patrolling ───────────────▶ Chasing ◀──┐ target still visible
//!       ▲                          │  └─────┘
//!       │ timer expires            │ reached last-known spot, nothing seen
//!       │                          ▼
//!       └─────────────────────── Waiting
//! ```
//!
//! Each tick, in order:
//!
//! 1. A waiting agent only counts its timer down.  On the tick the timer hits
//!    zero it falls through to step 2.
//! 2. Every target is tested with [`pt_vision::can_see`]; the nearest visible
//!    one inside the detection range is chased.  Its live position becomes
//!    the goal, so pursuit tracks a moving target.
//! 3. With nothing seen: an agent that reaches its last-known target position
//!    starts waiting; an agent that reaches its patrol goal, or has no goal,
//!    picks a new patrol goal.
//! 4. The agent routes to its goal and takes one step
//!    ([`pt_mobility::Navigator`]), then turns a little towards the target it
//!    is chasing or towards its route.
//!
//! Agents share nothing: all cross-agent data reaches the controller through
//! `TickContext`, which the caller snapshots before updating anyone.

pub mod agent;
pub mod context;
pub mod controller;
pub mod patrol;


pub use agent::{Agent, BehaviorState, Target};
pub use context::TickContext;
pub use controller::{Patroller, TickOutcome};
pub use patrol::select_patrol_target;
