//! `pt-sim` — runs every patroller, tick by tick.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Targets   — the caller supplies this tick's target positions; they are
//!                 frozen for the whole tick.
//!   ② Agents    — Patroller::update for each agent in ascending AgentId
//!                 order, all reading the same grid and target snapshot.
//!   ③ Exposure  — targets seen by any agent accumulate visible ticks; a
//!                 target visible for longer than the threshold is spotted.
//!   ④ Observer  — transition, spotted, tick-end and snapshot hooks.
//! ```
//!
//! The grid may only change between ticks, through [`Sim::set_cell`].
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for exposure counters.         |
//! | `serde`   | Serde derives on the underlying agent and config types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pt_core::{PatrolConfig, SimConfig};
//! use pt_grid::{AStar, parse_layout};
//! use pt_sim::{NoopObserver, SimBuilder};
//!
//! let layout = parse_layout(MAP, 50.0)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), PatrolConfig::default(), layout.grid, 4, AStar::default())
//!     .points_of_interest(layout.points_of_interest)
//!     .build()?;
//! sim.run(|_tick, _agents| intruders.clone(), &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod exposure;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use exposure::ExposureTracker;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim, TickSummary};
