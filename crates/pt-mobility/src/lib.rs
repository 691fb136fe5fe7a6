//! `pt-mobility` — how an agent physically moves through the grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`motion`]    | `advance` — one clamped, obstacle-checked step; `StepOutcome` |
//! | [`heading`]   | `lerp_angle` — shortest-arc facing interpolation              |
//! | [`navigator`] | `Navigator<P>` — route to a goal, then take one step          |
//!
//! # Movement model
//!
//! Agents live in continuous world space but navigate cell by cell:
//!
//! 1. `Navigator::step` converts the agent's position and goal into cells and
//!    asks a pluggable [`PathFinder`][pt_grid::PathFinder] for a route.
//! 2. The agent steers towards the centre of the route's *second* cell (the
//!    first is the cell it already occupies).
//! 3. `advance` moves at most `speed` world units, never past the waypoint,
//!    and refuses a step whose end point lands off the grid or on an
//!    `Obstacle`.
//!
//! Routes are recomputed every tick and never cached, because chase goals
//! move.

pub mod heading;
pub mod motion;
pub mod navigator;

#[cfg(test)]
mod tests;

pub use heading::lerp_angle;
pub use motion::{StepOutcome, advance};
pub use navigator::{NavStep, Navigator};
