//! `pt-vision` — who can see whom.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`cone`]  | `VisionCone` — range and angular half-width              |
//! | [`sight`] | `can_see`, `in_cone`, `line_of_sight` (ray marching)     |
//!
//! Everything here is a pure function of its inputs: no RNG, no caches, so
//! the same observer/target/grid always yields the same answer.

pub mod cone;
pub mod sight;

#[cfg(test)]
mod tests;

pub use cone::VisionCone;
pub use sight::{SAMPLES_PER_TILE, can_see, in_cone, line_of_sight};
