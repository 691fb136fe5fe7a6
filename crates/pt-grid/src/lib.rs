//! `pt-grid` — occupancy grid, layout loading, and path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`grid`]   | `Cell`, `CellKind`, `OccupancyGrid`                           |
//! | [`astar`]  | `PathFinder` trait, `Path`, `AStar`                           |
//! | [`loader`] | `Layout`, CSV placement loader, ASCII map parser              |
//! | [`error`]  | `GridError`, `GridResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod astar;
pub mod error;
pub mod grid;
pub mod loader;


pub use astar::{AStar, Path, PathFinder};
pub use error::{GridError, GridResult};
pub use grid::{Cell, CellKind, OccupancyGrid};
pub use loader::{Layout, load_layout_csv, load_layout_reader, parse_layout};
pub use pt_core::DEFAULT_MAX_EXPANSIONS;
