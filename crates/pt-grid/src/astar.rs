//! Path search trait and default A* implementation.
//!
//! # Pluggability
//!
//! The behavior controller calls routing via the [`PathFinder`] trait, so
//! applications can swap in other searches (jump point search, cached flow
//! fields) without touching the controller.  The default [`AStar`] uses
//! the movement model below.
//!
//! # Movement model
//!
//! - 8-directional moves, every move costs 1 (diagonals are not penalised).
//! - Manhattan-distance heuristic.  This over-estimates for diagonal moves, so
//!   it is inadmissible and returned paths are not guaranteed shortest when
//!   obstacles force a detour.  Kept as-is: agent timing depends on it.
//! - A diagonal step is refused only when *both* orthogonal corner cells are
//!   `Obstacle`; one blocked corner still lets an agent slip past.
//! - Search stops after [`AStar::max_expansions`] expansions and reports no
//!   path, so a query costs a bounded amount of work on any grid.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pt_core::DEFAULT_MAX_EXPANSIONS;

use crate::{Cell, CellKind, OccupancyGrid};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered list of cells from start (inclusive) to goal (inclusive).
///
/// An empty path means "no path found".  There is no separate absent case, so
/// callers check the length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Cell>,
}

impl Path {
    #[inline]
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell after the start: where an agent should head next.
    ///
    /// `None` for empty and single-cell paths.
    #[inline]
    pub fn next_step(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// Implementations must be pure: identical inputs give identical paths.
pub trait PathFinder: Send + Sync {
    /// Search from `start` to `goal`.
    ///
    /// Returns an empty [`Path`] if either end is out of bounds or an
    /// `Obstacle`, if the goal is unreachable, or if the search gave up.
    /// `start == goal` yields the single-cell path `[start]`.
    fn find_path(&self, grid: &OccupancyGrid, start: Cell, goal: Cell) -> Path;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* over the occupancy grid with a bounded number of expansions.
#[derive(Debug, Clone, Copy)]
pub struct AStar {
    pub max_expansions: usize,
}

impl AStar {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXPANSIONS)
    }
}

impl PathFinder for AStar {
    fn find_path(&self, grid: &OccupancyGrid, start: Cell, goal: Cell) -> Path {
        astar(grid, start, goal, self.max_expansions)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Neighbour offsets: right, left, down, up, then the four diagonals.
const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

const UNREACHED: u32 = u32::MAX;

/// Walkable neighbours of `cell` under the corner-cutting rule.
pub(crate) fn neighbors(grid: &OccupancyGrid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    let (col, row) = (cell.col as i64, cell.row as i64);
    DIRECTIONS.iter().filter_map(move |&(dc, dr)| {
        let next = grid.cell_checked(col + dc, row + dr)?;
        if !grid.is_walkable(next) {
            return None;
        }
        if dc != 0 && dr != 0 {
            // Both corners exist whenever `cell` and `next` are in bounds.
            let is_obstacle =
                |c: Cell| matches!(grid.classification(c), Ok(CellKind::Obstacle));
            if is_obstacle(Cell::new(next.col, cell.row))
                && is_obstacle(Cell::new(cell.col, next.row))
            {
                return None;
            }
        }
        Some(next)
    })
}

fn astar(grid: &OccupancyGrid, start: Cell, goal: Cell, max_expansions: usize) -> Path {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return Path::empty();
    }
    if start == goal {
        return Path { cells: vec![start] };
    }

    let n = grid.cell_count();
    // g[i] = best known step count from start to cell i.
    let mut g    = vec![UNREACHED; n];
    // prev[i] = index of the cell that reached i; UNREACHED for the start.
    let mut prev = vec![UNREACHED; n];

    let start_idx = grid.index(start);
    let goal_idx  = grid.index(goal);
    g[start_idx] = 0;

    // Min-heap keyed by (f, push sequence).  `g` rides along to detect stale
    // entries.  A cell whose route improves is pushed again with a fresh
    // sequence number, so among equal estimates it pops after cells queued
    // before the improvement.  This reproduces the pop order of a frontier
    // list that is stably re-sorted by `f` before every pop.
    let mut heap: BinaryHeap<Reverse<(u32, u64, u32, u32)>> = BinaryHeap::new();
    heap.push(Reverse((start.manhattan(goal), 0, 0, start_idx as u32)));
    let mut seq: u64 = 1;
    let mut expansions = 0usize;

    while let Some(Reverse((_, _, entry_g, idx))) = heap.pop() {
        let idx = idx as usize;
        // Superseded by a cheaper route found after this entry was pushed.
        if entry_g > g[idx] {
            continue;
        }
        if idx == goal_idx {
            return reconstruct(grid, &prev, goal_idx);
        }
        if expansions >= max_expansions {
            tracing::warn!(%start, %goal, max_expansions, "path search exceeded expansion cap");
            return Path::empty();
        }
        expansions += 1;

        let current = grid.cell_of_index(idx);
        let tentative = g[idx] + 1;
        for next in neighbors(grid, current) {
            let next_idx = grid.index(next);
            if tentative < g[next_idx] {
                g[next_idx]    = tentative;
                prev[next_idx] = idx as u32;
                let f = tentative + next.manhattan(goal);
                heap.push(Reverse((f, seq, tentative, next_idx as u32)));
                seq += 1;
            }
        }
    }

    tracing::trace!(%start, %goal, expansions, "no path: frontier exhausted");
    Path::empty()
}

fn reconstruct(grid: &OccupancyGrid, prev: &[u32], goal_idx: usize) -> Path {
    let mut cells = vec![grid.cell_of_index(goal_idx)];
    let mut cur = goal_idx;
    while prev[cur] != UNREACHED {
        cur = prev[cur] as usize;
        cells.push(grid.cell_of_index(cur));
    }
    cells.reverse();
    Path { cells }
}
