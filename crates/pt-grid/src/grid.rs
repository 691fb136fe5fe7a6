//! The occupancy grid: a fixed-size 2-D map of cell classifications.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<CellKind>`:
//!
//! ```text
//! index(col, row) = row * width + col
//! ```
//!
//! Dimensions are fixed at construction.  Classifications may change between
//! ticks through [`OccupancyGrid::set`], never during one: every component
//! borrows the grid immutably for the whole tick.
//!
//! # World coordinates
//!
//! The grid also owns the world ↔ cell mapping.  Cell `(c, r)` covers the
//! half-open square `[c·tile, (c+1)·tile) × [r·tile, (r+1)·tile)`; its centre
//! is the point agents steer towards.

use std::fmt;

use pt_core::WorldPos;

use crate::{GridError, GridResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Integer `(column, row)` address of one grid cell.  Never negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Number of 8-directional unit steps between two cells.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// Number of 4-directional unit steps between two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ── CellKind ──────────────────────────────────────────────────────────────────

/// Classification of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open ground.
    #[default]
    Empty,
    /// Impassable and opaque.
    Obstacle,
    /// Walkable cover (hedges, tall grass): agents may enter it, but sight
    /// lines into or through it are blocked.
    Concealment,
}

impl CellKind {
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Obstacle)
    }

    #[inline]
    pub fn blocks_sight(self) -> bool {
        !matches!(self, CellKind::Empty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Empty       => "empty",
            CellKind::Obstacle    => "obstacle",
            CellKind::Concealment => "concealment",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// `Ok` for a positive finite tile size.
pub(crate) fn check_tile_size(tile_size: f32) -> GridResult<()> {
    if tile_size.is_finite() && tile_size > 0.0 {
        Ok(())
    } else {
        Err(GridError::Parse(format!("tile size must be positive, got {tile_size}")))
    }
}

// ── OccupancyGrid ─────────────────────────────────────────────────────────────

/// Fixed-size, row-major grid of [`CellKind`]s plus the world-unit tile size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    width:     u32,
    height:    u32,
    tile_size: f32,
    cells:     Vec<CellKind>,
}

impl OccupancyGrid {
    /// An all-`Empty` grid.
    ///
    /// # Panics
    /// Panics if `tile_size` is not a positive finite number.
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        assert!(
            tile_size.is_finite() && tile_size > 0.0,
            "tile size must be positive, got {tile_size}"
        );
        Self {
            width,
            height,
            tile_size,
            cells: vec![CellKind::Empty; width as usize * height as usize],
        }
    }

    /// Build from a row-major classification vector.
    ///
    /// # Errors
    /// [`GridError::Parse`] for a non-positive or non-finite `tile_size`,
    /// [`GridError::DimensionMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(
        width:     u32,
        height:    u32,
        tile_size: f32,
        cells:     Vec<CellKind>,
    ) -> GridResult<Self> {
        check_tile_size(tile_size)?;
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected,
                got: cells.len(),
            });
        }
        let mut grid = Self::new(width, height, tile_size);
        grid.cells = cells;
        Ok(grid)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of one cell in world units.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Convert signed coordinates (e.g. a neighbour offset) into a `Cell`,
    /// or `None` if they fall outside the grid.
    #[inline]
    pub fn cell_checked(&self, col: i64, row: i64) -> Option<Cell> {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        Some(Cell::new(col as u32, row as u32))
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Classification of `cell`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if `cell` lies outside the grid.  Callers
    /// that do not care about the distinction treat it as blocked.
    #[inline]
    pub fn classification(&self, cell: Cell) -> GridResult<CellKind> {
        if !self.contains(cell) {
            return Err(self.out_of_bounds(cell.col as i64, cell.row as i64));
        }
        Ok(self.cells[self.index(cell)])
    }

    /// `true` for in-bounds `Empty` and `Concealment` cells.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.classification(cell).is_ok_and(CellKind::is_walkable)
    }

    /// Change one cell's classification.  Only call between ticks.
    pub fn set(&mut self, cell: Cell, kind: CellKind) -> GridResult<()> {
        if !self.contains(cell) {
            return Err(self.out_of_bounds(cell.col as i64, cell.row as i64));
        }
        let idx = self.index(cell);
        self.cells[idx] = kind;
        Ok(())
    }

    /// All cells with classification `kind`, in row-major order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, k)| **k == kind)
            .map(|(i, _)| self.cell_of_index(i))
    }

    // ── World coordinates ─────────────────────────────────────────────────

    /// The cell containing world position `pos`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] for positions left of / above the origin,
    /// beyond the far edges, or non-finite.
    pub fn cell_at(&self, pos: WorldPos) -> GridResult<Cell> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return Err(self.out_of_bounds(i64::MIN, i64::MIN));
        }
        let col = (pos.x / self.tile_size).floor() as i64;
        let row = (pos.y / self.tile_size).floor() as i64;
        self.cell_checked(col, row)
            .ok_or_else(|| self.out_of_bounds(col, row))
    }

    /// World position of the centre of `cell`.  Does not bounds-check.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> WorldPos {
        WorldPos::new(
            (cell.col as f32 + 0.5) * self.tile_size,
            (cell.row as f32 + 0.5) * self.tile_size,
        )
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }

    #[inline]
    pub(crate) fn cell_of_index(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as u32, (index / w) as u32)
    }

    fn out_of_bounds(&self, col: i64, row: i64) -> GridError {
        GridError::OutOfBounds {
            col,
            row,
            width:  self.width,
            height: self.height,
        }
    }
}
