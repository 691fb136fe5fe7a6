//! Layout loading: CSV placement lists and ASCII maps.
//!
//! # CSV format
//!
//! One row per placed cell; every cell not listed is `Empty`.
//!
//! ```csv
//! col,row,kind
//! 3,2,obstacle
//! 7,5,concealment
//! 10,4,interest
//! ```
//!
//! | `kind`        | Effect                                                |
//! |---------------|-------------------------------------------------------|
//! | `obstacle`    | Cell becomes `CellKind::Obstacle`                     |
//! | `concealment` | Cell becomes `CellKind::Concealment`                  |
//! | `interest`    | Cell stays `Empty`; its centre becomes a point of interest |
//! | `empty`       | Cell is reset to `Empty`                              |
//!
//! Later rows override earlier rows for the same cell.
//!
//! # ASCII format
//!
//! One text line per grid row, one character per cell.  Blank lines and
//! leading/trailing whitespace are ignored.
//!
//! ```text
//! ..#..
//! .~*..
//! ```
//!
//! `.` empty, `#` obstacle, `~` concealment, `*` point of interest on empty
//! ground.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pt_core::WorldPos;

use crate::grid::check_tile_size;
use crate::{Cell, CellKind, GridError, GridResult, OccupancyGrid};

/// A loaded map: the grid plus the points patrollers are drawn towards.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub grid:               OccupancyGrid,
    pub points_of_interest: Vec<WorldPos>,
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlacementRecord {
    col:  u32,
    row:  u32,
    kind: String,
}

enum Placement {
    Cell(CellKind),
    Interest,
}

fn parse_kind(kind: &str) -> GridResult<Placement> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "empty"       => Ok(Placement::Cell(CellKind::Empty)),
        "obstacle"    => Ok(Placement::Cell(CellKind::Obstacle)),
        "concealment" => Ok(Placement::Cell(CellKind::Concealment)),
        "interest"    => Ok(Placement::Interest),
        other         => Err(GridError::UnknownCellKind(other.to_owned())),
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a layout from a CSV placement file onto a `width × height` grid.
pub fn load_layout_csv(
    path:      &Path,
    width:     u32,
    height:    u32,
    tile_size: f32,
) -> GridResult<Layout> {
    let file = std::fs::File::open(path)?;
    load_layout_reader(file, width, height, tile_size)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
///
/// # Errors
/// `Parse` for a non-positive tile size, `OutOfBounds` for placements outside
/// the grid, `UnknownCellKind` for an unrecognised `kind`, `Csv` for malformed
/// rows.
pub fn load_layout_reader<R: Read>(
    reader:    R,
    width:     u32,
    height:    u32,
    tile_size: f32,
) -> GridResult<Layout> {
    check_tile_size(tile_size)?;
    let mut grid = OccupancyGrid::new(width, height, tile_size);
    let mut interest_cells: Vec<Cell> = Vec::new();

    let mut csv_reader = csv::Reader::from_reader(reader);
    for result in csv_reader.deserialize::<PlacementRecord>() {
        let record = result?;
        let cell = Cell::new(record.col, record.row);
        match parse_kind(&record.kind)? {
            Placement::Cell(kind) => grid.set(cell, kind)?,
            Placement::Interest => {
                grid.set(cell, CellKind::Empty)?;
                interest_cells.push(cell);
            }
        }
    }

    // A later obstacle row may have covered an interest cell.
    interest_cells.retain(|&c| matches!(grid.classification(c), Ok(CellKind::Empty)));
    let points_of_interest = interest_cells.iter().map(|&c| grid.cell_center(c)).collect();

    Ok(Layout { grid, points_of_interest })
}

/// Parse an ASCII map (see module docs) into a layout.
///
/// # Errors
/// `Parse` for ragged or empty maps or a non-positive tile size,
/// `UnknownCellKind` for other characters.
pub fn parse_layout(text: &str, tile_size: f32) -> GridResult<Layout> {
    check_tile_size(tile_size)?;
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some(first) = rows.first() else {
        return Err(GridError::Parse("map has no rows".into()));
    };
    let width = first.chars().count();

    let mut cells = Vec::with_capacity(width * rows.len());
    let mut interest_idx = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        let count = line.chars().count();
        if count != width {
            return Err(GridError::Parse(format!(
                "row {r} has {count} cells, expected {width}"
            )));
        }
        for ch in line.chars() {
            let kind = match ch {
                '.' => CellKind::Empty,
                '#' => CellKind::Obstacle,
                '~' => CellKind::Concealment,
                '*' => {
                    interest_idx.push(cells.len());
                    CellKind::Empty
                }
                other => return Err(GridError::UnknownCellKind(other.to_string())),
            };
            cells.push(kind);
        }
    }

    let grid = OccupancyGrid::from_cells(width as u32, rows.len() as u32, tile_size, cells)?;
    let points_of_interest = interest_idx
        .into_iter()
        .map(|i| grid.cell_center(grid.cell_of_index(i)))
        .collect();

    Ok(Layout { grid, points_of_interest })
}
