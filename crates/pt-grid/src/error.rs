//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `pt-grid`.
///
/// "No path" is deliberately absent: path search reports it as an empty
/// [`Path`][crate::Path].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col:    i64,
        row:    i64,
        width:  u32,
        height: u32,
    },

    #[error("grid {width}x{height} needs {expected} cells, got {got}")]
    DimensionMismatch {
        width:    u32,
        height:   u32,
        expected: usize,
        got:      usize,
    },

    #[error("unknown cell kind {0:?}")]
    UnknownCellKind(String),

    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
