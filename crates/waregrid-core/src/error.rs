//! Input-validation errors for floor grids and route queries.

use thiserror::Error;

use crate::geom::Point;

/// Error raised when a grid or route query is malformed.
///
/// An unreachable target is *not* an error: route queries report it as an
/// empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {pos} is outside the {width}x{height} floor")]
    OutOfBounds { pos: Point, width: i32, height: i32 },

    #[error("row {row} has {found} cells, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("floor must have at least one cell")]
    Empty,
}

pub type Result<T> = std::result::Result<T, GridError>;
