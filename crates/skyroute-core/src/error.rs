//! Error taxonomy shared by every skyroute crate.

use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// Validation failures surfaced by grid, solver and reconstruction calls.
///
/// A failed call never leaves partial state behind: the grid is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rows or columns are non-positive, or too few cells for two endpoints.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("coordinate {coord} is outside the {bounds} grid")]
    OutOfBounds { coord: Coord, bounds: Bounds },
    /// Origin and destination would occupy the same cell.
    #[error("origin and destination cannot both be at {0}")]
    CoincidentEndpoints(Coord),
    /// A search endpoint sits on an obstacle.
    #[error("search endpoint {0} is blocked")]
    InvalidEndpoint(Coord),
    /// Walking predecessors did not reach the origin within the grid size.
    #[error("predecessor chain broken after {steps} steps")]
    BrokenPredecessorChain { steps: usize },
}

/// Errors from [`Grid::from_ascii`](crate::Grid::from_ascii).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("grid text is empty")]
    Empty,
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid glyph '{ch}' at {coord}")]
    InvalidGlyph { ch: char, coord: Coord },
    #[error("grid text has no {0}")]
    MissingEndpoint(&'static str),
    #[error("second '{glyph}' at {coord}")]
    DuplicateEndpoint { glyph: char, coord: Coord },
    #[error(transparent)]
    Grid(#[from] Error),
}
