//! Error types for puzzle construction and solver settings.
//!
//! Failing to find a solution is not an error: the solvers report it as
//! `None`. These errors only reject malformed puzzle definitions before they
//! ever reach a solver.

use thiserror::Error;

/// Rejection raised while building a puzzle state or parsing a strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid has no rows, or its rows have no cells
    #[error("grid must contain at least one non-empty row")]
    EmptyGrid,

    /// A row length differs from the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the marker alphabet
    #[error("unknown marker {0:?}")]
    UnknownMarker(char),

    /// Current and target grids have different dimensions
    #[error("grid is {found_rows}x{found_cols}, target is {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// A sliding grid must contain exactly one blank
    #[error("expected exactly one blank, found {0}")]
    BlankCount(usize),

    /// A symbol appears more than once in a sliding grid
    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    /// Current and target grids are built from different symbols
    #[error("symbol {0:?} is not present in both grids")]
    SymbolMismatch(char),

    /// Word ladder endpoints must be non-empty
    #[error("word ladder {0} word is empty")]
    EmptyWord(&'static str),

    /// Unrecognized search strategy name
    #[error("unknown strategy {0:?}, expected one of: dfs, bfs, depth_first, breadth_first")]
    UnknownStrategy(String),
}

/// Result type alias for puzzle construction
pub type Result<T> = std::result::Result<T, PuzzleError>;
