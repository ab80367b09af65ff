//! Sliding tile puzzles on an m×n grid, like the 15-puzzle.
//!
//! Each move swaps the blank with an orthogonally adjacent symbol. The
//! puzzle is solved when the grid matches the target layout.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// The empty cell
pub const BLANK: char = '*';

/// Target layout shared by every state of one puzzle
#[derive(Debug, PartialEq, Eq)]
struct Target {
    cells: Vec<char>,
    positions: HashMap<char, usize>,
}

/// A sliding tile configuration working towards a fixed target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlidingTileDefinition", into = "SlidingTileDefinition")]
pub struct SlidingTile {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    blank: usize,
    target: Arc<Target>,
}

/// Serialized form: both grids as rows of symbols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingTileDefinition {
    pub grid: Vec<String>,
    pub target: Vec<String>,
}

/// Flatten rows into (rows, cols, cells), rejecting empty and ragged grids
fn flatten(grid: Vec<Vec<char>>) -> Result<(usize, usize, Vec<char>)> {
    let cols = grid.first().map(Vec::len).unwrap_or(0);
    if cols == 0 {
        return Err(PuzzleError::EmptyGrid);
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
    }
    Ok((grid.len(), cols, grid.into_iter().flatten().collect()))
}

/// Index of the single blank, rejecting duplicate symbols
fn locate_blank(cells: &[char]) -> Result<usize> {
    let mut seen = HashSet::new();
    for &c in cells {
        if c != BLANK && !seen.insert(c) {
            return Err(PuzzleError::DuplicateSymbol(c));
        }
    }
    let blanks: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == BLANK)
        .map(|(i, _)| i)
        .collect();
    match blanks.as_slice() {
        [index] => Ok(*index),
        other => Err(PuzzleError::BlankCount(other.len())),
    }
}

impl SlidingTile {
    /// Build a puzzle in state `grid` working towards `target`.
    ///
    /// Both grids must be non-empty rectangles of the same shape, each with
    /// exactly one blank and distinct symbols drawn from the same set.
    pub fn new(grid: Vec<Vec<char>>, target: Vec<Vec<char>>) -> Result<Self> {
        let (rows, cols, cells) = flatten(grid)?;
        let (target_rows, target_cols, target_cells) = flatten(target)?;
        if (rows, cols) != (target_rows, target_cols) {
            return Err(PuzzleError::ShapeMismatch {
                expected_rows: target_rows,
                expected_cols: target_cols,
                found_rows: rows,
                found_cols: cols,
            });
        }

        let blank = locate_blank(&cells)?;
        locate_blank(&target_cells)?;

        let positions: HashMap<char, usize> = target_cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        if let Some(&missing) = cells.iter().find(|&&c| !positions.contains_key(&c)) {
            return Err(PuzzleError::SymbolMismatch(missing));
        }

        Ok(Self {
            rows,
            cols,
            cells,
            blank,
            target: Arc::new(Target {
                cells: target_cells,
                positions,
            }),
        })
    }

    /// Parse rows of symbols, e.g. `&["*23", "145"]`
    pub fn from_rows<S: AsRef<str>>(grid: &[S], target: &[S]) -> Result<Self> {
        let to_chars = |rows: &[S]| {
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect::<Vec<Vec<char>>>()
        };
        Self::new(to_chars(grid), to_chars(target))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (row, col) of the blank
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    fn with_blank_at(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.cells.swap(self.blank, index);
        next.blank = index;
        next
    }

    /// Parity of the permutation taking the current layout to the target
    fn permutation_parity(&self) -> usize {
        let n = self.cells.len();
        let mut seen = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                i = self.target.positions[&self.cells[i]];
            }
        }
        (n - cycles) % 2
    }
}

impl Puzzle for SlidingTile {
    type Key = Vec<char>;

    fn extensions(&self) -> Vec<Self> {
        let (row, col) = self.blank_position();
        let mut extensions = Vec::with_capacity(4);

        if row > 0 {
            extensions.push(self.with_blank_at(self.blank - self.cols));
        }
        if row + 1 < self.rows {
            extensions.push(self.with_blank_at(self.blank + self.cols));
        }
        if col > 0 {
            extensions.push(self.with_blank_at(self.blank - 1));
        }
        if col + 1 < self.cols {
            extensions.push(self.with_blank_at(self.blank + 1));
        }

        extensions
    }

    fn is_solved(&self) -> bool {
        self.cells == self.target.cells
    }

    /// Every move is one transposition and moves the blank one cell, so the
    /// permutation parity must match the parity of the blank's distance.
    fn fail_fast(&self) -> bool {
        let (row, col) = self.blank_position();
        let target_blank = self.target.positions[&BLANK];
        let (target_row, target_col) = (target_blank / self.cols, target_blank % self.cols);
        let distance = row.abs_diff(target_row) + col.abs_diff(target_col);
        self.permutation_parity() != distance % 2
    }

    fn identity_key(&self) -> Vec<char> {
        self.cells.clone()
    }
}

fn to_rows(cells: &[char], cols: usize) -> Vec<String> {
    cells.chunks(cols).map(|row| row.iter().collect()).collect()
}

impl TryFrom<SlidingTileDefinition> for SlidingTile {
    type Error = PuzzleError;

    fn try_from(definition: SlidingTileDefinition) -> Result<Self> {
        Self::from_rows(&definition.grid, &definition.target)
    }
}

impl From<SlidingTile> for SlidingTileDefinition {
    fn from(puzzle: SlidingTile) -> Self {
        Self {
            grid: to_rows(&puzzle.cells, puzzle.cols),
            target: to_rows(&puzzle.target.cells, puzzle.cols),
        }
    }
}

/// The current grid, one row per line
impl fmt::Display for SlidingTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_rows(&self.cells, self.cols).join("\n"))
    }
}
