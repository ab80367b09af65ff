//! Peg solitaire on a rectangular grid.
//!
//! A peg jumps over an orthogonally adjacent peg into the empty cell beyond
//! it, removing the jumped peg. The board is solved when a single peg is
//! left.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// Contents of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// `*`
    Peg,
    /// `.`
    Empty,
    /// `#`, not part of the board
    Unused,
}

impl Marker {
    pub fn to_char(self) -> char {
        match self {
            Marker::Peg => '*',
            Marker::Empty => '.',
            Marker::Unused => '#',
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = PuzzleError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '*' => Ok(Marker::Peg),
            '.' => Ok(Marker::Empty),
            '#' => Ok(Marker::Unused),
            other => Err(PuzzleError::UnknownMarker(other)),
        }
    }
}

/// Jump directions as (row, column) deltas, in the order extensions are tried
const JUMPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A peg solitaire board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GridPegSolitaire {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<Marker>,
}

impl GridPegSolitaire {
    /// Build a board from rows of markers.
    ///
    /// Rejects empty grids and rows of differing length.
    pub fn new(grid: Vec<Vec<Marker>>) -> Result<Self> {
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

        Ok(Self {
            rows: grid.len(),
            cols,
            cells: grid.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Marker> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Marker::Peg).count()
    }

    fn offset(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        times: isize,
    ) -> Option<usize> {
        let r = row.checked_add_signed(dr * times)?;
        let c = col.checked_add_signed(dc * times)?;
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    /// Board after the peg at `from` jumps over `over` into `to`
    fn with_jump(&self, from: usize, over: usize, to: usize) -> Self {
        let mut next = self.clone();
        next.cells[from] = Marker::Empty;
        next.cells[over] = Marker::Empty;
        next.cells[to] = Marker::Peg;
        next
    }
}

impl Puzzle for GridPegSolitaire {
    type Key = Vec<Marker>;

    fn extensions(&self) -> Vec<Self> {
        let mut extensions = Vec::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let from = row * self.cols + col;
                if self.cells[from] != Marker::Peg {
                    continue;
                }
                for direction in JUMPS {
                    let (Some(over), Some(to)) = (
                        self.offset(row, col, direction, 1),
                        self.offset(row, col, direction, 2),
                    ) else {
                        continue;
                    };
                    if self.cells[over] == Marker::Peg && self.cells[to] == Marker::Empty {
                        extensions.push(self.with_jump(from, over, to));
                    }
                }
            }
        }

        extensions
    }

    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    /// Pegs are only ever removed, so an empty board stays unsolved
    fn fail_fast(&self) -> bool {
        self.peg_count() == 0
    }

    fn identity_key(&self) -> Vec<Marker> {
        self.cells.clone()
    }
}

/// One row per line; surrounding blank lines and indentation are ignored
impl FromStr for GridPegSolitaire {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let grid = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Marker::try_from).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(grid)
    }
}

impl TryFrom<Vec<String>> for GridPegSolitaire {
    type Error = PuzzleError;

    fn try_from(rows: Vec<String>) -> Result<Self> {
        let grid = rows
            .iter()
            .map(|row| row.chars().map(Marker::try_from).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(grid)
    }
}

impl From<GridPegSolitaire> for Vec<String> {
    fn from(board: GridPegSolitaire) -> Self {
        board
            .cells
            .chunks(board.cols)
            .map(|row| row.iter().map(|m| m.to_char()).collect())
            .collect()
    }
}

/// Unused cells print as spaces
impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for marker in row {
                let c = match marker {
                    Marker::Unused => ' ',
                    other => other.to_char(),
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve_bfs, solve_dfs};

    fn board(s: &str) -> GridPegSolitaire {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_rejects_bad_grids() {
        assert_eq!("".parse::<GridPegSolitaire>(), Err(PuzzleError::EmptyGrid));
        assert_eq!(
            "**.\n*.".parse::<GridPegSolitaire>(),
            Err(PuzzleError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "*x.".parse::<GridPegSolitaire>(),
            Err(PuzzleError::UnknownMarker('x'))
        );
        assert_eq!(GridPegSolitaire::new(vec![vec![]]), Err(PuzzleError::EmptyGrid));
    }

    #[test]
    fn test_no_jump_without_adjacent_peg() {
        assert!(board("*..").extensions().is_empty());
    }

    #[test]
    fn test_jumps_in_every_direction() {
        let b = board(
            "
            ..*..
            ..*..
            **.**
            ..*..
            ..*..
            ",
        );
        // Pegs are scanned row by row, each trying up, down, left, right
        let expected = vec![
            board(".....\n.....\n*****\n..*..\n..*.."),
            board("..*..\n..*..\n..***\n..*..\n..*.."),
            board("..*..\n..*..\n***..\n..*..\n..*.."),
            board("..*..\n..*..\n*****\n.....\n....."),
        ];
        assert_eq!(b.extensions(), expected);
    }

    #[test]
    fn test_jump_respects_bounds_and_unused_cells() {
        // Landing cell unusable
        assert!(board("**#").extensions().is_empty());
        // Wide board: rightward jump near the right edge must not be missed
        let b = board("...**.");
        assert_eq!(b.extensions(), vec![board(".....*"), board("..*...")]);
    }

    #[test]
    fn test_is_solved() {
        assert!(!board("**.").is_solved());
        assert!(board("..*").is_solved());
        assert!(!board("...").is_solved());
        assert!(board("...").fail_fast());
    }

    #[test]
    fn test_single_peg_is_zero_step_solution() {
        let b = board("....\n.*..\n....");
        assert_eq!(solve_dfs(b.clone()).unwrap().steps(), 0);
        assert_eq!(solve_bfs(b).unwrap().steps(), 0);
    }

    #[test]
    fn test_two_pegs_solved_by_one_jump() {
        let b = board("**.");
        for path in [solve_dfs(b.clone()).unwrap(), solve_bfs(b.clone()).unwrap()] {
            assert_eq!(path.steps(), 1);
            assert_eq!(path.solved(), Some(&board("..*")));
        }
    }

    #[test]
    fn test_unsolvable_board() {
        // Two pegs that can never meet
        let b = board("*...*");
        assert!(solve_dfs(b.clone()).is_none());
        assert!(solve_bfs(b).is_none());
    }

    #[test]
    fn test_solves_chain_of_jumps() {
        let b = board(
            "
            **.*.*.
            #######
            ",
        );
        let path = solve_dfs(b.clone()).unwrap();
        assert!(path.solved().unwrap().is_solved());
        for pair in path.states().windows(2) {
            assert!(pair[0].extensions().contains(&pair[1]));
        }
        assert_eq!(solve_bfs(b).unwrap().steps(), 3);
    }

    #[test]
    fn test_display_and_serde() {
        let b = board("#*.\n*.#");
        assert_eq!(b.to_string(), " *.\n*. ");
        assert_eq!(b.get(0, 0), Some(Marker::Unused));
        assert_eq!(b.get(1, 0), Some(Marker::Peg));
        assert_eq!(b.get(2, 0), None);

        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r##"["#*.","*.#"]"##);
        let back: GridPegSolitaire = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);

        assert!(serde_json::from_str::<GridPegSolitaire>(r#"["**","*"]"#).is_err());
    }
}
