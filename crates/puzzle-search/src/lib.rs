//! Generic puzzle search library.
//!
//! Any type implementing [`Puzzle`] can be solved by depth-first or
//! breadth-first search. Both solvers deduplicate states by identity key,
//! build an exploration tree, and return only the straight root-to-goal
//! path, or `None` when the state space is exhausted.
//!
//! Peg solitaire, sliding tile and word ladder puzzles ship in [`puzzles`].

pub mod bfs;
pub mod dfs;
pub mod error;
pub mod path;
pub mod puzzle;
pub mod puzzles;
pub mod solver;
pub mod tree;

#[cfg(test)]
mod test_utils;

// Re-export main types
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use error::{PuzzleError, Result};
pub use path::SolutionPath;
pub use puzzle::Puzzle;
pub use puzzles::{
    Dictionary, GridPegSolitaire, Marker, PuzzleState, SlidingTile, StateKey, WordLadder,
};
pub use solver::{solve, SearchStats, SolverResult, Strategy};
pub use tree::{NodeId, SearchNode, SearchTree};
