//! Strategy selection and search statistics.
//!
//! [`solve`] runs either solver and reports how much of the state space was
//! touched along the way. Use [`solve_dfs`](crate::dfs::solve_dfs) or
//! [`solve_bfs`](crate::bfs::solve_bfs) directly when only the path matters.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bfs::breadth_first_search;
use crate::dfs::depth_first_search;
use crate::error::PuzzleError;
use crate::path::SolutionPath;
use crate::puzzle::Puzzle;

/// Traversal order used to explore the state space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Follow one branch to the end before trying the next
    DepthFirst,
    /// Explore level by level; finds a path with the fewest moves
    #[default]
    BreadthFirst,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth_first",
            Strategy::BreadthFirst => "breadth_first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth_first" | "breadth-first" => Ok(Strategy::BreadthFirst),
            _ => Err(PuzzleError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States whose extensions were generated
    pub nodes_expanded: usize,
    /// Child nodes attached to the exploration tree
    pub nodes_generated: usize,
    /// Extensions rejected because their key was already visited
    pub duplicates_skipped: usize,
    /// Peak queue length (breadth-first) or branch depth (depth-first)
    pub max_frontier: usize,
    /// Wall time spent searching
    pub time_elapsed_ms: u64,
}

/// Result of [`solve`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverResult<P> {
    pub strategy: Strategy,
    /// `None` when the search space was exhausted without reaching a goal
    pub solution: Option<SolutionPath<P>>,
    pub stats: SearchStats,
}

impl<P> SolverResult<P> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Number of moves in the solution, if one was found
    pub fn steps(&self) -> Option<usize> {
        self.solution.as_ref().map(SolutionPath::steps)
    }
}

/// Search for a solution with the given strategy.
pub fn solve<P: Puzzle>(puzzle: P, strategy: Strategy) -> SolverResult<P> {
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    let solution = match strategy {
        Strategy::DepthFirst => depth_first_search(puzzle, &mut stats),
        Strategy::BreadthFirst => breadth_first_search(puzzle, &mut stats),
    };
    stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    info!(
        event = "solve_end",
        strategy = %strategy,
        solved = solution.is_some(),
        steps = solution.as_ref().map(SolutionPath::steps),
        nodes_expanded = stats.nodes_expanded,
        nodes_generated = stats.nodes_generated,
        duplicates_skipped = stats.duplicates_skipped,
        max_frontier = stats.max_frontier,
        duration_ms = stats.time_elapsed_ms,
    );

    SolverResult {
        strategy,
        solution,
        stats,
    }
}
