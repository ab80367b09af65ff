//! Breadth-first solver.
//!
//! Level-order exploration over a FIFO frontier. States are marked visited
//! when they are enqueued, so each key enters the frontier once, from a
//! parent at minimum depth. The first solved extension generated is therefore
//! on a path with the fewest possible moves.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::path::SolutionPath;
use crate::puzzle::Puzzle;
use crate::solver::SearchStats;
use crate::tree::{NodeId, SearchTree};

/// Find a shortest solution path by breadth-first search.
///
/// Returns `None` when the reachable state space holds no solution.
pub fn solve_bfs<P: Puzzle>(initial: P) -> Option<SolutionPath<P>> {
    breadth_first_search(initial, &mut SearchStats::default())
}

pub(crate) fn breadth_first_search<P: Puzzle>(
    initial: P,
    stats: &mut SearchStats,
) -> Option<SolutionPath<P>> {
    let mut tree = SearchTree::new(initial);
    let root = tree.root();

    debug!(event = "search_start", strategy = "breadth_first");

    if tree[root].state().is_solved() {
        return Some(tree.into_path(root));
    }

    let mut visited: HashSet<P::Key> = HashSet::new();
    visited.insert(tree[root].state().identity_key());

    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(root);
    stats.max_frontier = stats.max_frontier.max(frontier.len());

    while let Some(id) = frontier.pop_front() {
        let state = tree[id].state();
        if state.fail_fast() {
            trace!(event = "fail_fast", node = id.index());
            continue;
        }

        let extensions = state.extensions();
        stats.nodes_expanded += 1;
        trace!(event = "expand", node = id.index(), extensions = extensions.len());

        for extension in extensions {
            let key = extension.identity_key();
            if visited.contains(&key) {
                stats.duplicates_skipped += 1;
                continue;
            }

            let solved = extension.is_solved();
            let child = tree.add_child(id, extension);
            stats.nodes_generated += 1;

            if solved {
                debug!(event = "solution_found", depth = tree.depth(child));
                return Some(tree.into_path(child));
            }

            visited.insert(key);
            frontier.push_back(child);
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    debug!(event = "search_exhausted", strategy = "breadth_first");
    None
}
