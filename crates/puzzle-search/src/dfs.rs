//! Depth-first solver.
//!
//! Pre-order exploration driven by an explicit stack of frames instead of
//! recursion, so deep puzzles are bounded by heap rather than call stack.
//! The first child that leads to a solution wins; its later siblings are
//! never explored. A node whose children all fail has its subtree dropped.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::path::SolutionPath;
use crate::puzzle::Puzzle;
use crate::solver::SearchStats;
use crate::tree::{NodeId, SearchTree};

/// Outcome of looking at a single node
enum Visit {
    /// The node's state is a goal
    Solved,
    /// Already visited, fails fast, or has no unvisited extensions
    Dead,
    /// Children were attached and must be explored
    Expanded,
}

/// A node on the active branch and the index of its next child to try
struct Frame {
    node: NodeId,
    next_child: usize,
}

/// Find a solution path by depth-first search.
///
/// Returns `None` when the reachable state space holds no solution. The path
/// found depends on extension order and is not necessarily the shortest.
pub fn solve_dfs<P: Puzzle>(initial: P) -> Option<SolutionPath<P>> {
    depth_first_search(initial, &mut SearchStats::default())
}

pub(crate) fn depth_first_search<P: Puzzle>(
    initial: P,
    stats: &mut SearchStats,
) -> Option<SolutionPath<P>> {
    let mut tree = SearchTree::new(initial);
    let mut visited: HashSet<P::Key> = HashSet::new();
    let root = tree.root();

    debug!(event = "search_start", strategy = "depth_first");

    match visit(&mut tree, &mut visited, root, stats) {
        Visit::Solved => return Some(tree.into_path(root)),
        Visit::Dead => return None,
        Visit::Expanded => {}
    }

    let mut stack = vec![Frame {
        node: root,
        next_child: 0,
    }];
    stats.max_frontier = stats.max_frontier.max(stack.len());

    while let Some(frame) = stack.last_mut() {
        let next = tree[frame.node].children().get(frame.next_child).copied();

        let Some(child) = next else {
            // Every child failed: this branch is dead
            let node = frame.node;
            stack.pop();
            let freed = tree.detach_children(node);
            trace!(event = "backtrack", node = node.index(), freed);
            continue;
        };
        frame.next_child += 1;

        match visit(&mut tree, &mut visited, child, stats) {
            Visit::Solved => {
                debug!(event = "solution_found", depth = tree.depth(child));
                return Some(tree.into_path(child));
            }
            Visit::Dead => {}
            Visit::Expanded => {
                stack.push(Frame {
                    node: child,
                    next_child: 0,
                });
                stats.max_frontier = stats.max_frontier.max(stack.len());
            }
        }
    }

    debug!(event = "search_exhausted", strategy = "depth_first");
    None
}

/// Check a node and, if it is worth exploring, attach its unvisited extensions
fn visit<P: Puzzle>(
    tree: &mut SearchTree<P>,
    visited: &mut HashSet<P::Key>,
    id: NodeId,
    stats: &mut SearchStats,
) -> Visit {
    let state = tree[id].state();

    if state.is_solved() {
        return Visit::Solved;
    }
    if !visited.insert(state.identity_key()) {
        return Visit::Dead;
    }
    if state.fail_fast() {
        trace!(event = "fail_fast", node = id.index());
        return Visit::Dead;
    }

    let extensions = state.extensions();
    stats.nodes_expanded += 1;
    trace!(event = "expand", node = id.index(), extensions = extensions.len());

    for extension in extensions {
        if visited.contains(&extension.identity_key()) {
            stats.duplicates_skipped += 1;
            continue;
        }
        tree.add_child(id, extension);
        stats.nodes_generated += 1;
    }

    if tree[id].children().is_empty() {
        Visit::Dead
    } else {
        Visit::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_no_repeated_expansion, assert_valid_chain, GraphPuzzle};

    #[test]
    fn test_already_solved_returns_single_node() {
        let puzzle = GraphPuzzle::new(vec![vec![1], vec![]], vec![0]);
        let path = solve_dfs(puzzle.clone()).unwrap();
        assert_eq!(path.steps(), 0);
        assert_eq!(path.states()[0].node, 0);
        assert!(puzzle.expansions().is_empty());
    }

    #[test]
    fn test_no_extensions_returns_none() {
        let puzzle = GraphPuzzle::new(vec![vec![]], vec![5]);
        assert!(solve_dfs(puzzle).is_none());
    }

    #[test]
    fn test_fail_fast_root_returns_none() {
        let puzzle = GraphPuzzle::new(vec![vec![1], vec![]], vec![1]).with_dead_ends(vec![0]);
        assert!(solve_dfs(puzzle.clone()).is_none());
        assert!(puzzle.expansions().is_empty());
    }

    #[test]
    fn test_first_branch_wins() {
        // 0 -> 1 -> 2 -> 4 (goal)
        // 0 -> 3 -> 4
        let edges = vec![vec![1, 3], vec![2], vec![4], vec![4], vec![]];
        let puzzle = GraphPuzzle::new(edges, vec![4]);

        let path = solve_dfs(puzzle.clone()).unwrap();
        let nodes: Vec<usize> = path.iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![0, 1, 2, 4]);
        assert_valid_chain(path.states());
        // Node 3 is never explored
        assert!(!puzzle.expansions().contains(&3));
    }

    #[test]
    fn test_backtracks_out_of_dead_branch() {
        // 0 -> 1 -> 2 (dead end)
        // 0 -> 3 -> 4 (goal)
        let edges = vec![vec![1, 3], vec![2], vec![], vec![4], vec![]];
        let puzzle = GraphPuzzle::new(edges, vec![4]);

        let path = solve_dfs(puzzle.clone()).unwrap();
        let nodes: Vec<usize> = path.iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![0, 3, 4]);
        assert_eq!(puzzle.expansions(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cycles_terminate() {
        // 0 <-> 1 <-> 2, no goal reachable
        let edges = vec![vec![1], vec![0, 2], vec![1, 0]];
        let puzzle = GraphPuzzle::new(edges, vec![9]);

        assert!(solve_dfs(puzzle.clone()).is_none());
        assert_no_repeated_expansion(&puzzle.expansions());
    }

    #[test]
    fn test_shared_descendant_expanded_once() {
        // Diamond: 0 -> {1, 2} -> 3 -> 4 (dead end)
        let edges = vec![vec![1, 2], vec![3], vec![3], vec![4], vec![]];
        let puzzle = GraphPuzzle::new(edges, vec![7]);

        assert!(solve_dfs(puzzle.clone()).is_none());
        let expansions = puzzle.expansions();
        assert_no_repeated_expansion(&expansions);
        assert_eq!(expansions, vec![0, 1, 3, 4, 2]);
    }

    #[test]
    fn test_fail_fast_prunes_branch() {
        // 0 -> 1 -> 3 (goal), but 1 claims to be hopeless
        // 0 -> 2 -> 3
        let edges = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let puzzle = GraphPuzzle::new(edges, vec![3]).with_dead_ends(vec![1]);

        let path = solve_dfs(puzzle).unwrap();
        let nodes: Vec<usize> = path.iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![0, 2, 3]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 200_000;
        let mut edges: Vec<Vec<usize>> = (0..depth).map(|i| vec![i + 1]).collect();
        edges.push(Vec::new());
        let puzzle = GraphPuzzle::new(edges, vec![depth]);

        let path = solve_dfs(puzzle).unwrap();
        assert_eq!(path.steps(), depth);
    }

    #[test]
    fn test_stats_are_tracked() {
        let edges = vec![vec![1, 3], vec![2], vec![], vec![4], vec![]];
        let puzzle = GraphPuzzle::new(edges, vec![4]);
        let mut stats = SearchStats::default();

        let path = depth_first_search(puzzle, &mut stats).unwrap();
        assert_eq!(path.steps(), 2);
        assert_eq!(stats.nodes_expanded, 4);
        assert_eq!(stats.nodes_generated, 4);
        assert_eq!(stats.max_frontier, 2);
    }
}
