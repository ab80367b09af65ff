//! Test fixtures shared across the crate's test modules.

use std::cell::RefCell;
use std::rc::Rc;

use crate::puzzle::Puzzle;

/// A puzzle over an explicit directed graph of numbered states.
///
/// Every call to `extensions` is logged so tests can check which states a
/// solver expanded and how often.
#[derive(Debug, Clone)]
pub struct GraphPuzzle {
    pub node: usize,
    edges: Rc<Vec<Vec<usize>>>,
    goals: Rc<Vec<usize>>,
    dead_ends: Rc<Vec<usize>>,
    expansions: Rc<RefCell<Vec<usize>>>,
}

impl GraphPuzzle {
    /// Creates a puzzle starting at node 0.
    pub fn new(edges: Vec<Vec<usize>>, goals: Vec<usize>) -> Self {
        Self {
            node: 0,
            edges: Rc::new(edges),
            goals: Rc::new(goals),
            dead_ends: Rc::new(Vec::new()),
            expansions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Marks nodes whose `fail_fast` reports true.
    pub fn with_dead_ends(mut self, dead_ends: Vec<usize>) -> Self {
        self.dead_ends = Rc::new(dead_ends);
        self
    }

    /// Same graph, different current node, fresh expansion log.
    pub fn starting_at(&self, node: usize) -> Self {
        Self {
            node,
            edges: Rc::clone(&self.edges),
            goals: Rc::clone(&self.goals),
            dead_ends: Rc::clone(&self.dead_ends),
            expansions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Successor node numbers, without touching the expansion log.
    pub fn successors(&self) -> &[usize] {
        self.edges.get(self.node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes whose extensions were generated, in call order.
    pub fn expansions(&self) -> Vec<usize> {
        self.expansions.borrow().clone()
    }

    fn at(&self, node: usize) -> Self {
        Self {
            node,
            edges: Rc::clone(&self.edges),
            goals: Rc::clone(&self.goals),
            dead_ends: Rc::clone(&self.dead_ends),
            expansions: Rc::clone(&self.expansions),
        }
    }
}

impl PartialEq for GraphPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Puzzle for GraphPuzzle {
    type Key = usize;

    fn extensions(&self) -> Vec<Self> {
        self.expansions.borrow_mut().push(self.node);
        self.successors().iter().map(|&next| self.at(next)).collect()
    }

    fn is_solved(&self) -> bool {
        self.goals.contains(&self.node)
    }

    fn fail_fast(&self) -> bool {
        self.dead_ends.contains(&self.node)
    }

    fn identity_key(&self) -> usize {
        self.node
    }
}

/// Checks that each state on `path` is a successor of the one before it.
pub fn assert_valid_chain(path: &[GraphPuzzle]) {
    for pair in path.windows(2) {
        assert!(
            pair[0].successors().contains(&pair[1].node),
            "{} -> {} is not an edge",
            pair[0].node,
            pair[1].node
        );
    }
}

/// Checks that no node was expanded more than once.
pub fn assert_no_repeated_expansion(expansions: &[usize]) {
    let mut seen = std::collections::HashSet::new();
    for node in expansions {
        assert!(seen.insert(*node), "node {} expanded twice", node);
    }
}
