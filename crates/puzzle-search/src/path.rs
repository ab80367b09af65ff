//! Linear solution paths returned by the solvers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A root-to-goal chain of states.
///
/// The first state is the initial configuration, the last one is solved, and
/// each state is one extension of the state before it. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionPath<P> {
    states: Vec<P>,
}

impl<P> SolutionPath<P> {
    pub(crate) fn from_states(states: Vec<P>) -> Self {
        debug_assert!(!states.is_empty(), "solution path must hold the root");
        Self { states }
    }

    /// All states from the initial one to the solved one
    pub fn states(&self) -> &[P] {
        &self.states
    }

    /// Number of states on the path, both ends included
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of moves taken
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<&P> {
        self.states.first()
    }

    /// The goal state at the end of the path
    pub fn solved(&self) -> Option<&P> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<P> {
        self.states
    }
}

impl<P> IntoIterator for SolutionPath<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a SolutionPath<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// States separated by a blank line
impl<P: fmt::Display> fmt::Display for SolutionPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}
