//! The capability contract every puzzle must provide to be searchable.

use std::hash::Hash;

/// A discrete puzzle state that the solvers can explore.
///
/// # Contract
///
/// - `extensions` must be deterministic: the same state yields the same
///   successors in the same order. It must not mutate observable state.
/// - `identity_key` must be a pure function of observable state. Two states
///   with equal keys are interchangeable for search purposes; whichever is
///   reached first is explored and the other is skipped.
/// - `fail_fast` may only return `true` when no solution is reachable from
///   this state. Returning `false` is always safe.
///
/// The solvers do not check these preconditions at runtime.
pub trait Puzzle: Sized {
    /// Canonical value used for visited-set membership
    type Key: Eq + Hash;

    /// Every state reachable from this one by exactly one legal move
    fn extensions(&self) -> Vec<Self>;

    /// Whether this exact state satisfies the goal
    fn is_solved(&self) -> bool;

    /// Cheap conservative check that no solution is reachable from here
    fn fail_fast(&self) -> bool {
        false
    }

    /// Deduplication key for this state
    fn identity_key(&self) -> Self::Key;
}
