//! Concrete puzzles implementing the [`Puzzle`] contract.
//!
//! Each puzzle owns its own state shape. [`PuzzleState`] wraps all of them
//! for callers that pick the puzzle kind at runtime, such as a JSON
//! definition tagged with `"kind"`.

pub mod grid_peg_solitaire;
pub mod sliding_tile;
pub mod word_ladder;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;

pub use grid_peg_solitaire::{GridPegSolitaire, Marker};
pub use sliding_tile::{SlidingTile, SlidingTileDefinition, BLANK};
pub use word_ladder::{Dictionary, WordLadder, WordLadderDefinition};

/// Any of the bundled puzzles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleState {
    GridPegSolitaire {
        #[serde(rename = "grid")]
        board: GridPegSolitaire,
    },
    SlidingTile(SlidingTile),
    WordLadder(WordLadder),
}

/// Identity key of a [`PuzzleState`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateKey {
    GridPegSolitaire(Vec<Marker>),
    SlidingTile(Vec<char>),
    WordLadder(String),
}

impl Puzzle for PuzzleState {
    type Key = StateKey;

    fn extensions(&self) -> Vec<Self> {
        match self {
            PuzzleState::GridPegSolitaire { board } => board
                .extensions()
                .into_iter()
                .map(|board| PuzzleState::GridPegSolitaire { board })
                .collect(),
            PuzzleState::SlidingTile(p) => {
                p.extensions().into_iter().map(PuzzleState::SlidingTile).collect()
            }
            PuzzleState::WordLadder(p) => {
                p.extensions().into_iter().map(PuzzleState::WordLadder).collect()
            }
        }
    }

    fn is_solved(&self) -> bool {
        match self {
            PuzzleState::GridPegSolitaire { board } => board.is_solved(),
            PuzzleState::SlidingTile(p) => p.is_solved(),
            PuzzleState::WordLadder(p) => p.is_solved(),
        }
    }

    fn fail_fast(&self) -> bool {
        match self {
            PuzzleState::GridPegSolitaire { board } => board.fail_fast(),
            PuzzleState::SlidingTile(p) => p.fail_fast(),
            PuzzleState::WordLadder(p) => p.fail_fast(),
        }
    }

    fn identity_key(&self) -> StateKey {
        match self {
            PuzzleState::GridPegSolitaire { board } => {
                StateKey::GridPegSolitaire(board.identity_key())
            }
            PuzzleState::SlidingTile(p) => StateKey::SlidingTile(p.identity_key()),
            PuzzleState::WordLadder(p) => StateKey::WordLadder(p.identity_key()),
        }
    }
}

impl From<GridPegSolitaire> for PuzzleState {
    fn from(board: GridPegSolitaire) -> Self {
        PuzzleState::GridPegSolitaire { board }
    }
}

impl From<SlidingTile> for PuzzleState {
    fn from(puzzle: SlidingTile) -> Self {
        PuzzleState::SlidingTile(puzzle)
    }
}

impl From<WordLadder> for PuzzleState {
    fn from(puzzle: WordLadder) -> Self {
        PuzzleState::WordLadder(puzzle)
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleState::GridPegSolitaire { board } => fmt::Display::fmt(board, f),
            PuzzleState::SlidingTile(p) => fmt::Display::fmt(p, f),
            PuzzleState::WordLadder(p) => fmt::Display::fmt(p, f),
        }
    }
}
