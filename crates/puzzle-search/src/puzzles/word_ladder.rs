//! Word ladders: step from one word to another by changing one letter at a
//! time, using only words from a dictionary.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// Whether `a` and `b` have the same length and differ in exactly one position
fn one_letter_apart(a: &str, b: &str) -> bool {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut differences = 0;
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    differences += 1;
                    if differences > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return differences == 1,
            _ => return false,
        }
    }
}

/// The words a ladder may step through, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on whitespace, one word per token
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words one letter away from `word`, in sorted order
    pub fn neighbours<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |candidate| one_letter_apart(word, candidate))
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A word ladder positioned at `current`, aiming for `target`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WordLadderDefinition", into = "WordLadderDefinition")]
pub struct WordLadder {
    current: String,
    target: String,
    dictionary: Arc<Dictionary>,
}

/// Serialized form of a word ladder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLadderDefinition {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub words: Dictionary,
}

impl WordLadder {
    /// Rejects empty start or target words.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        dictionary: Arc<Dictionary>,
    ) -> Result<Self> {
        let current = from.into();
        let target = to.into();
        if current.is_empty() {
            return Err(PuzzleError::EmptyWord("start"));
        }
        if target.is_empty() {
            return Err(PuzzleError::EmptyWord("target"));
        }
        Ok(Self {
            current,
            target,
            dictionary,
        })
    }

    pub fn with_words<I, S>(from: &str, to: &str, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(from, to, Arc::new(words.into_iter().collect()))
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn step_to(&self, word: &str) -> Self {
        Self {
            current: word.to_string(),
            target: self.target.clone(),
            dictionary: Arc::clone(&self.dictionary),
        }
    }
}

/// Two ladders are equal when they stand on the same word with the same goal
impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.target == other.target
    }
}

impl Eq for WordLadder {}

impl Puzzle for WordLadder {
    type Key = String;

    fn extensions(&self) -> Vec<Self> {
        self.dictionary
            .neighbours(&self.current)
            .map(|word| self.step_to(word))
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.current == self.target
    }

    /// A word with no dictionary neighbour is a dead end
    fn fail_fast(&self) -> bool {
        self.dictionary.neighbours(&self.current).next().is_none()
    }

    fn identity_key(&self) -> String {
        self.current.clone()
    }
}

impl TryFrom<WordLadderDefinition> for WordLadder {
    type Error = PuzzleError;

    fn try_from(definition: WordLadderDefinition) -> Result<Self> {
        Self::new(definition.from, definition.to, Arc::new(definition.words))
    }
}

impl From<WordLadder> for WordLadderDefinition {
    fn from(ladder: WordLadder) -> Self {
        Self {
            from: ladder.current,
            to: ladder.target,
            words: Arc::unwrap_or_clone(ladder.dictionary),
        }
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From word: {}\nTo word: {}", self.current, self.target)
    }
}
