//! Submitted guesses
//!
//! A guess records the four selected words and, for each, the difficulty of the category
//! that owns it. The level row is what the results grid is drawn from.

use super::category::{Puzzle, WORDS_PER_CATEGORY};
use serde::{Deserialize, Serialize};

/// One submitted four-word selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub words: [String; WORDS_PER_CATEGORY],
    /// Owning category difficulty per word, 0 when a word has no owner
    pub levels: [u8; WORDS_PER_CATEGORY],
}

impl Guess {
    /// Record a selection against the puzzle it was made on
    ///
    /// # Examples
    /// ```
    /// use konekcije::core::{Category, Guess, Puzzle};
    ///
    /// let puzzle = Puzzle::new(
    ///     1,
    ///     [
    ///         Category::new("A", ["a", "b", "c", "d"], 1).unwrap(),
    ///         Category::new("B", ["e", "f", "g", "h"], 2).unwrap(),
    ///         Category::new("C", ["i", "j", "k", "l"], 3).unwrap(),
    ///         Category::new("D", ["m", "n", "o", "p"], 4).unwrap(),
    ///     ],
    ///     Vec::new(),
    /// )
    /// .unwrap();
    ///
    /// let guess = Guess::new(["a", "e", "i", "m"].map(String::from), &puzzle);
    /// assert_eq!(guess.levels, [1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn new(words: [String; WORDS_PER_CATEGORY], puzzle: &Puzzle) -> Self {
        let levels = std::array::from_fn(|i| {
            puzzle
                .category_of(&words[i])
                .map_or(0, |category| category.difficulty().level())
        });
        Self { words, levels }
    }

    /// Order-independent key of a word selection
    #[must_use]
    pub fn canonical_key<S: AsRef<str>>(words: &[S]) -> String {
        let mut sorted: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();
        sorted.join(",")
    }

    #[must_use]
    pub fn key(&self) -> String {
        Self::canonical_key(&self.words)
    }

    /// Check whether this guess used the same words as a selection, in any order
    #[must_use]
    pub fn same_words<S: AsRef<str>>(&self, selection: &[S]) -> bool {
        self.key() == Self::canonical_key(selection)
    }
}
