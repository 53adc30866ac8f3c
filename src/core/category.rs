//! Puzzle content: categories, puzzles and their invariants
//!
//! A puzzle is four categories of four words each. The sixteen words are pairwise distinct,
//! so every word has exactly one owning category.

use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// Number of categories in every puzzle
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in every category
pub const WORDS_PER_CATEGORY: usize = 4;

/// Error type for puzzle content that violates an invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Difficulty must be between 1 and 4, got {0}")]
    InvalidDifficulty(u8),
    #[error("Category '{0}' contains an empty word")]
    EmptyWord(String),
    #[error("Category '{0}' lists the same word twice")]
    RepeatedWord(String),
    #[error("Word '{0}' belongs to more than one category")]
    SharedWord(String),
    #[error("Category name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Puzzle is dated {found} but was requested for {expected}")]
    DateMismatch { expected: NaiveDate, found: NaiveDate },
}

/// Difficulty tier of a category (1 = easiest, 4 = hardest)
///
/// Purely a display and ordering tag; it never affects evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASIEST: Self = Self(1);
    pub const HARDEST: Self = Self(4);

    /// Create a difficulty from its numeric level
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidDifficulty` unless `level` is in `1..=4`.
    pub fn new(level: u8) -> Result<Self, PuzzleError> {
        if (Self::EASIEST.0..=Self::HARDEST.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(PuzzleError::InvalidDifficulty(level))
        }
    }

    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = PuzzleError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of four related words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    words: [String; WORDS_PER_CATEGORY],
    difficulty: Difficulty,
}

impl Category {
    /// Create a category from its name, words and difficulty level
    ///
    /// # Errors
    /// Returns `PuzzleError` if the difficulty is out of range, a word is blank,
    /// or a word is listed twice.
    ///
    /// # Examples
    /// ```
    /// use konekcije::core::Category;
    ///
    /// let fruit = Category::new("Voće", ["Jabuka", "Kruška", "Banana", "Narandža"], 1).unwrap();
    /// assert!(fruit.contains("Banana"));
    ///
    /// assert!(Category::new("Voće", ["Jabuka", "Jabuka", "Banana", "Narandža"], 1).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        words: [&str; WORDS_PER_CATEGORY],
        difficulty: u8,
    ) -> Result<Self, PuzzleError> {
        let category = Self {
            name: name.into(),
            words: words.map(str::to_string),
            difficulty: Difficulty::new(difficulty)?,
        };
        category.validate()?;
        Ok(category)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; WORDS_PER_CATEGORY] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Check whether a word belongs to this category
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Count how many words of a selection belong to this category
    #[must_use]
    pub fn shared_count<S: AsRef<str>>(&self, selection: &[S]) -> usize {
        selection
            .iter()
            .filter(|word| self.contains(word.as_ref()))
            .count()
    }

    fn validate(&self) -> Result<(), PuzzleError> {
        let mut seen = FxHashSet::default();
        for word in &self.words {
            if word.trim().is_empty() {
                return Err(PuzzleError::EmptyWord(self.name.clone()));
            }
            if !seen.insert(word.as_str()) {
                return Err(PuzzleError::RepeatedWord(self.name.clone()));
            }
        }
        Ok(())
    }
}

/// Puzzle author credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Four categories making up one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    id: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    authors: Vec<Author>,
    categories: [Category; CATEGORY_COUNT],
}

impl Puzzle {
    /// Create a puzzle, checking the puzzle-wide invariants
    ///
    /// # Errors
    /// Returns `PuzzleError` if any category is invalid, two categories share a name,
    /// or a word appears in more than one category.
    pub fn new(
        id: u32,
        categories: [Category; CATEGORY_COUNT],
        authors: Vec<Author>,
    ) -> Result<Self, PuzzleError> {
        let puzzle = Self {
            id,
            authors,
            categories,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Check the invariants of deserialized content
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let mut names = FxHashSet::default();
        let mut words = FxHashSet::default();

        for category in &self.categories {
            category.validate()?;
            if !names.insert(category.name()) {
                return Err(PuzzleError::DuplicateName(category.name.clone()));
            }
            for word in category.words() {
                if !words.insert(word.as_str()) {
                    return Err(PuzzleError::SharedWord(word.clone()));
                }
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    #[inline]
    #[must_use]
    pub const fn categories(&self) -> &[Category; CATEGORY_COUNT] {
        &self.categories
    }

    /// All sixteen words in category order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|category| category.words().iter().map(String::as_str))
    }

    /// The category owning a word, if any
    #[must_use]
    pub fn category_of(&self, word: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.contains(word))
    }
}

/// A puzzle scheduled for a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    date: NaiveDate,
    puzzle: Puzzle,
}

impl DailyPuzzle {
    #[must_use]
    pub const fn new(date: NaiveDate, puzzle: Puzzle) -> Self {
        Self { date, puzzle }
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
}

impl Deref for DailyPuzzle {
    type Target = Puzzle;

    fn deref(&self) -> &Self::Target {
        &self.puzzle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{sample_daily, sample_puzzle};

    #[test]
    fn difficulty_range() {
        assert!(Difficulty::new(0).is_err());
        assert_eq!(Difficulty::new(1).unwrap(), Difficulty::EASIEST);
        assert_eq!(Difficulty::new(4).unwrap(), Difficulty::HARDEST);
        assert_eq!(Difficulty::new(5), Err(PuzzleError::InvalidDifficulty(5)));
    }

    #[test]
    fn category_rejects_blank_and_repeated_words() {
        assert!(matches!(
            Category::new("x", ["a", " ", "c", "d"], 1),
            Err(PuzzleError::EmptyWord(_))
        ));
        assert!(matches!(
            Category::new("x", ["a", "b", "a", "d"], 1),
            Err(PuzzleError::RepeatedWord(_))
        ));
    }

    #[test]
    fn category_shared_count() {
        let puzzle = sample_puzzle();
        let fruit = &puzzle.categories()[0];
        assert_eq!(fruit.shared_count(&["Jabuka", "Kruška", "Crvena", "Una"]), 2);
        assert_eq!(fruit.shared_count::<&str>(&[]), 0);
    }

    #[test]
    fn puzzle_rejects_shared_word() {
        let result = Puzzle::new(
            1,
            [
                Category::new("A", ["a", "b", "c", "d"], 1).unwrap(),
                Category::new("B", ["e", "f", "g", "a"], 2).unwrap(),
                Category::new("C", ["i", "j", "k", "l"], 3).unwrap(),
                Category::new("D", ["m", "n", "o", "p"], 4).unwrap(),
            ],
            Vec::new(),
        );
        assert_eq!(result, Err(PuzzleError::SharedWord("a".to_string())));
    }

    #[test]
    fn puzzle_rejects_duplicate_names() {
        let result = Puzzle::new(
            1,
            [
                Category::new("A", ["a", "b", "c", "d"], 1).unwrap(),
                Category::new("A", ["e", "f", "g", "h"], 2).unwrap(),
                Category::new("C", ["i", "j", "k", "l"], 3).unwrap(),
                Category::new("D", ["m", "n", "o", "p"], 4).unwrap(),
            ],
            Vec::new(),
        );
        assert!(matches!(result, Err(PuzzleError::DuplicateName(_))));
    }

    #[test]
    fn puzzle_lookups() {
        let puzzle = sample_puzzle();
        assert_eq!(puzzle.words().count(), 16);
        assert_eq!(puzzle.category_of("Una").unwrap().name(), "Rijeke");
        assert!(puzzle.category_of("Beograd").is_none());
    }

    #[test]
    fn puzzle_json_shape() {
        let json = r#"{
            "id": 3,
            "categories": [
                { "name": "A", "words": ["a", "b", "c", "d"], "difficulty": 1 },
                { "name": "B", "words": ["e", "f", "g", "h"], "difficulty": 2 },
                { "name": "C", "words": ["i", "j", "k", "l"], "difficulty": 3 },
                { "name": "D", "words": ["m", "n", "o", "p"], "difficulty": 4 }
            ]
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.id(), 3);
        assert!(puzzle.authors().is_empty());
        assert!(puzzle.validate().is_ok());

        let bad_level = json.replace("\"difficulty\": 4", "\"difficulty\": 9");
        assert!(serde_json::from_str::<Puzzle>(&bad_level).is_err());
    }

    #[test]
    fn daily_puzzle_derefs_to_puzzle() {
        let daily = sample_daily("2026-02-07");
        assert_eq!(daily.date().to_string(), "2026-02-07");
        assert_eq!(daily.id(), 7);
        assert_eq!(daily.authors()[0].name, "Lejla");
    }
}
