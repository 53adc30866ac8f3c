//! Core domain types for Konekcije
//!
//! Puzzle content, guesses and calendar dates. Everything here is plain data with
//! validated invariants; no I/O and no game state.

mod category;
mod date;
mod guess;

#[cfg(test)]
pub(crate) mod fixtures;

pub use category::{
    Author, CATEGORY_COUNT, Category, DailyPuzzle, Difficulty, Puzzle, PuzzleError,
    WORDS_PER_CATEGORY,
};
pub use date::{local_today, parse_date};
pub use guess::Guess;
