//! Puzzle repository contract
//!
//! A repository answers two questions: which dates have puzzles, and what the puzzle for a
//! given date is. "Today's" puzzle falls back to the newest earlier date when today has none.

use crate::core::{DailyPuzzle, Puzzle, PuzzleError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for puzzle sources
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed puzzle for {date}: {source}")]
    Json {
        date: NaiveDate,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid puzzle for {date}: {source}")]
    Invalid {
        date: NaiveDate,
        #[source]
        source: PuzzleError,
    },
}

/// Source of daily puzzles
///
/// Implementations are shared with the background loader thread.
pub trait PuzzleRepository: Send + Sync {
    /// Look up the puzzle for a date; `Ok(None)` when the date has no puzzle
    ///
    /// # Errors
    /// Returns `RepositoryError` if the puzzle exists but cannot be read or is invalid.
    fn puzzle_by_date(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>, RepositoryError>;

    /// Every date with a puzzle, newest first
    fn all_dates(&self) -> Vec<NaiveDate>;

    /// Today's puzzle, else the most recent one before today
    ///
    /// # Errors
    /// Returns `RepositoryError` if the chosen puzzle cannot be loaded.
    fn todays_puzzle(&self, today: NaiveDate) -> Result<Option<DailyPuzzle>, RepositoryError> {
        if let Some(puzzle) = self.puzzle_by_date(today)? {
            return Ok(Some(puzzle));
        }

        match self.all_dates().into_iter().find(|&date| date < today) {
            Some(date) => {
                log::debug!("No puzzle for {today}, falling back to {date}");
                self.puzzle_by_date(date)
            }
            None => Ok(None),
        }
    }
}

#[derive(Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(flatten)]
    puzzle: Puzzle,
}

/// Decode and validate the JSON of the puzzle filed under `date`
///
/// The file may carry its own `date`; if it does it must agree with `date`.
///
/// # Errors
/// Returns `RepositoryError::Json` for malformed JSON and `RepositoryError::Invalid` when
/// the content breaks a puzzle invariant.
pub fn parse_puzzle(date: NaiveDate, json: &str) -> Result<DailyPuzzle, RepositoryError> {
    let file: PuzzleFile =
        serde_json::from_str(json).map_err(|source| RepositoryError::Json { date, source })?;

    if let Some(found) = file.date
        && found != date
    {
        return Err(RepositoryError::Invalid {
            date,
            source: PuzzleError::DateMismatch {
                expected: date,
                found,
            },
        });
    }

    file.puzzle
        .validate()
        .map_err(|source| RepositoryError::Invalid { date, source })?;

    Ok(DailyPuzzle::new(date, file.puzzle))
}

/// Repository held entirely in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    puzzles: BTreeMap<NaiveDate, DailyPuzzle>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, puzzle: DailyPuzzle) {
        self.puzzles.insert(puzzle.date(), puzzle);
    }

    #[must_use]
    pub fn with(mut self, puzzle: DailyPuzzle) -> Self {
        self.insert(puzzle);
        self
    }
}

impl PuzzleRepository for MemoryRepository {
    fn puzzle_by_date(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>, RepositoryError> {
        Ok(self.puzzles.get(&date).cloned())
    }

    fn all_dates(&self) -> Vec<NaiveDate> {
        self.puzzles.keys().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_daily;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn repository() -> MemoryRepository {
        MemoryRepository::new()
            .with(sample_daily("2026-02-01"))
            .with(sample_daily("2026-02-05"))
            .with(sample_daily("2026-02-07"))
    }

    const JSON: &str = r#"{
        "id": 3,
        "date": "2026-02-07",
        "authors": [{ "name": "Lejla" }],
        "categories": [
            { "name": "A", "words": ["a", "b", "c", "d"], "difficulty": 1 },
            { "name": "B", "words": ["e", "f", "g", "h"], "difficulty": 2 },
            { "name": "C", "words": ["i", "j", "k", "l"], "difficulty": 3 },
            { "name": "D", "words": ["m", "n", "o", "p"], "difficulty": 4 }
        ]
    }"#;

    #[test]
    fn dates_newest_first() {
        let dates = repository().all_dates();
        assert_eq!(
            dates,
            vec![date("2026-02-07"), date("2026-02-05"), date("2026-02-01")]
        );
    }

    #[test]
    fn todays_puzzle_exact() {
        let puzzle = repository().todays_puzzle(date("2026-02-05")).unwrap();
        assert_eq!(puzzle.unwrap().date(), date("2026-02-05"));
    }

    #[test]
    fn todays_puzzle_falls_back_to_most_recent_past() {
        let puzzle = repository().todays_puzzle(date("2026-02-06")).unwrap();
        assert_eq!(puzzle.unwrap().date(), date("2026-02-05"));

        let later = repository().todays_puzzle(date("2026-03-01")).unwrap();
        assert_eq!(later.unwrap().date(), date("2026-02-07"));
    }

    #[test]
    fn todays_puzzle_none_before_archive() {
        assert!(
            repository()
                .todays_puzzle(date("2026-01-01"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn missing_date_is_none() {
        assert!(
            repository()
                .puzzle_by_date(date("2026-02-02"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn parse_valid_file() {
        let puzzle = parse_puzzle(date("2026-02-07"), JSON).unwrap();
        assert_eq!(puzzle.id(), 3);
        assert_eq!(puzzle.authors()[0].name, "Lejla");
        assert_eq!(puzzle.categories()[3].name(), "D");
    }

    #[test]
    fn parse_without_date_field() {
        let json = JSON.replace("\"date\": \"2026-02-07\",", "");
        let puzzle = parse_puzzle(date("2026-02-09"), &json).unwrap();
        assert_eq!(puzzle.date(), date("2026-02-09"));
    }

    #[test]
    fn parse_rejects_date_mismatch() {
        let result = parse_puzzle(date("2026-02-08"), JSON);
        assert!(matches!(
            result,
            Err(RepositoryError::Invalid {
                source: PuzzleError::DateMismatch { .. },
                ..
            })
        ));
    }

    #[test]
    fn parse_rejects_shared_words() {
        let json = JSON.replace("\"p\"]", "\"a\"]");
        assert!(matches!(
            parse_puzzle(date("2026-02-07"), &json),
            Err(RepositoryError::Invalid {
                source: PuzzleError::SharedWord(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_puzzle(date("2026-02-07"), "{"),
            Err(RepositoryError::Json { .. })
        ));
        let three_words = JSON.replace("\"c\", \"d\"", "\"c\"");
        assert!(parse_puzzle(date("2026-02-07"), &three_words).is_err());
    }
}
