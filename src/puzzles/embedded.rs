//! Embedded puzzle archive
//!
//! Puzzles compiled into the binary at build time.

use super::repository::{PuzzleRepository, RepositoryError, parse_puzzle};
use crate::core::{DailyPuzzle, parse_date};
use chrono::NaiveDate;

// Include generated puzzle table from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));

/// Repository over a static `(date, JSON)` table
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedRepository {
    table: &'static [(&'static str, &'static str)],
}

impl EmbeddedRepository {
    /// The archive built into this binary
    #[must_use]
    pub const fn new() -> Self {
        Self::from_table(PUZZLES)
    }

    #[must_use]
    pub const fn from_table(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }
}

impl Default for EmbeddedRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleRepository for EmbeddedRepository {
    fn puzzle_by_date(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>, RepositoryError> {
        let key = date.to_string();
        self.table
            .iter()
            .find(|(d, _)| *d == key)
            .map(|(_, json)| parse_puzzle(date, json))
            .transpose()
    }

    fn all_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .table
            .iter()
            .filter_map(|(d, _)| parse_date(d).ok())
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(PUZZLES.len(), PUZZLES_COUNT);
    }

    #[test]
    fn every_embedded_puzzle_is_valid() {
        let repository = EmbeddedRepository::new();
        for date in repository.all_dates() {
            let puzzle = repository.puzzle_by_date(date).unwrap();
            assert!(puzzle.is_some(), "Puzzle for {date} missing");
        }
    }

    #[test]
    fn dates_are_newest_first() {
        let dates = EmbeddedRepository::new().all_dates();
        assert!(!dates.is_empty());
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn table_lookup() {
        static TABLE: &[(&str, &str)] = &[
            ("2026-01-02", "{"),
            ("not-a-date", "{}"),
        ];
        let repository = EmbeddedRepository::from_table(TABLE);
        let date: NaiveDate = "2026-01-02".parse().unwrap();

        assert_eq!(repository.all_dates(), vec![date]);
        assert!(repository.puzzle_by_date(date).is_err());
        assert!(
            repository
                .puzzle_by_date("2026-01-03".parse().unwrap())
                .unwrap()
                .is_none()
        );
    }
}
