//! Puzzle archive check
//!
//! Loads every puzzle in parallel and reports the ones that fail validation, plus ids that
//! are reused across dates.

use crate::puzzles::PuzzleRepository;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A date whose puzzle is broken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub date: NaiveDate,
    pub reason: String,
}

/// Outcome of checking the whole archive
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub checked: usize,
    pub failures: Vec<CheckFailure>,
    pub duration: Duration,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every puzzle in `repository`
///
/// With `show_progress` a progress bar is drawn on stderr while the check runs.
pub fn run_check<R: PuzzleRepository + ?Sized>(repository: &R, show_progress: bool) -> CheckReport {
    let start = Instant::now();
    let dates = repository.all_dates();

    let pb = if show_progress {
        let pb = ProgressBar::new(dates.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("Checking puzzles");
        pb
    } else {
        ProgressBar::hidden()
    };

    let loaded: Vec<(NaiveDate, Result<u32, String>)> = dates
        .par_iter()
        .map(|&date| {
            let result = match repository.puzzle_by_date(date) {
                Ok(Some(puzzle)) => Ok(puzzle.id()),
                Ok(None) => Err("listed but not found".to_string()),
                Err(e) => Err(e.to_string()),
            };
            pb.inc(1);
            (date, result)
        })
        .collect();
    pb.finish_with_message("Done");

    let mut failures = Vec::new();
    let mut ids: FxHashMap<u32, NaiveDate> = FxHashMap::default();
    for (date, result) in loaded {
        match result {
            Ok(id) => {
                if let Some(first) = ids.insert(id, date) {
                    failures.push(CheckFailure {
                        date,
                        reason: format!("id {id} already used on {first}"),
                    });
                }
            }
            Err(reason) => failures.push(CheckFailure { date, reason }),
        }
    }
    failures.sort_by(|a, b| b.date.cmp(&a.date));

    CheckReport {
        checked: dates.len(),
        failures,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_daily;
    use crate::puzzles::{EmbeddedRepository, MemoryRepository};

    #[test]
    fn embedded_archive_is_clean() {
        let report = run_check(&EmbeddedRepository::new(), false);
        assert!(report.checked > 0);
        assert!(report.is_ok(), "{:?}", report.failures);
    }

    #[test]
    fn broken_puzzle_is_reported() {
        static TABLE: &[(&str, &str)] = &[("2026-02-07", "{ not json")];
        let report = run_check(&EmbeddedRepository::from_table(TABLE), false);
        assert_eq!(report.checked, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].date.to_string(), "2026-02-07");
    }

    #[test]
    fn reused_id_is_reported() {
        let repository = MemoryRepository::new()
            .with(sample_daily("2026-02-05"))
            .with(sample_daily("2026-02-07"));
        let report = run_check(&repository, false);
        assert_eq!(report.checked, 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].reason.contains("id 7"));
    }
}
