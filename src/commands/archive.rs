//! Archive overview
//!
//! Every puzzle date grouped by month, newest first, with how the player did on each.

use crate::puzzles::PuzzleRepository;
use crate::storage::{KeyValueStore, Outcome, ProgressStore};
use chrono::{Datelike, NaiveDate};

/// How far the player got on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Won,
    Lost,
    InProgress,
    Unplayed,
}

/// One archive date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Dates of one calendar month, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<ArchiveEntry>,
}

/// The whole archive with a won/lost tally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub months: Vec<MonthGroup>,
    pub won: usize,
    pub lost: usize,
}

impl ArchiveSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.months.iter().map(|m| m.entries.len()).sum()
    }
}

/// Status of a single date according to the store
#[must_use]
pub fn day_status<S: KeyValueStore>(store: &ProgressStore<S>, date: NaiveDate) -> DayStatus {
    match store.load_completion(date) {
        Some(record) => match record.status {
            Outcome::Won => DayStatus::Won,
            Outcome::Lost => DayStatus::Lost,
        },
        None if store.load_in_progress(date).is_some() => DayStatus::InProgress,
        None => DayStatus::Unplayed,
    }
}

/// Group all puzzle dates by month
pub fn build_archive<R, S>(repository: &R, store: &ProgressStore<S>) -> ArchiveSummary
where
    R: PuzzleRepository + ?Sized,
    S: KeyValueStore,
{
    let mut summary = ArchiveSummary::default();

    for date in repository.all_dates() {
        let status = day_status(store, date);
        match status {
            DayStatus::Won => summary.won += 1,
            DayStatus::Lost => summary.lost += 1,
            DayStatus::InProgress | DayStatus::Unplayed => {}
        }

        let entry = ArchiveEntry { date, status };
        match summary.months.last_mut() {
            Some(group) if group.year == date.year() && group.month == date.month() => {
                group.entries.push(entry);
            }
            _ => summary.months.push(MonthGroup {
                year: date.year(),
                month: date.month(),
                entries: vec![entry],
            }),
        }
    }

    summary
}
