//! Results of a finished game

use crate::config::GameConfig;
use crate::output::formatters::results_text;
use crate::storage::{KeyValueStore, Outcome, ProgressStore};
use chrono::NaiveDate;

/// What the results view shows for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub date: NaiveDate,
    pub status: Outcome,
    pub mistakes: u32,
    /// Shareable grid text
    pub text: String,
}

/// Results for `date`, if a game was finished on it
#[must_use]
pub fn results_for<S: KeyValueStore>(
    store: &ProgressStore<S>,
    config: &GameConfig,
    date: NaiveDate,
) -> Option<ResultsView> {
    let record = store.load_completion(date)?;
    Some(ResultsView {
        date,
        status: record.status,
        mistakes: record.attempts,
        text: results_text(&config.name, date, &record.guess_history),
    })
}
