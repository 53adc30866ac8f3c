//! Per-date game progress
//!
//! Two records live under each date: the in-progress snapshot used to resume a game and the
//! completion record written once the game ends. Keys follow `<prefix><kind>_<date>`.
//!
//! Reads never fail: a missing or undecodable record is simply absent. Writes never fail
//! either; a backend error is logged and play continues.

use super::kv::{KeyValueStore, StoreError};
use crate::core::{Guess, WORDS_PER_CATEGORY};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const COMPLETED: &str = "completed";
const PROGRESS: &str = "progress";
const DEV_DATE: &str = "dev_date";

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Terminal result of a puzzle attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub date: NaiveDate,
    pub completed: bool,
    pub status: Outcome,
    /// Mistakes made by the end of the game
    pub attempts: u32,
    pub timestamp: DateTime<Utc>,
    /// Older records hold bare level rows; those load as guesses with empty words
    #[serde(default, deserialize_with = "guess_rows")]
    pub guess_history: Vec<Guess>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredGuess {
    Full(Guess),
    Levels([u8; WORDS_PER_CATEGORY]),
}

impl From<StoredGuess> for Guess {
    fn from(stored: StoredGuess) -> Self {
        match stored {
            StoredGuess::Full(guess) => guess,
            StoredGuess::Levels(levels) => Self {
                words: Default::default(),
                levels,
            },
        }
    }
}

fn guess_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Guess>, D::Error> {
    let stored = Vec::<StoredGuess>::deserialize(deserializer)?;
    Ok(stored.into_iter().map(Guess::from).collect())
}

/// Snapshot of an unfinished game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub mistakes: u32,
    pub found_category_names: Vec<String>,
    pub guess_history: Vec<Guess>,
    pub remaining_words: Vec<String>,
}

/// Typed access to game records over a key-value backend
#[derive(Debug)]
pub struct ProgressStore<S> {
    kv: S,
    prefix: String,
}

impl<S: KeyValueStore> ProgressStore<S> {
    #[must_use]
    pub fn new(kv: S, prefix: impl Into<String>) -> Self {
        Self {
            kv,
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.kv
    }

    fn key(&self, kind: &str, date: NaiveDate) -> String {
        format!("{}{kind}_{date}", self.prefix)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.kv.get(key)?;
        serde_json::from_str(&raw)
            .inspect_err(|e| log::warn!("Ignoring corrupt record {key}: {e}"))
            .ok()
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StoreError::from)
            .and_then(|json| self.kv.set(key, json));
        if let Err(e) = result {
            log::warn!("Failed to save {key}: {e}");
        }
    }

    fn delete(&mut self, key: &str) {
        if let Err(e) = self.kv.remove(key) {
            log::warn!("Failed to remove {key}: {e}");
        }
    }

    #[must_use]
    pub fn load_completion(&self, date: NaiveDate) -> Option<CompletionRecord> {
        self.read(&self.key(COMPLETED, date))
    }

    /// True if anything is stored under the completion key, even an unreadable record
    #[must_use]
    pub fn has_completion(&self, date: NaiveDate) -> bool {
        self.kv.contains(&self.key(COMPLETED, date))
    }

    /// Record a finished game, stamped with the current time
    pub fn save_completion(
        &mut self,
        date: NaiveDate,
        status: Outcome,
        attempts: u32,
        guess_history: &[Guess],
    ) {
        self.save_completion_at(date, status, attempts, guess_history, Utc::now());
    }

    pub fn save_completion_at(
        &mut self,
        date: NaiveDate,
        status: Outcome,
        attempts: u32,
        guess_history: &[Guess],
        timestamp: DateTime<Utc>,
    ) {
        let record = CompletionRecord {
            date,
            completed: true,
            status,
            attempts,
            timestamp,
            guess_history: guess_history.to_vec(),
        };
        log::debug!("Saving completion for {date}: {status} after {attempts} mistakes");
        self.write(&self.key(COMPLETED, date), &record);
    }

    pub fn clear_completion(&mut self, date: NaiveDate) {
        self.delete(&self.key(COMPLETED, date));
    }

    #[must_use]
    pub fn load_in_progress(&self, date: NaiveDate) -> Option<ProgressRecord> {
        self.read(&self.key(PROGRESS, date))
    }

    pub fn save_in_progress(&mut self, date: NaiveDate, record: &ProgressRecord) {
        self.write(&self.key(PROGRESS, date), record);
    }

    pub fn clear_in_progress(&mut self, date: NaiveDate) {
        self.delete(&self.key(PROGRESS, date));
    }

    /// Pinned development date, if one is stored
    #[must_use]
    pub fn dev_date(&self) -> Option<NaiveDate> {
        let key = format!("{}{DEV_DATE}", self.prefix);
        let raw = self.kv.get(&key)?;
        crate::core::parse_date(&raw)
            .inspect_err(|e| log::warn!("Ignoring pinned date: {e}"))
            .ok()
    }

    pub fn set_dev_date(&mut self, date: NaiveDate) {
        let key = format!("{}{DEV_DATE}", self.prefix);
        if let Err(e) = self.kv.set(&key, date.to_string()) {
            log::warn!("Failed to pin date: {e}");
        }
    }

    pub fn clear_dev_date(&mut self) {
        let key = format!("{}{DEV_DATE}", self.prefix);
        self.delete(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_puzzle;
    use crate::storage::MemoryStore;

    const PREFIX: &str = "konekcije_";

    fn date() -> NaiveDate {
        "2026-02-07".parse().unwrap()
    }

    fn store() -> ProgressStore<MemoryStore> {
        ProgressStore::new(MemoryStore::new(), PREFIX)
    }

    fn history() -> Vec<Guess> {
        let puzzle = sample_puzzle();
        vec![
            Guess::new(puzzle.categories()[0].words().clone(), &puzzle),
            Guess::new(
                ["Crvena", "Plava", "Zelena", "Una"].map(String::from),
                &puzzle,
            ),
        ]
    }

    #[test]
    fn missing_records_are_none() {
        let store = store();
        assert!(store.load_completion(date()).is_none());
        assert!(store.load_in_progress(date()).is_none());
        assert!(!store.has_completion(date()));
    }

    #[test]
    fn completion_roundtrip() {
        let mut store = store();
        let before = Utc::now();
        store.save_completion(date(), Outcome::Won, 2, &history());

        let record = store.load_completion(date()).unwrap();
        assert_eq!(record.date, date());
        assert!(record.completed);
        assert_eq!(record.status, Outcome::Won);
        assert_eq!(record.attempts, 2);
        assert_eq!(record.guess_history, history());
        assert!(record.timestamp >= before);
        assert!(store.has_completion(date()));
    }

    #[test]
    fn completion_json_layout() {
        let mut store = store();
        let timestamp = "2026-02-07T12:00:00Z".parse().unwrap();
        store.save_completion_at(date(), Outcome::Lost, 4, &[], timestamp);

        let raw = store
            .backend()
            .get("konekcije_completed_2026-02-07")
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["date"], "2026-02-07");
        assert_eq!(json["completed"], true);
        assert_eq!(json["status"], "lost");
        assert_eq!(json["attempts"], 4);
        assert_eq!(json["guessHistory"], serde_json::json!([]));
        assert!(json["timestamp"].as_str().unwrap().starts_with("2026-02-07T12:00:00"));
    }

    #[test]
    fn reads_millisecond_timestamps() {
        let mut kv = MemoryStore::new();
        kv.set(
            "konekcije_completed_2026-02-07",
            r#"{"date":"2026-02-07","completed":true,"status":"won","attempts":2,
                "timestamp":"2026-02-07T12:00:00.000Z","guessHistory":[]}"#
                .to_string(),
        )
        .unwrap();
        let store = ProgressStore::new(kv, PREFIX);

        let record = store.load_completion(date()).unwrap();
        assert_eq!(record.attempts, 2);
        assert_eq!(record.status, Outcome::Won);
    }

    #[test]
    fn reads_level_row_history() {
        let mut kv = MemoryStore::new();
        kv.set(
            "konekcije_completed_2026-02-07",
            r#"{"date":"2026-02-07","completed":true,"status":"won","attempts":1,
                "timestamp":"2026-02-07T12:00:00.000Z",
                "guessHistory":[[1,1,1,2],[1,1,1,1],[2,2,2,2],[3,3,3,3],[4,4,4,4]]}"#
                .to_string(),
        )
        .unwrap();
        let store = ProgressStore::new(kv, PREFIX);

        let record = store.load_completion(date()).unwrap();
        let levels: Vec<[u8; 4]> = record.guess_history.iter().map(|g| g.levels).collect();
        assert_eq!(levels[0], [1, 1, 1, 2]);
        assert_eq!(levels.len(), 5);
        assert!(record.guess_history[0].words.iter().all(String::is_empty));
    }

    #[test]
    fn reads_mixed_history_rows() {
        let puzzle = sample_puzzle();
        let guess = Guess::new(["Bosna", "Neretva", "Drina", "Una"].map(String::from), &puzzle);
        let json = format!(
            r#"{{"date":"2026-02-07","completed":true,"status":"lost","attempts":4,
                "timestamp":"2026-02-07T12:00:00Z","guessHistory":[{},[0,1,2,3]]}}"#,
            serde_json::to_string(&guess).unwrap()
        );
        let mut kv = MemoryStore::new();
        kv.set("konekcije_completed_2026-02-07", json).unwrap();
        let store = ProgressStore::new(kv, PREFIX);

        let record = store.load_completion(date()).unwrap();
        assert_eq!(record.guess_history[0], guess);
        assert_eq!(record.guess_history[1].levels, [0, 1, 2, 3]);
    }

    #[test]
    fn completion_overwrite_and_clear() {
        let mut store = store();
        store.save_completion(date(), Outcome::Lost, 4, &[]);
        store.save_completion(date(), Outcome::Won, 1, &[]);
        assert_eq!(store.load_completion(date()).unwrap().status, Outcome::Won);

        store.clear_completion(date());
        assert!(store.load_completion(date()).is_none());
        store.clear_completion(date());
    }

    #[test]
    fn corrupt_records_are_none() {
        let mut kv = MemoryStore::new();
        kv.set("konekcije_completed_2026-02-07", "{}".to_string())
            .unwrap();
        kv.set("konekcije_progress_2026-02-07", "not json".to_string())
            .unwrap();
        let store = ProgressStore::new(kv, PREFIX);

        assert!(store.load_completion(date()).is_none());
        assert!(store.load_in_progress(date()).is_none());
        assert!(store.has_completion(date()));
    }

    #[test]
    fn progress_roundtrip_and_clear() {
        let mut store = store();
        let record = ProgressRecord {
            mistakes: 1,
            found_category_names: vec!["Voće".to_string()],
            guess_history: history(),
            remaining_words: vec!["Una".to_string(), "Drina".to_string()],
        };
        store.save_in_progress(date(), &record);
        assert_eq!(store.load_in_progress(date()), Some(record));

        store.clear_in_progress(date());
        assert!(store.load_in_progress(date()).is_none());
    }

    #[test]
    fn records_are_per_date() {
        let mut store = store();
        store.save_completion(date(), Outcome::Won, 0, &[]);
        let other = date().succ_opt().unwrap();
        assert!(store.load_completion(other).is_none());
    }

    #[test]
    fn dev_date_roundtrip() {
        let mut store = store();
        assert!(store.dev_date().is_none());

        store.set_dev_date(date());
        assert_eq!(store.dev_date(), Some(date()));
        assert!(store.backend().contains("konekcije_dev_date"));

        store.clear_dev_date();
        assert!(store.dev_date().is_none());
    }
}
