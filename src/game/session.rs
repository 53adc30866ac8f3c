//! Game session state machine
//!
//! One attempt at one daily puzzle. The session owns the mutable working set (remaining
//! words, selection, found categories, mistakes, history) and writes its progress through
//! to the `ProgressStore` after every change that should survive a restart.
//!
//! `Playing` moves to `Won` or `Lost` and never leaves those; only `reset` starts over.

use super::logic::{
    MAX_MISTAKES, MAX_SELECTIONS, evaluate_guess, is_lost, is_near_miss, is_won, shuffle_with,
};
use super::timers::Notice;
use crate::core::{CATEGORY_COUNT, Category, DailyPuzzle, Guess};
use crate::storage::{KeyValueStore, Outcome, ProgressRecord, ProgressStore};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not playing, or fewer than four words selected; nothing changed
    NotReady,
    /// The same four words were already tried; nothing changed
    Repeat,
    /// The selection was a whole category
    Found { category: String, won: bool },
    /// The selection matched nothing and cost a mistake
    Miss { one_away: bool, lost: bool },
}

impl SubmitOutcome {
    /// True when this submission ended the game
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(
            self,
            Self::Found { won: true, .. } | Self::Miss { lost: true, .. }
        )
    }

    /// Transient feedback to show for this submission
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::Repeat => Some(Notice::RepeatGuess),
            Self::Miss { one_away: true, .. } => Some(Notice::OneAway),
            _ => None,
        }
    }
}

/// A single attempt at a daily puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: DailyPuzzle,
    remaining: Vec<String>,
    selected: Vec<String>,
    found: Vec<Category>,
    mistakes: u32,
    history: Vec<Guess>,
    status: GameStatus,
    rng: StdRng,
}

impl GameSession {
    /// Open a puzzle, resuming whatever the store knows about its date
    ///
    /// A completion record wins over an in-progress record; with neither the game starts
    /// fresh with shuffled words.
    pub fn start<S: KeyValueStore>(puzzle: DailyPuzzle, store: &ProgressStore<S>) -> Self {
        Self::start_with_rng(puzzle, store, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like `start`, with a fixed random source for the shuffles
    pub fn start_with_rng<S: KeyValueStore>(
        puzzle: DailyPuzzle,
        store: &ProgressStore<S>,
        rng: StdRng,
    ) -> Self {
        let date = puzzle.date();
        let mut session = Self::fresh(puzzle, rng);

        if let Some(completion) = store.load_completion(date) {
            log::debug!("Restoring finished game for {date}");
            session.status = completion.status.into();
            session.mistakes = completion.attempts;
            session.found = session.puzzle.categories().to_vec();
            session.history = completion.guess_history;
            session.remaining.clear();
        } else if let Some(progress) = store.load_in_progress(date) {
            log::debug!("Resuming game for {date} with {} mistakes", progress.mistakes);
            session.mistakes = progress.mistakes;
            session.found = session
                .puzzle
                .categories()
                .iter()
                .filter(|category| {
                    progress
                        .found_category_names
                        .iter()
                        .any(|name| name == category.name())
                })
                .cloned()
                .collect();
            session.history = progress.guess_history;
            session.remaining = progress.remaining_words;
        }

        session
    }

    fn fresh(puzzle: DailyPuzzle, mut rng: StdRng) -> Self {
        let words: Vec<String> = puzzle.words().map(str::to_string).collect();
        let remaining = shuffle_with(&words, &mut rng);
        Self {
            puzzle,
            remaining,
            selected: Vec::new(),
            found: Vec::new(),
            mistakes: 0,
            history: Vec::new(),
            status: GameStatus::Playing,
            rng,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &DailyPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.puzzle.date()
    }

    /// Unsolved words in display order
    #[must_use]
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining
    }

    /// Selected words in selection order
    #[must_use]
    pub fn selected_words(&self) -> &[String] {
        &self.selected
    }

    /// Found categories in discovery order
    #[must_use]
    pub fn found_categories(&self) -> &[Category] {
        &self.found
    }

    /// Categories not found yet, in puzzle order
    pub fn unsolved_categories(&self) -> impl Iterator<Item = &Category> {
        self.puzzle
            .categories()
            .iter()
            .filter(|category| !self.is_found(category.name()))
    }

    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub const fn mistakes_left(&self) -> u32 {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }

    #[must_use]
    pub fn guess_history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == GameStatus::Playing && self.selected.len() == MAX_SELECTIONS
    }

    fn is_found(&self, name: &str) -> bool {
        self.found.iter().any(|category| category.name() == name)
    }

    /// Toggle a word in or out of the selection
    ///
    /// Returns whether anything changed. Adding a fifth word is ignored.
    pub fn select_word(&mut self, word: &str) -> bool {
        if self.status != GameStatus::Playing || !self.remaining.iter().any(|w| w == word) {
            return false;
        }

        if let Some(index) = self.selected.iter().position(|w| w == word) {
            self.selected.remove(index);
            true
        } else if self.selected.len() < MAX_SELECTIONS {
            self.selected.push(word.to_string());
            true
        } else {
            false
        }
    }

    /// Clear the selection; returns whether anything was selected
    pub fn deselect_all(&mut self) -> bool {
        if self.status != GameStatus::Playing || self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Reorder the remaining words, keeping the selection
    pub fn shuffle<S: KeyValueStore>(&mut self, store: &mut ProgressStore<S>) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.remaining = shuffle_with(&self.remaining, &mut self.rng);
        self.persist(store);
        true
    }

    /// Submit the four selected words
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut ProgressStore<S>) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::NotReady;
        }

        if self
            .history
            .iter()
            .any(|guess| guess.same_words(&self.selected))
        {
            log::debug!("Repeat guess {}", Guess::canonical_key(&self.selected));
            return SubmitOutcome::Repeat;
        }

        let Ok(words) = <[String; MAX_SELECTIONS]>::try_from(self.selected.clone()) else {
            return SubmitOutcome::NotReady;
        };
        self.history.push(Guess::new(words, &self.puzzle));

        let matched = evaluate_guess(&self.selected, self.unsolved_categories()).cloned();

        if let Some(category) = matched {
            let name = category.name().to_string();
            self.remaining.retain(|word| !category.contains(word));
            self.selected.clear();
            self.found.push(category);
            log::debug!("Found '{name}' ({}/{CATEGORY_COUNT})", self.found.len());

            let won = is_won(&self.found, CATEGORY_COUNT);
            if won {
                self.finish(Outcome::Won, store);
            } else {
                self.persist(store);
            }
            SubmitOutcome::Found {
                category: name,
                won,
            }
        } else {
            let one_away = is_near_miss(&self.selected, self.unsolved_categories());
            self.mistakes += 1;
            self.selected.clear();
            log::debug!("Miss {}/{MAX_MISTAKES}, one away: {one_away}", self.mistakes);

            let lost = is_lost(self.mistakes, MAX_MISTAKES);
            if lost {
                self.finish(Outcome::Lost, store);
            } else {
                self.persist(store);
            }
            SubmitOutcome::Miss { one_away, lost }
        }
    }

    /// Throw away all progress for this date and start over
    pub fn reset<S: KeyValueStore>(&mut self, store: &mut ProgressStore<S>) {
        let date = self.date();
        store.clear_in_progress(date);
        store.clear_completion(date);

        let words: Vec<String> = self.puzzle.words().map(str::to_string).collect();
        self.remaining = shuffle_with(&words, &mut self.rng);
        self.selected.clear();
        self.found.clear();
        self.mistakes = 0;
        self.history.clear();
        self.status = GameStatus::Playing;
        log::debug!("Reset game for {date}");
    }

    /// Progress snapshot as it would be stored
    #[must_use]
    pub fn snapshot(&self) -> ProgressRecord {
        ProgressRecord {
            mistakes: self.mistakes,
            found_category_names: self
                .found
                .iter()
                .map(|category| category.name().to_string())
                .collect(),
            guess_history: self.history.clone(),
            remaining_words: self.remaining.clone(),
        }
    }

    fn persist<S: KeyValueStore>(&self, store: &mut ProgressStore<S>) {
        store.save_in_progress(self.date(), &self.snapshot());
    }

    fn finish<S: KeyValueStore>(&mut self, outcome: Outcome, store: &mut ProgressStore<S>) {
        let date = self.date();
        self.status = outcome.into();
        store.clear_in_progress(date);
        store.save_completion(date, outcome, self.mistakes, &self.history);
        log::debug!("Game for {date} {outcome} with {} mistakes", self.mistakes);
    }
}
