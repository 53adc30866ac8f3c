//! Resolving "today"
//!
//! In development mode a date pinned in the store stands in for the real calendar, so any
//! archive day can be played as if it were current.

use super::kv::KeyValueStore;
use super::progress::ProgressStore;
use crate::core::local_today;
use chrono::NaiveDate;

/// Source of the current puzzle date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calendar {
    dev_mode: bool,
}

impl Calendar {
    #[must_use]
    pub const fn new(dev_mode: bool) -> Self {
        Self { dev_mode }
    }

    #[must_use]
    pub const fn is_dev_mode(self) -> bool {
        self.dev_mode
    }

    /// The pinned date in development mode, otherwise the local date
    #[must_use]
    pub fn today<S: KeyValueStore>(self, store: &ProgressStore<S>) -> NaiveDate {
        self.pinned(store).unwrap_or_else(local_today)
    }

    /// The pinned date, ignored outside development mode
    #[must_use]
    pub fn pinned<S: KeyValueStore>(self, store: &ProgressStore<S>) -> Option<NaiveDate> {
        if self.dev_mode { store.dev_date() } else { None }
    }

    /// Pin a date; returns false (and stores nothing) outside development mode
    pub fn pin<S: KeyValueStore>(self, store: &mut ProgressStore<S>, date: NaiveDate) -> bool {
        if self.dev_mode {
            store.set_dev_date(date);
        }
        self.dev_mode
    }

    /// Remove the pinned date; always allowed
    pub fn unpin<S: KeyValueStore>(self, store: &mut ProgressStore<S>) {
        store.clear_dev_date();
    }
}
