//! Session controller
//!
//! Sits between the front ends and a `GameSession`: it tracks which puzzle is being loaded,
//! applies only the load result that matches the current epoch, and owns the transient
//! notice and results-reveal timers.

use super::session::{GameSession, SubmitOutcome};
use super::timers::{NOTICE_DURATION, Notice, RESULTS_DELAY, TimedEvent, Timers};
use crate::core::DailyPuzzle;
use crate::puzzles::{PuzzleRepository, RepositoryError};
use crate::storage::{Calendar, KeyValueStore, ProgressStore};
use chrono::NaiveDate;
use std::time::Instant;

/// Which puzzle to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    /// Today's puzzle, falling back to the latest earlier one
    Today,
    /// Exactly this date
    Date(NaiveDate),
}

/// A pending load, stamped with the epoch it was requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub epoch: u64,
    pub date: NaiveDate,
    pub fallback: bool,
}

/// What a load produced, to be handed back to `Controller::apply`
#[derive(Debug)]
pub struct LoadResult {
    pub epoch: u64,
    pub date: NaiveDate,
    pub result: Result<Option<DailyPuzzle>, RepositoryError>,
}

/// Run a load against a repository
///
/// This is the only part of loading that may happen off the controller's thread.
pub fn fetch<R: PuzzleRepository + ?Sized>(repository: &R, ticket: LoadTicket) -> LoadResult {
    let result = if ticket.fallback {
        repository.todays_puzzle(ticket.date)
    } else {
        repository.puzzle_by_date(ticket.date)
    };
    LoadResult {
        epoch: ticket.epoch,
        date: ticket.date,
        result,
    }
}

/// Where the controller is in its lifecycle
#[derive(Debug)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// Waiting for the puzzle of this date
    Loading(NaiveDate),
    /// No puzzle could be shown for this date
    Missing(NaiveDate),
    Ready(Box<GameSession>),
}

/// Drives one game at a time over a progress store
#[derive(Debug)]
pub struct Controller<S> {
    store: ProgressStore<S>,
    calendar: Calendar,
    phase: Phase,
    epoch: u64,
    timers: Timers,
    notice: Option<(Notice, u64)>,
    notice_serial: u64,
    results_visible: bool,
}

impl<S: KeyValueStore> Controller<S> {
    #[must_use]
    pub fn new(store: ProgressStore<S>, calendar: Calendar) -> Self {
        Self {
            store,
            calendar,
            phase: Phase::Idle,
            epoch: 0,
            timers: Timers::new(),
            notice: None,
            notice_serial: 0,
            results_visible: false,
        }
    }

    /// Today according to the calendar, honouring a pinned date in dev mode
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.calendar.today(&self.store)
    }

    /// Start a new load; any earlier pending load becomes stale
    pub fn request(&mut self, target: LoadTarget) -> LoadTicket {
        self.invalidate();
        let (date, fallback) = match target {
            LoadTarget::Today => (self.today(), true),
            LoadTarget::Date(date) => (date, false),
        };
        self.phase = Phase::Loading(date);
        log::debug!("Requesting puzzle for {date} (epoch {})", self.epoch);
        LoadTicket {
            epoch: self.epoch,
            date,
            fallback,
        }
    }

    /// Apply a finished load; returns false when it was stale and ignored
    pub fn apply(&mut self, load: LoadResult) -> bool {
        if load.epoch != self.epoch {
            log::debug!(
                "Discarding stale load for {} (epoch {} != {})",
                load.date,
                load.epoch,
                self.epoch
            );
            return false;
        }

        self.phase = match load.result {
            Ok(Some(puzzle)) => {
                let session = GameSession::start(puzzle, &self.store);
                self.results_visible = session.status().is_over();
                Phase::Ready(Box::new(session))
            }
            Ok(None) => {
                log::info!("No puzzle for {}", load.date);
                Phase::Missing(load.date)
            }
            Err(e) => {
                log::error!("Failed to load puzzle for {}: {e}", load.date);
                Phase::Missing(load.date)
            }
        };
        true
    }

    /// Request and apply a load on the current thread
    pub fn load_blocking<R: PuzzleRepository + ?Sized>(
        &mut self,
        repository: &R,
        target: LoadTarget,
    ) -> bool {
        let ticket = self.request(target);
        self.apply(fetch(repository, ticket))
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        match &self.phase {
            Phase::Ready(session) => Some(session.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice.map(|(notice, _)| notice)
    }

    #[must_use]
    pub const fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Show or hide the results view of a finished game
    pub fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible && self.session().is_some_and(|s| s.status().is_over());
    }

    #[must_use]
    pub const fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Pin the current date; returns false outside dev mode
    pub fn pin_date(&mut self, date: NaiveDate) -> bool {
        self.calendar.pin(&mut self.store, date)
    }

    pub fn unpin_date(&mut self) {
        self.calendar.unpin(&mut self.store);
    }

    fn session_mut(&mut self) -> Option<(&mut GameSession, &mut ProgressStore<S>)> {
        match &mut self.phase {
            Phase::Ready(session) => Some((session.as_mut(), &mut self.store)),
            _ => None,
        }
    }

    pub fn select_word(&mut self, word: &str) -> bool {
        self.session_mut()
            .is_some_and(|(session, _)| session.select_word(word))
    }

    pub fn deselect_all(&mut self) -> bool {
        self.session_mut()
            .is_some_and(|(session, _)| session.deselect_all())
    }

    pub fn shuffle(&mut self) -> bool {
        self.session_mut()
            .is_some_and(|(session, store)| session.shuffle(store))
    }

    /// Submit the selection, timing feedback from `now`
    pub fn submit_at(&mut self, now: Instant) -> SubmitOutcome {
        let Some((session, store)) = self.session_mut() else {
            return SubmitOutcome::NotReady;
        };
        let outcome = session.submit(store);

        if let Some(notice) = outcome.notice() {
            self.post_notice(notice, now);
        }
        if outcome.ends_game() {
            self.timers
                .schedule(TimedEvent::RevealResults, now + RESULTS_DELAY, self.epoch);
        }
        outcome
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Instant::now())
    }

    /// Start the current puzzle over, dropping pending notices and timers
    pub fn reset(&mut self) -> bool {
        if self.session().is_none() {
            return false;
        }
        self.invalidate();
        if let Some((session, store)) = self.session_mut() {
            session.reset(store);
        }
        true
    }

    /// Fire timers due at `now`; returns whether anything visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for event in self.timers.take_due(now, self.epoch) {
            match event {
                TimedEvent::ClearNotice(serial) => {
                    if self.notice.is_some_and(|(_, current)| current == serial) {
                        self.notice = None;
                        changed = true;
                    }
                }
                TimedEvent::RevealResults => {
                    if self.session().is_some_and(|s| s.status().is_over()) {
                        self.results_visible = true;
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    fn post_notice(&mut self, notice: Notice, now: Instant) {
        self.notice_serial += 1;
        self.notice = Some((notice, self.notice_serial));
        self.timers.schedule(
            TimedEvent::ClearNotice(self.notice_serial),
            now + NOTICE_DURATION,
            self.epoch,
        );
    }

    fn invalidate(&mut self) {
        self.epoch += 1;
        self.timers.cancel_all();
        self.notice = None;
        self.results_visible = false;
    }
}
