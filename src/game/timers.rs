//! Epoch-guarded timers for transient feedback
//!
//! Every scheduled event remembers the epoch it was created in. Resetting a game or
//! switching dates moves the epoch forward, so stale events are dropped instead of firing
//! into a session they no longer belong to.

use std::time::{Duration, Instant};

/// How long a notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Pause between the final guess and the results view
pub const RESULTS_DELAY: Duration = Duration::from_millis(1200);

/// Transient message shown above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Three of the four selected words share a category
    OneAway,
    /// This exact combination was already submitted
    RepeatGuess,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OneAway => "Fali jedna...",
            Self::RepeatGuess => "Već ste probali tu kombinaciju",
        }
    }
}

/// Something that happens a while after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEvent {
    /// Hide the notice with this serial, unless a newer one replaced it
    ClearNotice(u64),
    /// Show the results view after a finished game
    RevealResults,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    epoch: u64,
    event: TimedEvent,
}

/// Pending timed events
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<Scheduled>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, event: TimedEvent, due: Instant, epoch: u64) {
        self.pending.push(Scheduled { due, epoch, event });
    }

    /// Drop everything still pending
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return events due at `now` that belong to `epoch`
    ///
    /// Due events from other epochs are discarded. Events come back in due order.
    pub fn take_due(&mut self, now: Instant, epoch: u64) -> Vec<TimedEvent> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by_key(|s| s.due);
        due.into_iter()
            .filter(|s| s.epoch == epoch)
            .map(|s| s.event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_fire_once_when_due() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimedEvent::RevealResults, start + RESULTS_DELAY, 1);

        assert!(timers.take_due(start, 1).is_empty());
        assert_eq!(
            timers.take_due(start + RESULTS_DELAY, 1),
            vec![TimedEvent::RevealResults]
        );
        assert!(timers.take_due(start + RESULTS_DELAY * 2, 1).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn stale_epoch_is_dropped() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimedEvent::ClearNotice(3), start, 1);

        assert!(timers.take_due(start + NOTICE_DURATION, 2).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn due_events_are_ordered() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimedEvent::ClearNotice(1), start + NOTICE_DURATION, 0);
        timers.schedule(TimedEvent::RevealResults, start + RESULTS_DELAY, 0);

        assert_eq!(
            timers.take_due(start + NOTICE_DURATION, 0),
            vec![TimedEvent::RevealResults, TimedEvent::ClearNotice(1)]
        );
    }

    #[test]
    fn cancel_all_clears_pending() {
        let mut timers = Timers::new();
        timers.schedule(TimedEvent::RevealResults, Instant::now(), 0);
        timers.cancel_all();
        assert!(timers.is_empty());
    }

    #[test]
    fn notice_messages() {
        assert_eq!(Notice::OneAway.message(), "Fali jedna...");
        assert_eq!(Notice::RepeatGuess.message(), "Već ste probali tu kombinaciju");
    }
}
