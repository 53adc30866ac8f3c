//! Background puzzle loading
//!
//! Each request runs `fetch` on its own thread and sends the result back over a channel.
//! The loader never decides whether a result is current; the controller does that by epoch.

use super::controller::{LoadResult, LoadTicket, fetch};
use crate::puzzles::PuzzleRepository;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Runs repository lookups off the UI thread
pub struct PuzzleLoader {
    repository: Arc<dyn PuzzleRepository>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl PuzzleLoader {
    #[must_use]
    pub fn new(repository: Arc<dyn PuzzleRepository>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            repository,
            sender,
            receiver,
        }
    }

    #[must_use]
    pub fn repository(&self) -> &dyn PuzzleRepository {
        self.repository.as_ref()
    }

    /// Start loading `ticket` in the background
    pub fn spawn(&self, ticket: LoadTicket) {
        let repository = Arc::clone(&self.repository);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = fetch(repository.as_ref(), ticket);
            // The receiver only goes away when the loader is dropped
            let _ = sender.send(result);
        });
    }

    /// A finished load, if one is waiting
    #[must_use]
    pub fn try_recv(&self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next load finishes
    #[must_use]
    pub fn recv(&self) -> Option<LoadResult> {
        self.receiver.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_daily;
    use crate::game::{Controller, LoadTarget};
    use crate::puzzles::MemoryRepository;
    use crate::storage::{Calendar, MemoryStore, ProgressStore};

    fn loader() -> PuzzleLoader {
        let repository = MemoryRepository::new()
            .with(sample_daily("2026-02-05"))
            .with(sample_daily("2026-02-07"));
        PuzzleLoader::new(Arc::new(repository))
    }

    #[test]
    fn background_load_reaches_controller() {
        let loader = loader();
        let mut controller = Controller::new(
            ProgressStore::new(MemoryStore::new(), "konekcije_"),
            Calendar::new(false),
        );

        let ticket = controller.request(LoadTarget::Date("2026-02-07".parse().unwrap()));
        loader.spawn(ticket);
        let result = loader.recv().unwrap();
        assert!(controller.apply(result));
        assert!(controller.session().is_some());
    }

    #[test]
    fn superseded_load_is_ignored() {
        let loader = loader();
        let mut controller = Controller::new(
            ProgressStore::new(MemoryStore::new(), "konekcije_"),
            Calendar::new(false),
        );

        let first = controller.request(LoadTarget::Date("2026-02-05".parse().unwrap()));
        let second = controller.request(LoadTarget::Date("2026-02-07".parse().unwrap()));
        loader.spawn(first);
        loader.spawn(second);

        let applied: Vec<bool> = (0..2)
            .map(|_| controller.apply(loader.recv().unwrap()))
            .collect();
        assert_eq!(applied.iter().filter(|&&a| a).count(), 1);
        assert_eq!(
            controller.session().unwrap().date().to_string(),
            "2026-02-07"
        );
    }

    #[test]
    fn nothing_pending() {
        assert!(loader().try_recv().is_none());
    }
}
