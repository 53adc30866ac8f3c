//! Konekcije
//!
//! A daily word-grouping puzzle: sixteen words hide four groups of four, and the player has
//! four mistakes to find them all. Progress is kept per date so a game can be resumed, and
//! finished games are recorded for the archive and the results grid.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use konekcije::game::{GameSession, SubmitOutcome};
//! use konekcije::puzzles::{EmbeddedRepository, PuzzleRepository};
//! use konekcije::storage::{MemoryStore, ProgressStore};
//!
//! let repository = EmbeddedRepository::new();
//! let mut store = ProgressStore::new(MemoryStore::new(), "konekcije_");
//! let today = konekcije::core::local_today();
//!
//! if let Ok(Some(puzzle)) = repository.todays_puzzle(today) {
//!     let mut session = GameSession::start(puzzle, &store);
//!     let words: Vec<String> = session.remaining_words()[..4].to_vec();
//!     for word in &words {
//!         session.select_word(word);
//!     }
//!     match session.submit(&mut store) {
//!         SubmitOutcome::Found { category, .. } => println!("Found {category}"),
//!         other => println!("{other:?}"),
//!     }
//! }
//! ```

// Puzzle data types
pub mod core;

// Rules, session state machine and controller
pub mod game;

// Progress persistence
pub mod storage;

// Puzzle sources
pub mod puzzles;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
