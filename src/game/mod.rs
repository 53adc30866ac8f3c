//! Game engine, session state machine and controller

mod controller;
mod loader;
pub mod logic;
mod session;
mod timers;

pub use controller::{Controller, LoadResult, LoadTarget, LoadTicket, Phase, fetch};
pub use loader::PuzzleLoader;
pub use logic::{
    MAX_MISTAKES, MAX_SELECTIONS, evaluate_guess, is_lost, is_near_miss, is_won, shuffle,
};
pub use session::{GameSession, GameStatus, SubmitOutcome};
pub use timers::{NOTICE_DURATION, Notice, RESULTS_DELAY, TimedEvent, Timers};
