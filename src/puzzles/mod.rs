//! Puzzle sources
//!
//! The repository contract plus embedded, on-disk and in-memory implementations.

mod directory;
mod embedded;
mod repository;
pub mod stats;

pub use directory::DirectoryRepository;
pub use embedded::{EmbeddedRepository, PUZZLES, PUZZLES_COUNT};
pub use repository::{MemoryRepository, PuzzleRepository, RepositoryError, parse_puzzle};
