//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_archive, print_author_statistics, print_board, print_check_report, print_game_over,
    print_results,
};
