//! Formatting utilities for terminal output

use crate::core::{Author, Guess};
use chrono::{Datelike, NaiveDate};

/// Month names as shown in the archive
pub const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "Mart",
    "April",
    "Maj",
    "Jun",
    "Jul",
    "August",
    "Septembar",
    "Oktobar",
    "Novembar",
    "Decembar",
];

/// Colour square for a difficulty level
#[must_use]
pub const fn level_to_emoji(level: u8) -> char {
    match level {
        1 => '🟨',
        2 => '🟩',
        3 => '🟦',
        4 => '🟪',
        _ => '⬛',
    }
}

/// One results row for a guess
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess.levels.iter().map(|&level| level_to_emoji(level)).collect()
}

/// `07/02/2026`
#[must_use]
pub fn share_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `07.02.2026.`
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y.").to_string()
}

/// `07.02.`, the day label used inside a month
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%d.%m.").to_string()
}

/// `Februar 2026`
#[must_use]
pub fn month_header(year: i32, month: u32) -> String {
    let name = MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {year}")
}

/// Month header for the month containing `date`
#[must_use]
pub fn month_of(date: NaiveDate) -> String {
    month_header(date.year(), date.month())
}

/// Shareable results: game name, date, then one row per guess
#[must_use]
pub fn results_text(game_name: &str, date: NaiveDate, history: &[Guess]) -> String {
    let mut text = format!("{game_name}\nSlagalica: {}", share_date(date));
    for guess in history {
        text.push('\n');
        text.push_str(&guess_row(guess));
    }
    text
}

/// Filled dots for attempts left, hollow for attempts used
#[must_use]
pub fn attempt_dots(left: u32, max: u32) -> String {
    let left = left.min(max) as usize;
    let used = max as usize - left;
    format!("{}{}", "●".repeat(left), "○".repeat(used))
}

/// `Autor: Amra, Haris`, or nothing when the puzzle names no authors
#[must_use]
pub fn authors_line(authors: &[Author]) -> Option<String> {
    if authors.is_empty() {
        return None;
    }
    let names: Vec<&str> = authors.iter().map(|a| a.name.as_str()).collect();
    Some(format!("Autor: {}", names.join(", ")))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
