//! Display functions for command results

use super::formatters::{
    attempt_dots, authors_line, create_progress_bar, day_label, display_date, month_header,
};
use crate::commands::{
    ArchiveSummary, AuthorStatistics, CheckReport, DayStatus, ResultsView,
};
use crate::config::GameConfig;
use crate::core::{Category, Difficulty};
use crate::game::{GameSession, GameStatus, MAX_MISTAKES};
use crate::storage::Outcome;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

/// Colour a label by category difficulty
#[must_use]
pub fn paint_level(text: &str, difficulty: Difficulty) -> ColoredString {
    match difficulty.level() {
        1 => text.black().on_yellow(),
        2 => text.black().on_green(),
        3 => text.white().on_blue(),
        _ => text.white().on_magenta(),
    }
}

fn print_category(category: &Category) {
    let line = format!(" {}: {} ", category.name().to_uppercase(), category.words().join(", "));
    println!("  {}", paint_level(&line, category.difficulty()).bold());
}

/// Print the board: found categories, numbered remaining words and attempts left
pub fn print_board(session: &GameSession, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        config.name.bright_cyan().bold(),
        display_date(session.date()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    for category in session.found_categories() {
        print_category(category);
    }

    for (row, words) in session.remaining_words().chunks(4).enumerate() {
        let cells: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(col, word)| {
                let label = format!("{:>2}. {word:<12}", row * 4 + col + 1);
                if session.is_selected(word) {
                    label.black().on_white().bold().to_string()
                } else {
                    label
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }

    println!(
        "\n  Preostali pokušaji: {}",
        attempt_dots(session.mistakes_left(), MAX_MISTAKES).bright_red()
    );
    if let Some(line) = authors_line(session.puzzle().authors()) {
        println!("  {}", line.dimmed());
    }
}

/// Print the end of a game and reveal what was left unsolved
pub fn print_game_over(session: &GameSession) {
    match session.status() {
        GameStatus::Won => {
            println!("\n{}", "🎉 Čestitamo!".green().bold());
            println!("Pronašli ste sve kategorije!");
        }
        GameStatus::Lost => {
            println!("\n{}", "😔 Igra završena".red().bold());
            println!("Više sreće drugi put.");
            for category in session.unsolved_categories() {
                print_category(category);
            }
        }
        GameStatus::Playing => {}
    }
}

/// Print a results grid
pub fn print_results(view: &ResultsView) {
    println!("\n{}", "─".repeat(40).cyan());
    let headline = match view.status {
        Outcome::Won => "🎉 Čestitamo!".green().bold(),
        Outcome::Lost => "😔 Igra završena".red().bold(),
    };
    println!("{headline}   Greške: {}/{MAX_MISTAKES}", view.mistakes);
    println!("{}", "─".repeat(40).cyan());
    println!("{}", view.text);
}

/// Print the archive grouped by month
pub fn print_archive(summary: &ArchiveSummary, today: NaiveDate) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ARHIVA".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if summary.months.is_empty() {
        println!("\nNema dostupnih zagonetki.");
        return;
    }

    for group in &summary.months {
        println!("\n{}", month_header(group.year, group.month).bold());
        let cells: Vec<String> = group
            .entries
            .iter()
            .map(|entry| {
                let label = day_label(entry.date);
                let cell = match entry.status {
                    DayStatus::Won => label.black().on_green(),
                    DayStatus::Lost => label.white().on_bright_black(),
                    DayStatus::InProgress => label.yellow(),
                    DayStatus::Unplayed => label.normal(),
                };
                if entry.date == today {
                    cell.bold().underline().to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();
        for row in cells.chunks(4) {
            println!("  {}", row.join("  "));
        }
    }

    println!(
        "\n{} zagonetki  |  {} {}  |  {} {}",
        summary.total(),
        summary.won.to_string().green().bold(),
        "riješeno".green(),
        summary.lost.to_string().red().bold(),
        "neriješeno".red()
    );
}

/// Print puzzles per author
pub fn print_author_statistics(stats: &AuthorStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTORI".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.authors.is_empty() {
        println!("\nNema podataka o autorima.");
        return;
    }

    println!();
    for (rank, author) in stats.authors.iter().enumerate() {
        let bar = create_progress_bar(author.percent, 100.0, 20);
        println!(
            "  {:>2}. {:<16} {:>3}  [{}] {}",
            rank + 1,
            author.name,
            author.puzzles,
            bar.green(),
            format!("{:.1}%", author.percent).bright_yellow()
        );
    }
    println!("\n  Ukupno zagonetki: {}", stats.total_puzzles);
}

/// Print the outcome of an archive check
pub fn print_check_report(report: &CheckReport) {
    println!(
        "\nChecked {} puzzles in {:.2}s",
        report.checked,
        report.duration.as_secs_f64()
    );
    if report.is_ok() {
        println!("{}", "✅ All puzzles are valid".green().bold());
        return;
    }
    println!(
        "{}",
        format!("❌ {} problem(s) found", report.failures.len())
            .red()
            .bold()
    );
    for failure in &report.failures {
        println!("  {}  {}", failure.date.to_string().yellow(), failure.reason);
    }
}
