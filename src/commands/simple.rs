//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: words are picked by their number on the board.

use super::results::results_for;
use crate::config::GameConfig;
use crate::game::{Controller, LoadTarget, Phase, SubmitOutcome};
use crate::output::{print_board, print_game_over, print_results};
use crate::puzzles::PuzzleRepository;
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Toggle(Vec<usize>),
    Submit,
    Shuffle,
    Deselect,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "p" | "provjeri" | "submit" => Command::Submit,
        "m" | "promiješaj" | "shuffle" => Command::Shuffle,
        "o" | "poništi" | "clear" => Command::Deselect,
        "r" | "reset" => Command::Reset,
        "?" | "help" | "pomoć" => Command::Help,
        "q" | "quit" | "izlaz" => Command::Quit,
        other => {
            let numbers: Option<Vec<usize>> = other
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.is_empty())
                .map(|part| part.parse().ok())
                .collect();
            match numbers {
                Some(numbers) if !numbers.is_empty() => Command::Toggle(numbers),
                _ => Command::Unknown(input.to_string()),
            }
        }
    }
}

fn print_help() {
    println!("  1-16       označi ili odznači riječ (npr. '1 5 9 12')");
    println!("  p          provjeri odabrane riječi");
    println!("  m          promiješaj riječi");
    println!("  o          poništi odabir");
    println!("  r          počni ispočetka");
    println!("  q          izlaz\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: KeyValueStore>(
    controller: &mut Controller<S>,
    repository: &dyn PuzzleRepository,
    target: LoadTarget,
    config: &GameConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", config.name);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}\n", config.description);
    print_help();

    controller.load_blocking(repository, target);
    if let Phase::Missing(date) = controller.phase() {
        println!("{}", format!("Nema zagonetke za {date}.").yellow());
        return Ok(());
    }

    loop {
        let Some(session) = controller.session() else {
            return Ok(());
        };

        if session.status().is_over() {
            print_game_over(session);
            if let Some(view) = results_for(controller.store(), config, session.date()) {
                print_results(&view);
            }
            match parse_command(&get_user_input("\n'r' za novu igru, 'q' za izlaz")?) {
                Command::Reset => {
                    controller.reset();
                    continue;
                }
                _ => return Ok(()),
            }
        }

        print_board(session, config);
        let words = session.remaining_words().to_vec();

        match parse_command(&get_user_input("\nOdabir")?) {
            Command::Toggle(numbers) => {
                for n in numbers {
                    match n.checked_sub(1).and_then(|i| words.get(i)) {
                        Some(word) => {
                            if !controller.select_word(word) {
                                println!("Već su odabrane četiri riječi.");
                            }
                        }
                        None => println!("Nema riječi pod brojem {n}."),
                    }
                }
            }
            Command::Submit => report_submit(&controller.submit()),
            Command::Shuffle => {
                controller.shuffle();
            }
            Command::Deselect => {
                controller.deselect_all();
            }
            Command::Reset => {
                controller.reset();
                println!("\n🔄 Nova igra!");
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(()),
            Command::Unknown(input) => println!("Nepoznata naredba: '{input}' (? za pomoć)"),
        }
    }
}

fn report_submit(outcome: &SubmitOutcome) {
    if let Some(notice) = outcome.notice() {
        println!("\n{}", notice.message().bright_yellow().bold());
    }
    match outcome {
        SubmitOutcome::NotReady => println!("Odaberite tačno četiri riječi."),
        SubmitOutcome::Found { category, .. } => {
            println!("\n{}", format!("✓ {category}").green().bold());
        }
        SubmitOutcome::Miss { .. } => println!("{}", "✗ Pogrešno".red()),
        SubmitOutcome::Repeat => {}
    }
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("q".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_numbers() {
        assert_eq!(parse_command("1 5, 9 12"), Command::Toggle(vec![1, 5, 9, 12]));
        assert_eq!(parse_command("3"), Command::Toggle(vec![3]));
    }

    #[test]
    fn parses_named_commands() {
        assert_eq!(parse_command("P"), Command::Submit);
        assert_eq!(parse_command("promiješaj"), Command::Shuffle);
        assert_eq!(parse_command("o"), Command::Deselect);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_command("1 x"), Command::Unknown("1 x".to_string()));
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }
}
