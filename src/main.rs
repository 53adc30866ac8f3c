//! Konekcije - CLI
//!
//! Daily word-grouping puzzle with TUI and line modes, archive, results and puzzle tools.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use konekcije::{
    commands::{
        DevDateAction, author_statistics, build_archive, results_for, run_check, run_dev_date,
        run_simple,
    },
    config::GameConfig,
    core::parse_date,
    game::{Controller, LoadTarget, PuzzleLoader},
    interactive::{App, run_tui},
    output::{print_archive, print_author_statistics, print_check_report, print_results},
    puzzles::{DirectoryRepository, EmbeddedRepository, PuzzleRepository},
    storage::{Calendar, FileStore, ProgressStore},
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "konekcije",
    about = "Pronađi četiri grupe od po četiri povezane riječi",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of YYYY-MM-DD.json puzzle files (default: puzzles built into the binary)
    #[arg(short, long, global = true, env = "KONEKCIJE_PUZZLES")]
    puzzles: Option<PathBuf>,

    /// File holding saved progress
    #[arg(
        short,
        long,
        global = true,
        env = "KONEKCIJE_STORE",
        default_value = "konekcije_store.json"
    )]
    store: PathBuf,

    /// Enable the development date override
    #[arg(long, global = true, env = "KONEKCIJE_DEV_MODE")]
    dev: bool,

    /// Play this date instead of today (YYYY-MM-DD)
    #[arg(short, long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Display name of the game
    #[arg(long, global = true, env = "KONEKCIJE_GAME_NAME")]
    game_name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// List every puzzle date with your results
    Archive,

    /// Show the results grid of a finished game
    Results,

    /// Puzzles per author
    Stats,

    /// Validate every puzzle in the archive
    Check {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Inspect or pin the current date (requires --dev to pin)
    DevDate {
        #[command(subcommand)]
        action: Option<DevDateCommand>,
    },
}

#[derive(Subcommand)]
enum DevDateCommand {
    /// Print the pinned date
    Show,
    /// Pin the current date
    Set {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Remove the pinned date
    Clear,
}

/// Shared state every command needs
struct Setup {
    config: GameConfig,
    repository: Arc<dyn PuzzleRepository>,
    store: ProgressStore<FileStore>,
    calendar: Calendar,
}

fn open_repository(path: Option<&PathBuf>) -> Result<Arc<dyn PuzzleRepository>> {
    match path {
        Some(path) => {
            let repository = DirectoryRepository::open(path)
                .with_context(|| format!("Cannot open puzzle directory {}", path.display()))?;
            Ok(Arc::new(repository))
        }
        None => Ok(Arc::new(EmbeddedRepository::new())),
    }
}

fn init_logging(command: &Commands) {
    // The TUI owns the terminal, so it stays quiet unless RUST_LOG asks otherwise
    let default = match command {
        Commands::Play => "off",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&command);

    let mut config = GameConfig::default();
    if let Some(name) = cli.game_name {
        config = config.with_name(name);
    }

    let kv = FileStore::open(&cli.store)
        .with_context(|| format!("Cannot open progress file {}", cli.store.display()))?;
    let setup = Setup {
        repository: open_repository(cli.puzzles.as_ref())?,
        store: ProgressStore::new(kv, config.storage_prefix.clone()),
        calendar: Calendar::new(cli.dev),
        config,
    };

    let target = cli.date.map_or(LoadTarget::Today, LoadTarget::Date);

    match command {
        Commands::Play => run_play_command(setup, target),
        Commands::Simple => run_simple_command(setup, target),
        Commands::Archive => {
            run_archive_command(&setup);
            Ok(())
        }
        Commands::Results => run_results_command(&setup, cli.date),
        Commands::Stats => {
            print_author_statistics(&author_statistics(setup.repository.as_ref()));
            Ok(())
        }
        Commands::Check { quiet } => run_check_command(&setup, quiet),
        Commands::DevDate { action } => run_dev_date_command(setup, action),
    }
}

fn run_play_command(setup: Setup, target: LoadTarget) -> Result<()> {
    let controller = Controller::new(setup.store, setup.calendar);
    let app = App::new(controller, PuzzleLoader::new(setup.repository), setup.config);
    run_tui(app, target)
}

fn run_simple_command(setup: Setup, target: LoadTarget) -> Result<()> {
    let mut controller = Controller::new(setup.store, setup.calendar);
    run_simple(&mut controller, setup.repository.as_ref(), target, &setup.config)
}

fn run_archive_command(setup: &Setup) {
    let summary = build_archive(setup.repository.as_ref(), &setup.store);
    print_archive(&summary, setup.calendar.today(&setup.store));
}

fn run_results_command(setup: &Setup, date: Option<NaiveDate>) -> Result<()> {
    let date = match date {
        Some(date) => date,
        None => {
            let today = setup.calendar.today(&setup.store);
            setup.repository
                .todays_puzzle(today)?
                .map_or(today, |puzzle| puzzle.date())
        }
    };

    match results_for(&setup.store, &setup.config, date) {
        Some(view) => print_results(&view),
        None => println!("Zagonetka za {date} još nije završena."),
    }
    Ok(())
}

fn run_check_command(setup: &Setup, quiet: bool) -> Result<()> {
    let report = run_check(setup.repository.as_ref(), !quiet);
    print_check_report(&report);
    if !report.is_ok() {
        anyhow::bail!("{} puzzle(s) failed validation", report.failures.len());
    }
    Ok(())
}

fn run_dev_date_command(mut setup: Setup, action: Option<DevDateCommand>) -> Result<()> {
    let action = match action.unwrap_or(DevDateCommand::Show) {
        DevDateCommand::Show => DevDateAction::Show,
        DevDateCommand::Set { date } => DevDateAction::Set(date),
        DevDateCommand::Clear => DevDateAction::Clear,
    };

    match run_dev_date(setup.calendar, &mut setup.store, action)? {
        Some(date) => println!("Pinned date: {date}"),
        None if setup.calendar.is_dev_mode() => println!("No pinned date"),
        None => println!("Dev mode is off; using the real date"),
    }
    println!("Today: {}", setup.calendar.today(&setup.store));
    Ok(())
}
