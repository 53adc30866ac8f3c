//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Controller, LoadTarget, PuzzleLoader, SubmitOutcome};
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Grid width in words
pub const COLUMNS: usize = 4;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Archive,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S> {
    pub controller: Controller<S>,
    pub loader: PuzzleLoader,
    pub config: GameConfig,
    pub screen: Screen,
    /// Index into the remaining words
    pub cursor: usize,
    pub archive_dates: Vec<NaiveDate>,
    pub archive_cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(controller: Controller<S>, loader: PuzzleLoader, config: GameConfig) -> Self {
        let archive_dates = loader.repository().all_dates();
        Self {
            controller,
            loader,
            config,
            screen: Screen::Game,
            cursor: 0,
            archive_dates,
            archive_cursor: 0,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Ask the loader for a puzzle; the result arrives through `poll_loader`
    pub fn load(&mut self, target: LoadTarget) {
        let ticket = self.controller.request(target);
        self.loader.spawn(ticket);
        self.cursor = 0;
    }

    /// Apply finished loads; returns whether the current one arrived
    pub fn poll_loader(&mut self) -> bool {
        let mut applied = false;
        while let Some(result) = self.loader.try_recv() {
            applied |= self.controller.apply(result);
        }
        if applied {
            self.clamp_cursor();
        }
        applied
    }

    /// Number of words still on the board
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.controller
            .session()
            .map_or(0, |session| session.remaining_words().len())
    }

    /// The word under the cursor
    #[must_use]
    pub fn cursor_word(&self) -> Option<&str> {
        self.controller
            .session()?
            .remaining_words()
            .get(self.cursor)
            .map(String::as_str)
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.word_count().saturating_sub(1));
    }

    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let count = self.word_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let row = (self.cursor / COLUMNS) as isize + rows;
        let col = (self.cursor % COLUMNS) as isize + cols;
        let rows_total = count.div_ceil(COLUMNS) as isize;

        let row = row.clamp(0, rows_total - 1) as usize;
        let col = col.clamp(0, COLUMNS as isize - 1) as usize;
        self.cursor = (row * COLUMNS + col).min(count - 1);
    }

    pub fn toggle_cursor_word(&mut self) {
        if let Some(word) = self.cursor_word().map(str::to_string) {
            self.controller.select_word(&word);
        }
    }

    pub fn submit(&mut self, now: Instant) {
        match self.controller.submit_at(now) {
            SubmitOutcome::Found { category, won } => {
                self.add_message(&format!("✓ {category}"), MessageStyle::Success);
                if won {
                    self.add_message("🎉 Čestitamo!", MessageStyle::Success);
                }
            }
            SubmitOutcome::Miss { lost, .. } => {
                if lost {
                    self.add_message("😔 Igra završena", MessageStyle::Error);
                } else {
                    self.add_message("✗ Pogrešno", MessageStyle::Error);
                }
            }
            SubmitOutcome::NotReady => {
                self.add_message("Odaberite četiri riječi", MessageStyle::Info);
            }
            SubmitOutcome::Repeat => {}
        }
        self.clamp_cursor();
    }

    pub fn reset(&mut self) {
        if self.controller.reset() {
            self.messages.clear();
            self.cursor = 0;
            self.add_message("🔄 Nova igra", MessageStyle::Info);
        }
    }

    pub fn open_archive(&mut self) {
        self.archive_dates = self.loader.repository().all_dates();
        let current = self.controller.session().map(|s| s.date());
        self.archive_cursor = current
            .and_then(|date| self.archive_dates.iter().position(|&d| d == date))
            .unwrap_or(0);
        self.screen = Screen::Archive;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Archive => self.handle_archive_key(key.code),
            Screen::Game if self.controller.results_visible() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n' | 'r') => self.reset(),
                KeyCode::Char('a') => self.open_archive(),
                KeyCode::Esc | KeyCode::Enter => self.controller.set_results_visible(false),
                _ => {}
            },
            Screen::Game => self.handle_game_key(key.code, now),
        }
    }

    fn handle_game_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Char(' ') => self.toggle_cursor_word(),
            KeyCode::Enter => self.submit(now),
            KeyCode::Char('s') => {
                self.controller.shuffle();
            }
            KeyCode::Char('d') | KeyCode::Esc => {
                self.controller.deselect_all();
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('a') => self.open_archive(),
            KeyCode::Char('t') => self.load(LoadTarget::Today),
            KeyCode::Char('v') => self.controller.set_results_visible(true),
            _ => {}
        }
    }

    fn handle_archive_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('a') => self.screen = Screen::Game,
            KeyCode::Up | KeyCode::Char('k') => {
                self.archive_cursor = self.archive_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.archive_cursor + 1 < self.archive_dates.len() {
                    self.archive_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(&date) = self.archive_dates.get(self.archive_cursor) {
                    self.messages.clear();
                    self.load(LoadTarget::Date(date));
                    self.screen = Screen::Game;
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>, target: LoadTarget) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, target);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
    target: LoadTarget,
) -> Result<()> {
    app.load(target);

    loop {
        app.poll_loader();
        app.controller.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_daily;
    use crate::game::GameStatus;
    use crate::puzzles::MemoryRepository;
    use crate::storage::{Calendar, MemoryStore, ProgressStore};
    use std::sync::Arc;

    fn app() -> App<MemoryStore> {
        let repository = MemoryRepository::new()
            .with(sample_daily("2026-02-05"))
            .with(sample_daily("2026-02-07"));
        let controller = Controller::new(
            ProgressStore::new(MemoryStore::new(), "konekcije_"),
            Calendar::new(false),
        );
        let mut app = App::new(
            controller,
            PuzzleLoader::new(Arc::new(repository)),
            GameConfig::default(),
        );
        app.load(LoadTarget::Date("2026-02-07".parse().unwrap()));
        let result = app.loader.recv().unwrap();
        assert!(app.controller.apply(result));
        app
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::from(code), Instant::now());
    }

    #[test]
    fn cursor_stays_on_grid() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 5);

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, 15);
    }

    #[test]
    fn space_selects_and_enter_submits() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Right);
        }
        let session = app.controller.session().unwrap();
        assert_eq!(session.selected_words().len(), 4);

        press(&mut app, KeyCode::Enter);
        let session = app.controller.session().unwrap();
        assert!(session.selected_words().is_empty());
        assert_eq!(session.guess_history().len(), 1);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn archive_enter_loads_date() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen, Screen::Archive);
        assert_eq!(app.archive_cursor, 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Game);
        assert!(app.controller.is_loading());

        let result = app.loader.recv().unwrap();
        app.controller.apply(result);
        assert_eq!(
            app.controller.session().unwrap().date().to_string(),
            "2026-02-05"
        );
    }

    #[test]
    fn reset_key_starts_over() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('r'));
        let session = app.controller.session().unwrap();
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.selected_words().is_empty());
    }

    #[test]
    fn quit_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
