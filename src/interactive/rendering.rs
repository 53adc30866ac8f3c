//! TUI rendering with ratatui
//!
//! Board, archive and results views for the puzzle.

use super::app::{App, COLUMNS, MessageStyle, Screen};
use crate::commands::{DayStatus, day_status, results_for};
use crate::core::{Category, Difficulty};
use crate::game::{GameSession, GameStatus, MAX_MISTAKES, Phase};
use crate::output::formatters::{attempt_dots, authors_line, day_label, display_date, month_of};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Archive => render_archive(f, app, chunks[1]),
        Screen::Game => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(70), // Board
                    Constraint::Percentage(30), // Messages
                ])
                .split(chunks[1]);
            render_board(f, app, main_chunks[0]);
            render_messages(f, app, main_chunks[1]);
        }
    }

    render_status(f, app, chunks[2]);

    if app.screen == Screen::Game && app.controller.results_visible() {
        render_results(f, app);
    }
}

/// Background colour of a difficulty level
#[must_use]
pub const fn level_color(difficulty: Difficulty) -> Color {
    match difficulty.level() {
        1 => Color::Yellow,
        2 => Color::Green,
        3 => Color::Blue,
        _ => Color::Magenta,
    }
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let date = match app.controller.phase() {
        Phase::Ready(session) => display_date(session.date()),
        Phase::Loading(date) | Phase::Missing(date) => display_date(*date),
        Phase::Idle => String::new(),
    };
    let mut title = format!("{}  {date}", app.config.name.to_uppercase());
    if app.controller.calendar().is_dev_mode() {
        title.push_str("  [dev]");
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.config.description))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let session = match app.controller.phase() {
        Phase::Ready(session) => session,
        Phase::Loading(_) | Phase::Idle => {
            let loading = Paragraph::new("Učitavanje...")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
            return;
        }
        Phase::Missing(date) => {
            let missing = Paragraph::new(vec![
                Line::from(format!("Nema zagonetke za {}", display_date(*date))),
                Line::from(""),
                Line::from("a: arhiva | t: današnja | q: izlaz"),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(missing, area);
            return;
        }
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let found = session.found_categories().len();
    let rows = session.remaining_words().len().div_ceil(COLUMNS);
    let mut constraints = vec![Constraint::Length(2); found];
    constraints.extend(vec![Constraint::Length(3); rows]);
    if session.status() == GameStatus::Lost {
        constraints.extend(vec![Constraint::Length(2); session.unsolved_categories().count()]);
    }
    constraints.push(Constraint::Min(0));

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut slot = 0;
    for category in session.found_categories() {
        render_category(f, category, slots[slot]);
        slot += 1;
    }

    for (row, words) in session.remaining_words().chunks(COLUMNS).enumerate() {
        render_word_row(f, app, session, row, words, slots[slot]);
        slot += 1;
    }

    if session.status() == GameStatus::Lost {
        for category in session.unsolved_categories() {
            render_category(f, category, slots[slot]);
            slot += 1;
        }
    }
}

fn render_category(f: &mut Frame, category: &Category, area: Rect) {
    let style = Style::default()
        .bg(level_color(category.difficulty()))
        .fg(Color::Black);
    let text = vec![
        Line::from(Span::styled(
            category.name().to_uppercase(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(category.words().join(", "), style)),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).style(style),
        area,
    );
}

fn render_word_row<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<S>,
    session: &GameSession,
    row: usize,
    words: &[String],
    area: Rect,
) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
        .split(area);

    for (col, word) in words.iter().enumerate() {
        let index = row * COLUMNS + col;
        let selected = session.is_selected(word);

        let mut style = Style::default();
        if selected {
            style = style
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);
        }
        let border = if index == app.cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let tile = Paragraph::new(word.to_uppercase())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        f.render_widget(tile, cells[col]);
    }
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(notice) = app.controller.notice() {
        items.push(
            ListItem::new(notice.message()).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    if let Some(line) = app
        .controller
        .session()
        .and_then(|session| authors_line(session.puzzle().authors()))
    {
        items.push(ListItem::new(""));
        items.push(ListItem::new(line).style(Style::default().fg(Color::DarkGray)));
    }

    let messages_list =
        List::new(items).block(Block::default().title(" Poruke ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let attempts = app.controller.session().map_or_else(String::new, |session| {
        format!(
            "Preostali pokušaji: {}",
            attempt_dots(session.mistakes_left(), MAX_MISTAKES)
        )
    });
    f.render_widget(
        Paragraph::new(attempts)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red)),
        chunks[0],
    );

    let help_text = match app.screen {
        Screen::Archive => "↑↓: Odaberi | Enter: Igraj | Esc: Nazad | q: Izlaz",
        Screen::Game if app.controller.results_visible() => {
            "Esc: Zatvori | n: Nova igra | a: Arhiva | q: Izlaz"
        }
        Screen::Game => {
            "←↑↓→ Space: Označi | Enter: Provjeri | s: Promiješaj | d: Poništi | r: Reset | a: Arhiva | q: Izlaz"
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[1]);
}

fn render_archive<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let store = app.controller.store();
    let today = app.controller.today();

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut current_month = String::new();

    for (i, &date) in app.archive_dates.iter().enumerate() {
        let month = month_of(date);
        if month != current_month {
            items.push(ListItem::new(Line::from(Span::styled(
                month.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))));
            current_month = month;
        }

        let (mark, color) = match day_status(store, date) {
            DayStatus::Won => ("✓", Color::Green),
            DayStatus::Lost => ("✗", Color::Gray),
            DayStatus::InProgress => ("…", Color::Yellow),
            DayStatus::Unplayed => (" ", Color::White),
        };
        let mut style = Style::default().fg(color);
        if date == today {
            style = style.add_modifier(Modifier::BOLD);
        }
        if i == app.archive_cursor {
            selected_row = Some(items.len());
        }
        items.push(ListItem::new(format!("  {mark} {}", day_label(date))).style(style));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Arhiva ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));

    let mut state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_results<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let Some(session) = app.controller.session() else {
        return;
    };
    let Some(view) = results_for(app.controller.store(), &app.config, session.date()) else {
        return;
    };

    let (headline, subline, color) = match session.status() {
        GameStatus::Won => ("🎉 Čestitamo!", "Pronašli ste sve kategorije!", Color::Green),
        _ => ("😔 Igra završena", "Više sreće drugi put.", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(subline),
        Line::from(""),
    ];
    lines.extend(view.text.lines().map(|line| Line::from(line.to_string())));

    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect(40, height, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Rezultat ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        ),
        area,
    );
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
