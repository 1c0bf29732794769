//! TUI rendering with ratatui
//!
//! Guess grid, keyboard, messages and share text.

use super::app::{App, MessageStyle};
use crate::core::{Clue, Clues, LetterAggregate, WORD_LENGTH, Word};
use crate::game::{Round, RoundStatus, RoundStore};
use crate::output::formatters::KEYBOARD_LAYOUT;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Tile colour for a clue
#[must_use]
pub const fn clue_color(clue: Clue, color_blind: bool) -> Color {
    match (clue, color_blind) {
        (Clue::Absent, _) => Color::DarkGray,
        (Clue::Elsewhere, false) => Color::Yellow,
        (Clue::Elsewhere, true) => Color::Blue,
        (Clue::Correct, false) => Color::Green,
        (Clue::Correct, true) => Color::Rgb(245, 121, 58),
    }
}

/// Tile style; `dimmed` marks letters of a target that is already found
fn tile_style(clue: Option<Clue>, color_blind: bool, dimmed: bool) -> Style {
    let style = match clue {
        Some(clue) => Style::default()
            .fg(Color::Black)
            .bg(clue_color(clue, color_blind))
            .add_modifier(Modifier::BOLD),
        None => Style::default().add_modifier(Modifier::BOLD),
    };
    if dimmed {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Main UI rendering function
pub fn ui<S: RoundStore>(f: &mut Frame, app: &App<'_, S>) {
    let round = app.session.round();
    let board_height = u16::try_from(round.board_rows()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(4),                                 // Messages / share
            Constraint::Length(1),                              // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, round, app.color_blind, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    render_messages(f, app, bottom[0]);
    render_share(f, app, bottom[1]);

    render_status(f, app, chunks[4]);
}

fn render_header<S: RoundStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(app.label.as_str())
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

/// Spans for one board row
///
/// Played rows show their composite clue, the row being typed shows the
/// letters so far, and later rows are blank. Once one target is found its
/// letters are dimmed.
#[must_use]
pub fn board_row<'a>(round: &Round, row: usize, typed: &str, color_blind: bool) -> Line<'a> {
    let guesses = round.guesses();
    let found = round.found_target();
    let mut spans = Vec::with_capacity(WORD_LENGTH + 1);

    if let Some(guess) = guesses.get(row) {
        let clues = Clues::composite(guess, &round.puzzle().targets);
        for cell in clues.iter() {
            let style = tile_style(cell.clue, color_blind, is_found_letter(found, cell.letter));
            spans.push(cell_span(cell.letter, style));
        }
    } else {
        let typing = row == guesses.len() && !round.is_over();
        let letters = if typing { typed.as_bytes() } else { &[] };
        for i in 0..WORD_LENGTH {
            match letters.get(i) {
                Some(&letter) => spans.push(cell_span(letter, tile_style(None, color_blind, false))),
                None => spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray))),
            }
        }
    }

    if row >= round.max_guesses() {
        spans.push(Span::styled(
            "  bonus!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn is_found_letter(found: Option<&Word>, letter: u8) -> bool {
    found.is_some_and(|target| target.has_letter(letter))
}

fn cell_span<'a>(letter: u8, style: Style) -> Span<'a> {
    Span::styled(
        format!(" {} ", char::from(letter).to_ascii_uppercase()),
        style,
    )
}

fn render_board<S: RoundStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let round = app.session.round();
    let lines: Vec<Line> = (0..round.board_rows())
        .map(|row| board_row(round, row, &app.input_buffer, app.color_blind))
        .collect();

    let title = format!(" Guesses {}/{} ", round.guesses().len(), round.guess_limit());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Keyboard rows tinted with the best clue seen per letter
///
/// Letters of `found` are dimmed.
#[must_use]
pub fn keyboard_lines<'a>(
    aggregate: &LetterAggregate,
    found: Option<&Word>,
    color_blind: bool,
) -> Vec<Line<'a>> {
    KEYBOARD_LAYOUT
        .split('-')
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| match key {
                    b'B' => Span::styled(" ⌫ ", Style::default().fg(Color::Gray)),
                    b'E' => Span::styled(" ⏎ ", Style::default().fg(Color::Gray)),
                    letter => cell_span(
                        letter,
                        tile_style(
                            aggregate.get(letter),
                            color_blind,
                            is_found_letter(found, letter),
                        ),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, round: &Round, color_blind: bool, area: Rect) {
    let aggregate = round.letter_aggregate();
    let title = if aggregate.is_empty() {
        " Keyboard ".to_string()
    } else {
        format!(" Keyboard ({} letters tried) ", aggregate.len())
    };
    let keyboard = Paragraph::new(keyboard_lines(&aggregate, round.found_target(), color_blind))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(keyboard, area);
}

fn render_messages<S: RoundStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let hint = app.session.hint();
    let mut items: Vec<ListItem> = Vec::new();
    if !hint.is_empty() {
        items.push(
            ListItem::new(hint.to_string()).style(
                Style::default()
                    .fg(Color::Cyan)
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

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_share<S: RoundStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let round = app.session.round();
    let (content, color) = match round.status() {
        RoundStatus::Playing => (String::new(), Color::DarkGray),
        RoundStatus::Won => (app.share_text(), Color::Green),
        RoundStatus::Lost => (app.share_text(), Color::Red),
    };

    let share = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(share, area);
}

fn render_status<S: RoundStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let help_text = if app.session.round().is_over() {
        "q/Esc: Quit"
    } else {
        "Type a word | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
