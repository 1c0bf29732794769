//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GuessOutcome, RoundStore, Session};
use crate::wordlists::Catalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: RoundStore> {
    pub session: Session<S>,
    pub catalog: &'a Catalog,
    /// Share header label, e.g. `xordle #42`
    pub label: String,
    pub color_blind: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl<'a, S: RoundStore> App<'a, S> {
    #[must_use]
    pub fn new(
        session: Session<S>,
        catalog: &'a Catalog,
        label: impl Into<String>,
        color_blind: bool,
    ) -> Self {
        let mut app = Self {
            session,
            catalog,
            label: label.into(),
            color_blind,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        let opening = app.session.round().clue_rows();
        if let Some(first) = opening.first()
            && !app.session.round().is_over()
        {
            app.add_message(&first.describe(), MessageStyle::Info);
        }
        app
    }

    /// Share text for the round so far
    #[must_use]
    pub fn share_text(&self) -> String {
        self.session
            .round()
            .share_text(&self.label, self.color_blind)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.session.round().is_over() => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if !self.session.round().is_over() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if self.session.round().is_over() {
            return;
        }
        let guess = self.input_buffer.clone();

        match self.session.submit(&guess, self.catalog) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if let Some(spoken) = self.session.announcement().map(str::to_string) {
                    self.add_message(&spoken, MessageStyle::Info);
                }
                let style = match outcome {
                    GuessOutcome::Won | GuessOutcome::FoundTarget(_) => MessageStyle::Success,
                    GuessOutcome::Lost | GuessOutcome::BonusGuess => MessageStyle::Error,
                    GuessOutcome::Continue => return,
                };
                let hint = self.session.hint().to_string();
                self.add_message(&hint, style);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: RoundStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let share = res?;
    if let Some(share) = share {
        println!("{share}");
    }
    Ok(())
}

/// Event loop; returns the share text if the round finished
fn run_app<B: ratatui::backend::Backend, S: RoundStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app
        .session
        .round()
        .is_over()
        .then(|| app.share_text()))
}
