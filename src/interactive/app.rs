//! TUI application state and logic

use crate::core::{Rejection, letter_count};
use crate::game::{Dictionary, GameSession, SessionError, Submission, WordSource};
use crate::output::formatters::points;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, D> {
    pub session: GameSession<S, D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub rounds_started: usize,
    pub should_quit: bool,
}

/// Modal dialog shown when a word is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl From<Rejection> for Alert {
    fn from(rejection: Rejection) -> Self {
        Self {
            title: rejection.title(),
            message: rejection.message(),
        }
    }
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
}

impl<S: WordSource, D: Dictionary> App<S, D> {
    #[must_use]
    pub fn new(session: GameSession<S, D>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Each word scores one point per letter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            rounds_started: 1,
            should_quit: false,
        }
    }

    /// Submit whatever is in the input box
    ///
    /// Accepted words clear the input; rejected words keep it so the player can fix a typo.
    pub fn submit_input(&mut self) {
        match self.session.submit(&self.input_buffer) {
            Ok(Submission::Ignored) => {}
            Ok(Submission::Accepted { word, .. }) => {
                self.input_buffer.clear();
                let earned = points(letter_count(&word));
                self.add_message(&format!("+{earned} for '{word}'"), MessageStyle::Success);
            }
            Err(rejection) => self.alert = Some(rejection.into()),
        }
    }

    /// Start a new round
    ///
    /// # Errors
    ///
    /// Returns an error if no root word is available.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.session.restart()?;
        self.input_buffer.clear();
        self.alert = None;
        self.rounds_started += 1;
        self.messages.clear();
        self.add_message(
            &format!("New root word: {}", self.session.root_word().to_uppercase()),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Apply a key press
    ///
    /// # Errors
    ///
    /// Returns an error if a requested restart cannot find a root word.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.alert.is_some() {
            // The alert is modal: only its OK keys do anything
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart()?;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }

        Ok(())
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
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a new round cannot be started.
pub fn run_tui<S: WordSource, D: Dictionary>(app: App<S, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, D>(terminal: &mut Terminal<B>, mut app: App<S, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    D: Dictionary,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
