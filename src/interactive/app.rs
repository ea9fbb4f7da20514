//! TUI application state and logic

use crate::config::PanelWidth;
use crate::output::Board;
use crate::phrases::PhrasePool;
use crate::session::{Dispatch, Session, SessionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub session: Session<Board>,
    pub pool: PhrasePool,
    /// Fixed panel width, `None` to follow the terminal size
    pub fixed_width: Option<PanelWidth>,
    pub input_mode: InputMode,
    pub phrase_input: String,
    pub letter_input: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the secret phrase
    Phrase,
    /// Guessing letters and confirming reveals
    Panel,
    /// Panel fully revealed
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(pool: PhrasePool, fixed_width: Option<PanelWidth>) -> Self {
        Self {
            session: Session::new(Board::new(), fixed_width.unwrap_or_default()),
            pool,
            fixed_width,
            input_mode: InputMode::Phrase,
            phrase_input: String::new(),
            letter_input: String::new(),
            messages: vec![
                Message {
                    text: "¡Bienvenidos a El Panel!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the secret phrase and press Enter (Tab for a random one)"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            rng: rand::rng(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.session.view()
    }

    /// Start a round with the typed phrase
    pub fn submit_phrase(&mut self) {
        let raw = std::mem::take(&mut self.phrase_input);
        match self.session.submit_phrase(&raw) {
            Ok(()) => self.round_started(),
            Err(err) => {
                self.phrase_input = raw;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a round with a phrase from the pool
    pub fn random_phrase(&mut self) {
        if let Some(phrase) = self.pool.choose(&mut self.rng).cloned() {
            self.phrase_input.clear();
            self.session.start_round(phrase);
            self.add_message("🎲 Random phrase on the panel!", MessageStyle::Info);
            self.round_started();
        } else {
            self.add_message("The phrase pool is empty", MessageStyle::Error);
        }
    }

    fn round_started(&mut self) {
        self.letter_input.clear();
        self.input_mode = InputMode::Panel;
        self.add_message(
            "Guess a letter with Enter. Ctrl+R solves the panel.",
            MessageStyle::Info,
        );
        self.check_solved();
    }

    /// The panel button: guess the typed letter or reveal the next one
    pub fn press_button(&mut self) {
        let letter = std::mem::take(&mut self.letter_input);
        match self.session.guess_or_confirm(Some(letter.as_str())) {
            Ok(Dispatch::Guessed(result)) if result.is_match() => {
                let count = result.count();
                let noun = if count == 1 { "letter" } else { "letters" };
                self.add_message(
                    &format!(
                        "✨ {count} {noun} '{}' lit up! Enter reveals them.",
                        letter.to_uppercase()
                    ),
                    MessageStyle::Success,
                );
            }
            Ok(Dispatch::Guessed(_)) => {
                self.add_message(
                    &format!("No '{}' on the panel", letter.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Ok(Dispatch::Confirmed(_)) => {}
            // Nothing typed yet: silently ignore
            Err(SessionError::InvalidGuessLength(0)) => {}
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
        self.check_solved();
    }

    /// Reveal the whole panel
    pub fn solve(&mut self) {
        if self.session.request_solve().is_ok() {
            self.letter_input.clear();
            self.check_solved();
        }
    }

    /// Back to phrase entry for a new round
    pub fn new_phrase(&mut self) {
        self.input_mode = InputMode::Phrase;
        self.phrase_input.clear();
        self.letter_input.clear();
        self.add_message("New phrase: type it and press Enter", MessageStyle::Info);
    }

    /// Follow a terminal resize when the width is not fixed
    pub fn handle_resize(&mut self, columns: u16) {
        if self.fixed_width.is_some() {
            return;
        }

        let width = PanelWidth::for_viewport(columns);
        let had_round = self.session.round().is_some();
        if self.session.resize(width) {
            debug!(columns, %width, "viewport changed panel width");
            if had_round && self.input_mode != InputMode::Phrase {
                // Resizing resets the round over the same phrase
                self.input_mode = InputMode::Panel;
                self.letter_input.clear();
                self.add_message(
                    &format!("Panel re-laid out for a {width} screen"),
                    MessageStyle::Info,
                );
                self.check_solved();
            }
        }
    }

    fn check_solved(&mut self) {
        if self.input_mode == InputMode::Panel && self.board().is_completed() {
            self.input_mode = InputMode::Solved;
            self.add_message("🎉 ¡Panel resuelto! 🎉", MessageStyle::Success);
            self.add_message("Enter for a new phrase, Esc to quit.", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Phrase => match key.code {
                KeyCode::Enter => self.submit_phrase(),
                KeyCode::Tab => self.random_phrase(),
                KeyCode::Esc => {
                    if self.session.round().is_some() {
                        // Back to the current panel
                        self.phrase_input.clear();
                        self.input_mode = InputMode::Panel;
                        self.check_solved();
                    } else {
                        self.should_quit = true;
                    }
                }
                KeyCode::Backspace => {
                    self.phrase_input.pop();
                }
                KeyCode::Char(c) if !ctrl => self.phrase_input.push(c),
                _ => {}
            },
            InputMode::Panel => match key.code {
                KeyCode::Enter => self.press_button(),
                KeyCode::Char('r') if ctrl => self.solve(),
                KeyCode::Char('n') if ctrl => self.new_phrase(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Backspace => self.letter_input.clear(),
                // The letter box holds a single character
                KeyCode::Char(c) if !ctrl => {
                    self.letter_input.clear();
                    self.letter_input.push(c);
                }
                _ => {}
            },
            InputMode::Solved => match key.code {
                KeyCode::Enter => self.new_phrase(),
                KeyCode::Char('n') if ctrl => self.new_phrase(),
                KeyCode::Tab => self.random_phrase(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Pick the initial width from the current terminal
    let (columns, _) = terminal::size()?;
    app.handle_resize(columns);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(columns, _) => app.handle_resize(columns),
            _ => {}
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
    use crate::core::Phrase;
    use crate::reveal::ButtonMode;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(phrase: &str) -> App {
        let mut app = App::new(PhrasePool::new(Vec::new()), Some(PanelWidth::Wide));
        type_text(&mut app, phrase);
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn phrase_entry_starts_round() {
        let app = app_with("hola mundo");
        assert_eq!(app.input_mode, InputMode::Panel);
        assert!(app.phrase_input.is_empty());
        assert_eq!(app.board().rows().len(), 1);
    }

    #[test]
    fn blank_phrase_stays_in_entry() {
        let app = app_with("   ");
        assert_eq!(app.input_mode, InputMode::Phrase);
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn letter_box_keeps_last_character() {
        let mut app = app_with("hola");
        type_text(&mut app, "xo");
        assert_eq!(app.letter_input, "o");
    }

    #[test]
    fn enter_guesses_then_confirms() {
        let mut app = app_with("hola mundo");
        type_text(&mut app, "o");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().mode(), ButtonMode::Confirm);
        assert_eq!(app.board().pending_count(), 2);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().mode(), ButtonMode::Guess);
        assert_eq!(app.board().letter_progress(), (2, 9));
    }

    #[test]
    fn enter_without_letter_is_silent() {
        let mut app = app_with("hola");
        let before = app.messages.len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn ctrl_r_solves_and_celebrates() {
        let mut app = app_with("oso");
        ctrl(&mut app, 'r');
        assert_eq!(app.input_mode, InputMode::Solved);
        assert!(app.board().is_completed());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Phrase);
    }

    #[test]
    fn guessing_last_letters_celebrates() {
        let mut app = app_with("oso");
        for letter in ["o", "", "", "s", ""] {
            type_text(&mut app, letter);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.input_mode, InputMode::Solved);
    }

    #[test]
    fn random_phrase_from_pool() {
        let pool = PhrasePool::new(vec![Phrase::new("ñoño").unwrap()]);
        let mut app = App::new(pool, Some(PanelWidth::Narrow));
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.input_mode, InputMode::Panel);
        assert_eq!(app.session.round().unwrap().phrase().as_str(), "ÑOÑO");
    }

    #[test]
    fn random_phrase_from_empty_pool_reports_error() {
        let mut app = App::new(PhrasePool::new(Vec::new()), None);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::Phrase);
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn resize_follows_viewport_when_auto() {
        let mut app = App::new(PhrasePool::new(Vec::new()), None);
        type_text(&mut app, "el que mucho abarca poco aprieta");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.width(), PanelWidth::Wide);

        app.handle_resize(30);
        assert_eq!(app.session.width(), PanelWidth::Narrow);
        assert_eq!(app.board().rows().len(), 5);

        app.handle_resize(200);
        assert_eq!(app.session.width(), PanelWidth::Wide);
    }

    #[test]
    fn fixed_width_ignores_resize() {
        let mut app = app_with("hola");
        app.handle_resize(10);
        assert_eq!(app.session.width(), PanelWidth::Wide);
    }

    #[test]
    fn ctrl_n_returns_to_phrase_entry() {
        let mut app = app_with("hola");
        ctrl(&mut app, 'n');
        assert_eq!(app.input_mode, InputMode::Phrase);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Panel);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = App::new(PhrasePool::new(Vec::new()), None);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
