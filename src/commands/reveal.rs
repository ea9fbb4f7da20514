//! Scripted reveal command
//!
//! Plays a fixed sequence of letters against a phrase, confirming every
//! highlighted tile after each guess, and reports the panel as it evolves.

use crate::config::PanelWidth;
use crate::output::Board;
use crate::output::formatters::panel_lines;
use crate::session::{Session, SessionError};

/// Configuration for a scripted game
pub struct RevealConfig {
    pub phrase: String,
    pub letters: String,
    pub width: PanelWidth,
    /// Reveal the rest of the panel after the last letter
    pub solve: bool,
}

impl RevealConfig {
    #[must_use]
    pub const fn new(phrase: String, letters: String) -> Self {
        Self {
            phrase,
            letters,
            width: PanelWidth::Wide,
            solve: false,
        }
    }
}

/// Result of a scripted game
pub struct RevealResult {
    pub phrase: String,
    pub steps: Vec<RevealStep>,
    /// Panel after the last step, one string per row
    pub final_panel: Vec<String>,
    pub solved: bool,
}

/// A single guess in the script
pub struct RevealStep {
    pub letter: char,
    pub matched: usize,
    /// Letter tiles still hidden after the matches were confirmed
    pub hidden_after: usize,
    pub panel: Vec<String>,
}

/// Play `config.letters` in order against `config.phrase`
///
/// Whitespace and commas in the letter list are separators. Letters already
/// guessed are played again and simply match nothing.
///
/// # Errors
///
/// Returns an error if:
/// - The phrase is blank
/// - A listed character is not a letter or digit
pub fn run_reveal(config: &RevealConfig) -> Result<RevealResult, SessionError> {
    let mut session = Session::new(Board::new(), config.width);
    session.submit_phrase(&config.phrase)?;

    let mut steps = Vec::new();
    for letter in config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
    {
        let result = session.submit_guess_letter(&letter.to_string())?;
        while session.request_confirm_next()? {}

        let hidden_after = session.round().map_or(0, |round| round.hidden_count());
        steps.push(RevealStep {
            letter,
            matched: result.count(),
            hidden_after,
            panel: panel_lines(session.view().rows()),
        });
    }

    if config.solve {
        session.request_solve()?;
    }

    let board = session.view();
    Ok(RevealResult {
        phrase: session
            .round()
            .map(|round| round.phrase().to_string())
            .unwrap_or_default(),
        steps,
        final_panel: panel_lines(board.rows()),
        solved: board.is_completed(),
    })
}
