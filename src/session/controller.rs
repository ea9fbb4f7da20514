//! Session controller
//!
//! Owns the current round and is the only place that mutates it. A single
//! dispatch point decides whether the panel button guesses or confirms, based
//! on whether any reveal is pending.

use super::error::{Result, SessionError};
use super::view::PanelView;
use crate::config::PanelWidth;
use crate::core::Phrase;
use crate::reveal::{ButtonMode, MatchResult, Round};
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// What a press of the panel button did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A letter was scanned for
    Guessed(MatchResult),
    /// A pending tile was revealed (`false` if none was left)
    Confirmed(bool),
}

/// Game session driving a view
pub struct Session<V: PanelView> {
    view: V,
    width: PanelWidth,
    round: Option<Round>,
}

impl<V: PanelView> Session<V> {
    #[must_use]
    pub const fn new(view: V, width: PanelWidth) -> Self {
        Self {
            view,
            width,
            round: None,
        }
    }

    /// Normalize raw text and start a round with it
    ///
    /// # Errors
    /// Returns `SessionError::EmptyPhrase` if the text is blank; the current
    /// round, if any, is kept.
    ///
    /// # Examples
    /// ```
    /// use ruleta_panel::config::PanelWidth;
    /// use ruleta_panel::session::{PanelEvent, Session};
    ///
    /// let mut session = Session::new(Vec::<PanelEvent>::new(), PanelWidth::Wide);
    /// session.submit_phrase("hola mundo").unwrap();
    ///
    /// assert_eq!(session.round().unwrap().phrase().as_str(), "HOLA MUNDO");
    /// ```
    pub fn submit_phrase(&mut self, raw: &str) -> Result<()> {
        let phrase = Phrase::new(raw)?;
        self.start_round(phrase);
        Ok(())
    }

    /// Replace any previous round with a fresh one over `phrase`
    pub fn start_round(&mut self, phrase: Phrase) {
        let round = Round::new(phrase, self.width.max_columns());
        info!(
            phrase_len = round.phrase().char_count(),
            rows = round.row_count(),
            width = %self.width,
            "round started"
        );

        self.view.round_started(&round.snapshot());
        self.view.button_mode_changed(round.button_mode());

        let solved = round.is_solved();
        self.round = Some(round);
        if solved {
            // Nothing to guess, e.g. a phrase made only of signs
            self.view.round_completed();
        }
    }

    /// Confirm if reveals are pending, otherwise guess `letter`
    ///
    /// # Errors
    /// `NoActiveRound` before the first phrase; guess validation errors when
    /// in guess mode.
    pub fn guess_or_confirm(&mut self, letter: Option<&str>) -> Result<Dispatch> {
        let round = self.round.as_ref().ok_or(SessionError::NoActiveRound)?;

        if round.has_pending_reveals() {
            self.request_confirm_next().map(Dispatch::Confirmed)
        } else {
            self.submit_guess_letter(letter.unwrap_or_default())
                .map(Dispatch::Guessed)
        }
    }

    /// Guess a single letter
    ///
    /// # Errors
    /// - `NoActiveRound` before the first phrase
    /// - `InvalidGuessLength` / `InvalidGuessCharacter` for malformed input
    /// - `GuessWhilePending` while highlighted tiles await a confirm
    pub fn submit_guess_letter(&mut self, raw: &str) -> Result<MatchResult> {
        if self.round.is_none() {
            return Err(SessionError::NoActiveRound);
        }
        let letter = parse_guess(raw)?;

        self.act(|round| {
            if round.has_pending_reveals() {
                return Err(SessionError::GuessWhilePending);
            }
            Ok(round.submit_guess(letter))
        })
    }

    /// Reveal the next pending tile
    ///
    /// # Errors
    /// `NoActiveRound` before the first phrase.
    pub fn request_confirm_next(&mut self) -> Result<bool> {
        self.act(|round| Ok(round.confirm_next()))
    }

    /// Reveal the whole panel, returning how many tiles changed
    ///
    /// # Errors
    /// `NoActiveRound` before the first phrase.
    pub fn request_solve(&mut self) -> Result<usize> {
        self.act(|round| Ok(round.solve_all()))
    }

    /// Switch the panel geometry
    ///
    /// A new width resets the round over the same phrase. Returns `false`
    /// and does nothing when the width is unchanged.
    pub fn resize(&mut self, width: PanelWidth) -> bool {
        if width == self.width {
            return false;
        }

        debug!(from = %self.width, to = %width, "panel width changed");
        self.width = width;
        if let Some(phrase) = self.round.as_ref().map(|round| round.phrase().clone()) {
            self.start_round(phrase);
        }
        true
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> PanelWidth {
        self.width
    }

    /// Current button mode; `Guess` when no round is active
    #[must_use]
    pub fn button_mode(&self) -> ButtonMode {
        self.round
            .as_ref()
            .map_or(ButtonMode::Guess, Round::button_mode)
    }

    #[inline]
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[inline]
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Run `action` on the round and forward what it changed to the view
    fn act<T>(&mut self, action: impl FnOnce(&mut Round) -> Result<T>) -> Result<T> {
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        let mode_before = round.button_mode();
        let solved_before = round.is_solved();

        let outcome = action(&mut *round)?;

        for change in round.take_changes() {
            self.view.tile_changed(&change);
        }
        let mode = round.button_mode();
        if mode != mode_before {
            self.view.button_mode_changed(mode);
        }
        if !solved_before && round.is_solved() {
            info!("round completed");
            self.view.round_completed();
        }

        Ok(outcome)
    }
}

/// Validate and normalize raw guess input into one uppercase character
fn parse_guess(raw: &str) -> Result<char> {
    let composed: String = raw.trim().nfc().collect();
    let mut chars = composed.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphanumeric() => {
            let mut upper = letter.to_uppercase();
            Ok(match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => letter,
            })
        }
        (Some(other), None) => Err(SessionError::InvalidGuessCharacter(other)),
        _ => Err(SessionError::InvalidGuessLength(composed.chars().count())),
    }
}
