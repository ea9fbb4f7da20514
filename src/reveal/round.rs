//! Round state and the reveal state machine
//!
//! Letter tiles move `Hidden -> Pending(c) -> Revealed`. A guess only moves
//! matching tiles to pending and queues them; each confirm reveals the oldest
//! queued tile. Solving reveals everything at once.

use super::change::{ButtonMode, MatchResult, TileChange};
use crate::core::{Phrase, Tile, TileId, TileStatus, fold, matches};
use crate::layout::layout;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::ops::Range;
use tracing::{debug, trace};

/// One game over a single phrase
#[derive(Debug, Clone)]
pub struct Round {
    phrase: Phrase,
    tiles: Vec<Tile>,
    rows: Vec<Range<usize>>,
    max_columns: usize,
    queue: VecDeque<TileId>,
    tried: FxHashSet<char>,
    changes: Vec<TileChange>,
}

impl Round {
    /// Lay out `phrase` and start with every letter hidden
    ///
    /// # Examples
    /// ```
    /// use ruleta_panel::core::Phrase;
    /// use ruleta_panel::reveal::Round;
    ///
    /// let mut round = Round::new(Phrase::new("hola mundo").unwrap(), 12);
    /// let result = round.submit_guess('o');
    ///
    /// assert_eq!(result.count(), 2);
    /// assert!(round.has_pending_reveals());
    /// assert!(round.confirm_next());
    /// ```
    #[must_use]
    pub fn new(phrase: Phrase, max_columns: usize) -> Self {
        let panel = layout(&phrase, max_columns);
        let max_columns = panel.max_columns();
        let (tiles, rows) = panel.into_parts();

        Self {
            phrase,
            tiles,
            rows,
            max_columns,
            queue: VecDeque::new(),
            tried: FxHashSet::default(),
            changes: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[inline]
    #[must_use]
    pub const fn max_columns(&self) -> usize {
        self.max_columns
    }

    /// All tiles in reading order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(|range| &self.tiles[range.clone()])
    }

    /// Owned copy of the current rows, for handing to a view
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Tiles waiting for a confirm, oldest first
    pub fn pending(&self) -> impl Iterator<Item = TileId> + '_ {
        self.queue.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn has_pending_reveals(&self) -> bool {
        !self.queue.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn button_mode(&self) -> ButtonMode {
        if self.has_pending_reveals() {
            ButtonMode::Confirm
        } else {
            ButtonMode::Guess
        }
    }

    /// Some letter tile is still hidden or pending
    #[must_use]
    pub fn has_unrevealed_letters(&self) -> bool {
        self.tiles.iter().any(Tile::is_unrevealed_letter)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.has_unrevealed_letters()
    }

    /// Letter tiles still hidden (pending ones excluded)
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.is_letter() && t.status.is_hidden())
            .count()
    }

    /// Folded letters guessed so far, in Spanish alphabetical order
    #[must_use]
    pub fn tried_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.tried.iter().copied().collect();
        letters.sort_by_key(|&c| if c == 'ñ' { ('n', 1) } else { (c, 0) });
        letters
    }

    /// Letter was already guessed in this round (accent-insensitive)
    #[must_use]
    pub fn was_tried(&self, letter: char) -> bool {
        self.tried.contains(&fold(letter))
    }

    /// Highlight every hidden tile matching `letter` and queue it for reveal
    ///
    /// Does nothing and returns no match while reveals are pending or when
    /// `letter` is not a letter or digit.
    pub fn submit_guess(&mut self, letter: char) -> MatchResult {
        if self.has_pending_reveals() {
            debug!(%letter, "guess ignored, reveals pending");
            return MatchResult::none();
        }
        if !letter.is_alphanumeric() {
            debug!(%letter, "guess ignored, not a letter");
            return MatchResult::none();
        }

        self.tried.insert(fold(letter));

        let mut result = MatchResult::none();
        for tile in &mut self.tiles {
            if tile.is_letter() && tile.status.is_hidden() && matches(tile.character, letter) {
                tile.status = TileStatus::Pending(tile.character);
                self.queue.push_back(tile.id);
                self.changes.push(TileChange::of(tile));
                result.matched.push(tile.id);
            }
        }

        debug!(%letter, matched = result.count(), "guess scanned");
        result
    }

    /// Reveal the oldest pending tile
    ///
    /// Returns `false` when nothing is pending.
    pub fn confirm_next(&mut self) -> bool {
        let Some(id) = self.queue.pop_front() else {
            return false;
        };

        let tile = &mut self.tiles[id.index()];
        tile.status = TileStatus::Revealed;
        self.changes.push(TileChange::of(tile));
        trace!(tile = %id, remaining = self.queue.len(), "confirmed reveal");
        true
    }

    /// Reveal every letter and drop the pending queue
    ///
    /// Returns how many tiles changed; zero on an already solved round.
    pub fn solve_all(&mut self) -> usize {
        self.queue.clear();

        let mut revealed = 0;
        for tile in &mut self.tiles {
            if tile.is_unrevealed_letter() {
                tile.status = TileStatus::Revealed;
                self.changes.push(TileChange::of(tile));
                revealed += 1;
            }
        }

        debug!(revealed, "solved panel");
        revealed
    }

    /// Drain recorded transitions, oldest first
    pub fn take_changes(&mut self) -> Vec<TileChange> {
        std::mem::take(&mut self.changes)
    }
}
