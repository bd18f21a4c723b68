// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board controller: interprets square clicks as chess actions.
//!
//! Owns the current selection, the legal destinations for that selection,
//! and the game status, keeping all three consistent with the rules
//! provider's position. The renderer reads this state and never mutates it.

use crate::rules::RulesProvider;
use crate::{GameError, GameStatus, Piece, PieceColor, SquareCoord};

/// What a click did to the controller state.
///
/// Returned for logging and tests; the UI only needs to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click changed nothing (empty square or opponent piece, no selection)
    Ignored,
    /// A side-to-move piece was selected (or re-selected)
    Selected,
    /// The selection was cleared without a move
    Deselected,
    /// A legal move was applied to the position
    Moved,
}

/// Explicit game-state object: rules position plus ephemeral UI state.
///
/// Selection is `Some` only while it holds a piece of the side to move;
/// `legal_targets` is empty whenever the selection is empty.
pub struct GameController<R: RulesProvider> {
    rules: R,
    selection: Option<SquareCoord>,
    legal_targets: Vec<SquareCoord>,
    status: GameStatus,
}

impl<R: RulesProvider> GameController<R> {
    /// Create a controller over a rules provider
    pub fn new(rules: R) -> Self {
        let status = rules.status();
        Self {
            rules,
            selection: None,
            legal_targets: Vec::new(),
            status,
        }
    }

    /// Read access to the underlying rules provider
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Currently selected square, if any
    pub fn selection(&self) -> Option<SquareCoord> {
        self.selection
    }

    /// Legal destinations for the current selection
    pub fn legal_targets(&self) -> &[SquareCoord] {
        &self.legal_targets
    }

    /// Whether `square` is a legal destination for the current selection
    pub fn is_target(&self, square: SquareCoord) -> bool {
        self.legal_targets.contains(&square)
    }

    /// Game status after the last committed move
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Piece occupying `square`, if any
    pub fn piece_at(&self, square: SquareCoord) -> Option<Piece> {
        self.rules.piece_at(square)
    }

    /// The color whose turn it is
    pub fn side_to_move(&self) -> PieceColor {
        self.rules.side_to_move()
    }

    /// Replace the position with a fresh one and clear all ephemeral state
    pub fn reset(&mut self, rules: R) {
        self.status = rules.status();
        self.rules = rules;
        self.selection = None;
        self.legal_targets.clear();
        tracing::info!("game reset");
    }

    /// Handle a click on a board square.
    ///
    /// The widget's pixel-to-square mapping already discards clicks in the
    /// margin; coordinates off the board are ignored here as well, with no
    /// state change.
    pub fn handle_square_click(&mut self, square: SquareCoord) -> Result<ClickOutcome, GameError> {
        if !square.is_valid() {
            return Ok(ClickOutcome::Ignored);
        }
        let outcome = match self.selection {
            None => {
                if self.holds_side_to_move_piece(square) {
                    self.select(square);
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Ignored
                }
            }
            Some(selected) if selected == square => {
                self.clear_selection();
                ClickOutcome::Deselected
            }
            Some(selected) => {
                if self.legal_targets.contains(&square) {
                    self.rules.play(selected, square)?;
                    self.clear_selection();
                    self.status = self.rules.status();
                    tracing::debug!(from = %selected, to = %square, status = ?self.status, "move committed");
                    ClickOutcome::Moved
                } else if self.holds_side_to_move_piece(square) {
                    self.select(square);
                    ClickOutcome::Selected
                } else {
                    self.clear_selection();
                    ClickOutcome::Deselected
                }
            }
        };
        Ok(outcome)
    }

    fn holds_side_to_move_piece(&self, square: SquareCoord) -> bool {
        self.rules
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.rules.side_to_move())
    }

    fn select(&mut self, square: SquareCoord) {
        self.selection = Some(square);
        self.legal_targets = self.rules.legal_targets(square);
        tracing::debug!(square = %square, targets = self.legal_targets.len(), "piece selected");
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_targets.clear();
    }
}
