// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rules-provider abstraction over the external chess engine.
//!
//! All legality questions are delegated to the engine; nothing in this
//! repository computes legal moves itself. The engine's types stay behind
//! [`RulesProvider`] so the controller and the renderer only ever see the
//! domain value types, and so tests can substitute a scripted provider.

use crate::{GameError, GameStatus, Piece, PieceColor, PieceKind, SquareCoord};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, CastlingSide, Chess, File, Move, Position, Rank, Role, Square};

/// Legality queries and move application for a single game.
///
/// Contract per the system design: enumeration of legal destinations
/// filterable by source square, move application, and terminal-state
/// queries for the side to move.
pub trait RulesProvider {
    /// Piece occupying the given square, if any
    fn piece_at(&self, square: SquareCoord) -> Option<Piece>;

    /// The color whose turn it is
    fn side_to_move(&self) -> PieceColor;

    /// Destination squares of all legal moves from `from`.
    ///
    /// Castling is reported as the king's destination square (g1/c1 style),
    /// since that is the square the user clicks on.
    fn legal_targets(&self, from: SquareCoord) -> Vec<SquareCoord>;

    /// Apply the legal move from `from` to `to`.
    ///
    /// When several legal moves match (pawn promotions), the queen
    /// promotion is chosen. Fails with [`GameError::IllegalMove`] if no
    /// legal move matches.
    fn play(&mut self, from: SquareCoord, to: SquareCoord) -> Result<(), GameError>;

    /// Current game status for the side to move
    fn status(&self) -> GameStatus;
}

/// Production rules provider backed by `shakmaty`.
#[derive(Debug, Clone)]
pub struct ShakmatyRules {
    pos: Chess,
}

impl ShakmatyRules {
    /// Standard initial arrangement
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
        }
    }

    /// Position described by a FEN string
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let parsed: Fen = fen
            .parse()
            .map_err(|_| GameError::InvalidFen(fen.to_string()))?;
        let pos = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|_| GameError::InvalidFen(fen.to_string()))?;
        Ok(Self { pos })
    }

    /// Square the user clicks to play this move.
    ///
    /// The engine encodes castling as king-takes-rook; the clickable
    /// destination is the king's actual target square.
    fn click_target(m: &Move) -> Square {
        match *m {
            Move::Castle { king, rook } => {
                let side = if rook.file() > king.file() {
                    CastlingSide::KingSide
                } else {
                    CastlingSide::QueenSide
                };
                Square::from_coords(side.king_to_file(), king.rank())
            }
            _ => m.to(),
        }
    }
}

impl Default for ShakmatyRules {
    fn default() -> Self {
        Self::new()
    }
}

fn to_engine(sq: SquareCoord) -> Square {
    Square::from_coords(File::new(u32::from(sq.file)), Rank::new(u32::from(sq.rank)))
}

fn from_engine(sq: Square) -> SquareCoord {
    SquareCoord::new(u32::from(sq.file()) as u8, u32::from(sq.rank()) as u8)
}

fn from_engine_color(color: shakmaty::Color) -> PieceColor {
    match color {
        shakmaty::Color::White => PieceColor::White,
        shakmaty::Color::Black => PieceColor::Black,
    }
}

fn from_engine_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

impl RulesProvider for ShakmatyRules {
    fn piece_at(&self, square: SquareCoord) -> Option<Piece> {
        self.pos.board().piece_at(to_engine(square)).map(|p| Piece {
            kind: from_engine_role(p.role),
            color: from_engine_color(p.color),
        })
    }

    fn side_to_move(&self) -> PieceColor {
        from_engine_color(self.pos.turn())
    }

    fn legal_targets(&self, from: SquareCoord) -> Vec<SquareCoord> {
        let from_sq = to_engine(from);
        let mut targets: Vec<SquareCoord> = self
            .pos
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(from_sq))
            .map(|m| from_engine(Self::click_target(m)))
            .collect();
        // Promotions yield one legal move per role for the same square
        targets.sort_by_key(|sq| (sq.rank, sq.file));
        targets.dedup();
        targets
    }

    fn play(&mut self, from: SquareCoord, to: SquareCoord) -> Result<(), GameError> {
        let from_sq = to_engine(from);
        let to_sq = to_engine(to);
        let mv = self
            .pos
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(from_sq) && Self::click_target(m) == to_sq)
            .find(|m| m.promotion().is_none() || m.promotion() == Some(Role::Queen))
            .cloned()
            .ok_or(GameError::IllegalMove { from, to })?;
        tracing::debug!(%from, %to, "applying move");
        self.pos.play_unchecked(&mv);
        Ok(())
    }

    fn status(&self) -> GameStatus {
        if self.pos.is_checkmate() {
            GameStatus::Checkmate
        } else if self.pos.is_stalemate() {
            GameStatus::Stalemate
        } else if self.pos.is_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position() {
        let rules = ShakmatyRules::new();
        assert_eq!(rules.side_to_move(), PieceColor::White);
        assert_eq!(rules.status(), GameStatus::Ongoing);
        let e1 = "e1".parse().unwrap();
        assert_eq!(
            rules.piece_at(e1),
            Some(Piece {
                kind: PieceKind::King,
                color: PieceColor::White
            })
        );
    }

    #[test]
    fn fen_rejects_garbage() {
        assert!(matches!(
            ShakmatyRules::from_fen("not a fen"),
            Err(GameError::InvalidFen(_))
        ));
    }
}
