// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rookery Core - Board Controller and Rules Abstraction
//!
//! This crate provides the game-facing logic of the chess GUI:
//! - Domain value types (squares, pieces, game status)
//! - The `RulesProvider` trait and its shakmaty-backed implementation
//! - The board controller translating square clicks into chess actions
//!
//! Chess legality itself (move generation, check detection, castling and
//! en-passant rules) is owned by the external rules engine and is not
//! implemented here.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod controller;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// Piece color (White or Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    /// White player (moves first)
    White,
    /// Black player
    Black,
}

impl PieceColor {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// Piece type, without color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Piece type
    pub kind: PieceKind,
    /// Owning side
    pub color: PieceColor,
}

/// Board coordinate as an explicit (file, rank) value type.
///
/// Both components are in `0..=7`; rank 0 is White's back rank. Displayed
/// and parsed in algebraic form ("e2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareCoord {
    /// File (column), 0 = a-file
    pub file: u8,
    /// Rank (row), 0 = rank 1
    pub rank: u8,
}

impl SquareCoord {
    /// Create a new coordinate
    pub fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Check that both components are on the board
    pub fn is_valid(&self) -> bool {
        self.file < BOARD_SIZE && self.rank < BOARD_SIZE
    }
}

impl fmt::Display for SquareCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for SquareCoord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidSquare(s.to_string()));
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        Ok(SquareCoord::new(file as u8 - b'a', rank as u8 - b'1'))
    }
}

/// Game status as reported by the rules engine after each committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game in progress, side to move not in check
    Ongoing,
    /// Side to move is in check but has legal moves
    Check,
    /// Side to move is checkmated
    Checkmate,
    /// Side to move has no legal moves and is not in check
    Stalemate,
}

impl GameStatus {
    /// True for Checkmate and Stalemate
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Errors that can occur while driving the rules engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No legal move exists between the two squares
    #[error("no legal move from {from} to {to}")]
    IllegalMove {
        /// Source square of the attempted move
        from: SquareCoord,
        /// Destination square of the attempted move
        to: SquareCoord,
    },

    /// The position description could not be parsed or set up
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The algebraic square name could not be parsed
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}
