//! Errors used throughout the chess rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, move generation and the game controller. The enum
//! `ChessErrors` is used as the single error type across the crate to simplify
//! propagation and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics and user-facing error messages.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceTeam, Square};

/// Unified error type for the rules engine.
///
/// Rejection-style variants (`InvalidSelection`, `IllegalMove`,
/// `EmptyHistory`, `OutOfRangeCoordinate`) are expected during normal play and
/// always leave the game state unchanged. Parsing variants are recoverable and
/// suitable for presenting to end users. `MissingKing` indicates a corrupted
/// or hand-built position and is a domain-level failure, not a play rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A caller-supplied coordinate pair was outside the 8x8 board.
    ///
    /// Payload: (rank_index, file_index) as supplied.
    OutOfRangeCoordinate((i8, i8)),

    /// The selected square is empty or holds a piece of the side not to move.
    ///
    /// Payload: the selected square.
    InvalidSelection(Square),

    /// The destination is not in the legal set for the selected square.
    IllegalMove { from: Square, to: Square },

    /// Undo was requested with no prior moves recorded.
    EmptyHistory,

    /// A piece was expected on this square but none was present.
    ///
    /// Payload: the empty square's location.
    EmptySquare(Square),

    /// The board does not contain a king for one side.
    ///
    /// This represents a corrupted or invalid position; callers should treat
    /// it as a setup error rather than a play rejection.
    MissingKing(PieceTeam),

    /// Found an unexpected token while parsing a FEN string.
    ///
    /// Payload: the offending character.
    InvalidFenToken(char),

    /// A FEN string had malformed structure (not matching expected form).
    ///
    /// Payload: the original offending string for diagnostics.
    InvalidFenString(String),

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (for example a file outside 'a'..'h').
    InvalidAlgebraicChar(char),

    /// An algebraic square string failed to parse as a whole.
    InvalidAlgebraicString(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfRangeCoordinate((rank, file)) => {
                write!(f, "coordinate ({rank}, {file}) is outside the board")
            }
            ChessErrors::InvalidSelection(square) => {
                write!(f, "no piece of the side to move on {square:?}")
            }
            ChessErrors::IllegalMove { from, to } => {
                write!(f, "move {from:?} -> {to:?} is not legal")
            }
            ChessErrors::EmptyHistory => write!(f, "no moves recorded to undo"),
            ChessErrors::EmptySquare(square) => {
                write!(f, "expected a piece on {square:?} but the square is empty")
            }
            ChessErrors::MissingKing(team) => {
                write!(f, "position has no {team:?} king")
            }
            ChessErrors::InvalidFenToken(token) => {
                write!(f, "invalid FEN token '{token}'")
            }
            ChessErrors::InvalidFenString(fen) => write!(f, "malformed FEN string: {fen}"),
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character '{ch}'")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
        }
    }
}

impl Error for ChessErrors {}
