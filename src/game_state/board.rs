//! The 8x8 mailbox board model.
//!
//! Holds at most one piece per square. Every state reachable through legal
//! play keeps exactly one king per team; that invariant is enforced by the
//! legality filter, not here.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Piece, PieceClass, PieceTeam, Square};

/// An 8x8 grid of optional pieces, indexed `[rank][file]` with rank 0 being
/// the eighth rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Builds the standard starting position: dark pieces on ranks 0 and 1,
    /// light pieces on ranks 6 and 7.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceClass; 8] = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];

        let mut board = Board::empty();
        for file in 0..8usize {
            board.squares[0][file] = Some(Piece {
                class: BACK_RANK[file],
                team: PieceTeam::Dark,
            });
            board.squares[1][file] = Some(Piece {
                class: PieceClass::Pawn,
                team: PieceTeam::Dark,
            });
            board.squares[6][file] = Some(Piece {
                class: PieceClass::Pawn,
                team: PieceTeam::Light,
            });
            board.squares[7][file] = Some(Piece {
                class: BACK_RANK[file],
                team: PieceTeam::Light,
            });
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Clears the square and returns whatever piece stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    /// All occupied squares of one team, scan order rank-major from the
    /// eighth rank down.
    pub fn pieces_of(&self, team: PieceTeam) -> Vec<(Square, Piece)> {
        let mut found = Vec::new();
        for rank in 0..8i8 {
            for file in 0..8i8 {
                if let Some(piece) = self.squares[rank as usize][file as usize] {
                    if piece.team == team {
                        found.push((Square::from_parts(rank, file), piece));
                    }
                }
            }
        }
        found
    }

    /// Locates the king of `team`, erroring on corrupted positions.
    pub fn find_king(&self, team: PieceTeam) -> Result<Square, ChessErrors> {
        for rank in 0..8i8 {
            for file in 0..8i8 {
                if let Some(piece) = self.squares[rank as usize][file as usize] {
                    if piece.team == team && matches!(piece.class, PieceClass::King) {
                        return Ok(Square::from_parts(rank, file));
                    }
                }
            }
        }
        Err(ChessErrors::MissingKing(team))
    }

    /// Read-only copy of the grid for rendering/input layers.
    pub fn snapshot_grid(&self) -> [[Option<Piece>; 8]; 8] {
        self.squares
    }
}
