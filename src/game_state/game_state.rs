//! Core board state representation.
//!
//! `GameState` is the central model for the engine. It stores the mailbox
//! board, turn/rights flags, the move counter, and the history stack used by
//! the undo workflow. A single owned value is passed explicitly to every
//! operation; there is no process-wide state.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, PieceTeam, Square};
use crate::game_state::undo_state::{HistoryEntry, Snapshot};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Complete game state: board, auxiliary flags, and move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: PieceTeam,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    /// Advances after dark completes a move; starts at 1.
    pub move_number: u16,
    /// Pre-move snapshots in application order; popped by undo.
    pub history: Vec<HistoryEntry>,
}

impl GameState {
    /// Standard starting position, light to move, full castling rights.
    pub fn new_game() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: PieceTeam::Light,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            move_number: 1,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Copies the mutable fields (everything except history).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            move_number: self.move_number,
        }
    }

    /// Restores all mutable fields from a snapshot, leaving history alone.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.side_to_move = snapshot.side_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant_target = snapshot.en_passant_target;
        self.move_number = snapshot.move_number;
    }

    /// A history-free state built from a snapshot; used for trial application
    /// by the legality filter and for perft recursion.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        GameState {
            board: snapshot.board,
            side_to_move: snapshot.side_to_move,
            castling_rights: snapshot.castling_rights,
            en_passant_target: snapshot.en_passant_target,
            move_number: snapshot.move_number,
            history: Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn snapshot_round_trip() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 3")?;
        let before = game.clone();
        let snapshot = game.snapshot();

        game.board.remove(Square::new(6, 4)?);
        game.side_to_move = PieceTeam::Dark;
        game.move_number = 9;

        game.restore(snapshot);
        assert_eq!(game, before);
        Ok(())
    }
}
