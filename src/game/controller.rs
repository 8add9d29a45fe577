//! Turn-taking wrapper around the core rules.
//!
//! `ChessGame` owns a `GameState` and is the surface a UI or driver talks to:
//! it validates selections, applies moves permanently, flips the side to
//! move, answers undo and reset requests, and reports checkmate/stalemate.
//! Illegal input is rejected without disturbing the position.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{LegalMove, Move, Piece, PieceTeam, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::{apply_move, ApplyMode};
use crate::move_generation::attacks::is_in_check;
use crate::move_generation::legal_moves::{
    all_legal_moves, legal_moves_from, side_has_legal_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    LightToMove,
    DarkToMove,
    /// The named team delivered mate and wins.
    Checkmate(PieceTeam),
    Stalemate,
}

/// A finer-grained view of the position for callers that render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub side_to_move: PieceTeam,
    pub in_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    state: GameState,
}

impl ChessGame {
    pub fn new() -> ChessGame {
        ChessGame {
            state: GameState::new_game(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<ChessGame, ChessErrors> {
        Ok(ChessGame {
            state: GameState::from_fen(fen)?,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fen(&self) -> String {
        self.state.get_fen()
    }

    pub fn board_snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        self.state.board.snapshot_grid()
    }

    /// Notation of every move played so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state
            .history
            .iter()
            .map(|entry| entry.notation.clone())
            .collect()
    }

    /// Legal moves for the piece on `from`. Selecting an empty square or an
    /// opposing piece yields an empty list rather than an error, so a UI can
    /// probe squares freely.
    pub fn legal_moves(&self, from: Square) -> Vec<LegalMove> {
        match self.state.board.piece_at(from) {
            Some(piece) if piece.team == self.state.side_to_move => {
                legal_moves_from(&self.state, from).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    pub fn all_legal_moves(&self) -> Result<Vec<(Square, LegalMove)>, ChessErrors> {
        all_legal_moves(&self.state)
    }

    /// Applies the move from `from` to `to` if it is legal for the side to
    /// move. On success the move is recorded in history and the turn passes
    /// to the opponent. On failure the position is left untouched.
    pub fn try_apply_move(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        match self.state.board.piece_at(from) {
            Some(piece) if piece.team == self.state.side_to_move => {}
            _ => return Err(ChessErrors::InvalidSelection(from)),
        }

        let chosen: Move = self
            .legal_moves(from)
            .into_iter()
            .map(|legal| legal.mv)
            .find(|mv| mv.to == to)
            .ok_or(ChessErrors::IllegalMove { from, to })?;

        apply_move(&mut self.state, &chosen, ApplyMode::Permanent)?;
        self.state.side_to_move = self.state.side_to_move.opponent();
        Ok(())
    }

    /// Convenience wrapper for drivers that only care whether the move stuck.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        self.try_apply_move(from, to).is_ok()
    }

    /// Rewinds the most recent move. Repeated calls walk all the way back to
    /// the initial position.
    pub fn try_undo(&mut self) -> Result<(), ChessErrors> {
        let entry = self.state.history.pop().ok_or(ChessErrors::EmptyHistory)?;
        self.state.restore(entry.snapshot);
        Ok(())
    }

    /// Convenience wrapper; false means there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    pub fn reset(&mut self) {
        self.state = GameState::new_game();
    }

    pub fn status(&self) -> Result<GameStatus, ChessErrors> {
        let report = self.status_report()?;
        if report.is_checkmate {
            return Ok(GameStatus::Checkmate(report.side_to_move.opponent()));
        }
        if report.is_stalemate {
            return Ok(GameStatus::Stalemate);
        }
        Ok(match report.side_to_move {
            PieceTeam::Light => GameStatus::LightToMove,
            PieceTeam::Dark => GameStatus::DarkToMove,
        })
    }

    pub fn status_report(&self) -> Result<StatusReport, ChessErrors> {
        let side = self.state.side_to_move;
        let in_check = is_in_check(&self.state, side)?;
        let has_move = side_has_legal_move(&self.state)?;
        Ok(StatusReport {
            side_to_move: side,
            in_check,
            is_checkmate: in_check && !has_move,
            is_stalemate: !in_check && !has_move,
        })
    }
}

impl Default for ChessGame {
    fn default() -> ChessGame {
        ChessGame::new()
    }
}
