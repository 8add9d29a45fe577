//! The attack detector.
//!
//! Answers whether a square is attacked by a given team by scanning all 64
//! squares and pseudo-generating in attack-scan mode for every piece of that
//! team. Used for check detection, castling-path safety, and the legality
//! filter's king-safety test. This is a boolean predicate; duplicate entries
//! in a piece's attack list carry no separate meaning.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{PieceTeam, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves::{pseudo_moves, GenerationMode};

/// True iff any piece of `by` has an attack-scan candidate reaching `target`.
pub fn is_square_attacked(game: &GameState, target: Square, by: PieceTeam) -> bool {
    for (from, _piece) in game.board.pieces_of(by) {
        if pseudo_moves(game, from, GenerationMode::AttackScan)
            .iter()
            .any(|mv| mv.to == target)
        {
            return true;
        }
    }
    false
}

/// Whether `team`'s king is currently attacked by the opponent. Errors on
/// positions with no king for `team`.
pub fn is_in_check(game: &GameState, team: PieceTeam) -> Result<bool, ChessErrors> {
    let king_square = game.board.find_king(team)?;
    Ok(is_square_attacked(game, king_square, team.opponent()))
}
