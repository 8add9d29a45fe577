//! The legality filter.
//!
//! Narrows pseudo-legal candidates to legal moves by trial-applying each one
//! on a throwaway copy and checking that the mover's own king is not attacked
//! afterwards. Trial application is required here because legality for one
//! piece can depend on the position of every other piece (pins, discovered
//! checks); a purely local per-piece test is insufficient.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{LegalMove, MoveKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move_to_copy;
use crate::move_generation::attacks::is_in_check;
use crate::move_generation::pseudo_moves::{pseudo_moves, GenerationMode};

/// All legal moves for the piece on `from`, annotated with capture status.
/// Empty when the square is empty. Errors only on corrupted positions with no
/// king for the moving piece's team.
pub fn legal_moves_from(game: &GameState, from: Square) -> Result<Vec<LegalMove>, ChessErrors> {
    let piece = match game.board.piece_at(from) {
        Some(piece) => piece,
        None => return Ok(Vec::new()),
    };

    let mut result = Vec::new();
    for mv in pseudo_moves(game, from, GenerationMode::Full) {
        let trial = apply_move_to_copy(game, &mv)?;
        if is_in_check(&trial, piece.team)? {
            continue;
        }
        let is_capture = matches!(mv.kind, MoveKind::EnPassantCapture)
            || game
                .board
                .piece_at(mv.to)
                .map_or(false, |target| target.team != piece.team);
        result.push(LegalMove { mv, is_capture });
    }
    Ok(result)
}

/// Every legal move for the side to move, paired with its origin square.
pub fn all_legal_moves(game: &GameState) -> Result<Vec<(Square, LegalMove)>, ChessErrors> {
    let mut result = Vec::new();
    for (from, _piece) in game.board.pieces_of(game.side_to_move) {
        for legal in legal_moves_from(game, from)? {
            result.push((from, legal));
        }
    }
    Ok(result)
}

/// Whether the side to move has any legal move at all; short-circuits on the
/// first one found. Drives checkmate/stalemate classification.
pub fn side_has_legal_move(game: &GameState) -> Result<bool, ChessErrors> {
    for (from, _piece) in game.board.pieces_of(game.side_to_move) {
        if !legal_moves_from(game, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn square(text: &str) -> Square {
        algebraic_to_square(text).unwrap()
    }

    #[test]
    fn test_twenty_opening_moves() -> Result<(), ChessErrors> {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game)?.len(), 20);
        Ok(())
    }

    #[test]
    fn test_pinned_piece_cannot_move() -> Result<(), ChessErrors> {
        // Knight on e2 shields its king from the rook on e3.
        let game = GameState::from_fen("4k3/8/8/8/8/4r3/4N3/4K3 w - - 0 1")?;
        assert!(legal_moves_from(&game, square("e2"))?.is_empty());
        assert_eq!(all_legal_moves(&game)?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_king_cannot_step_into_attack() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1")?;
        let moves = legal_moves_from(&game, square("e1"))?;
        let targets: Vec<Square> = moves.iter().map(|lm| lm.mv.to).collect();
        assert_eq!(moves.len(), 3);
        assert!(targets.contains(&square("e2"))); // undefended rook falls
        assert!(targets.contains(&square("d1")));
        assert!(targets.contains(&square("f1")));
        Ok(())
    }

    #[test]
    fn test_check_forces_resolution() -> Result<(), ChessErrors> {
        // Bishop on h4 checks the king along h4-g3-f2-e1. The only answers
        // are the four king steps off that diagonal; f2 stays attacked.
        let game = GameState::from_fen("4k3/8/8/8/7b/8/8/4K3 w - - 0 1")?;
        assert!(is_in_check(&game, crate::game_state::chess_types::PieceTeam::Light)?);
        let all = all_legal_moves(&game)?;
        assert_eq!(all.len(), 4);
        assert!(!all.iter().any(|(_, lm)| lm.mv.to == square("f2")));
        Ok(())
    }

    #[test]
    fn test_capture_annotation() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/3RK3 w - - 0 1")?;
        let moves = legal_moves_from(&game, square("d1"))?;
        let capture = moves.iter().find(|lm| lm.mv.to == square("d5")).unwrap();
        assert!(capture.is_capture);
        let quiet = moves.iter().find(|lm| lm.mv.to == square("d3")).unwrap();
        assert!(!quiet.is_capture);
        Ok(())
    }
}
