//! The move executor.
//!
//! Applies a chosen move to a `GameState`, handling every side effect:
//! en passant victim removal, forced queen promotion, castle rook relocation,
//! castling-rights bookkeeping, the en passant target window, and the move
//! counter. Permanent application first pushes a pre-move snapshot onto the
//! history stack; trial application (used by the legality filter and perft)
//! skips only that push.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Move, MoveKind, Piece, PieceClass, PieceTeam, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::HistoryEntry;
use crate::utils::notation::format_move;

/// Whether the application is committed to history or a throwaway trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyMode {
    /// Record a history entry before mutating.
    Permanent,
    /// Mutate without recording; the caller discards the state afterwards.
    Trial,
}

/// Applies `mv` to `game`, returning the captured piece if any.
///
/// The move is trusted: callers route candidates through the legality filter
/// first. The side to move is not flipped here; turn sequencing belongs to the
/// game controller.
pub fn apply_move(
    game: &mut GameState,
    mv: &Move,
    mode: ApplyMode,
) -> Result<Option<Piece>, ChessErrors> {
    let moving = game
        .board
        .piece_at(mv.from)
        .ok_or(ChessErrors::EmptySquare(mv.from))?;

    if matches!(mode, ApplyMode::Permanent) {
        let notation = format_move(game, mv);
        game.history.push(HistoryEntry {
            snapshot: game.snapshot(),
            mv: *mv,
            notation,
        });
    }

    // Capture: the destination square, or for en passant the pawn directly
    // behind it (same file as the destination, same rank as the origin).
    let mut captured = game.board.remove(mv.to);
    if matches!(mv.kind, MoveKind::EnPassantCapture) {
        let victim = Square::from_parts(mv.from.rank(), mv.to.file());
        captured = game.board.remove(victim);
    }

    // Relocate, promoting a pawn that reaches the opponent's back rank to a
    // queen (forced; underpromotion is not offered).
    game.board.remove(mv.from);
    let arriving = if matches!(moving.class, PieceClass::Pawn)
        && mv.to.rank() == moving.team.promotion_rank()
    {
        Piece {
            class: PieceClass::Queen,
            team: moving.team,
        }
    } else {
        moving
    };
    game.board.place(mv.to, arriving);

    // Castling relocates the rook on the same rank.
    match mv.kind {
        MoveKind::CastleKingside => {
            let rank = mv.from.rank();
            let corner = Square::from_parts(rank, 7);
            let rook = game
                .board
                .remove(corner)
                .ok_or(ChessErrors::EmptySquare(corner))?;
            game.board.place(Square::from_parts(rank, 5), rook);
        }
        MoveKind::CastleQueenside => {
            let rank = mv.from.rank();
            let corner = Square::from_parts(rank, 0);
            let rook = game
                .board
                .remove(corner)
                .ok_or(ChessErrors::EmptySquare(corner))?;
            game.board.place(Square::from_parts(rank, 3), rook);
        }
        _ => {}
    }

    // Rights bookkeeping: a king move (castling included) clears both rights
    // for its side; a rook leaving its home square clears that one; a rook
    // captured on its home square clears the opponent's.
    if matches!(moving.class, PieceClass::King) {
        game.castling_rights.revoke_both(moving.team);
    }
    if matches!(moving.class, PieceClass::Rook) {
        revoke_right_for_home_square(game, mv.from);
    }
    if matches!(captured, Some(Piece { class: PieceClass::Rook, .. })) {
        revoke_right_for_home_square(game, mv.to);
    }

    // The en passant window lasts exactly one move.
    game.en_passant_target = if matches!(mv.kind, MoveKind::DoublePush) {
        Some(Square::from_parts(
            (mv.from.rank() + mv.to.rank()) / 2,
            mv.from.file(),
        ))
    } else {
        None
    };

    if matches!(moving.team, PieceTeam::Dark) {
        game.move_number += 1;
    }

    Ok(captured)
}

/// Produces the successor position for a move, with the side to move flipped.
/// History is not carried over; this backs trial legality tests and perft.
pub fn apply_move_to_copy(game: &GameState, mv: &Move) -> Result<GameState, ChessErrors> {
    let mut next = GameState::from_snapshot(game.snapshot());
    apply_move(&mut next, mv, ApplyMode::Trial)?;
    next.side_to_move = next.side_to_move.opponent();
    Ok(next)
}

fn revoke_right_for_home_square(game: &mut GameState, square: Square) {
    match (square.rank(), square.file()) {
        (7, 0) => game.castling_rights.revoke_queenside(PieceTeam::Light),
        (7, 7) => game.castling_rights.revoke_kingside(PieceTeam::Light),
        (0, 0) => game.castling_rights.revoke_queenside(PieceTeam::Dark),
        (0, 7) => game.castling_rights.revoke_kingside(PieceTeam::Dark),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_moves::legal_moves_from;
    use crate::utils::algebraic::algebraic_to_square;

    /// Looks up the legal move between two squares, special kind included.
    fn pick(game: &GameState, from: &str, to: &str) -> Result<Move, ChessErrors> {
        let from = algebraic_to_square(from)?;
        let to = algebraic_to_square(to)?;
        legal_moves_from(game, from)?
            .iter()
            .map(|lm| lm.mv)
            .find(|mv| mv.to == to)
            .ok_or(ChessErrors::IllegalMove { from, to })
    }

    #[test]
    fn test_kingside_castle_effects() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")?;
        let mv = pick(&game, "e1", "g1")?;
        assert_eq!(mv.kind, MoveKind::CastleKingside);
        let next = apply_move_to_copy(&game, &mv)?;
        assert_eq!(next.get_fen(), "4k3/8/8/8/8/8/8/5RK1 b - - 0 1");
        Ok(())
    }

    #[test]
    fn test_rook_move_loses_right() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("r3k3/8/8/8/8/8/8/4K3 b q - 0 5")?;
        let mv = pick(&game, "a8", "a6")?;
        let next = apply_move_to_copy(&game, &mv)?;
        assert_eq!(next.get_fen(), "4k3/8/r7/8/8/8/8/4K3 w - - 0 6");
        Ok(())
    }

    #[test]
    fn test_captured_rook_loses_right() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k2b/8/8/8/8/8/8/R3K3 b Q - 0 10")?;
        let mv = pick(&game, "h8", "a1")?;
        let next = apply_move_to_copy(&game, &mv)?;
        assert_eq!(next.get_fen(), "4k3/8/8/8/8/8/8/b3K3 w - - 0 11");
        Ok(())
    }

    #[test]
    fn test_en_passant_capture_removes_victim() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1")?;
        let push = pick(&game, "e2", "e4")?;
        assert_eq!(push.kind, MoveKind::DoublePush);
        let after_push = apply_move_to_copy(&game, &push)?;
        assert_eq!(after_push.get_fen(), "4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");

        let capture = pick(&after_push, "d4", "e3")?;
        assert_eq!(capture.kind, MoveKind::EnPassantCapture);
        let after_capture = apply_move_to_copy(&after_push, &capture)?;
        assert_eq!(after_capture.get_fen(), "4k3/8/8/8/8/4p3/8/4K3 w - - 0 2");
        Ok(())
    }

    #[test]
    fn test_window_closes_after_unrelated_move() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1")?;
        let quiet = pick(&game, "e8", "d8")?;
        let next = apply_move_to_copy(&game, &quiet)?;
        assert_eq!(next.en_passant_target, None);
        // The diagonal is no longer a capture for the d4 pawn.
        let moves = legal_moves_from(&next, algebraic_to_square("d4")?)?;
        assert!(!moves
            .iter()
            .any(|lm| lm.mv.kind == MoveKind::EnPassantCapture));
        Ok(())
    }

    #[test]
    fn test_forced_queen_promotion() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")?;
        let mv = pick(&game, "a7", "a8")?;
        let next = apply_move_to_copy(&game, &mv)?;
        assert_eq!(next.get_fen(), "Q3k3/8/8/8/8/8/8/4K3 b - - 0 1");

        // Capturing onto the back rank promotes as well.
        let game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1")?;
        let mv = pick(&game, "a7", "b8")?;
        let next = apply_move_to_copy(&game, &mv)?;
        assert_eq!(next.get_fen(), "1Q2k3/8/8/8/8/8/8/4K3 b - - 0 1");
        Ok(())
    }

    #[test]
    fn test_trial_mode_skips_history() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let mv = pick(&game, "e2", "e4")?;

        let trial = apply_move_to_copy(&game, &mv)?;
        assert!(trial.history.is_empty());

        apply_move(&mut game, &mv, ApplyMode::Permanent)?;
        assert_eq!(game.history.len(), 1);
        assert_eq!(game.history[0].notation, "e4");
        Ok(())
    }
}
