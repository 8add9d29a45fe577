//! Display notation for history entries.
//!
//! A simplified SAN: castles render as `O-O`/`O-O-O`, other moves as a piece
//! letter, an `x` on captures, and the destination coordinate. Origin-square
//! disambiguation is deliberately not performed.

use crate::game_state::chess_types::{Move, MoveKind, PieceClass};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

/// Formats `mv` against the position it is about to be played in. Must be
/// called before the move is applied, while the capture target is still on
/// the board.
pub fn format_move(game: &GameState, mv: &Move) -> String {
    match mv.kind {
        MoveKind::CastleKingside => return "O-O".to_owned(),
        MoveKind::CastleQueenside => return "O-O-O".to_owned(),
        _ => {}
    }

    let piece_letter = match game.board.piece_at(mv.from).map(|p| p.class) {
        Some(PieceClass::Knight) => "N",
        Some(PieceClass::Bishop) => "B",
        Some(PieceClass::Rook) => "R",
        Some(PieceClass::Queen) => "Q",
        Some(PieceClass::King) => "K",
        _ => "",
    };

    let is_capture = matches!(mv.kind, MoveKind::EnPassantCapture)
        || game.board.piece_at(mv.to).is_some();
    let capture_mark = if is_capture { "x" } else { "" };

    format!("{piece_letter}{capture_mark}{}", square_to_algebraic(mv.to))
}
