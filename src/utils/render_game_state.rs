//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments.

use crate::game_state::chess_types::{Piece, PieceClass, PieceTeam, Square};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, eighth rank at
/// the top as a player of the light pieces would see it.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8i8 {
        let rank_label = char::from(b'8' - rank as u8);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8i8 {
            match game_state.board.piece_at(Square::from_parts(rank, file)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;

    #[test]
    fn test_render_starting_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn test_render_sparse_position() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1")?;
        let rendered = render_game_state(&game);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[5], "4 · · · · ♙ · · · 4");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
        Ok(())
    }
}
