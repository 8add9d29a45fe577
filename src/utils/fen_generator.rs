//! GameState-to-FEN serializer.
//!
//! The inverse of the parser: the emitted string round-trips through
//! `parse_fen` into an equal position. The halfmove-clock field is always
//! written as `0` because the engine does not track it.

use crate::game_state::chess_types::{CastlingRights, Piece, PieceClass, PieceTeam, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game: &GameState) -> String {
    let mut fen = String::new();

    for rank in 0..8i8 {
        if rank > 0 {
            fen.push('/');
        }
        let mut empty_run = 0u8;
        for file in 0..8i8 {
            let square = Square::from_parts(rank, file);
            match game.board.piece_at(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    fen.push(fen_char_for(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push((b'0' + empty_run) as char);
        }
    }

    fen.push(' ');
    fen.push(match game.side_to_move {
        PieceTeam::Light => 'w',
        PieceTeam::Dark => 'b',
    });

    fen.push(' ');
    let rights = &game.castling_rights;
    if rights == &CastlingRights::none() {
        fen.push('-');
    } else {
        if rights.light_kingside {
            fen.push('K');
        }
        if rights.light_queenside {
            fen.push('Q');
        }
        if rights.dark_kingside {
            fen.push('k');
        }
        if rights.dark_queenside {
            fen.push('q');
        }
    }

    fen.push(' ');
    match game.en_passant_target {
        Some(square) => fen.push_str(&square_to_algebraic(square)),
        None => fen.push('-'),
    }

    fen.push_str(" 0 ");
    fen.push_str(&game.move_number.to_string());
    fen
}

fn fen_char_for(piece: Piece) -> char {
    let lower = match piece.class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match piece.team {
        PieceTeam::Light => lower.to_ascii_uppercase(),
        PieceTeam::Dark => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn test_starting_position_round_trip() -> Result<(), ChessErrors> {
        let game = GameState::new_game();
        assert_eq!(generate_fen(&game), STARTING_POSITION_FEN);
        Ok(())
    }

    #[test]
    fn test_mid_game_round_trip() -> Result<(), ChessErrors> {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "4k3/8/8/8/8/8/8/R3K3 w Q - 0 40",
        ];
        for fen in fens {
            let game = parse_fen(fen)?;
            assert_eq!(generate_fen(&game), fen);
        }
        Ok(())
    }
}
