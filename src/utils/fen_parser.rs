//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string:
//! board layout, side to move, castling rights, and en passant target. The
//! halfmove-clock field is validated but not retained (the fifty-move rule is
//! outside this engine's scope). Positions must contain exactly one king per
//! side; anything else is rejected as corrupt.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Piece, PieceClass, PieceTeam, Square,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut next_field = || {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))
    };

    let board_part = next_field()?;
    let side_part = next_field()?;
    let castling_part = next_field()?;
    let en_passant_part = next_field()?;
    let halfmove_part = next_field()?;
    let fullmove_part = next_field()?;

    let board = parse_board(board_part, fen)?;
    verify_kings(&board, fen)?;

    let side_to_move = match side_part {
        "w" => PieceTeam::Light,
        "b" => PieceTeam::Dark,
        _ => return Err(ChessErrors::InvalidFenString(fen.to_owned())),
    };

    let castling_rights = parse_castling_rights(castling_part)?;

    let en_passant_target = match en_passant_part {
        "-" => None,
        text => Some(algebraic_to_square(text)?),
    };

    // Not retained, but a malformed field still means a malformed FEN.
    halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?;

    let move_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?;

    Ok(GameState {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        move_number,
        history: Vec::new(),
    })
}

fn parse_board(board_part: &str, fen: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(fen.to_owned()));
    }

    let mut board = Board::empty();
    // FEN lists the eighth rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0i8;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            let square = Square::new(rank as i8, file)
                .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?;
            board.place(square, piece);
            file += 1;
        }
        if file != 8 {
            return Err(ChessErrors::InvalidFenString(fen.to_owned()));
        }
    }
    Ok(board)
}

fn verify_kings(board: &Board, fen: &str) -> Result<(), ChessErrors> {
    for team in [PieceTeam::Light, PieceTeam::Dark] {
        let kings = board
            .pieces_of(team)
            .iter()
            .filter(|(_, piece)| matches!(piece.class, PieceClass::King))
            .count();
        match kings {
            0 => return Err(ChessErrors::MissingKing(team)),
            1 => {}
            _ => return Err(ChessErrors::InvalidFenString(fen.to_owned())),
        }
    }
    Ok(())
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        }
    }
    Ok(rights)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let team = if ch.is_ascii_uppercase() {
        PieceTeam::Light
    } else {
        PieceTeam::Dark
    };
    let class = match ch.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    Some(Piece { class, team })
}
