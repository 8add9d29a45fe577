//! Pseudo-legal move generation.
//!
//! Candidate destinations per piece, ignoring whether the mover's own king
//! would be left in check. The same generators run in attack-scan mode for the
//! attack detector: pawn pushes are suppressed there (pawns do not attack
//! straight ahead), pawn diagonals are reported regardless of occupancy, and
//! castling candidates are never generated (the castling conditions themselves
//! consult the attack detector, which calls back into this module).

use crate::game_state::chess_types::{Move, MoveKind, Piece, PieceClass, PieceTeam, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attacks::is_square_attacked;

/// Selects between full candidate generation and the reduced attack scan used
/// by the attack detector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// All candidate moves, including pushes, en passant, and castling.
    Full,
    /// Only squares the piece threatens.
    AttackScan,
}

/// Generates the pseudo-legal candidates for the piece on `from`, or an empty
/// list when the square is empty.
pub fn pseudo_moves(game: &GameState, from: Square, mode: GenerationMode) -> Vec<Move> {
    let piece = match game.board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    match piece.class {
        PieceClass::Pawn => pawn_moves(game, from, piece.team, mode),
        PieceClass::Knight => knight_moves(game, from, piece.team),
        PieceClass::Bishop => bishop_moves(game, from, piece.team),
        PieceClass::Rook => rook_moves(game, from, piece.team),
        PieceClass::Queen => queen_moves(game, from, piece.team),
        PieceClass::King => king_moves(game, from, piece.team, mode),
    }
}

/// Pawn candidates. In attack-scan mode only the two forward diagonals are
/// reported, and they are reported even when empty; a pawn threatens those
/// squares whether or not anything stands there.
fn pawn_moves(game: &GameState, from: Square, team: PieceTeam, mode: GenerationMode) -> Vec<Move> {
    let mut result = Vec::new();
    let forward = team.forward();

    if matches!(mode, GenerationMode::AttackScan) {
        for d_file in [-1, 1] {
            if let Ok(stop) = from.offset(forward, d_file) {
                result.push(Move {
                    from,
                    to: stop,
                    kind: MoveKind::Normal,
                });
            }
        }
        return result;
    }

    // Diagonal captures, including en passant onto the current target square.
    for d_file in [-1, 1] {
        if let Ok(stop) = from.offset(forward, d_file) {
            if let Some(target) = game.board.piece_at(stop) {
                if target.team != team {
                    result.push(Move {
                        from,
                        to: stop,
                        kind: MoveKind::Normal,
                    });
                }
            } else if game.en_passant_target == Some(stop) {
                result.push(Move {
                    from,
                    to: stop,
                    kind: MoveKind::EnPassantCapture,
                });
            }
        }
    }

    // Forward march onto an empty square.
    if let Ok(one) = from.offset(forward, 0) {
        if game.board.piece_at(one).is_none() {
            result.push(Move {
                from,
                to: one,
                kind: MoveKind::Normal,
            });

            // Double step from the start rank, both squares empty.
            if from.rank() == team.pawn_start_rank() {
                if let Ok(two) = from.offset(2 * forward, 0) {
                    if game.board.piece_at(two).is_none() {
                        result.push(Move {
                            from,
                            to: two,
                            kind: MoveKind::DoublePush,
                        });
                    }
                }
            }
        }
    }

    result
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

fn knight_moves(game: &GameState, from: Square, team: PieceTeam) -> Vec<Move> {
    let mut result = Vec::new();
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Ok(stop) = from.offset(d_rank, d_file) {
            if let Some(mv) = check_move_collision(game, team, from, stop) {
                result.push(mv);
            }
        }
    }
    result
}

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn bishop_moves(game: &GameState, from: Square, team: PieceTeam) -> Vec<Move> {
    let mut result = Vec::new();
    for (d_rank, d_file) in BISHOP_DIRECTIONS {
        follow_move_vector(game, team, from, d_rank, d_file, &mut result);
    }
    result
}

fn rook_moves(game: &GameState, from: Square, team: PieceTeam) -> Vec<Move> {
    let mut result = Vec::new();
    for (d_rank, d_file) in ROOK_DIRECTIONS {
        follow_move_vector(game, team, from, d_rank, d_file, &mut result);
    }
    result
}

fn queen_moves(game: &GameState, from: Square, team: PieceTeam) -> Vec<Move> {
    let mut result = Vec::new();
    for (d_rank, d_file) in BISHOP_DIRECTIONS {
        follow_move_vector(game, team, from, d_rank, d_file, &mut result);
    }
    for (d_rank, d_file) in ROOK_DIRECTIONS {
        follow_move_vector(game, team, from, d_rank, d_file, &mut result);
    }
    result
}

/// King candidates: the eight adjacent squares, plus castling outside attack
/// scans. A castling candidate requires the right still held, the king on its
/// home square, the between-squares empty, and the king's current, transit,
/// and destination squares all unattacked.
fn king_moves(game: &GameState, from: Square, team: PieceTeam, mode: GenerationMode) -> Vec<Move> {
    let mut result = Vec::new();
    for d_rank in -1..=1 {
        for d_file in -1..=1 {
            if d_rank == 0 && d_file == 0 {
                continue;
            }
            if let Ok(stop) = from.offset(d_rank, d_file) {
                if let Some(mv) = check_move_collision(game, team, from, stop) {
                    result.push(mv);
                }
            }
        }
    }

    if matches!(mode, GenerationMode::AttackScan) {
        return result;
    }

    let home = Square::from_parts(team.back_rank(), 4);
    if from != home {
        return result;
    }
    let rank = home.rank();
    let enemy = team.opponent();
    let empty = |file: i8| game.board.piece_at(Square::from_parts(rank, file)).is_none();
    let safe = |file: i8| !is_square_attacked(game, Square::from_parts(rank, file), enemy);
    // Rights can outlive the rook through an arbitrary FEN setup; the rook
    // must actually stand on its corner.
    let rook_at = |file: i8| {
        matches!(
            game.board.piece_at(Square::from_parts(rank, file)),
            Some(Piece { class: PieceClass::Rook, team: rook_team }) if rook_team == team
        )
    };

    if game.castling_rights.kingside(team)
        && rook_at(7)
        && empty(5)
        && empty(6)
        && safe(4)
        && safe(5)
        && safe(6)
    {
        result.push(Move {
            from,
            to: Square::from_parts(rank, 6),
            kind: MoveKind::CastleKingside,
        });
    }
    if game.castling_rights.queenside(team)
        && rook_at(0)
        && empty(1)
        && empty(2)
        && empty(3)
        && safe(4)
        && safe(3)
        && safe(2)
    {
        result.push(Move {
            from,
            to: Square::from_parts(rank, 2),
            kind: MoveKind::CastleQueenside,
        });
    }

    result
}

/// Accepts a single-step destination that is empty or enemy-occupied; rejects
/// squares held by a teammate.
fn check_move_collision(
    game: &GameState,
    team: PieceTeam,
    from: Square,
    stop: Square,
) -> Option<Move> {
    match game.board.piece_at(stop) {
        Some(Piece { team: t, .. }) if t == team => None,
        _ => Some(Move {
            from,
            to: stop,
            kind: MoveKind::Normal,
        }),
    }
}

/// Walks a slider direction until the board edge, a teammate (stop, excluded),
/// or an enemy piece (stop, included as a capture).
fn follow_move_vector(
    game: &GameState,
    team: PieceTeam,
    from: Square,
    d_rank: i8,
    d_file: i8,
    result: &mut Vec<Move>,
) {
    for distance in 1..8 {
        let stop = match from.offset(d_rank * distance, d_file * distance) {
            Ok(stop) => stop,
            Err(_) => break,
        };
        match game.board.piece_at(stop) {
            None => result.push(Move {
                from,
                to: stop,
                kind: MoveKind::Normal,
            }),
            Some(target) => {
                if target.team != team {
                    result.push(Move {
                        from,
                        to: stop,
                        kind: MoveKind::Normal,
                    });
                }
                break;
            }
        }
    }
}
