//! Perft node counting for move-generation validation.
//!
//! Walks every legal move sequence to a fixed depth and tallies leaf nodes
//! along with the special-move kinds seen on the final ply. Totals are
//! compared against published reference numbers in the tests; a single wrong
//! edge case in generation or application shows up as a count mismatch.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Move, MoveKind, PieceClass};
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move_to_copy;
use crate::move_generation::legal_moves::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (_, legal) in all_legal_moves(game)? {
        if depth == 1 {
            total.merge(leaf_counts(game, &legal.mv, legal.is_capture));
        } else {
            let next = apply_move_to_copy(game, &legal.mv)?;
            total.merge(perft(&next, depth - 1)?);
        }
    }
    Ok(total)
}

fn leaf_counts(game: &GameState, mv: &Move, is_capture: bool) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if is_capture {
        counts.captures += 1;
    }
    match mv.kind {
        MoveKind::EnPassantCapture => counts.en_passant += 1,
        MoveKind::CastleKingside | MoveKind::CastleQueenside => counts.castles += 1,
        _ => {}
    }
    if is_promotion(game, mv) {
        counts.promotions += 1;
    }
    counts
}

fn is_promotion(game: &GameState, mv: &Move) -> bool {
    match game.board.piece_at(mv.from) {
        Some(piece) => {
            matches!(piece.class, PieceClass::Pawn)
                && mv.to.rank() == piece.team.promotion_rank()
        }
        None => false,
    }
}
