use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Move, PieceTeam, Square};

/// Full copy of the mutable game fields, taken before a move is applied.
/// Undo restores the popped snapshot verbatim; nothing is reconstructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: PieceTeam,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub move_number: u16,
}

/// Single history record pushed by the move executor for each committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// State exactly as it was before the move was applied.
    pub snapshot: Snapshot,
    /// The move that was applied.
    pub mv: Move,
    /// Display notation for the move (unambiguous coordinates, SAN-ish).
    pub notation: String,
}
