//! Fixed rule constants.

/// FEN of the standard starting position (white to move, all castling rights,
/// no en passant target, move number 1).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
