//! Shared value types for the rules engine.
//!
//! Pieces, teams, board coordinates, castling rights, and move records are all
//! small `Copy` values; board contents are replaced, never mutated in place.

use crate::errors::ChessErrors;

/// The team (color) of a chess piece: dark (black) or light (white).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The dark (black) side.
    Dark,
    /// The light (white) side.
    Light,
}

impl PieceTeam {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PieceTeam::Dark => PieceTeam::Light,
            PieceTeam::Light => PieceTeam::Dark,
        }
    }

    /// Forward direction as a rank delta. Rank 0 is the eighth rank, so light
    /// pawns march toward smaller ranks.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PieceTeam::Dark => 1,
            PieceTeam::Light => -1,
        }
    }

    /// The rank this team's pieces start on (king, rooks, castling geometry).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            PieceTeam::Dark => 0,
            PieceTeam::Light => 7,
        }
    }

    /// The rank this team's pawns start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            PieceTeam::Dark => 1,
            PieceTeam::Light => 6,
        }
    }

    /// The rank on which this team's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            PieceTeam::Dark => 7,
            PieceTeam::Light => 0,
        }
    }
}

/// The class (type) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board. Immutable value; promotion replaces the record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub class: PieceClass,
    pub team: PieceTeam,
}

/// A board coordinate. Both components are in `0..=7`; rank 0 is the eighth
/// rank in standard orientation and file 0 is the a-file.
///
/// The fields are private so [`Square::new`] is the only construction path
/// outside the crate; every `Square` in circulation is on the board and can
/// index it without further checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    rank: i8,
    file: i8,
}

impl Square {
    /// Validates both components against the 8x8 board.
    pub fn new(rank: i8, file: i8) -> Result<Self, ChessErrors> {
        if !(0..=7).contains(&rank) || !(0..=7).contains(&file) {
            return Err(ChessErrors::OutOfRangeCoordinate((rank, file)));
        }
        Ok(Square { rank, file })
    }

    /// Unchecked construction for crate internals whose coordinates are
    /// already derived from an existing square.
    #[inline]
    pub(crate) const fn from_parts(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Offsets this square by a rank and file delta, rejecting results that
    /// fall off the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Result<Self, ChessErrors> {
        Square::new(self.rank + d_rank, self.file + d_file)
    }
}

/// Per-team castling permissions. Rights only ever transition from granted to
/// revoked; they are never re-granted during a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    /// Whether light (white) can castle kingside.
    pub light_kingside: bool,
    /// Whether light (white) can castle queenside.
    pub light_queenside: bool,
    /// Whether dark (black) can castle kingside.
    pub dark_kingside: bool,
    /// Whether dark (black) can castle queenside.
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        CastlingRights {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }

    pub const fn none() -> Self {
        CastlingRights {
            light_kingside: false,
            light_queenside: false,
            dark_kingside: false,
            dark_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Dark => self.dark_kingside,
            PieceTeam::Light => self.light_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Dark => self.dark_queenside,
            PieceTeam::Light => self.light_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Dark => self.dark_kingside = false,
            PieceTeam::Light => self.light_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Dark => self.dark_queenside = false,
            PieceTeam::Light => self.light_queenside = false,
        }
    }

    pub fn revoke_both(&mut self, team: PieceTeam) {
        self.revoke_kingside(team);
        self.revoke_queenside(team);
    }
}

/// Distinguishes moves whose application has side effects beyond relocating
/// the moving piece. Promotion is not a kind: a pawn landing on the last rank
/// always becomes a queen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// A regular move or regular capture.
    Normal,
    /// Two-square pawn advance; leaves an en passant target behind.
    DoublePush,
    /// En passant capture; the victim stands behind the destination.
    EnPassantCapture,
    /// King-and-rook compound move toward the h-file rook.
    CastleKingside,
    /// King-and-rook compound move toward the a-file rook.
    CastleQueenside,
}

/// A candidate or chosen move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

/// A move that survived the legality filter, annotated for display layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub mv: Move,
    pub is_capture: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessErrors::OutOfRangeCoordinate((8, 0)))
        ));
        assert!(Square::new(-1, 3).is_err());
        assert!(Square::new(3, 9).is_err());
    }

    #[test]
    fn square_accessors() -> Result<(), ChessErrors> {
        let square = Square::new(3, 5)?;
        assert_eq!(square.rank(), 3);
        assert_eq!(square.file(), 5);
        Ok(())
    }

    #[test]
    fn square_offset() -> Result<(), ChessErrors> {
        let e2 = Square::new(6, 4)?;
        let e4 = e2.offset(-2, 0)?;
        assert_eq!(e4, Square::new(4, 4)?);
        assert!(Square::new(0, 0)?.offset(-1, 0).is_err());
        assert!(Square::new(7, 7)?.offset(0, 1).is_err());
        Ok(())
    }

    #[test]
    fn rights_only_revoke() {
        let mut rights = CastlingRights::all();
        rights.revoke_both(PieceTeam::Light);
        assert!(!rights.kingside(PieceTeam::Light));
        assert!(!rights.queenside(PieceTeam::Light));
        assert!(rights.kingside(PieceTeam::Dark));
        rights.revoke_queenside(PieceTeam::Dark);
        assert!(rights.kingside(PieceTeam::Dark));
        assert!(!rights.queenside(PieceTeam::Dark));
    }
}
