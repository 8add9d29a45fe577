//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! rank/file representation reused by FEN, notation, and test setups.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert an algebraic coordinate (for example: "e4") to a square. Rank 0 is
/// the eighth rank, so "e8" maps to rank 0 and "e1" to rank 7.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Square::new(8 - (rank - b'0') as i8, (file - b'a') as i8)
}

/// Convert a square to its algebraic coordinate (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file() as u8);
    let rank_char = char::from(b'0' + (8 - square.rank()) as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() -> Result<(), ChessErrors> {
        for (text, rank, file) in [("a8", 0, 0), ("h1", 7, 7), ("e4", 4, 4), ("e2", 6, 4)] {
            let square = algebraic_to_square(text)?;
            assert_eq!(square, Square::new(rank, file)?);
            assert_eq!(square_to_algebraic(square), text);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            algebraic_to_square("i4"),
            Err(ChessErrors::InvalidAlgebraicChar('i'))
        ));
        assert!(matches!(
            algebraic_to_square("e9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        ));
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
