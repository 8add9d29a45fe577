//! PGN export for game history interchange.
//!
//! Serializes a game's move history and headers to PGN text. Games that did
//! not start from the standard position get `SetUp`/`FEN` headers so another
//! reader can replay them from the right place.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game::controller::ChessGame;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;

pub fn write_pgn(game: &ChessGame, result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Maple Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_fen_of(game);
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(game, &headers)
}

pub fn write_pgn_with_headers(game: &ChessGame, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let history = game.history();
    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, notation) in history.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            movetext_parts.push(notation.clone());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// FEN of the position the game began from, recovered from the oldest
/// history snapshot. Falls back to the current position for a fresh game.
fn initial_fen_of(game: &ChessGame) -> String {
    match game.state().history.first() {
        Some(entry) => GameState::from_snapshot(entry.snapshot.clone()).get_fen(),
        None => game.fen(),
    }
}

fn normalize_result(result: &str) -> &str {
    if matches!(result, "1-0" | "0-1" | "1/2-1/2" | "*") {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;
    use crate::utils::algebraic::algebraic_to_square;

    fn play(game: &mut ChessGame, from: &str, to: &str) -> Result<(), ChessErrors> {
        game.try_apply_move(algebraic_to_square(from)?, algebraic_to_square(to)?)
    }

    #[test]
    fn test_pgn_numbers_moves_in_pairs() -> Result<(), ChessErrors> {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4")?;
        play(&mut game, "e7", "e5")?;
        play(&mut game, "g1", "f3")?;

        let pgn = write_pgn(&game, "*");
        let movetext = pgn.lines().last().unwrap();
        assert_eq!(movetext, "1. e4 e5 2. Nf3 *");
        assert!(pgn.contains("[Event \"Maple Chess Game\"]"));
        assert!(!pgn.contains("[SetUp"));
        Ok(())
    }

    #[test]
    fn test_pgn_records_custom_starting_position() -> Result<(), ChessErrors> {
        let start_fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let mut game = ChessGame::from_fen(start_fen)?;
        play(&mut game, "e2", "e4")?;

        let pgn = write_pgn(&game, "1-0");
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains(&format!("[FEN \"{start_fen}\"]")));
        assert!(pgn.ends_with("1. e4 1-0\n"));
        Ok(())
    }

    #[test]
    fn test_result_tokens_normalized() {
        let game = ChessGame::new();
        let pgn = write_pgn(&game, "white wins lol");
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.ends_with("*\n"));
    }
}
