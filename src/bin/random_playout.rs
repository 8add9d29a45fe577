//! Seeded random self-play runner.
//!
//! Plays a bounded random game through the public controller, printing the
//! board after every move, then emits the finished game as PGN. Pass a seed
//! as the first argument to reproduce a playout.
//!
//! Usage:
//! `cargo run --bin random_playout [seed] [max_plies]`

use std::env;
use std::process::ExitCode;

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use maple_chess::game::controller::{ChessGame, GameStatus};
use maple_chess::game_state::chess_types::PieceTeam;
use maple_chess::utils::pgn::write_pgn;
use maple_chess::utils::render_game_state::render_game_state;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let seed: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("seed must be an unsigned integer");
            return ExitCode::FAILURE;
        }
        None => 42,
    };
    let max_plies: usize = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("max_plies must be an unsigned integer");
            return ExitCode::FAILURE;
        }
        None => 120,
    };

    match run_playout(seed, max_plies) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("playout failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_playout(seed: u64, max_plies: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = ChessGame::new();

    println!("seed={seed} max_plies={max_plies}");
    println!("{}\n", render_game_state(game.state()));

    for ply in 1..=max_plies {
        let moves = game.all_legal_moves()?;
        let Some((from, legal)) = moves.choose(&mut rng) else {
            break;
        };
        game.try_apply_move(*from, legal.mv.to)?;

        let notation = game.history().last().cloned().unwrap_or_default();
        println!("ply {ply}: {notation}");
        println!("{}\n", render_game_state(game.state()));

        if matches!(
            game.status()?,
            GameStatus::Checkmate(_) | GameStatus::Stalemate
        ) {
            break;
        }
    }

    let result = match game.status()? {
        GameStatus::Checkmate(PieceTeam::Light) => "1-0",
        GameStatus::Checkmate(PieceTeam::Dark) => "0-1",
        GameStatus::Stalemate => "1/2-1/2",
        _ => "*",
    };

    println!("result: {result}");
    println!("{}", write_pgn(&game, result));
    Ok(())
}
