//! Crate root module declarations for the Maple Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! the game controller, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod attacks;
    pub mod legal_moves;
    pub mod perft;
    pub mod pseudo_moves;
}

pub mod game {
    pub mod controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod notation;
    pub mod pgn;
    pub mod render_game_state;
}

pub mod errors;
