//! Crate root module declarations for the mailbox chess engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece move
//! generation, the attack database and move executor, engines, and utility
//! helpers) so binaries, tests, and external tooling can import stable
//! module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_log;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_list;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slide;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod attack_board;
    pub mod checkmate;
    pub mod move_generator;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_log;
    pub mod render_game_state;
}
