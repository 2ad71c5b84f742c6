//! Self-play demo: two heuristic engines alternate turns until the game
//! ends or the ply cap is hit, then the final position and transcript are
//! printed.

use mailbox_chess::engines::engine_heuristic::HeuristicEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_rules::Skill;
use mailbox_chess::game_state::chess_types::{Color, Outcome};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::utils::game_log::game_log;
use mailbox_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 200;

fn main() {
    let mut state = GameState::new_game();
    let mut white = HeuristicEngine::new(Skill::Easy);
    let mut black = HeuristicEngine::new(Skill::VeryEasy);

    let mut side = Color::White;
    let mut last = Outcome::Ok;
    for _ in 0..MAX_PLIES {
        last = match side {
            Color::White => white.play(&mut state, side),
            Color::Black => black.play(&mut state, side),
        };
        if last >= Outcome::Checkmate {
            break;
        }
        side = side.opposite();
    }

    println!("{}", render_game_state(&state));
    println!();
    println!("{}", game_log(&state));
    println!("Final outcome: {last:?}");
}
