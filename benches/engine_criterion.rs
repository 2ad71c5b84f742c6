use criterion::{criterion_group, criterion_main, Criterion};

use mailbox_chess::engines::engine_heuristic::HeuristicEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_rules::Skill;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::attack_board::{place_piece_attacks, AttackBoard};

fn bench_attack_rebuild(c: &mut Criterion) {
    let state = GameState::new_game();
    let mut attacks = AttackBoard::new();
    c.bench_function("attack_rebuild_startpos", |b| {
        b.iter(|| place_piece_attacks(&state.board, None, &mut attacks));
    });
}

fn bench_opening_move(c: &mut Criterion) {
    let state = GameState::new_game();
    c.bench_function("heuristic_very_easy_opening_move", |b| {
        b.iter(|| {
            let mut scratch = state.clone();
            let mut engine = HeuristicEngine::new(Skill::VeryEasy);
            engine.play(&mut scratch, Color::White)
        });
    });
}

criterion_group!(benches, bench_attack_rebuild, bench_opening_move);
criterion_main!(benches);
