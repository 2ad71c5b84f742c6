//! Uniformly random legal play. Useful as a baseline opponent and for
//! exercising the move executor over long self-play games.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::commit_move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn play(&mut self, state: &mut GameState, side: Color) -> Outcome {
        let mut candidates: Vec<(Square, Square)> = Vec::new();
        for square in 0..BOARD_TILES as Square {
            let Some(piece) = state.board.piece_at(square) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            for &dest in state.generate_moves(square, false).as_slice() {
                candidates.push((square, dest));
            }
        }
        candidates.shuffle(&mut self.rng);

        for (from, to) in candidates {
            let Some(mut ctx) = state.context(from, to) else {
                continue;
            };
            let outcome = commit_move(state, &mut ctx);
            if outcome != Outcome::Invalid {
                return outcome;
            }
        }
        Outcome::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;

    #[test]
    fn seeded_engines_play_identical_games() {
        let mut a = RandomEngine::seeded(7);
        let mut b = RandomEngine::seeded(7);
        let mut state_a = GameState::new_game();
        let mut state_b = GameState::new_game();

        for ply in 0..12 {
            let side = if ply % 2 == 0 { Color::White } else { Color::Black };
            let oa = a.play(&mut state_a, side);
            let ob = b.play(&mut state_b, side);
            assert_eq!(oa, ob);
            if oa >= Outcome::Checkmate {
                break;
            }
        }
        assert_eq!(state_a.board, state_b.board);
    }

    #[test]
    fn long_random_game_unwinds_back_to_the_start() {
        let mut white = RandomEngine::seeded(42);
        let mut black = RandomEngine::seeded(1337);
        let mut state = GameState::new_game();

        for ply in 0..40 {
            let (engine, side) = if ply % 2 == 0 {
                (&mut white, Color::White)
            } else {
                (&mut black, Color::Black)
            };
            if engine.play(&mut state, side) >= Outcome::Checkmate {
                break;
            }
        }

        while state.undo() {}
        assert_eq!(state.board, Board::new_game());
        assert!(state.en_passant.is_none());
        let rebuilt = GameState::new_game();
        assert_eq!(state.attacks, rebuilt.attacks);
    }

    #[test]
    fn returns_stalemate_when_the_side_has_no_legal_move() {
        let mut state = GameState::empty();
        state.board.place(0, Piece::new(PieceKind::King, Color::Black));
        state.board.place(10, Piece::new(PieceKind::Queen, Color::White));
        state.board.place(63, Piece::new(PieceKind::King, Color::White));
        state.rebuild_attacks();

        let mut engine = RandomEngine::seeded(3);
        assert_eq!(engine.play(&mut state, Color::Black), Outcome::Stalemate);
        // Nothing was committed.
        assert!(!state.can_undo());
    }
}
