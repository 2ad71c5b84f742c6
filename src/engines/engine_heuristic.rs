//! The heuristic engine: a fixed-width, fixed-depth search over statically
//! scored moves.
//!
//! Every piece's candidate moves are scored by cheap positional heuristics
//! (threats against the piece where it stands, support given and received,
//! material on the destination). The top-ranked candidates then each get a
//! subtree estimate: play the move speculatively, predict the opponent's
//! best reply the same way, and alternate for a bounded number of plies,
//! flipping the sign so opponent gains count against the candidate.
//! Speculative moves run on the real board and are always reverted; with
//! `deep_thoughts` set each one is validated by the move executor and the
//! attack database is kept accurate, otherwise the static ranking is
//! trusted as-is.

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_rules::{piece_value, Skill, SkillParams, MAX_PIECE_MOVES, NUM_PIECES_SIDE};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::{commit_move, process_action};

/// Sentinel for a search branch with no playable reply.
const DEAD_END_SCORE: i32 = i32::MIN / 2;

const NEIGHBOURS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// One slot in a score-sorted candidate array.
#[derive(Debug, Clone, Copy)]
struct ScoredMove {
    source: Option<Square>,
    dest: Option<Square>,
    score: i32,
}

impl ScoredMove {
    const VACANT: Self = Self {
        source: None,
        dest: None,
        score: i32::MIN,
    };
}

/// Per-piece bookkeeping for the side to move: where the piece stands, its
/// accumulated positional score, and its best validated destination.
#[derive(Debug, Clone, Copy)]
struct PieceScore {
    kind: PieceKind,
    source: Square,
    dest: Option<Square>,
    score: i32,
}

/// Insert into a sorted array, best score first. A new score equal to an
/// existing one is inserted ahead of it; the worst slot falls off the end.
fn add_score_sorted(array: &mut [ScoredMove], source: Option<Square>, dest: Option<Square>, score: i32) {
    if dest.is_none() {
        return;
    }
    let len = array.len();
    for i in 0..len {
        if array[i].dest.is_none() || score >= array[i].score {
            array.copy_within(i..len - 1, i + 1);
            array[i] = ScoredMove {
                source,
                dest,
                score,
            };
            break;
        }
    }
}

/// Score a piece where it stands. A positive score encourages moving away,
/// a negative one staying put.
fn source_score(state: &GameState, position: Square) -> i32 {
    let Some(piece) = state.board.piece_at(position) else {
        return 0;
    };
    let color = piece.color;
    let other = color.opposite();
    let value = piece_value(piece.kind);
    let mut score = 0;

    if state.attacks.is_attacked(position, other) {
        score += value;
    } else {
        score -= 1;
    }
    if state.attacks.is_attacked(position, color) {
        score -= 1;
    } else {
        score += 1;
    }

    let reach = state.generate_moves(position, true);
    let mut supporting = false;
    for &tile in reach.as_slice() {
        let Some(target) = state.board.piece_at(tile) else {
            continue;
        };
        if target.color != color {
            continue;
        }
        supporting = true;
        score -= 1;

        if state.attacks.is_attacked(tile, other) {
            // Sole defender of a threatened piece should hold still.
            if state.attacks.count(tile, color) == 1 {
                score -= 2;
            } else {
                score += 1;
            }
            if piece_value(target.kind) > value {
                score -= 2;
            } else {
                score += 1;
            }
        }
    }
    if !supporting {
        score += 1;
    }

    score
}

/// Score the square a piece would land on. The piece is placed there
/// transiently so its reach from the destination can be generated; the cell
/// is restored before returning. The attack database still describes the
/// unmoved position throughout, exactly as the static ranking expects.
fn dest_score(state: &mut GameState, position: Square, destination: Square) -> i32 {
    let Some(piece) = state.board.piece_at(position) else {
        return 0;
    };
    let color = piece.color;
    let other = color.opposite();
    let value = piece_value(piece.kind);
    let mut score = 0;

    if state.attacks.is_attacked(destination, other) {
        score -= value;
    }
    if state.attacks.is_attacked(destination, color) {
        score += 1;
    } else {
        score -= 1;
    }

    let target = state.board.piece_at(destination);
    if let Some(t) = target {
        if t.color != color {
            score += piece_value(t.kind);
        }
    }

    state.board.set(destination, Some(piece));
    let reach = state.generate_moves(destination, true);
    state.board.set(destination, target);

    for &tile in reach.as_slice() {
        let Some(t) = state.board.piece_at(tile) else {
            continue;
        };
        if t.color == color {
            score += 1;
            if state.attacks.is_attacked(tile, other) {
                score += 1;
                if state.attacks.count(tile, color) == 1 {
                    score += 2;
                }
                if piece_value(t.kind) > value {
                    score += 1;
                }
            }
        } else {
            score += 1;
            let target_value = piece_value(t.kind);
            if target_value > value {
                score += target_value - value;
            }
            // Attacking an undefended piece is extra attractive.
            if !state.attacks.is_attacked(tile, other) {
                score += 2;
            }
        }
    }

    score
}

/// Walk a sorted candidate array until the move executor accepts one.
/// Accepted probes are committed to the log and immediately taken back, so
/// the state is unchanged on return.
fn first_valid(state: &mut GameState, slots: &[ScoredMove]) -> Option<usize> {
    for (j, slot) in slots.iter().enumerate() {
        let (Some(src), Some(dst)) = (slot.source, slot.dest) else {
            break;
        };
        let Some(mut ctx) = state.context(src, dst) else {
            continue;
        };
        let outcome = process_action(state, &mut ctx);
        if outcome != Outcome::Invalid {
            state.push_undo(&ctx, outcome);
            state.undo();
            return Some(j);
        }
    }
    None
}

pub struct HeuristicEngine {
    params: SkillParams,
    pieces: [Option<PieceScore>; NUM_PIECES_SIDE],
    index: [Option<u8>; BOARD_TILES],
}

impl HeuristicEngine {
    pub fn new(skill: Skill) -> Self {
        Self {
            params: skill.params(),
            pieces: [None; NUM_PIECES_SIDE],
            index: [None; BOARD_TILES],
        }
    }

    /// Scan the board and rebuild the per-piece table for `side`, with a
    /// square-to-slot index for quick neighbour lookups.
    fn init_piece_data(&mut self, state: &GameState, side: Color) {
        self.index = [None; BOARD_TILES];
        self.pieces = [None; NUM_PIECES_SIDE];

        let mut slot = 0;
        for square in 0..BOARD_TILES as Square {
            let Some(piece) = state.board.piece_at(square) else {
                continue;
            };
            if piece.color != side || slot >= NUM_PIECES_SIDE {
                continue;
            }
            self.index[square as usize] = Some(slot as u8);
            self.pieces[slot] = Some(PieceScore {
                kind: piece.kind,
                source: square,
                dest: None,
                score: 0,
            });
            slot += 1;
        }
    }

    /// Board-wide nudges that individual move scoring cannot see: free a
    /// boxed-in king by encouraging its unthreatened neighbours to move,
    /// and pull pawns forward when the square ahead looks safe.
    fn holistic_score(&mut self, state: &GameState, side: Color) {
        let other = side.opposite();
        let king_square = state.board.king_square(side);

        if state.generate_moves(king_square, false).is_empty() {
            for offset in NEIGHBOURS {
                let neighbour = king_square as i16 + offset;
                if !(0..BOARD_TILES as i16).contains(&neighbour) {
                    continue;
                }
                let neighbour = neighbour as Square;
                let Some(slot) = self.index[neighbour as usize] else {
                    continue;
                };
                let slot = slot as usize;
                let attackers = state.attacks.count(neighbour, other);
                if attackers == 0 {
                    if let Some(ps) = self.pieces[slot].as_mut() {
                        ps.score = 4;
                    }
                } else if attackers == 1 {
                    let head_on = {
                        let attacker = state.attacks.attackers(neighbour, other).as_slice()[0];
                        col_of(attacker) == col_of(neighbour)
                    };
                    if let Some(ps) = self.pieces[slot].as_mut() {
                        // A pawn attacked head-on is actually safe; nudge it
                        // to step out of the king's way.
                        if ps.kind == PieceKind::Pawn && head_on {
                            ps.score = 4;
                        }
                    }
                }
            }
        }

        for slot in 0..NUM_PIECES_SIDE {
            let Some(ps) = self.pieces[slot] else {
                continue;
            };
            if ps.kind != PieceKind::Pawn {
                continue;
            }
            let ahead = ps.source as i16 + side.forward() as i16 * 8;
            if !(0..BOARD_TILES as i16).contains(&ahead) {
                continue;
            }
            let ahead = ahead as Square;
            if self.index[ahead as usize].is_some() {
                continue;
            }
            let attackers = state.attacks.count(ahead, other);
            let defenders = state.attacks.count(ahead, side);
            if attackers == 0 || attackers < defenders {
                let mut progress = row_of(ahead) as i32;
                if side == Color::White {
                    progress = 7 - progress;
                }
                if let Some(ps) = self.pieces[slot].as_mut() {
                    ps.score += progress;
                }
            }
        }
    }

    /// For every piece of the side to move, rank its destinations by static
    /// score and keep the best one the move executor accepts.
    fn score_piece_moves(&mut self, state: &mut GameState) {
        for slot in 0..NUM_PIECES_SIDE {
            let Some(ps) = self.pieces[slot] else {
                break;
            };

            let moves = state.generate_moves(ps.source, false);
            if moves.is_empty() {
                continue;
            }

            let base = source_score(state, ps.source);
            let mut ranked = [ScoredMove::VACANT; MAX_PIECE_MOVES];
            for &dest in moves.as_slice() {
                let score = base + dest_score(state, ps.source, dest);
                add_score_sorted(&mut ranked, Some(ps.source), Some(dest), score);
            }

            if let Some(j) = first_valid(state, &ranked) {
                if let Some(ps) = self.pieces[slot].as_mut() {
                    ps.dest = ranked[j].dest;
                    ps.score += ranked[j].score;
                }
            }
        }
    }

    /// Best statically ranked reply for `side`, as (score, move). With
    /// `deep_thoughts` the candidates are validated and the first playable
    /// one wins; a side with nothing playable is a dead end.
    fn find_best_opponent_move(
        &self,
        state: &mut GameState,
        side: Color,
    ) -> (i32, Option<(Square, Square)>) {
        let mut ranked = [ScoredMove::VACANT; MAX_PIECE_MOVES];

        for square in 0..BOARD_TILES as Square {
            let Some(piece) = state.board.piece_at(square) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            let moves = state.generate_moves(square, false);
            if moves.is_empty() {
                continue;
            }
            let base = source_score(state, square);
            for &dest in moves.as_slice() {
                let score = base + dest_score(state, square, dest);
                add_score_sorted(&mut ranked, Some(square), Some(dest), score);
            }
        }

        let j = if self.params.deep_thoughts {
            match first_valid(state, &ranked) {
                Some(j) => j,
                None => return (DEAD_END_SCORE, None),
            }
        } else {
            0
        };

        match (ranked[j].source, ranked[j].dest) {
            (Some(src), Some(dst)) => (ranked[j].score, Some((src, dst))),
            _ => (DEAD_END_SCORE, None),
        }
    }

    /// Estimate the longer-term impact of playing `src -> dst`: make the
    /// move on the real board, score the opponent's likely reply, recurse
    /// down the predicted line, then restore everything that was touched.
    /// `sign` alternates so the opponent's gains count against us.
    fn score_piece_subtree(
        &self,
        state: &mut GameState,
        level: u8,
        side: Color,
        sign: i32,
        src: Square,
        dst: Square,
    ) -> i32 {
        let Some(mover) = state.board.piece_at(src) else {
            return 0;
        };
        let target = state.board.piece_at(dst);
        if matches!(target, Some(t) if t.kind == PieceKind::King) {
            // Taking the king ends the line outright.
            return piece_value(PieceKind::King);
        }

        let mut landed = mover;
        landed.moved = true;
        state.board.set(src, None);
        state.board.set(dst, Some(landed));
        if mover.kind == PieceKind::King {
            state.board.set_king_square(mover.color, dst);
        }

        let saved_en_passant = state.en_passant;
        state.en_passant = None;
        if !mover.moved && mover.kind == PieceKind::Pawn {
            state.arm_en_passant_for_double(src, dst);
        }

        if self.params.deep_thoughts {
            state.rebuild_attacks();
        }

        let other = side.opposite();
        let (reply_score, reply) = self.find_best_opponent_move(state, other);
        let score = match reply {
            Some((from, to)) if reply_score > DEAD_END_SCORE => {
                let mut score = reply_score * sign;
                if level < self.params.max_level {
                    score += self.score_piece_subtree(state, level + 1, other, -sign, from, to);
                }
                score
            }
            _ => DEAD_END_SCORE * sign,
        };

        state.board.set(src, Some(mover));
        state.board.set(dst, target);
        if mover.kind == PieceKind::King {
            state.board.set_king_square(mover.color, src);
        }
        state.en_passant = saved_en_passant;

        score
    }

    /// No playable move: the game ended one move ago without anyone
    /// noticing. Relabel the opponent's last committed move as the one
    /// that caused stalemate by taking it back and replaying it with the
    /// corrected outcome.
    fn declare_stalemate(&self, state: &mut GameState) -> Outcome {
        if let Some(entry) = state.find_undo_line(0) {
            if entry.outcome == Outcome::Ok {
                state.undo();
                if let Some(moving) = state.board.piece_at(entry.from) {
                    let mut ctx = MoveContext::new(
                        entry.from,
                        entry.to,
                        moving,
                        state.board.piece_at(entry.to),
                    );
                    ctx.promotion = entry.landed;
                    if process_action(state, &mut ctx) != Outcome::Invalid {
                        state.push_undo(&ctx, Outcome::Stalemate);
                    }
                }
            }
        }
        Outcome::Stalemate
    }
}

impl Engine for HeuristicEngine {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn play(&mut self, state: &mut GameState, side: Color) -> Outcome {
        self.init_piece_data(state, side);
        self.holistic_score(state, side);
        self.score_piece_moves(state);

        let mut ranked = [ScoredMove::VACANT; NUM_PIECES_SIDE];
        for slot in 0..NUM_PIECES_SIDE {
            if let Some(ps) = self.pieces[slot] {
                add_score_sorted(&mut ranked, Some(ps.source), ps.dest, ps.score);
            }
        }

        let mut best = 0;
        let mut best_score = i32::MIN;
        for i in 0..self.params.width.min(NUM_PIECES_SIDE) {
            let (Some(src), Some(dst)) = (ranked[i].source, ranked[i].dest) else {
                continue;
            };
            ranked[i].score += self.score_piece_subtree(state, 0, side, -1, src, dst);
            if ranked[i].score >= best_score {
                best = i;
                best_score = ranked[i].score;
            }
        }

        // The subtrees rebuild the database at speculative positions; bring
        // it back in line with the real board before committing.
        if self.params.deep_thoughts {
            state.rebuild_attacks();
        }

        let (Some(src), Some(dst)) = (ranked[best].source, ranked[best].dest) else {
            return self.declare_stalemate(state);
        };
        let Some(mut ctx) = state.context(src, dst) else {
            return Outcome::Stalemate;
        };
        commit_move(state, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_insertion_keeps_best_first_and_ties_ahead() {
        let mut array = [ScoredMove::VACANT; 4];
        add_score_sorted(&mut array, Some(10), Some(20), 5);
        add_score_sorted(&mut array, Some(11), Some(21), 3);
        add_score_sorted(&mut array, Some(12), Some(22), 7);
        // An equal score is inserted ahead of the existing entry.
        add_score_sorted(&mut array, Some(13), Some(23), 7);

        let sources: Vec<_> = array.iter().map(|s| s.source).collect();
        assert_eq!(sources, vec![Some(13), Some(12), Some(10), Some(11)]);
    }

    #[test]
    fn sorted_insertion_ignores_missing_destinations() {
        let mut array = [ScoredMove::VACANT; 2];
        add_score_sorted(&mut array, Some(1), None, 100);
        assert!(array[0].dest.is_none());
    }

    #[test]
    fn very_easy_engine_plays_a_legal_opening_move() {
        let mut state = GameState::new_game();
        let mut engine = HeuristicEngine::new(Skill::VeryEasy);

        let outcome = engine.play(&mut state, Color::White);
        assert!(outcome >= Outcome::Ok && outcome < Outcome::Stalemate);
        let entry = state.find_undo_line(0).unwrap();
        assert_eq!(entry.mover_color, Color::White);

        // The committed state is internally consistent.
        let mut rebuilt = state.clone();
        rebuilt.rebuild_attacks();
        assert_eq!(state.attacks, rebuilt.attacks);
    }

    #[test]
    fn deep_engine_leaves_a_consistent_state_behind() {
        let mut state = GameState::new_game();
        let mut engine = HeuristicEngine::new(Skill::Harder);

        assert!(engine.play(&mut state, Color::White) >= Outcome::Ok);
        assert!(engine.play(&mut state, Color::Black) >= Outcome::Ok);

        let mut rebuilt = state.clone();
        rebuilt.rebuild_attacks();
        assert_eq!(state.attacks, rebuilt.attacks);
        // Exactly the two committed moves are in the log.
        assert!(state.find_undo_line(1).is_some());
        assert!(state.find_undo_line(2).is_none());
    }

    #[test]
    fn search_probes_do_not_disturb_the_board() {
        let mut state = GameState::new_game();
        let before = state.board.clone();
        let engine = HeuristicEngine::new(Skill::VeryHard);

        let (_score, reply) = engine.find_best_opponent_move(&mut state, Color::White);
        assert!(reply.is_some());
        assert_eq!(state.board, before);
        assert!(!state.can_undo());
    }

    #[test]
    fn stalemate_is_relabelled_onto_the_move_that_caused_it() {
        let mut state = GameState::empty();
        state.board.place(0, Piece::new(PieceKind::King, Color::Black));
        state.board.place(63, Piece::new(PieceKind::King, Color::White));
        let mut queen = Piece::new(PieceKind::Queen, Color::White);
        queen.moved = true;
        state.board.place(18, queen);
        state.rebuild_attacks();

        // White boxes in the bare king; committed as a quiet move.
        let mut ctx = state.context(18, 10).unwrap();
        assert_eq!(commit_move(&mut state, &mut ctx), Outcome::Ok);

        let mut engine = HeuristicEngine::new(Skill::Easy);
        assert_eq!(engine.play(&mut state, Color::Black), Outcome::Stalemate);

        // The queen move is still the top log entry, now labelled stalemate.
        let entry = state.find_undo_line(0).unwrap();
        assert_eq!((entry.from, entry.to), (18, 10));
        assert_eq!(entry.outcome, Outcome::Stalemate);
        assert_eq!(
            state.board.piece_at(10).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn engine_prefers_capturing_a_hanging_queen() {
        let mut state = GameState::empty();
        state.board.place(4, Piece::new(PieceKind::King, Color::Black));
        state.board.place(60, Piece::new(PieceKind::King, Color::White));
        state.board.place(35, Piece::new(PieceKind::Rook, Color::White));
        // Undefended black queen on the rook's file.
        state.board.place(3, Piece::new(PieceKind::Queen, Color::Black));
        state.rebuild_attacks();

        let mut engine = HeuristicEngine::new(Skill::VeryEasy);
        let outcome = engine.play(&mut state, Color::White);
        assert!(outcome >= Outcome::Ok);
        let entry = state.find_undo_line(0).unwrap();
        assert_eq!((entry.from, entry.to), (35, 3));
        assert_eq!(entry.taken.map(|p| p.kind), Some(PieceKind::Queen));
    }
}
