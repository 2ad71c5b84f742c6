//! Check versus checkmate classification for a king already under attack.
//!
//! The detector briefly augments the attack database so it answers
//! mate-relevant questions: the checked king is lifted so sliding attacks
//! extend through its square, the checked side's pawns register their
//! forward (non-capturing) squares as potential blocks, and the direct
//! attackers' reach is recomputed without the king in the way. Every
//! augmentation is logged and unwound before returning, so the database the
//! caller sees is exactly the one it passed in.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_moves;

/// Decide whether `side`'s attacked king is merely in check or checkmated.
///
/// Callers must have established that the king is attacked; the answer is
/// `Check` or `Checkmate`, never `Ok`.
pub fn check_for_mate(state: &mut GameState, side: Color) -> Outcome {
    let mut fixups: Vec<(Square, Color)> = Vec::with_capacity(32);
    update_attack_grid(state, side, &mut fixups);
    let result = classify(state, side);
    while let Some((square, fixed_side)) = fixups.pop() {
        state.attacks.pop_attacker(square, fixed_side);
    }
    result
}

/// Augment the attack database for mate analysis. Every list pushed onto is
/// recorded in `fixups`, newest last.
fn update_attack_grid(state: &mut GameState, side: Color, fixups: &mut Vec<(Square, Color)>) {
    let other = side.opposite();
    let king_square = state.board.king_square(side);
    let direct = *state.attacks.attackers(king_square, other);

    let king_piece = state.board.piece_at(king_square);
    state.board.set(king_square, None);

    for square in 0..BOARD_TILES as Square {
        let Some(piece) = state.board.piece_at(square) else {
            continue;
        };

        if piece.color == side {
            // The checked side's pawns may block by advancing, which the
            // capture-oriented attack lists do not record.
            if piece.kind != PieceKind::Pawn {
                continue;
            }
            let step = piece.color.forward() as i16 * 8;
            let ahead = square as i16 + step;
            if !(0..BOARD_TILES as i16).contains(&ahead) {
                continue;
            }
            let ahead = ahead as Square;
            if state.board.piece_at(ahead).is_some() {
                continue;
            }
            state.attacks.push_attacker(ahead, side, square);
            fixups.push((ahead, side));
            if !piece.moved {
                let two_ahead = ahead as i16 + step;
                if (0..BOARD_TILES as i16).contains(&two_ahead) {
                    let two_ahead = two_ahead as Square;
                    if state.board.piece_at(two_ahead).is_none() {
                        state.attacks.push_attacker(two_ahead, side, square);
                        fixups.push((two_ahead, side));
                    }
                }
            }
        } else if piece.kind != PieceKind::Knight && direct.contains(square) {
            // Sliding attackers see through the lifted king; extend their
            // recorded reach to the squares behind it.
            let reach = generate_moves(&state.board, state.en_passant, square, true);
            for &dest in reach.as_slice() {
                if !state.attacks.attackers(dest, other).contains(square) {
                    state.attacks.push_attacker(dest, other, square);
                    fixups.push((dest, other));
                }
            }
        }
    }

    state.board.set(king_square, king_piece);
}

fn classify(state: &GameState, side: Color) -> Outcome {
    let other = side.opposite();
    let king_square = state.board.king_square(side);

    // Any destination the opponent does not cover is an escape.
    let escapes = generate_moves(&state.board, state.en_passant, king_square, false);
    for &dest in escapes.as_slice() {
        if !state.attacks.is_attacked(dest, other) {
            return Outcome::Check;
        }
    }

    let attackers = *state.attacks.attackers(king_square, other);
    if attackers.len() > 1 {
        // Double check with no escape square.
        return Outcome::Checkmate;
    }
    let attacker_square = attackers.as_slice()[0];

    if matches!(
        state.board.piece_at(attacker_square),
        Some(p) if p.kind == PieceKind::Knight
    ) {
        // A knight check cannot be blocked; only capturing it helps.
        return if state.attacks.is_attacked(attacker_square, side) {
            Outcome::Check
        } else {
            Outcome::Checkmate
        };
    }

    check_line_attack(state, attacker_square, king_square, side)
}

/// Walk the checking line from the attacker toward the king, asking at each
/// square (the attacker's own included, the king's excluded) whether any of
/// the checked side's pieces can interpose or capture there.
fn check_line_attack(state: &GameState, attacker: Square, king: Square, side: Color) -> Outcome {
    let mut x1 = col_of(attacker) as i16;
    let mut y1 = row_of(attacker) as i16;
    let x2 = col_of(king) as i16;
    let y2 = row_of(king) as i16;

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut tile = attacker;
    while x1 != x2 || y1 != y2 {
        let occupied = state.board.piece_at(tile).is_some();
        let defenders = *state.attacks.attackers(tile, side);
        for &def_square in defenders.as_slice() {
            let Some(defender) = state.board.piece_at(def_square) else {
                continue;
            };
            match defender.kind {
                // The king cannot resolve its own check by moving here; the
                // escape scan already judged its squares.
                PieceKind::King => {}
                PieceKind::Pawn => {
                    let ahead = def_square as i16 + 8;
                    let behind = def_square as i16 - 8;
                    let here = tile as i16;
                    // A pawn blocks an empty square only straight ahead and
                    // captures the attacker only diagonally.
                    let helps = if occupied {
                        ahead != here && behind != here
                    } else {
                        ahead == here || behind == here
                    };
                    if helps {
                        return Outcome::Check;
                    }
                }
                _ => return Outcome::Check,
            }
        }

        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
        tile = square_at(y1 as u8, x1 as u8);
    }

    Outcome::Checkmate
}
