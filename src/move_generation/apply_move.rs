//! The move executor: applies a proposed move, validates it against the
//! rebuilt attack database, and rolls it back in place when it would leave
//! the mover's king attacked.
//!
//! Validation is apply-then-test rather than predictive: the move lands on
//! the board, the attack database is rebuilt, and only then is the king's
//! square inspected. A rejected move is reversed cell by cell, including any
//! castling rook, en-passant victim, or promotion, before `Invalid` is
//! returned, so the caller's state is untouched either way.

use crate::game_state::chess_rules::{CASTLE_LANDING, MOVES_TO_DRAW};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::checkmate::check_for_mate;

/// Move the castling rook alongside a king hop onto a castle landing
/// square. No-op unless `ctx` describes an unmoved king arriving on one of
/// its two landing squares. With `revert` set the rook is moved back and
/// its has-moved flag cleared. Fills `ctx.aux` with the rook's from/to.
pub(crate) fn process_castling(state: &mut GameState, ctx: &mut MoveContext, revert: bool) {
    ctx.aux = [None, None];
    if ctx.moving.moved {
        return;
    }

    let landing = CASTLE_LANDING[ctx.moving.color.index()];
    let (rook_from, rook_to) = if ctx.to == landing[0] {
        (ctx.to - 2, ctx.to + 1)
    } else if ctx.to == landing[1] {
        (ctx.to + 1, ctx.to - 1)
    } else {
        return;
    };
    ctx.aux = [Some(rook_from), Some(rook_to)];

    let (src, dst, moved) = if revert {
        (rook_to, rook_from, false)
    } else {
        (rook_from, rook_to, true)
    };
    if let Some(mut rook) = state.board.piece_at(src) {
        rook.moved = moved;
        state.board.set(dst, Some(rook));
        state.board.set(src, None);
    }
}

#[inline]
fn en_passant_victim(ctx: &MoveContext) -> Square {
    // The captured pawn stands beside the capturer, on the capturer's rank.
    if col_of(ctx.from) < col_of(ctx.to) {
        ctx.from + 1
    } else {
        ctx.from - 1
    }
}

/// Remove the pawn captured en passant and record it in `ctx.aux`.
pub(crate) fn take_en_passant(state: &mut GameState, ctx: &mut MoveContext) {
    let victim = en_passant_victim(ctx);
    ctx.aux = [Some(victim), None];
    state.board.set(victim, None);
}

/// Put an en-passant victim back and re-arm the target it was taken on.
pub(crate) fn untake_en_passant(state: &mut GameState, ctx: &mut MoveContext) {
    let victim = en_passant_victim(ctx);
    ctx.aux = [Some(victim), None];
    let mut pawn = Piece::new(PieceKind::Pawn, ctx.moving.color.opposite());
    pawn.moved = true;
    state.board.set(victim, Some(pawn));
    state.en_passant = Some(ctx.to);
}

/// Apply and validate one proposed move.
///
/// Returns `Invalid` (state untouched), `Ok`, or the opponent's status from
/// the mate detector when the move gives check. Does not touch the undo log
/// or the fifty-move counter; [`commit_move`] layers those on top.
pub fn process_action(state: &mut GameState, ctx: &mut MoveContext) -> Outcome {
    let color = ctx.moving.color;
    let other = color.opposite();
    ctx.aux = [None, None];

    // A king may never step onto a square the opponent already covers.
    if ctx.moving.kind == PieceKind::King && state.attacks.is_attacked(ctx.to, other) {
        return Outcome::Invalid;
    }

    let ep_capture = ctx.moving.kind == PieceKind::Pawn && state.en_passant == Some(ctx.to);
    let promotes = ctx.moving.kind == PieceKind::Pawn && (ctx.to < 8 || ctx.to > 55);

    if ctx.moving.kind == PieceKind::King {
        process_castling(state, ctx, false);
    } else if ep_capture {
        take_en_passant(state, ctx);
    } else if promotes {
        // Promote at the source so the ordinary cell move below carries the
        // new kind to the destination.
        if let Some(mut pawn) = state.board.piece_at(ctx.from) {
            pawn.kind = ctx.promotion;
            state.board.set(ctx.from, Some(pawn));
        }
    }

    state.board.set(ctx.to, state.board.piece_at(ctx.from));
    state.board.set(ctx.from, None);
    state.rebuild_attacks();

    let king_square = if ctx.moving.kind == PieceKind::King {
        ctx.to
    } else {
        state.board.king_square(color)
    };

    if state.attacks.is_attacked(king_square, other) {
        // The move leaves (or puts) our king in check. Reverse everything.
        state.board.set(ctx.from, state.board.piece_at(ctx.to));
        state.board.set(ctx.to, ctx.taken);

        if ep_capture {
            if let Some(victim) = ctx.aux[0] {
                let mut pawn = Piece::new(PieceKind::Pawn, other);
                pawn.moved = true;
                state.board.set(victim, Some(pawn));
            }
            ctx.aux = [None, None];
        } else if promotes {
            if let Some(mut pawn) = state.board.piece_at(ctx.from) {
                pawn.kind = PieceKind::Pawn;
                state.board.set(ctx.from, Some(pawn));
            }
        } else if ctx.moving.kind == PieceKind::King {
            process_castling(state, ctx, true);
        }

        state.rebuild_attacks();
        return Outcome::Invalid;
    }

    state.en_passant = None;
    if ctx.moving.kind == PieceKind::Pawn {
        if !ctx.moving.moved {
            state.arm_en_passant_for_double(ctx.from, ctx.to);
        }
    } else if ctx.moving.kind == PieceKind::King {
        state.board.set_king_square(color, ctx.to);
    }
    state.board.mark_moved(ctx.to);

    if state.attacks.is_attacked(state.board.king_square(other), color) {
        check_for_mate(state, other)
    } else {
        Outcome::Ok
    }
}

/// [`process_action`] plus bookkeeping: advances or resets the fifty-move
/// counter and records the move in the undo log. The committed outcome
/// becomes `Draw` when the counter reaches the limit.
pub fn commit_move(state: &mut GameState, ctx: &mut MoveContext) -> Outcome {
    let mut outcome = process_action(state, ctx);
    if outcome == Outcome::Invalid {
        return outcome;
    }

    let captured = ctx.taken.is_some() || (ctx.aux[0].is_some() && ctx.aux[1].is_none());
    if captured {
        state.move_counter = 0;
    } else {
        // Saturating: callers may keep committing quiet moves after the
        // draw has been reported.
        state.move_counter = state.move_counter.saturating_add(1);
        if state.move_counter == MOVES_TO_DRAW {
            outcome = Outcome::Draw;
        }
    }

    state.push_undo(ctx, outcome);
    outcome
}
