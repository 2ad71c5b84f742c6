//! Dispatch to the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_list::MoveList;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations reachable by the piece on `square`, if any.
///
/// With `defense` set, the list also includes squares the piece merely
/// covers: friendly-occupied destinations and pawn diagonal threats. That
/// mode feeds the attack database rather than a legal-move picker.
pub fn generate_moves(
    board: &Board,
    en_passant: Option<Square>,
    square: Square,
    defense: bool,
) -> MoveList {
    let mut out = MoveList::new();

    let piece = match board.piece_at(square) {
        Some(p) => p,
        None => return out,
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, en_passant, square, defense, &mut out),
        PieceKind::Rook => rook_moves(board, square, defense, &mut out),
        PieceKind::Knight => knight_moves(board, square, defense, &mut out),
        PieceKind::Bishop => bishop_moves(board, square, defense, &mut out),
        PieceKind::King => king_moves(board, square, defense, &mut out),
        PieceKind::Queen => queen_moves(board, square, defense, &mut out),
    }

    out
}
