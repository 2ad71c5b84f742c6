//! King destinations: the eight adjacent squares plus castling candidates.
//!
//! Castling is probed, not table-driven: when the king and the relevant
//! corner rook both show unmoved, the squares between them are scanned with
//! the shared slide at a tight step limit, and the two-square hop is offered
//! only when every intervening square came back open.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_list::MoveList;
use crate::moves::slide::slide;

fn is_unmoved(board: &Board, square: Square, kind: PieceKind) -> bool {
    matches!(board.piece_at(square), Some(p) if p.kind == kind && !p.moved)
}

pub fn king_moves(board: &Board, square: Square, defense: bool, out: &mut MoveList) {
    let y = row_of(square);
    let x = col_of(square);
    let mut okay_to_castle = [false, false];

    if is_unmoved(board, square, PieceKind::King) {
        // Queenside needs three open squares toward the a-file rook.
        if square >= 4 && is_unmoved(board, square - 4, PieceKind::Rook) {
            let mut probe = MoveList::new();
            slide(board, x, y, -1, 0, 3, defense, &mut probe);
            okay_to_castle[0] = probe.len() == 3;
        }
        // Kingside only needs two.
        if square + 3 < BOARD_TILES as Square && is_unmoved(board, square + 3, PieceKind::Rook) {
            let mut probe = MoveList::new();
            slide(board, x, y, 1, 0, 2, defense, &mut probe);
            okay_to_castle[1] = probe.len() == 2;
        }
    }

    if okay_to_castle[0] {
        slide(board, x, y, -2, 0, 1, defense, out);
    }
    if okay_to_castle[1] {
        slide(board, x, y, 2, 0, 1, defense, out);
    }

    slide(board, x, y, -1, 0, 1, defense, out);
    slide(board, x, y, -1, -1, 1, defense, out);
    slide(board, x, y, 0, -1, 1, defense, out);
    slide(board, x, y, 1, -1, 1, defense, out);
    slide(board, x, y, 1, 0, 1, defense, out);
    slide(board, x, y, 1, 1, 1, defense, out);
    slide(board, x, y, 0, 1, 1, defense, out);
    slide(board, x, y, -1, 1, 1, defense, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_king_board() -> Board {
        let mut board = Board::empty();
        board.place(60, Piece::new(PieceKind::King, Color::White));
        board
    }

    #[test]
    fn king_in_center_has_eight_targets() {
        let mut board = Board::empty();
        board.place(27, Piece::new(PieceKind::King, Color::White));
        let mut out = MoveList::new();
        king_moves(&board, 27, false, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn both_castle_hops_offered_with_clear_ranks_and_unmoved_rooks() {
        let mut board = bare_king_board();
        board.place(56, Piece::new(PieceKind::Rook, Color::White));
        board.place(63, Piece::new(PieceKind::Rook, Color::White));
        let mut out = MoveList::new();
        king_moves(&board, 60, false, &mut out);
        assert!(out.contains(58));
        assert!(out.contains(62));
    }

    #[test]
    fn castle_not_offered_once_the_rook_has_moved() {
        let mut board = bare_king_board();
        board.place(56, Piece::new(PieceKind::Rook, Color::White));
        let mut moved_rook = Piece::new(PieceKind::Rook, Color::White);
        moved_rook.moved = true;
        board.place(63, moved_rook);

        let mut out = MoveList::new();
        king_moves(&board, 60, false, &mut out);
        assert!(out.contains(58));
        assert!(!out.contains(62));
    }

    #[test]
    fn castle_not_offered_once_the_king_has_moved() {
        let mut board = Board::empty();
        let mut moved_king = Piece::new(PieceKind::King, Color::White);
        moved_king.moved = true;
        board.place(60, moved_king);
        board.place(56, Piece::new(PieceKind::Rook, Color::White));
        board.place(63, Piece::new(PieceKind::Rook, Color::White));

        let mut out = MoveList::new();
        king_moves(&board, 60, false, &mut out);
        assert!(!out.contains(58));
        assert!(!out.contains(62));
    }

    #[test]
    fn castle_blocked_by_an_intervening_piece() {
        let mut board = bare_king_board();
        board.place(56, Piece::new(PieceKind::Rook, Color::White));
        board.place(57, Piece::new(PieceKind::Knight, Color::White));
        board.place(63, Piece::new(PieceKind::Rook, Color::White));

        let mut out = MoveList::new();
        king_moves(&board, 60, false, &mut out);
        assert!(!out.contains(58));
        assert!(out.contains(62));
    }
}
