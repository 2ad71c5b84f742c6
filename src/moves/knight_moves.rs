//! Knight destinations: the eight fixed offsets, each a single bounded step.
//!
//! Bounds are explicit coordinate range checks inside the shared scan; no
//! reliance on unsigned wrap-around to reject off-board hops.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_list::MoveList;
use crate::moves::slide::slide;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub fn knight_moves(board: &Board, square: Square, defense: bool, out: &mut MoveList) {
    let y = row_of(square);
    let x = col_of(square);

    for &(dx, dy) in KNIGHT_OFFSETS.iter() {
        slide(board, x, y, dx, dy, 1, defense, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_center_has_eight_targets() {
        let mut board = Board::empty();
        board.place(27, Piece::new(PieceKind::Knight, Color::White));
        let mut out = MoveList::new();
        knight_moves(&board, 27, false, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut board = Board::empty();
        board.place(0, Piece::new(PieceKind::Knight, Color::Black));
        let mut out = MoveList::new();
        knight_moves(&board, 0, false, &mut out);
        let mut targets = out.as_slice().to_vec();
        targets.sort_unstable();
        assert_eq!(targets, vec![10, 17]);
    }

    #[test]
    fn knight_on_edge_never_wraps_to_the_far_file() {
        let mut board = Board::empty();
        // a4; a wrapped offset would land on the h-file.
        board.place(square_at(4, 0), Piece::new(PieceKind::Knight, Color::White));
        let mut out = MoveList::new();
        knight_moves(&board, square_at(4, 0), false, &mut out);
        assert_eq!(out.len(), 4);
        for &sq in out.as_slice() {
            assert!(col_of(sq) <= 2);
        }
    }
}
