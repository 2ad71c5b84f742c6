//! Bishop destinations: the four diagonal scans.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_list::MoveList;
use crate::moves::slide::slide;

pub fn bishop_moves(board: &Board, square: Square, defense: bool, out: &mut MoveList) {
    let y = row_of(square);
    let x = col_of(square);

    slide(board, x, y, -1, -1, 8, defense, out);
    slide(board, x, y, 1, -1, 8, defense, out);
    slide(board, x, y, 1, 1, 8, defense, out);
    slide(board, x, y, -1, 1, 8, defense, out);
}
