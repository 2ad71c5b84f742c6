//! Shared directional scan used by every straight-moving generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_list::MoveList;

/// Walk from `(x, y)` in direction `(dx, dy)` for at most `limit` steps,
/// appending reachable squares to `out`.
///
/// The scan stops at the board edge or at the first occupied square. That
/// square is itself included when it holds an enemy piece, or always in
/// defense-inclusive mode (where moves onto friendly pieces count as
/// protection).
pub fn slide(
    board: &Board,
    x: u8,
    y: u8,
    dx: i8,
    dy: i8,
    limit: u8,
    defense: bool,
    out: &mut MoveList,
) {
    let my_color = board.piece_at(square_at(y, x)).map(|p| p.color);
    let mut x = x as i8;
    let mut y = y as i8;
    let mut remaining = limit;

    while remaining > 0 {
        x += dx;
        y += dy;
        remaining -= 1;

        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            break;
        }

        let square = square_at(y as u8, x as u8);
        match board.piece_at(square) {
            None => out.push(square),
            Some(piece) => {
                if defense || Some(piece.color) != my_color {
                    out.push(square);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn scan_stops_at_board_edge() {
        let mut board = Board::empty();
        board.place(square_at(4, 6), Piece::new(PieceKind::Rook, Color::White));
        let mut out = MoveList::new();
        slide(&board, 6, 4, 1, 0, 8, false, &mut out);
        assert_eq!(out.as_slice(), &[square_at(4, 7)]);
    }

    #[test]
    fn enemy_blocker_is_included_and_ends_scan() {
        let mut board = Board::empty();
        board.place(square_at(4, 0), Piece::new(PieceKind::Rook, Color::White));
        board.place(square_at(4, 3), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(square_at(4, 5), Piece::new(PieceKind::Pawn, Color::Black));
        let mut out = MoveList::new();
        slide(&board, 0, 4, 1, 0, 8, false, &mut out);
        assert_eq!(
            out.as_slice(),
            &[square_at(4, 1), square_at(4, 2), square_at(4, 3)]
        );
    }

    #[test]
    fn friendly_blocker_is_included_only_in_defense_mode() {
        let mut board = Board::empty();
        board.place(square_at(4, 0), Piece::new(PieceKind::Rook, Color::White));
        board.place(square_at(4, 2), Piece::new(PieceKind::Knight, Color::White));

        let mut legal = MoveList::new();
        slide(&board, 0, 4, 1, 0, 8, false, &mut legal);
        assert_eq!(legal.as_slice(), &[square_at(4, 1)]);

        let mut defense = MoveList::new();
        slide(&board, 0, 4, 1, 0, 8, true, &mut defense);
        assert_eq!(defense.as_slice(), &[square_at(4, 1), square_at(4, 2)]);
    }

    #[test]
    fn step_limit_bounds_the_walk() {
        let mut board = Board::empty();
        board.place(square_at(7, 4), Piece::new(PieceKind::King, Color::White));
        let mut out = MoveList::new();
        slide(&board, 4, 7, -1, 0, 2, false, &mut out);
        assert_eq!(out.as_slice(), &[square_at(7, 3), square_at(7, 2)]);
    }
}
