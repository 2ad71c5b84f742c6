//! Pawn destinations: forward advances, diagonal captures, and the
//! en-passant target square.
//!
//! In defense-inclusive mode the forward squares are skipped (a pawn cannot
//! capture straight ahead, so it does not defend that square) while both
//! diagonals are always counted. When a diagonal equals the current
//! en-passant target, a synthetic enemy pawn is assumed to stand there even
//! though the capturable pawn actually sits on the adjacent square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_list::MoveList;

pub fn pawn_moves(
    board: &Board,
    en_passant: Option<Square>,
    square: Square,
    defense: bool,
    out: &mut MoveList,
) {
    let piece = match board.piece_at(square) {
        Some(p) => p,
        None => return,
    };
    let y = row_of(square) as i8;
    let x = col_of(square) as i8;
    let d = piece.color.forward();

    // A pawn can never stand on either back rank mid-game.
    if y == 0 || y == 7 {
        return;
    }

    let ahead = square_at((y + d) as u8, x as u8);
    if !defense && board.piece_at(ahead).is_none() {
        out.push(ahead);
        let start_rank = match piece.color {
            Color::White => 6,
            Color::Black => 1,
        };
        if y == start_rank {
            let two_ahead = square_at((y + 2 * d) as u8, x as u8);
            if board.piece_at(two_ahead).is_none() {
                out.push(two_ahead);
            }
        }
    }

    for dx in [-1i8, 1] {
        let nx = x + dx;
        if !(0..8).contains(&nx) {
            continue;
        }
        let target = square_at((y + d) as u8, nx as u8);

        let holds_enemy = if en_passant == Some(target) {
            true
        } else {
            matches!(board.piece_at(target), Some(p) if p.color != piece.color)
        };

        if defense || holds_enemy {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmoved_pawn_offers_single_and_double_advance() {
        let mut board = Board::empty();
        board.place(52, Piece::new(PieceKind::Pawn, Color::White));
        let mut out = MoveList::new();
        pawn_moves(&board, None, 52, false, &mut out);
        assert_eq!(out.as_slice(), &[44, 36]);
    }

    #[test]
    fn double_advance_requires_both_squares_open() {
        let mut board = Board::empty();
        board.place(52, Piece::new(PieceKind::Pawn, Color::White));
        board.place(36, Piece::new(PieceKind::Knight, Color::Black));
        let mut out = MoveList::new();
        pawn_moves(&board, None, 52, false, &mut out);
        assert_eq!(out.as_slice(), &[44]);
    }

    #[test]
    fn diagonal_added_only_against_enemy_pieces() {
        let mut board = Board::empty();
        board.place(36, Piece::new(PieceKind::Pawn, Color::White));
        board.place(27, Piece::new(PieceKind::Pawn, Color::Black));
        board.place(29, Piece::new(PieceKind::Pawn, Color::White));
        let mut out = MoveList::new();
        pawn_moves(&board, None, 36, false, &mut out);
        assert!(out.contains(27));
        assert!(!out.contains(29));
        assert!(out.contains(28));
    }

    #[test]
    fn defense_mode_skips_forward_and_counts_both_diagonals() {
        let mut board = Board::empty();
        board.place(36, Piece::new(PieceKind::Pawn, Color::White));
        let mut out = MoveList::new();
        pawn_moves(&board, None, 36, true, &mut out);
        let mut targets = out.as_slice().to_vec();
        targets.sort_unstable();
        assert_eq!(targets, vec![27, 29]);
    }

    #[test]
    fn en_passant_target_counts_as_capturable() {
        let mut board = Board::empty();
        board.place(28, Piece::new(PieceKind::Pawn, Color::White));
        board.place(27, Piece::new(PieceKind::Pawn, Color::Black));
        let mut out = MoveList::new();
        pawn_moves(&board, Some(19), 28, false, &mut out);
        assert!(out.contains(19));
    }

    #[test]
    fn edge_file_pawn_keeps_one_diagonal() {
        let mut board = Board::empty();
        board.place(48, Piece::new(PieceKind::Pawn, Color::White));
        let mut out = MoveList::new();
        pawn_moves(&board, None, 48, true, &mut out);
        assert_eq!(out.as_slice(), &[41]);
    }
}
