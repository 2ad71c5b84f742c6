//! The mailbox board: 64 piece cells plus a king-square cache per side.
//!
//! Invariant: outside of the transient perturbations made by speculative
//! validation and mate detection, `kings[c]` always names the cell holding
//! color `c`'s king.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; BOARD_TILES],
    kings: [Square; 2],
}

impl Board {
    /// Empty board. The king cache is meaningless until kings are placed.
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_TILES],
            kings: [0, 0],
        }
    }

    /// Standard starting arrangement: Black's back rank on row 0, White's
    /// on row 7, kings on squares 4 and 60.
    pub fn new_game() -> Self {
        use PieceKind::*;

        let mut board = Self::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            board.place(square_at(0, col), Piece::new(kind, Color::Black));
            board.place(square_at(7, col), Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            board.place(square_at(1, col), Piece::new(Pawn, Color::Black));
            board.place(square_at(6, col), Piece::new(Pawn, Color::White));
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    /// Raw cell write. Does not maintain the king cache; the move executor
    /// and the undo log update the cache themselves.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square as usize] = piece;
    }

    /// Cell write that keeps the king cache current. Intended for board
    /// setup and test positions.
    pub fn place(&mut self, square: Square, piece: Piece) {
        if piece.kind == PieceKind::King {
            self.kings[piece.color.index()] = square;
        }
        self.cells[square as usize] = Some(piece);
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[inline]
    pub fn set_king_square(&mut self, color: Color, square: Square) {
        self.kings[color.index()] = square;
    }

    /// Set the has-moved flag on the piece occupying `square`, if any.
    #[inline]
    pub fn mark_moved(&mut self, square: Square) {
        if let Some(piece) = self.cells[square as usize].as_mut() {
            piece.moved = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_places_thirty_two_pieces() {
        let board = Board::new_game();
        let count = (0..64).filter(|&sq| board.piece_at(sq).is_some()).count();
        assert_eq!(count, 32);
        assert_eq!(board.king_square(Color::Black), 4);
        assert_eq!(board.king_square(Color::White), 60);
    }

    #[test]
    fn new_game_orients_colors_by_row() {
        let board = Board::new_game();
        for sq in 0..16 {
            assert_eq!(board.piece_at(sq).map(|p| p.color), Some(Color::Black));
        }
        for sq in 48..64 {
            assert_eq!(board.piece_at(sq).map(|p| p.color), Some(Color::White));
        }
        for sq in 16..48 {
            assert!(board.piece_at(sq).is_none());
        }
    }

    #[test]
    fn place_tracks_kings() {
        let mut board = Board::empty();
        board.place(27, Piece::new(PieceKind::King, Color::White));
        assert_eq!(board.king_square(Color::White), 27);
    }

    #[test]
    fn mark_moved_sets_flag_in_place() {
        let mut board = Board::new_game();
        assert_eq!(board.piece_at(52).map(|p| p.moved), Some(false));
        board.mark_moved(52);
        assert_eq!(board.piece_at(52).map(|p| p.moved), Some(true));
    }
}
