//! Fixed-capacity destination buffer returned by the move generators.

use crate::game_state::chess_rules::MAX_PIECE_MOVES;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy)]
pub struct MoveList {
    len: u8,
    squares: [Square; MAX_PIECE_MOVES],
}

impl MoveList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            len: 0,
            squares: [0; MAX_PIECE_MOVES],
        }
    }

    #[inline]
    pub fn push(&mut self, square: Square) {
        if (self.len as usize) < MAX_PIECE_MOVES {
            self.squares[self.len as usize] = square;
            self.len += 1;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.as_slice().contains(&square)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}
