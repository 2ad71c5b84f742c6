//! The attack database: for every (square, side) pair, the ordered list of
//! that side's pieces which can move onto or defend the square.
//!
//! The database is rebuilt wholesale after every committed or speculative
//! move; reconstruction from the board is deliberately preferred over
//! incremental maintenance. Nothing mutates it directly except the mate
//! detector's logged fixups, which are always unwound.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::NUM_PIECES_SIDE;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves;

/// Attackers of one square by one side, in board-scan insertion order.
#[derive(Debug, Clone, Copy)]
pub struct AttackList {
    len: u8,
    squares: [Square; NUM_PIECES_SIDE],
}

impl AttackList {
    const EMPTY: Self = Self {
        len: 0,
        squares: [0; NUM_PIECES_SIDE],
    };

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

    #[inline]
    fn push(&mut self, square: Square) {
        if (self.len as usize) < NUM_PIECES_SIDE {
            self.squares[self.len as usize] = square;
            self.len += 1;
        }
    }

    #[inline]
    fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }
}

/// Equality over the live prefix only; slots beyond `len` are scratch.
impl PartialEq for AttackList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AttackList {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackBoard {
    lists: [[AttackList; 2]; BOARD_TILES],
}

impl AttackBoard {
    pub fn new() -> Self {
        Self {
            lists: [[AttackList::EMPTY; 2]; BOARD_TILES],
        }
    }

    #[inline]
    pub fn attackers(&self, square: Square, side: Color) -> &AttackList {
        &self.lists[square as usize][side.index()]
    }

    #[inline]
    pub fn count(&self, square: Square, side: Color) -> usize {
        self.lists[square as usize][side.index()].len()
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, side: Color) -> bool {
        !self.lists[square as usize][side.index()].is_empty()
    }

    fn clear(&mut self) {
        for per_square in self.lists.iter_mut() {
            per_square[0] = AttackList::EMPTY;
            per_square[1] = AttackList::EMPTY;
        }
    }

    /// Register `attacker` as able to land on `square`. Used by the rebuild
    /// and by the mate detector's fixup pass.
    #[inline]
    pub(crate) fn push_attacker(&mut self, square: Square, side: Color, attacker: Square) {
        self.lists[square as usize][side.index()].push(attacker);
    }

    /// Drop the most recently registered attacker; reverses one fixup.
    #[inline]
    pub(crate) fn pop_attacker(&mut self, square: Square, side: Color) {
        self.lists[square as usize][side.index()].pop();
    }
}

impl Default for AttackBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Full rebuild from a board snapshot: for every occupied square, generate
/// defense-inclusive destinations and record the occupant as an attacker of
/// each one for its side.
pub fn place_piece_attacks(board: &Board, en_passant: Option<Square>, attacks: &mut AttackBoard) {
    attacks.clear();

    for square in 0..BOARD_TILES as Square {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        let reach = generate_moves(board, en_passant, square, true);
        for &dest in reach.as_slice() {
            attacks.push_attacker(dest, piece.color, square);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startpos_attacks() -> AttackBoard {
        let board = Board::new_game();
        let mut attacks = AttackBoard::new();
        place_piece_attacks(&board, None, &mut attacks);
        attacks
    }

    #[test]
    fn starting_kings_are_not_attacked() {
        let attacks = startpos_attacks();
        assert_eq!(attacks.count(4, Color::White), 0);
        assert_eq!(attacks.count(60, Color::Black), 0);
    }

    #[test]
    fn central_squares_are_covered_by_both_sides_at_start() {
        let attacks = startpos_attacks();
        // e3 is covered by White (pawns d2/f2, knight g1), never by Black.
        let e3 = square_at(5, 4);
        assert_eq!(attacks.count(e3, Color::White), 3);
        assert_eq!(attacks.count(e3, Color::Black), 0);
    }

    #[test]
    fn attacker_lists_keep_board_scan_order() {
        let attacks = startpos_attacks();
        // f3 attackers for White scanned in square order: e2 pawn (52),
        // g2 pawn (54), g1 knight (62).
        let f3 = square_at(5, 5);
        assert_eq!(attacks.attackers(f3, Color::White).as_slice(), &[52, 54, 62]);
    }

    #[test]
    fn defended_friendly_squares_count_as_attacked() {
        let attacks = startpos_attacks();
        // Black's b8 knight defends d7 even though d7 holds a black pawn.
        let d7 = square_at(1, 3);
        assert!(attacks.attackers(d7, Color::Black).contains(1));
    }

    #[test]
    fn rebuild_replaces_stale_entries() {
        let mut board = Board::new_game();
        let mut attacks = AttackBoard::new();
        place_piece_attacks(&board, None, &mut attacks);

        // Lift the g1 knight off the board; f3 loses one white attacker.
        board.set(62, None);
        place_piece_attacks(&board, None, &mut attacks);
        let f3 = square_at(5, 5);
        assert_eq!(attacks.attackers(f3, Color::White).as_slice(), &[52, 54]);
    }
}
