//! Canonical rule constants.
//!
//! Piece values, castling landing squares, the skill table, and the buffer
//! sizes that bound move lists and attacker lists all live here so the rest
//! of the crate shares one source of truth.

use crate::game_state::chess_types::{PieceKind, Square};

/// Pieces per side; also the upper bound on simultaneous attackers of one
/// square by one side.
pub const NUM_PIECES_SIDE: usize = 16;

/// A queen in an open center reaches at most 27 squares; 28 slots cover
/// every piece, including a king with both castle hops available.
pub const MAX_PIECE_MOVES: usize = 28;

/// Moves without a capture before the game is scored a draw.
pub const MOVES_TO_DRAW: u8 = 50;

/// Heuristic piece values as the search sees them. The flat +2 keeps any
/// capture worth more than the small positional nudges; the factor of 3
/// spreads the kinds apart.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Rook => 2 + 3 * 5,
        PieceKind::Knight => 2 + 3 * 3,
        PieceKind::Bishop => 2 + 3 * 3,
        PieceKind::Queen => 2 + 3 * 10,
        PieceKind::King => 2 + 3 * 9,
        PieceKind::Pawn => 2 + 3 * 1,
    }
}

/// Where a king lands when castling, `[color index][queenside, kingside]`.
pub const CASTLE_LANDING: [[Square; 2]; 2] = [[2, 6], [58, 62]];

/// Discrete strength settings exposed to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    VeryEasy,
    Easy,
    Harder,
    VeryHard,
}

/// Search shape selected by a [`Skill`]: how many top-ranked candidate moves
/// get a subtree estimate, how many plies the estimate recurses, and whether
/// speculative replies are validated against the real move executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillParams {
    pub width: usize,
    pub max_level: u8,
    pub deep_thoughts: bool,
}

impl Skill {
    #[inline]
    pub const fn params(self) -> SkillParams {
        match self {
            Skill::VeryEasy => SkillParams {
                width: 1,
                max_level: 0,
                deep_thoughts: false,
            },
            Skill::Easy => SkillParams {
                width: 16,
                max_level: 1,
                deep_thoughts: false,
            },
            Skill::Harder => SkillParams {
                width: 16,
                max_level: 2,
                deep_thoughts: true,
            },
            Skill::VeryHard => SkillParams {
                width: 16,
                max_level: 3,
                deep_thoughts: true,
            },
        }
    }
}
