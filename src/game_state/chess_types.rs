//! Core value types shared by every subsystem.
//!
//! Squares are plain `u8` indices in row-major order with row 0 holding
//! Black's back rank, so Black advances toward higher indices and White
//! toward lower ones. Pieces carry their kind, color, and a has-moved flag;
//! the packed byte form mirrors the classic 3-bit-kind encoding and is only
//! produced at serialization edges.

/// Board square index, `0..=63`, `row * 8 + col`.
pub type Square = u8;

pub const BOARD_TILES: usize = 64;

#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * 8 + col
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square & 7
}

/// Side color. Index 0 is Black, matching the attack-list layout and the
/// board orientation (Black's pieces start on squares 0..=15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta for a pawn advance of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

/// Piece kind. Discriminants match the 3-bit field of the packed encoding
/// (0 is the empty cell, expressed as `Option::None` at the API level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
    Pawn = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Rook),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

const PIECE_MOVED_BIT: u8 = 1 << 6;
const PIECE_WHITE_BIT: u8 = 1 << 7;
const PIECE_KIND_MASK: u8 = 0x07;

/// A piece on the board: kind, color, and whether it has moved this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            moved: false,
        }
    }

    /// Compact byte form: bits 0-2 kind, bit 6 moved, bit 7 white.
    #[inline]
    pub const fn pack(self) -> u8 {
        let mut byte = self.kind.code();
        if self.moved {
            byte |= PIECE_MOVED_BIT;
        }
        if matches!(self.color, Color::White) {
            byte |= PIECE_WHITE_BIT;
        }
        byte
    }

    #[inline]
    pub const fn unpack(byte: u8) -> Option<Self> {
        match PieceKind::from_code(byte & PIECE_KIND_MASK) {
            Some(kind) => Some(Self {
                kind,
                color: if byte & PIECE_WHITE_BIT != 0 {
                    Color::White
                } else {
                    Color::Black
                },
                moved: byte & PIECE_MOVED_BIT != 0,
            }),
            None => None,
        }
    }
}

/// Result of a move attempt or a turn.
///
/// The ordering is part of the contract: callers branch on ranges, e.g.
/// `outcome >= Outcome::Checkmate` ends the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Invalid,
    Ok,
    Check,
    Checkmate,
    Draw,
    Stalemate,
    Menu,
    Abandon,
    Quit,
}

/// Transient record describing one proposed move.
///
/// The caller fills in `from`/`to` and the piece snapshots before handing it
/// to the validator; `aux` is an output naming up to two extra squares the
/// move touched (castling rook's from/to, or the en-passant victim) so a
/// frontend knows what to redraw and the undo log what to reverse.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext {
    pub from: Square,
    pub to: Square,
    /// Piece on `from`, captured before the move is applied.
    pub moving: Piece,
    /// Piece on `to` before the move, if any.
    pub taken: Option<Piece>,
    /// Extra squares changed by castling or en passant.
    pub aux: [Option<Square>; 2],
    /// Kind a pawn promotes to on reaching the back rank. The AI always
    /// queens; interactive callers may pick another kind.
    pub promotion: PieceKind,
}

impl MoveContext {
    #[inline]
    pub fn new(from: Square, to: Square, moving: Piece, taken: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moving,
            taken,
            aux: [None, None],
            promotion: PieceKind::Queen,
        }
    }
}
