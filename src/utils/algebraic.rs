//! Conversions between square indices and algebraic coordinates.
//!
//! The board stores Black's back rank at row 0, so rank 8 maps to the
//! lowest indices: `e1` is square 60, `a8` is square 0.

use crate::game_state::chess_types::*;

/// Convert algebraic coordinates (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(square_at(b'8' - rank, file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic coordinates.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square as usize >= BOARD_TILES {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file_char = char::from(b'a' + col_of(square));
    let rank_char = char::from(b'8' - row_of(square));
    Ok(format!("{file_char}{rank_char}"))
}
