//! Plain-text game transcript built from the undo log.
//!
//! Walks the committed moves oldest first and emits a numbered move list
//! with a small PGN-style header. Each move carries an outcome marker so a
//! reader can see where check, mate, or a draw was detected.

use chrono::Local;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_log::UndoEntry;
use crate::utils::algebraic::square_to_algebraic;

/// All committed moves still held by the log, oldest first.
pub fn logged_moves(state: &GameState) -> Vec<UndoEntry> {
    let mut entries = Vec::new();
    let mut lines_back = 0;
    while let Some(entry) = state.find_undo_line(lines_back) {
        entries.push(entry);
        lines_back += 1;
    }
    entries.reverse();
    entries
}

/// Format one committed move: castling as `O-O`/`O-O-O`, otherwise a piece
/// letter (none for pawns), coordinates joined by `-` or `x` for captures,
/// a promotion suffix, and the outcome marker.
pub fn format_move(entry: &UndoEntry) -> String {
    let suffix = outcome_suffix(entry.outcome);

    if entry.mover == PieceKind::King {
        let from_col = col_of(entry.from) as i16;
        let to_col = col_of(entry.to) as i16;
        if (from_col - to_col).abs() == 2 {
            let hop = if to_col == 6 { "O-O" } else { "O-O-O" };
            return format!("{hop}{suffix}");
        }
    }

    let from = square_to_algebraic(entry.from).unwrap_or_default();
    let to = square_to_algebraic(entry.to).unwrap_or_default();
    let captures = entry.taken.is_some() || entry.en_passant;
    let joiner = if captures { "x" } else { "-" };
    let promotion = if entry.landed != entry.mover {
        format!("={}", piece_letter(entry.landed))
    } else {
        String::new()
    };

    format!(
        "{}{from}{joiner}{to}{promotion}{suffix}",
        piece_letter(entry.mover)
    )
}

/// Full transcript: header plus the numbered move list. White is assumed to
/// have made the oldest logged move, which holds for any game the log has
/// not wrapped.
pub fn game_log(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("[Event \"Casual Game\"]\n");
    out.push_str(&format!(
        "[Date \"{}\"]\n\n",
        Local::now().format("%Y.%m.%d")
    ));

    let entries = logged_moves(state);
    let mut parts = Vec::with_capacity(entries.len());
    for (ply, entry) in entries.iter().enumerate() {
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", ply / 2 + 1, format_move(entry)));
        } else {
            parts.push(format_move(entry));
        }
    }
    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "K",
        PieceKind::Queen => "Q",
        PieceKind::Rook => "R",
        PieceKind::Bishop => "B",
        PieceKind::Knight => "N",
        PieceKind::Pawn => "",
    }
}

fn outcome_suffix(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Check => "+",
        Outcome::Checkmate => "#",
        Outcome::Draw | Outcome::Stalemate => "=",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::apply_move::commit_move;

    fn play(state: &mut GameState, from: Square, to: Square) -> Outcome {
        let mut ctx = state.context(from, to).unwrap();
        commit_move(state, &mut ctx)
    }

    #[test]
    fn transcript_numbers_moves_by_pair() {
        let mut state = GameState::new_game();
        play(&mut state, 52, 36); // e2-e4
        play(&mut state, 12, 28); // e7-e5
        play(&mut state, 62, 45); // Ng1-f3

        let log = game_log(&state);
        assert!(log.contains("[Date \""));
        assert!(log.contains("1. e2-e4 e7-e5 2. Ng1-f3"));
    }

    #[test]
    fn captures_and_checks_are_marked() {
        let mut state = GameState::empty();
        state.board.place(4, Piece::new(PieceKind::King, Color::Black));
        state.board.place(60, Piece::new(PieceKind::King, Color::White));
        state.board.place(35, Piece::new(PieceKind::Rook, Color::White));
        state.board.place(3, Piece::new(PieceKind::Queen, Color::Black));
        state.rebuild_attacks();

        assert!(play(&mut state, 35, 3) >= Outcome::Check);
        let entries = logged_moves(&state);
        assert_eq!(format_move(&entries[0]), "Rd4xd8+");
    }

    #[test]
    fn castling_formats_as_hops() {
        let mut state = GameState::empty();
        state.board.place(4, Piece::new(PieceKind::King, Color::Black));
        state.board.place(60, Piece::new(PieceKind::King, Color::White));
        state.board.place(63, Piece::new(PieceKind::Rook, Color::White));
        state.board.place(56, Piece::new(PieceKind::Rook, Color::White));
        state.rebuild_attacks();

        assert_eq!(play(&mut state, 60, 62), Outcome::Ok);
        let entries = logged_moves(&state);
        assert_eq!(format_move(&entries[0]), "O-O");
    }

    #[test]
    fn promotion_carries_the_new_kind() {
        let mut state = GameState::empty();
        state.board.place(9, Piece::new(PieceKind::King, Color::Black));
        state.board.place(49, Piece::new(PieceKind::King, Color::White));
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White);
        pawn.moved = true;
        state.board.place(12, pawn);
        state.rebuild_attacks();

        assert!(play(&mut state, 12, 4) >= Outcome::Ok);
        let entries = logged_moves(&state);
        assert!(format_move(&entries[0]).starts_with("e7-e8=Q"));
    }
}
