//! The complete mutable game: board, attack database, en-passant target,
//! undo log, and the quiet-move counter for the fifty-move rule.
//!
//! Everything the engines and the move executor touch flows through this
//! struct by `&mut` reference; there is no hidden shared state. Undo and
//! redo replay log entries against the board and then rebuild the attack
//! database, so a round trip lands on a byte-identical state.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_log::{UndoEntry, UndoLog};
use crate::move_generation::apply_move::{process_castling, untake_en_passant, take_en_passant};
use crate::move_generation::attack_board::{place_piece_attacks, AttackBoard};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_list::MoveList;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub attacks: AttackBoard,
    /// Square a pawn may capture onto en passant this ply, if any.
    pub en_passant: Option<Square>,
    pub undo: UndoLog,
    /// Consecutive committed moves without a capture.
    pub move_counter: u8,
}

impl GameState {
    /// Fresh game from the standard starting position, attack database
    /// already built.
    pub fn new_game() -> Self {
        let mut state = Self {
            board: Board::new_game(),
            attacks: AttackBoard::new(),
            en_passant: None,
            undo: UndoLog::new(),
            move_counter: 0,
        };
        state.rebuild_attacks();
        state
    }

    /// Empty board for constructing test positions.
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            attacks: AttackBoard::new(),
            en_passant: None,
            undo: UndoLog::new(),
            move_counter: 0,
        }
    }

    /// Rebuild the attack database from the current board.
    pub fn rebuild_attacks(&mut self) {
        place_piece_attacks(&self.board, self.en_passant, &mut self.attacks);
    }

    /// Destinations for the piece on `square`; see
    /// [`generate_moves`](crate::move_generation::move_generator::generate_moves).
    pub fn generate_moves(&self, square: Square, defense: bool) -> MoveList {
        generate_moves(&self.board, self.en_passant, square, defense)
    }

    /// Build a move context for `from -> to`, snapshotting both cells.
    /// Returns `None` when `from` is empty.
    pub fn context(&self, from: Square, to: Square) -> Option<MoveContext> {
        let moving = self.board.piece_at(from)?;
        Some(MoveContext::new(from, to, moving, self.board.piece_at(to)))
    }

    /// Record an applied move in the log. Must be called after the move has
    /// landed on the board so the destination kind (promotions) is captured.
    pub fn push_undo(&mut self, ctx: &MoveContext, outcome: Outcome) {
        let landed = self
            .board
            .piece_at(ctx.to)
            .map(|p| p.kind)
            .unwrap_or(ctx.moving.kind);
        self.undo.push(UndoEntry {
            from: ctx.from,
            to: ctx.to,
            mover: ctx.moving.kind,
            mover_color: ctx.moving.color,
            mover_moved: ctx.moving.moved,
            taken: ctx.taken,
            landed,
            // Castling fills both aux squares, en passant only the victim.
            en_passant: ctx.aux[0].is_some() && ctx.aux[1].is_none(),
            outcome,
        });
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Peek `lines_back` committed moves into the past.
    #[inline]
    pub fn find_undo_line(&self, lines_back: usize) -> Option<UndoEntry> {
        self.undo.find_undo_line(lines_back)
    }

    /// Take back the most recent committed move. Restores both cells, any
    /// en-passant victim or castling rook, the king cache, and the
    /// en-passant target armed by the move before it. Returns `false` when
    /// the log has nothing to take back.
    pub fn undo(&mut self) -> bool {
        if !self.undo.can_undo() {
            return false;
        }
        self.undo.step_back();

        self.en_passant = None;
        if let Some(prev) = self.undo.find_undo_line(0) {
            if prev.mover == PieceKind::Pawn && !prev.mover_moved {
                self.arm_en_passant_for_double(prev.from, prev.to);
            }
        }

        let entry = self.undo.current_entry();
        self.board.set(
            entry.from,
            Some(Piece {
                kind: entry.mover,
                color: entry.mover_color,
                moved: entry.mover_moved,
            }),
        );
        self.board.set(entry.to, entry.taken);

        if entry.en_passant {
            let mut ctx = context_from_entry(&entry);
            untake_en_passant(self, &mut ctx);
        } else if entry.mover == PieceKind::King {
            self.board.set_king_square(entry.mover_color, entry.from);
            let mut ctx = context_from_entry(&entry);
            process_castling(self, &mut ctx, true);
        }

        self.rebuild_attacks();
        true
    }

    /// Replay the move at the redo cursor. Returns `false` when nothing has
    /// been taken back.
    pub fn redo(&mut self) -> bool {
        if !self.undo.can_redo() {
            return false;
        }
        let entry = self.undo.current_entry();
        let mut ctx = context_from_entry(&entry);

        self.en_passant = None;
        if entry.en_passant {
            take_en_passant(self, &mut ctx);
        } else if entry.mover == PieceKind::King {
            self.board.set_king_square(entry.mover_color, entry.to);
            process_castling(self, &mut ctx, false);
        } else if entry.mover == PieceKind::Pawn {
            self.arm_en_passant_for_double(entry.from, entry.to);
        }

        self.board.set(entry.from, None);
        self.board.set(
            entry.to,
            Some(Piece {
                kind: entry.landed,
                color: entry.mover_color,
                moved: true,
            }),
        );

        self.undo.advance();
        self.rebuild_attacks();
        true
    }

    /// Arm the en-passant target behind a pawn that just advanced two rows;
    /// a single-row advance leaves the target clear.
    pub(crate) fn arm_en_passant_for_double(&mut self, from: Square, to: Square) {
        let delta = to as i16 - from as i16;
        if delta == 16 {
            self.en_passant = Some(from + 8);
        } else if delta == -16 {
            self.en_passant = Some(from - 8);
        }
    }
}

fn context_from_entry(entry: &UndoEntry) -> MoveContext {
    let mut ctx = MoveContext::new(
        entry.from,
        entry.to,
        Piece {
            kind: entry.mover,
            color: entry.mover_color,
            moved: entry.mover_moved,
        },
        entry.taken,
    );
    ctx.promotion = entry.landed;
    ctx
}
