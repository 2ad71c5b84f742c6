//! Fixed-capacity circular move log backing undo/redo.
//!
//! Three cursors walk the ring: `bottom` marks the oldest retained entry,
//! `top` the write frontier, and `current` the replay position. Pushing at
//! the frontier evicts the oldest entry once the ring is full, so the log
//! always retains the most recent `UNDO_CAPACITY - 1` moves. Cursor
//! arithmetic here is the only place wrap-around is handled; callers get
//! `Option`s, never stale slots.

use crate::game_state::chess_types::*;

pub const UNDO_CAPACITY: usize = 255;

/// One committed move, with enough captured state to replay it in either
/// direction. `landed` records the kind standing on the destination after
/// the move, which differs from `mover` only for promotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoEntry {
    pub from: Square,
    pub to: Square,
    pub mover: PieceKind,
    pub mover_color: Color,
    pub mover_moved: bool,
    /// Destination cell before the move.
    pub taken: Option<Piece>,
    /// Kind on the destination after the move.
    pub landed: PieceKind,
    /// Set when the move captured en passant.
    pub en_passant: bool,
    pub outcome: Outcome,
}

impl UndoEntry {
    const EMPTY: Self = Self {
        from: 0,
        to: 0,
        mover: PieceKind::Pawn,
        mover_color: Color::Black,
        mover_moved: false,
        taken: None,
        landed: PieceKind::Pawn,
        en_passant: false,
        outcome: Outcome::Invalid,
    };
}

#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: [UndoEntry; UNDO_CAPACITY],
    bottom: usize,
    top: usize,
    current: usize,
}

impl UndoLog {
    pub fn new() -> Self {
        Self {
            entries: [UndoEntry::EMPTY; UNDO_CAPACITY],
            bottom: 0,
            top: 0,
            current: 0,
        }
    }

    /// Write a new entry at the replay position, advancing the frontier and
    /// evicting the oldest entry when the ring is full. Any redo tail beyond
    /// the new entry is abandoned.
    pub fn push(&mut self, entry: UndoEntry) {
        self.entries[self.current] = entry;

        self.current += 1;
        if self.current == UNDO_CAPACITY {
            self.current = 0;
        }
        if self.current == self.bottom {
            self.bottom += 1;
            if self.bottom == UNDO_CAPACITY {
                self.bottom = 0;
            }
        }
        self.top = self.current;
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.current != self.bottom
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.current != self.top
    }

    /// Step the replay cursor back one entry. Callers must check
    /// [`can_undo`](Self::can_undo) first.
    pub(crate) fn step_back(&mut self) {
        if self.current == 0 {
            self.current = UNDO_CAPACITY;
        }
        self.current -= 1;
    }

    /// Step the replay cursor forward one entry.
    pub(crate) fn advance(&mut self) {
        self.current += 1;
        if self.current == UNDO_CAPACITY {
            self.current = 0;
        }
    }

    #[inline]
    pub(crate) fn current_entry(&self) -> UndoEntry {
        self.entries[self.current]
    }

    /// Peek `lines_back` moves into the past without touching any cursor.
    /// Line 0 is the most recently played move. Returns `None` once the
    /// request reaches past what the ring has recorded.
    pub fn find_undo_line(&self, lines_back: usize) -> Option<UndoEntry> {
        // The replay cursor sits one ahead of the last played move.
        let lines_back = lines_back + 1;
        if lines_back >= UNDO_CAPACITY {
            return None;
        }

        let line = if self.current < lines_back {
            // Wrapped read; only valid if the ring itself has wrapped.
            if self.current >= self.bottom {
                return None;
            }
            UNDO_CAPACITY - (lines_back - self.current)
        } else {
            let line = self.current - lines_back;
            // Catches a wrapped bottom with the cursor pulled back by undos.
            if self.bottom <= self.current && line < self.bottom {
                return None;
            }
            line
        };

        Some(self.entries[line])
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}
