use super::error::HistoryError;
use super::types::{Move, MoveRecord};
use super::Board;

impl Board {
    /// Apply a move unconditionally.
    ///
    /// Records the pre-move occupants of both squares on the history stack,
    /// moves whatever is on `from` onto `to`, and vacates `from`. No
    /// legality check happens here; callers pass moves drawn from
    /// [`moves_from`](Board::moves_from) or deliberate simulations.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        self.history.push(MoveRecord {
            mv,
            moved,
            captured,
        });
        self.put(mv.to, moved);
        self.put(mv.from, None);
    }

    /// Undo the most recently applied move, restoring both squares exactly.
    ///
    /// Strictly LIFO, one step per call. Returns the undone move, or
    /// [`HistoryError::Empty`] when nothing has been applied, which is a
    /// caller logic error rather than a board-state condition.
    pub fn unmake_move(&mut self) -> Result<Move, HistoryError> {
        let record = self.history.pop().ok_or(HistoryError::Empty)?;
        self.put(record.mv.from, record.moved);
        self.put(record.mv.to, record.captured);
        Ok(record.mv)
    }

    /// Apply `mv`, run `f` against the mutated board, then undo before
    /// returning the result.
    ///
    /// The undo sits on the single shared exit path, so no caller can leave
    /// the board mutated. Simulations nest strictly; each level unwinds its
    /// own move.
    pub(crate) fn with_move<T>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> T) -> T {
        self.make_move(mv);
        let result = f(self);
        self.unmake_move().expect("with_move: unmake after make");
        result
    }
}
