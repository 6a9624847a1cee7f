//! Pseudo-legal move generation and position status evaluation.
//!
//! Generation considers board occupancy only: a generated move may leave the
//! mover's own king attacked. Legality under check is established by the
//! simulate-and-revert queries below, never by the generators.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::CheckError;
use super::types::{Color, Move, Piece, Square, SquareList};
use super::Board;

impl Board {
    /// Pseudo-legal target squares for the occupant of `from`.
    ///
    /// Dispatches on the piece kind; an empty square yields an empty list.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> SquareList {
        match self.piece_at(from) {
            None => SquareList::new(),
            Some((color, Piece::Pawn)) => self.pawn_targets(from, color),
            Some((color, Piece::Knight)) => self.knight_targets(from, color),
            Some((color, Piece::King)) => self.king_targets(from, color),
            Some((color, piece)) => self.slider_targets(from, color, piece),
        }
    }

    /// Apply `mv`, test whether `color`'s king is attacked, undo.
    ///
    /// The sole legality-filtering primitive: a candidate move is playable
    /// iff this returns false. The board is restored before returning on
    /// every path, whatever the verdict.
    pub fn move_leaves_in_check(&mut self, color: Color, mv: Move) -> Result<bool, CheckError> {
        self.with_move(mv, |board| board.is_in_check(color))
    }

    /// Exhaustive no-escape search.
    ///
    /// With `stalemate_probe` false this is checkmate detection: a side that
    /// is not in check is never mated, and the guard returns early.
    /// With `stalemate_probe` true the guard is skipped and the question
    /// becomes "does `color` have any move that leaves its king safe",
    /// which, asked while the side is in check, degenerates to checkmate
    /// detection. Callers wanting stalemate proper should use
    /// [`is_stalemate`](Board::is_stalemate), which rules out check first.
    pub fn checkmate(&mut self, color: Color, stalemate_probe: bool) -> Result<bool, CheckError> {
        if !stalemate_probe && !self.is_in_check(color)? {
            return Ok(false);
        }

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if self.color_on(from) != Some(color) {
                    continue;
                }
                let targets = self.moves_from(from);
                for &to in &targets {
                    let mv = Move::new(from, to);
                    if !self.move_leaves_in_check(color, mv)? {
                        #[cfg(feature = "logging")]
                        log::trace!("{color} keeps the king safe with {mv}");
                        return Ok(false);
                    }
                }
            }
        }

        Ok(true)
    }

    /// In check, with no move that resolves it.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, CheckError> {
        self.checkmate(color, false)
    }

    /// Not in check, but every available move would expose the king.
    pub fn is_stalemate(&mut self, color: Color) -> Result<bool, CheckError> {
        Ok(!self.is_in_check(color)? && self.checkmate(color, true)?)
    }
}
