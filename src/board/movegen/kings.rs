use super::super::error::CheckError;
use super::super::offsets::KING_TARGETS;
use super::super::types::{Color, Piece, Square, SquareList};
use super::super::Board;

impl Board {
    /// King steps are not filtered against enemy attacks here; stepping into
    /// check is caught by simulation like any other move.
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> SquareList {
        let mut targets = SquareList::new();
        for &to in &KING_TARGETS[from.as_index()] {
            if self.color_on(to) != Some(color) {
                targets.push(to);
            }
        }
        targets
    }

    /// Locate the king of `color`, scanning rank-major from a1.
    ///
    /// Fails loudly with [`CheckError::MissingKing`] when the board holds no
    /// such king. Positions are expected to carry at most one king per
    /// color; see [`BoardBuilder`](super::super::BoardBuilder).
    pub fn king_square(&self, color: Color) -> Result<Square, CheckError> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Ok(sq);
                }
            }
        }
        Err(CheckError::MissingKing { color })
    }

    /// True when the king's square appears among some opposing piece's
    /// pseudo-legal targets.
    pub fn is_in_check(&self, color: Color) -> Result<bool, CheckError> {
        let king = self.king_square(color)?;
        let attacker = color.opponent();

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if self.color_on(from) != Some(attacker) {
                    continue;
                }
                if self.moves_from(from).contains(king) {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}
