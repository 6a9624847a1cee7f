use super::super::types::{Color, Square, SquareList};
use super::super::Board;

impl Board {
    pub(crate) fn pawn_targets(&self, from: Square, color: Color) -> SquareList {
        let mut targets = SquareList::new();

        // A pawn standing on either edge rank is a dead state (it has
        // nowhere to travel and never transforms); it generates nothing.
        if from.rank() == 0 || from.rank() == 7 {
            return targets;
        }

        let dir = color.pawn_direction();

        // Single push, and the double push gated behind it: both squares
        // must be empty and the pawn must still be on its starting rank.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                targets.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        // Diagonal steps capture only; an empty or friendly diagonal is
        // never generated.
        for df in [-1, 1] {
            if let Some(capture) = from.offset(dir, df) {
                if let Some((occupant_color, _)) = self.piece_at(capture) {
                    if occupant_color != color {
                        targets.push(capture);
                    }
                }
            }
        }

        targets
    }
}
