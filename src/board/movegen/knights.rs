use super::super::offsets::KNIGHT_TARGETS;
use super::super::types::{Color, Square, SquareList};
use super::super::Board;

impl Board {
    pub(crate) fn knight_targets(&self, from: Square, color: Color) -> SquareList {
        let mut targets = SquareList::new();
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if self.color_on(to) != Some(color) {
                targets.push(to);
            }
        }
        targets
    }
}
