use super::super::offsets::{DIAGONAL, ORTHOGONAL};
use super::super::types::{Color, Piece, Square, SquareList};
use super::super::Board;

impl Board {
    /// Ray-walking generation shared by rook, bishop, and queen.
    pub(crate) fn slider_targets(&self, from: Square, color: Color, piece: Piece) -> SquareList {
        debug_assert!(piece.is_slider());
        let mut targets = SquareList::new();
        if piece.slides_straight() {
            self.walk_rays(from, color, &ORTHOGONAL, &mut targets);
        }
        if piece.slides_diagonally() {
            self.walk_rays(from, color, &DIAGONAL, &mut targets);
        }
        targets
    }

    /// Walk each direction outward from `from`: empty squares are included
    /// and the walk continues; the first occupied square is included iff it
    /// holds an enemy piece, and the walk halts there either way.
    fn walk_rays(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        targets: &mut SquareList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.piece_at(next) {
                    None => {
                        targets.push(next);
                        current = next;
                    }
                    Some((occupant_color, _)) => {
                        if occupant_color != color {
                            targets.push(next);
                        }
                        break;
                    }
                }
            }
        }
    }
}
