use super::types::{Color, MoveRecord, Piece, Square};

/// Chess board: a total mapping from every square to its occupant, plus the
/// ordered history of applied moves.
///
/// Every square always holds a value; `None` is the empty-square occupant,
/// never a missing entry. The board carries no side-to-move state; status
/// queries take the color of interest as a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) history: Vec<MoveRecord>,
}

impl Board {
    /// Create a board with the standard starting position: back ranks on
    /// ranks 0 and 7, pawns on ranks 1 and 6, the middle empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(Color::White.back_rank(), file), Color::White, *piece);
            board.set_piece(Square(Color::Black.back_rank(), file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            history: Vec::new(),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.grid[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn put(&mut self, sq: Square, occupant: Option<(Color, Piece)>) {
        self.grid[sq.rank()][sq.file()] = occupant;
    }

    /// Occupant of a square. Total: `None` means the square is empty, and
    /// the lookup never fails.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.rank()][sq.file()]
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Ordered record of every applied move not yet undone, oldest first.
    ///
    /// External renderers reconstruct capture lists from the `captured`
    /// fields; the board itself does not track discarded pieces.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
