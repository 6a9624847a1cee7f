//! Check, checkmate, and stalemate evaluation tests.

use crate::board::{Board, BoardBuilder, CheckError, Color, Move, Piece, Square};

/// White king cornered on a1 by the queen on b3: not in check, no safe move.
fn corner_stalemate() -> Board {
    BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::King)
        .piece(Square(2, 1), Color::Black, Piece::Queen)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build()
}

/// White king mated on h1 by the queen on h2, guarded by the king on h3.
fn guarded_queen_mate() -> Board {
    BoardBuilder::new()
        .piece(Square(0, 7), Color::White, Piece::King)
        .piece(Square(1, 7), Color::Black, Piece::Queen)
        .piece(Square(2, 7), Color::Black, Piece::King)
        .build()
}

#[test]
fn test_starting_position_is_quiet() {
    let mut board = Board::new();
    for color in Color::BOTH {
        assert_eq!(board.is_in_check(color), Ok(false));
        assert_eq!(board.is_checkmate(color), Ok(false));
        assert_eq!(board.is_stalemate(color), Ok(false));
    }
}

#[test]
fn test_king_square_in_starting_position() {
    let board = Board::new();
    assert_eq!(board.king_square(Color::White), Ok(Square(0, 4)));
    assert_eq!(board.king_square(Color::Black), Ok(Square(7, 4)));
}

#[test]
fn test_rook_on_open_file_gives_check() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .build();
    assert_eq!(board.is_in_check(Color::White), Ok(true));
    assert_eq!(board.is_in_check(Color::Black), Ok(false));
}

#[test]
fn test_pawn_checks_diagonally_not_ahead() {
    let board = BoardBuilder::new()
        .piece(Square(3, 4), Color::White, Piece::King)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    assert_eq!(board.is_in_check(Color::White), Ok(true));

    let blocked = BoardBuilder::new()
        .piece(Square(3, 4), Color::White, Piece::King)
        .piece(Square(4, 4), Color::Black, Piece::Pawn) // directly ahead of it
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    assert_eq!(blocked.is_in_check(Color::White), Ok(false));
}

#[test]
fn test_simulation_detects_pinned_rook() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(1, 4), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .build();
    let snapshot = board.clone();

    // Stepping off the file uncovers the king; sliding up the file keeps
    // the block in place.
    let off_file = Move::new(Square(1, 4), Square(1, 0));
    let up_file = Move::new(Square(1, 4), Square(4, 4));
    assert_eq!(board.move_leaves_in_check(Color::White, off_file), Ok(true));
    assert_eq!(board.move_leaves_in_check(Color::White, up_file), Ok(false));

    assert_eq!(board, snapshot);
}

#[test]
fn test_guarded_queen_mate_is_checkmate() {
    let mut board = guarded_queen_mate();
    assert_eq!(board.is_in_check(Color::White), Ok(true));
    assert_eq!(board.is_checkmate(Color::White), Ok(true));
    assert_eq!(board.is_stalemate(Color::White), Ok(false));
    assert_eq!(board.is_checkmate(Color::Black), Ok(false));
}

#[test]
fn test_unguarded_adjacent_queen_is_not_mate() {
    // Same shape without the guarding king nearby: the queen hangs.
    let mut board = BoardBuilder::new()
        .piece(Square(0, 7), Color::White, Piece::King)
        .piece(Square(1, 7), Color::Black, Piece::Queen)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .build();
    assert_eq!(board.is_in_check(Color::White), Ok(true));
    assert_eq!(board.is_checkmate(Color::White), Ok(false));
}

#[test]
fn test_corner_queen_position_is_stalemate_not_checkmate() {
    let mut board = corner_stalemate();
    assert_eq!(board.is_in_check(Color::White), Ok(false));
    // Not in check, so plain checkmate detection short-circuits to false...
    assert_eq!(board.checkmate(Color::White, false), Ok(false));
    assert_eq!(board.is_checkmate(Color::White), Ok(false));
    // ...while the exhaustive probe confirms there is no safe move.
    assert_eq!(board.checkmate(Color::White, true), Ok(true));
    assert_eq!(board.is_stalemate(Color::White), Ok(true));
    assert_eq!(board.is_stalemate(Color::Black), Ok(false));
}

#[test]
fn test_probe_while_in_check_degenerates_to_checkmate() {
    // With an escape available, both modes agree on false.
    let mut escapable = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .build();
    assert_eq!(escapable.is_in_check(Color::White), Ok(true));
    assert_eq!(escapable.checkmate(Color::White, true), Ok(false));
    assert_eq!(escapable.checkmate(Color::White, false), Ok(false));

    // In a true mate, both modes agree on true.
    let mut mated = guarded_queen_mate();
    assert_eq!(mated.checkmate(Color::White, true), Ok(true));
    assert_eq!(mated.checkmate(Color::White, false), Ok(true));
}

#[test]
fn test_evaluation_is_side_effect_free() {
    let mut board = corner_stalemate();
    board.make_move(Move::new(Square(7, 7), Square(7, 6)));
    let snapshot = board.clone();

    for _ in 0..3 {
        assert_eq!(board.is_checkmate(Color::White), Ok(false));
        assert_eq!(board.is_stalemate(Color::White), Ok(true));
        assert_eq!(board.checkmate(Color::White, true), Ok(true));
    }

    assert_eq!(board, snapshot);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_missing_king_is_reported_loudly() {
    let board = BoardBuilder::new()
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();

    let missing = CheckError::MissingKing {
        color: Color::White,
    };
    assert_eq!(board.king_square(Color::White), Err(missing));
    assert_eq!(board.is_in_check(Color::White), Err(missing));

    let mut board = board;
    assert_eq!(board.is_checkmate(Color::White), Err(missing));
}
