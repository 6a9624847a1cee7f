//! Serialization round-trips (compiled with the `serde` feature).

use crate::board::{Color, Move, MoveRecord, Piece, Square};

#[test]
fn test_square_json_round_trip() {
    let sq = Square(3, 4);
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
}

#[test]
fn test_move_json_round_trip() {
    let mv = Move::new(Square(1, 4), Square(3, 4));
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
}

#[test]
fn test_move_record_json_round_trip() {
    let record = MoveRecord {
        mv: Move::new(Square(3, 3), Square(5, 3)),
        moved: Some((Color::White, Piece::Rook)),
        captured: Some((Color::Black, Piece::Pawn)),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(serde_json::from_str::<MoveRecord>(&json).unwrap(), record);
}
