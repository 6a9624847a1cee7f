pub mod board;

pub use board::{
    Board, BoardBuilder, CheckError, Color, HistoryError, Move, MoveRecord, Piece, Square,
    SquareError, SquareList,
};
