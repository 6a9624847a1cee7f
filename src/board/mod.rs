//! Chess board representation and rules.
//!
//! Keeps a total square-to-occupant mapping plus an ordered move history,
//! generates pseudo-legal moves per piece kind, and answers check, checkmate,
//! and stalemate queries by simulating candidate moves against the live board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let knight_moves = board.moves_from(Square(0, 1));
//! assert_eq!(knight_moves.len(), 2);
//! assert!(!board.is_in_check(Color::White).unwrap());
//! ```

mod builder;
mod error;
mod make_unmake;
mod movegen;
mod offsets;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{CheckError, HistoryError, SquareError};
pub use state::Board;
pub use types::{Color, Move, MoveRecord, Piece, Square, SquareList};
