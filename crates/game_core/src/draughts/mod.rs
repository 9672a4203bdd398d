//! English draughts on an 8x8 board: short-range kings, mandatory captures,
//! multi-jump chains.

mod board;
mod eval;
mod movegen;
mod piece;

pub use board::{DraughtsBoard, DraughtsPosition};
pub use eval::evaluate;
pub use movegen::{captures_from, jumped_square, legal_moves};
pub use piece::DraughtsPiece;
