//! Chess rules: no en passant, pawns always promote to a queen.

mod board;
mod eval;
mod movegen;
mod piece;

pub use board::{CastlingRights, ChessBoard, ChessPosition, Wing};
pub use eval::evaluate;
pub use movegen::{exposes_king, in_check, legal_moves, pseudo_moves};
pub use piece::{ChessPiece, PieceInfo, PieceKind};
