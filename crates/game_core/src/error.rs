use thiserror::Error;

/// Recoverable failures at the core boundary.
///
/// Broken internal invariants (a side without a king, a winner that did not
/// just move) are bugs in move generation and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("move {0} is not legal in this position")]
    IllegalMove(String),

    #[error("no legal moves in this position")]
    NoLegalMoves,

    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid move `{0}`")]
    InvalidMove(String),
}
