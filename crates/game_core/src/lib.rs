pub mod board;
pub mod chess;
pub mod draughts;
pub mod error;
pub mod perft;
pub mod search;
pub mod tictactoe;
pub mod types;

// Re-export the game-independent API
pub use board::{Board, Grid, PieceCatalog};
pub use error::GameError;
pub use perft::{divide, perft};
pub use search::{best_move, minimax, pick_best_move};
pub use types::*;

pub use chess::ChessBoard;
pub use draughts::DraughtsBoard;
pub use tictactoe::TicTacToeBoard;

// =============================================================================
// Engine trait, implemented by all move pickers (minimax, random, ...)
// =============================================================================

/// Limits for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Plies to expand below each candidate move (None = to the end of the game)
    pub depth: Option<u8>,
}

impl SearchLimits {
    /// Create limits with a fixed depth.
    pub fn depth(depth: u8) -> Self {
        Self { depth: Some(depth) }
    }

    /// Search every line to a finished game. Only tractable for small games.
    pub fn unbounded() -> Self {
        Self { depth: None }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The best move found (None if no legal moves)
    pub best_move: Option<M>,
    /// Score of the best move, White-positive
    pub score: Score,
    /// Depth bound the search ran with
    pub depth: Option<u8>,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all engines must implement, for any game.
pub trait Engine<B: Board>: Send {
    /// Pick a move for the side to move in `board`.
    fn search(&mut self, board: &B, limits: SearchLimits) -> SearchResult<B::Move>;

    /// Returns the engine's name for display and result files
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "game-arena"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
