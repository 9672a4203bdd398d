//! Minimax Engine
//!
//! Plain minimax over any [`Board`] with the game's own static evaluation.
//! No pruning and no caching: every query walks the whole bounded tree.

use game_core::{Board, Engine, SearchLimits, SearchResult, pick_best_move};
use tracing::debug;

/// Engine that scores every legal move with [`game_core::minimax`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<B: Board> Engine<B> for MinimaxEngine {
    fn search(&mut self, board: &B, limits: SearchLimits) -> SearchResult<B::Move> {
        self.nodes = 0;

        let outcome = pick_best_move(board, limits.depth, &mut self.nodes);
        debug!(nodes = self.nodes, found = outcome.is_some(), "minimax search finished");

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0.0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
