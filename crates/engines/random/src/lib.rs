//! Random Move Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (minimax at any depth should beat this)
//! - Stress testing move generation in arena games

use game_core::{Board, Engine, SearchLimits, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// An engine that plays random legal moves in any game.
///
/// This engine provides no evaluation. Seed it with [`RandomEngine::seeded`]
/// to replay the same games.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> Engine<B> for RandomEngine {
    fn search(&mut self, board: &B, _limits: SearchLimits) -> SearchResult<B::Move> {
        let moves = board.legal_moves();
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: Some(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
