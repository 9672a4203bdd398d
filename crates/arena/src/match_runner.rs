//! Match runner for playing games between engines

use std::path::Path;

use game_core::{Board, Engine, Player, SearchLimits};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ArenaConfig;
use crate::error::ReportError;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    fn for_white(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::White) => GameResult::Win,
            Some(Player::Black) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: Option<u8>,
    /// Maximum plies per game before declaring draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print every board during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 2,
            depth: Some(2),
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl From<&ArenaConfig> for MatchConfig {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            num_games: config.games,
            depth: config.depth,
            max_plies: config.max_plies,
            alternate_colors: config.alternate_colors,
            verbose: config.verbose,
        }
    }
}

/// One finished game, scored for White.
#[derive(Debug, Clone)]
pub struct GameRecord<B: Board> {
    pub result: GameResult,
    pub moves: Vec<B::Move>,
    pub final_board: B,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines from `start`
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match<B: Board>(
        &self,
        start: &B,
        engine1: &mut dyn Engine<B>,
        engine2: &mut dyn Engine<B>,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(start, engine1, engine2).result
            } else {
                self.play_game(start, engine2, engine1).result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_color = if engine1_white { "W" } else { "B" },
                outcome = ?game_result,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, result from White's perspective
    pub fn play_game<B: Board>(
        &self,
        start: &B,
        white: &mut dyn Engine<B>,
        black: &mut dyn Engine<B>,
    ) -> GameRecord<B> {
        let mut board = start.clone();
        let mut moves = Vec::new();
        let limits = SearchLimits {
            depth: self.config.depth,
        };
        white.new_game();
        black.new_game();

        for ply in 0..self.config.max_plies {
            if board.game_over() {
                break;
            }

            let searched = match board.player_to_move() {
                Player::White => white.search(&board, limits),
                Player::Black => black.search(&board, limits),
            };
            let Some(mv) = searched.best_move else {
                break;
            };
            debug!(ply, %mv, score = searched.score, nodes = searched.nodes, "engine move");

            board = board.make_move(mv);
            moves.push(mv);

            if self.config.verbose {
                println!("{board}\n");
            }
        }

        GameRecord {
            result: GameResult::for_white(board.winner()),
            moves,
            final_board: board,
        }
    }
}

/// Saved outcome of an arena match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub game: String,
    pub engine1: String,
    pub engine2: String,
    pub depth: Option<u8>,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
