//! Game and engine selection by name

use std::fmt;
use std::str::FromStr;

use game_core::{Board, Engine};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The games the arena knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Chess,
    Draughts,
    #[serde(rename = "tictactoe")]
    TicTacToe,
}

impl FromStr for GameKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chess" => Ok(GameKind::Chess),
            "draughts" | "checkers" => Ok(GameKind::Draughts),
            "tictactoe" | "ttt" => Ok(GameKind::TicTacToe),
            _ => Err(ConfigError::InvalidValue {
                flag: "game".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Chess => "chess",
            GameKind::Draughts => "draughts",
            GameKind::TicTacToe => "tictactoe",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Random,
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "mm" => Ok(EngineKind::Minimax),
            "random" | "rand" => Ok(EngineKind::Random),
            _ => Err(ConfigError::InvalidValue {
                flag: "engine".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Minimax => f.write_str("minimax"),
            EngineKind::Random => f.write_str("random"),
        }
    }
}

/// Builds an engine for any board type.
///
/// `seed` only matters for the random engine; without one it draws from
/// OS entropy.
pub fn create_engine<B: Board + 'static>(kind: EngineKind, seed: Option<u64>) -> Box<dyn Engine<B>> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new()),
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}
