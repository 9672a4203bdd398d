//! Arena for game_core engines
//!
//! This crate provides:
//! - Engine-vs-engine matches for chess, draughts and tic-tac-toe
//! - JSON board snapshots for handing positions to other programs
//! - TOML configuration with command-line overrides
//!
//! # Usage
//!
//! ```bash
//! # Minimax against random play, two draughts games at depth 3
//! cargo run -p arena -- play draughts --depth 3 --white minimax --black random
//!
//! # Best reply to a snapshot
//! cargo run -p arena -- best chess "$(cargo run -q -p arena -- initial chess)"
//! ```

mod config;
mod error;
mod game;
mod match_runner;
mod snapshot;

pub use config::*;
pub use error::*;
pub use game::*;
pub use match_runner::*;
pub use snapshot::*;
