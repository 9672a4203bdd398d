//! Arena configuration
//!
//! Settings come from an optional TOML file (`--config path`) and are then
//! overridden by command-line flags. Every field has a default, so an empty
//! file or no file at all is valid.
//!
//! ```toml
//! game = "draughts"
//! depth = 3
//! white = "minimax"
//! black = "random"
//! games = 4
//! max_plies = 150
//! seed = 7
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::game::{EngineKind, GameKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameKind,
    /// Search depth below each candidate move; `None` searches to the end
    /// of the game (only `--depth full` on the command line sets this)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    pub white: EngineKind,
    pub black: EngineKind,
    /// Number of games for `play`
    pub games: u32,
    /// Plies before a game is scored as a draw
    pub max_plies: u32,
    /// Swap colours every other game
    pub alternate_colors: bool,
    /// Seed for random engines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Print every board during `play`
    pub verbose: bool,
    /// Where to write the match report as JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Chess,
            depth: Some(2),
            white: EngineKind::Minimax,
            black: EngineKind::Random,
            games: 2,
            max_plies: 200,
            alternate_colors: true,
            seed: None,
            verbose: true,
            results: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded arena config");
        Ok(config)
    }

    /// Builds a config from command-line arguments.
    ///
    /// `--config` is read first so flags override the file regardless of
    /// their order. Returns the config and the positional arguments.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = match flag_value(args, "--config")? {
            Some(path) => Self::load(Path::new(path))?,
            None => Self::default(),
        };
        let positional = config.apply_args(args)?;
        Ok((config, positional))
    }

    /// Applies flag overrides and returns the remaining positional arguments.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>, ConfigError> {
        let mut positional = Vec::new();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let takes_value = !matches!(flag, "--no-alternate" | "--quiet" | "-q");
            let value = if flag.starts_with('-') && takes_value {
                i += 1;
                Some(args.get(i).ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?.as_str())
            } else {
                None
            };

            match (flag, value) {
                ("--config", Some(_)) => {}
                ("--game", Some(v)) => self.game = v.parse()?,
                ("--depth" | "-d", Some(v)) => self.depth = parse_depth(v)?,
                ("--white" | "-w", Some(v)) => self.white = v.parse()?,
                ("--black" | "-b", Some(v)) => self.black = v.parse()?,
                ("--games" | "-g", Some(v)) => self.games = parse_number(flag, v)?,
                ("--max-plies", Some(v)) => self.max_plies = parse_number(flag, v)?,
                ("--seed", Some(v)) => self.seed = Some(parse_number(flag, v)?),
                ("--results", Some(v)) => self.results = Some(PathBuf::from(v)),
                ("--no-alternate", None) => self.alternate_colors = false,
                ("--quiet" | "-q", None) => self.verbose = false,
                (other, _) if other.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(other.to_string()));
                }
                (other, _) => positional.push(other.to_string()),
            }
            i += 1;
        }
        Ok(positional)
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, ConfigError> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string())),
        None => Ok(None),
    }
}

fn parse_depth(value: &str) -> Result<Option<u8>, ConfigError> {
    if value == "full" {
        return Ok(None);
    }
    parse_number("--depth", value).map(Some)
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
