use std::path::PathBuf;

use thiserror::Error;

/// Failures decoding a board snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot is missing square {0}")]
    MissingSquare(String),

    #[error("unknown square key `{0}`")]
    UnknownSquare(String),

    #[error("unknown piece `{piece}` on {square}")]
    UnknownPiece { square: String, piece: String },

    #[error("malformed move `{0}`, expected S12_S34")]
    BadMove(String),

    #[error("snapshot has no `move` field")]
    MissingMove,

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Game(#[from] game_core::GameError),
}

/// Failures loading the arena configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value `{value}` for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Failures writing or reading match reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
