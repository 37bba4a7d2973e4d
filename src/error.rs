use std::path::PathBuf;

use crate::game::{BatterId, GameId, Side};

/// Logic defects detected inside the engine. These are never recovered
/// from; callers propagate them up and abort the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{} lineup is empty, no batter to draw", .0.name())]
    LineupExhausted(Side),

    #[error("game {0} is already complete")]
    GameOver(GameId),

    #[error("base {slot} is already occupied by {occupant}")]
    BaseOccupied { slot: usize, occupant: BatterId },

    #[error("game {0} has no batter at the plate")]
    NoBatterAtPlate(GameId),

    #[error("unknown event code {0} (expected 0..=4)")]
    UnknownEventCode(u8),

    #[error("cannot advance {0} bases (expected 1..=4)")]
    InvalidAdvance(u8),
}

/// Errors raised while driving games to completion.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("game {game_id} did not finish within {limit} events")]
    EventLimitExceeded { game_id: GameId, limit: usize },

    #[error("simulation worker {0} panicked")]
    WorkerPanicked(usize),
}

/// Errors from the SQLite score store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open score database {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
