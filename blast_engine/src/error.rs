//! Errors surfaced at the engine boundary.

use blast_rules::{PlayerId, Position, RulesError};
use thiserror::Error;

use crate::events::GameStatus;

/// Malformed input from the caller.
///
/// An engine call that returns one of these has not mutated any state.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("{player} starts at {position}, outside the {width}x{height} grid")]
    PlayerOutOfBounds {
        player: PlayerId,
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("local player index {index} is out of range for {players} players")]
    LocalPlayerOutOfRange { index: usize, players: usize },

    #[error("expected one action per player ({expected}), got {actual}")]
    ActionCountMismatch { expected: usize, actual: usize },

    #[error("turn {requested} is stale, the engine is already at turn {current}")]
    StaleTurn { requested: u64, current: u64 },

    #[error("turn {requested} is the last representable turn, no turn can follow it")]
    TurnOverflow { requested: u64 },

    #[error("the match is over ({status}), no further turns are accepted")]
    MatchOver { status: GameStatus },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
