//! Serializable view of a whole match.

use blast_rules::{Bomb, Grid, MatchId, Player};
use serde::{Deserialize, Serialize};

use crate::engine::TurnEngine;
use crate::error::EngineError;
use crate::events::GameStatus;

/// Full match state at the end of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_id: MatchId,
    pub turn: u64,
    pub status: GameStatus,
    pub grid: Grid,
    pub players: Vec<Player>,
    pub bombs: Vec<Bomb>,
}

impl MatchSnapshot {
    pub fn capture(engine: &TurnEngine) -> Self {
        Self {
            match_id: engine.match_id(),
            turn: engine.turn(),
            status: engine.status(),
            grid: engine.grid().clone(),
            players: engine.players().to_vec(),
            bombs: engine.bombs().iter().copied().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(source)?)
    }
}
