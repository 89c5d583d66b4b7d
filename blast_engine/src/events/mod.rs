//! Turn events and match outcome types.
//!
//! The engine's state after a turn is enough to diff against the previous
//! one, but the events spare presentation code that work.

use blast_rules::{PlayerId, Position, TileContent};
use serde::{Deserialize, Serialize};

/// Overall state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Exactly one player is left alive.
    Won(PlayerId),
    /// Nobody is left alive.
    Drawn,
}

impl GameStatus {
    /// Won and drawn matches accept no further turns.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(id) => write!(f, "won by {}", id),
            GameStatus::Drawn => write!(f, "draw"),
        }
    }
}

/// The match from the local viewer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalOutcome {
    Playing,
    Won,
    Lost,
    Draw,
}

/// Something observable that happened during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    PlayerMoved {
        player: PlayerId,
        from: Position,
        to: Position,
    },
    BombPlaced {
        player: PlayerId,
        at: Position,
    },
    BombDetonated {
        at: Position,
        owner: Option<PlayerId>,
    },
    /// A block cleared by a blast. The detonating bomb's own cell is covered
    /// by `BombDetonated` instead.
    TileDestroyed {
        at: Position,
        content: TileContent,
    },
    PlayerDied {
        player: PlayerId,
        at: Position,
    },
    GameWon {
        winner: PlayerId,
    },
    GameDrawn,
}

/// Result of one `execute_turn` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The engine's turn counter after the call.
    pub turn: u64,

    /// Events in the order they happened.
    pub events: Vec<TurnEvent>,

    pub status: GameStatus,
}

impl TurnReport {
    /// Players killed during this turn, in order of death.
    pub fn deaths(&self) -> Vec<PlayerId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TurnEvent::PlayerDied { player, .. } => Some(*player),
                _ => None,
            })
            .collect()
    }

    /// Positions of bombs that went off this turn, in detonation order.
    pub fn detonations(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TurnEvent::BombDetonated { at, .. } => Some(*at),
                _ => None,
            })
            .collect()
    }
}
