//! Player definitions.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Position};
use crate::mechanics::Direction;

/// One match participant.
///
/// Legality of a move is checked by the engine before [`Player::step`] is
/// called; the player itself does no bounds or collision checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    position: Position,
    alive: bool,
    /// The player whose perspective the local viewer uses. UI framing only.
    is_local: bool,
    /// Own bombs currently pending on the grid.
    bombs_out: u32,
}

impl Player {
    /// Create a live player at `position`.
    pub fn new(id: PlayerId, position: Position, is_local: bool) -> Self {
        Self {
            id,
            position,
            alive: true,
            is_local,
            bombs_out: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Move one cell in `direction`. A step below zero leaves the player
    /// where they are.
    pub fn step(&mut self, direction: Direction) {
        if let Some(next) = self.position.step(direction) {
            self.position = next;
        }
    }

    /// Irreversible.
    pub fn die(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    /// Whether the player may place another bomb under `capacity`.
    pub fn has_bomb(&self, capacity: Option<u32>) -> bool {
        capacity.map_or(true, |limit| self.bombs_out < limit)
    }

    pub fn bombs_out(&self) -> u32 {
        self.bombs_out
    }

    /// Account for a bomb the player just placed.
    pub fn take_bomb(&mut self) {
        self.bombs_out += 1;
    }

    /// Hand back a bomb once it has detonated.
    pub fn restock_bomb(&mut self) {
        self.bombs_out = self.bombs_out.saturating_sub(1);
    }
}
