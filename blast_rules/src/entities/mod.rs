//! Entity definitions: players, bombs and the identifiers they carry.

mod bomb;
mod player;

pub use bomb::*;
pub use player::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mechanics::Direction;

/// Unique identifier for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    /// Create a new random match ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a match ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable 0-based index of a player in the match roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Integer cell coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell `distance` steps away in `direction`, or None if it would
    /// leave the non-negative quadrant. Upper bounds are the grid's concern.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx * distance as isize)?;
        let y = self.y.checked_add_signed(dy * distance as isize)?;
        Some(Position { x, y })
    }

    /// The adjacent cell in `direction`.
    pub fn step(self, direction: Direction) -> Option<Position> {
        self.offset(direction, 1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
