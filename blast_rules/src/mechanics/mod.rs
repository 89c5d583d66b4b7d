//! Game mechanics: tile contents, directions and player actions.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// What occupies a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileContent {
    #[default]
    Free,
    /// Destroyed by a blast, which keeps travelling past it.
    SoftBlock,
    /// Indestructible. Stops a blast and is never affected by it.
    HardBlock,
    /// A pending bomb. Players may stand on it.
    Bomb,
}

impl TileContent {
    /// Numeric code used by the map encoding.
    pub fn code(self) -> u8 {
        match self {
            TileContent::Free => 0,
            TileContent::SoftBlock => 1,
            TileContent::HardBlock => 2,
            TileContent::Bomb => 3,
        }
    }

    /// Single-character rendering used by ASCII maps.
    pub fn glyph(self) -> char {
        match self {
            TileContent::Free => '.',
            TileContent::SoftBlock => '+',
            TileContent::HardBlock => '#',
            TileContent::Bomb => 'o',
        }
    }

    /// Inverse of [`TileContent::glyph`].
    pub fn from_glyph(glyph: char) -> Result<Self, RulesError> {
        match glyph {
            '.' => Ok(TileContent::Free),
            '+' => Ok(TileContent::SoftBlock),
            '#' => Ok(TileContent::HardBlock),
            'o' => Ok(TileContent::Bomb),
            other => Err(RulesError::UnknownTileGlyph(other)),
        }
    }
}

impl TryFrom<u8> for TileContent {
    type Error = RulesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TileContent::Free),
            1 => Ok(TileContent::SoftBlock),
            2 => Ok(TileContent::HardBlock),
            3 => Ok(TileContent::Bomb),
            other => Err(RulesError::UnknownTileCode(other)),
        }
    }
}

/// Axis directions on the grid. `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Blast sweep order. The result of a detonation does not depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A player's requested intent for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Action {
    /// Do nothing this turn. Always legal.
    #[default]
    None,
    Move(Direction),
    PlaceBomb,
}

impl Action {
    pub const MOVE_UP: Action = Action::Move(Direction::Up);
    pub const MOVE_DOWN: Action = Action::Move(Direction::Down);
    pub const MOVE_LEFT: Action = Action::Move(Direction::Left);
    pub const MOVE_RIGHT: Action = Action::Move(Direction::Right);

    /// Numeric code used by action requests.
    pub fn code(self) -> u8 {
        match self {
            Action::None => 0,
            Action::Move(Direction::Up) => 1,
            Action::Move(Direction::Down) => 2,
            Action::Move(Direction::Left) => 3,
            Action::Move(Direction::Right) => 4,
            Action::PlaceBomb => 5,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = RulesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::None),
            1 => Ok(Action::MOVE_UP),
            2 => Ok(Action::MOVE_DOWN),
            3 => Ok(Action::MOVE_LEFT),
            4 => Ok(Action::MOVE_RIGHT),
            5 => Ok(Action::PlaceBomb),
            other => Err(RulesError::UnknownAction(other)),
        }
    }
}
