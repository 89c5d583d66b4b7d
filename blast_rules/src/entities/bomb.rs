//! Bombs and the registry of pending bombs.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Position};

/// A pending explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    position: Position,
    /// Turns left before detonation.
    fuse: u32,
    /// None for bombs seeded by the initial map.
    owner: Option<PlayerId>,
}

impl Bomb {
    pub fn new(position: Position, fuse: u32, owner: Option<PlayerId>) -> Self {
        Self {
            position,
            fuse,
            owner,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn fuse(&self) -> u32 {
        self.fuse
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Burn one turn off the fuse.
    pub fn tick(&mut self) {
        self.fuse = self.fuse.saturating_sub(1);
    }

    pub fn is_ready(&self) -> bool {
        self.fuse == 0
    }
}

/// Active bombs in insertion order.
///
/// At most one bomb exists per cell; the grid guarantees this by only
/// accepting a bomb on a free tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombRegistry {
    bombs: Vec<Bomb>,
}

impl BombRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bomb.
    pub fn arm(&mut self, bomb: Bomb) {
        debug_assert!(
            !self.contains(bomb.position),
            "two bombs registered at {}",
            bomb.position
        );
        self.bombs.push(bomb);
    }

    /// Decrement every fuse by one and return the positions of bombs that
    /// are now ready, in registry order. Ready bombs stay registered until
    /// they are removed by their detonation.
    pub fn tick(&mut self) -> Vec<Position> {
        for bomb in &mut self.bombs {
            bomb.tick();
        }
        self.bombs
            .iter()
            .filter(|b| b.is_ready())
            .map(|b| b.position)
            .collect()
    }

    /// Remove and return the bomb at `position`, if any.
    pub fn remove_at(&mut self, position: Position) -> Option<Bomb> {
        let index = self.bombs.iter().position(|b| b.position == position)?;
        Some(self.bombs.remove(index))
    }

    pub fn get(&self, position: Position) -> Option<&Bomb> {
        self.bombs.iter().find(|b| b.position == position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bomb> {
        self.bombs.iter()
    }

    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }
}
