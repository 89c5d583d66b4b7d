//! Blast propagation and chain reactions.

use std::collections::VecDeque;

use blast_rules::{Direction, Position, TileContent};
use log::debug;

use super::TurnEngine;
use crate::events::TurnEvent;

/// Bomb positions waiting to detonate within the current turn, first in
/// first out. A bomb caught in a blast is appended here and goes off later
/// in the same turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplosionQueue {
    pending: VecDeque<Position>,
}

impl ExplosionQueue {
    pub fn push(&mut self, position: Position) {
        self.pending.push_back(position);
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl From<Vec<Position>> for ExplosionQueue {
    fn from(positions: Vec<Position>) -> Self {
        Self {
            pending: positions.into(),
        }
    }
}

impl TurnEngine {
    /// Detonate queued bombs until the queue is empty.
    pub(crate) fn resolve_explosions(&mut self, queue: &mut ExplosionQueue) {
        while let Some(at) = queue.pop() {
            self.detonate(at, queue);
        }
    }

    /// Set off the bomb at `at`.
    ///
    /// A position with no registered bomb is a duplicate entry for a bomb
    /// that already went off this turn, and is skipped.
    fn detonate(&mut self, at: Position, queue: &mut ExplosionQueue) {
        let Some(bomb) = self.bombs.remove_at(at) else {
            debug!("no bomb left at {}, skipping", at);
            return;
        };

        debug!("bomb at {} detonates", at);
        if let Some(owner) = bomb.owner() {
            self.players[owner.index()].restock_bomb();
        }
        self.grid.destroy(at);
        self.events.push(TurnEvent::BombDetonated {
            at,
            owner: bomb.owner(),
        });
        self.kill_at(at);

        let radius = self.rules.bomb_radius as usize;
        for direction in Direction::ALL {
            self.sweep(at, direction, radius, queue);
        }
    }

    /// Walk the blast outward from `origin`. Hard blocks and the grid edge
    /// stop it; soft blocks and bombs do not.
    fn sweep(
        &mut self,
        origin: Position,
        direction: Direction,
        radius: usize,
        queue: &mut ExplosionQueue,
    ) {
        for distance in 1..=radius {
            let Some(cell) = self.grid.offset(origin, direction, distance) else {
                break;
            };
            let Some(content) = self.grid.content(cell) else {
                break;
            };
            if content == TileContent::HardBlock {
                break;
            }

            self.kill_at(cell);
            match content {
                TileContent::SoftBlock => {
                    self.grid.destroy(cell);
                    self.events.push(TurnEvent::TileDestroyed { at: cell, content });
                }
                TileContent::Bomb => {
                    debug!("blast from {} reaches bomb at {}", origin, cell);
                    queue.push(cell);
                }
                _ => {}
            }
        }
    }

    /// Kill every live player standing on `cell`.
    fn kill_at(&mut self, cell: Position) {
        for player in self
            .players
            .iter_mut()
            .filter(|p| p.is_alive() && p.position() == cell)
        {
            player.die();
            debug!("{} dies at {}", player.id(), cell);
            self.events.push(TurnEvent::PlayerDied {
                player: player.id(),
                at: cell,
            });
        }
    }
}
