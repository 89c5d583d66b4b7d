//! Turn Engine - the authoritative state machine of a match.
//!
//! Each call to [`TurnEngine::execute_turn`] runs one full turn:
//! 1. **Actions**: Apply each player's action in id order, validating it
//!    against the state left by the previous player's action
//! 2. **Fuses**: Burn one turn off every pending bomb
//! 3. **Explosions**: Detonate ready bombs, chaining through any bomb a
//!    blast reaches, until the queue is empty
//! 4. **Termination**: One survivor wins, no survivors is a draw

mod explosion;

pub use explosion::*;

use std::time::Duration;

use blast_rules::{
    Action, Bomb, BombRegistry, Grid, MatchId, Player, PlayerId, Position, RulesConfig,
    TileContent,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::events::{GameStatus, LocalOutcome, TurnEvent, TurnReport};
use crate::setup::MatchSetup;
use crate::snapshot::MatchSnapshot;

/// Where the engine is in its turn cycle.
///
/// The intermediate phases only exist while [`TurnEngine::execute_turn`] is
/// running. Between calls the engine is always in `AwaitingTurn`, `GameWon`
/// or `GameDrawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TurnPhase {
    #[default]
    AwaitingTurn,
    ApplyingActions,
    AdvancingBombs,
    ResolvingExplosions,
    CheckingTermination,
    GameWon,
    GameDrawn,
}

/// Owns the grid, the player roster and the bomb registry of one match.
///
/// Calls must be serialized by the caller; the engine does no internal
/// synchronization.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    match_id: MatchId,
    rules: RulesConfig,
    turn_length: Duration,
    grid: Grid,
    players: Vec<Player>,
    bombs: BombRegistry,
    local_player: PlayerId,
    turn: u64,
    phase: TurnPhase,
    status: GameStatus,
    /// Events of the turn in progress.
    events: Vec<TurnEvent>,
}

impl TurnEngine {
    /// Build the initial match state.
    ///
    /// Bombs present in the initial map are registered with a full fuse.
    pub fn initialize(setup: MatchSetup) -> Result<Self, EngineError> {
        Self::initialize_with_id(setup, MatchId::new())
    }

    /// Same as [`TurnEngine::initialize`] with a caller-chosen match id.
    pub fn initialize_with_id(setup: MatchSetup, match_id: MatchId) -> Result<Self, EngineError> {
        setup.rules.validate()?;
        let grid = Grid::new(setup.width, setup.height, &setup.map)?;

        if setup.players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        if setup.local_player >= setup.players.len() {
            return Err(EngineError::LocalPlayerOutOfRange {
                index: setup.local_player,
                players: setup.players.len(),
            });
        }

        let mut players = Vec::with_capacity(setup.players.len());
        for (index, position) in setup.players.iter().enumerate() {
            let id = PlayerId(index);
            if !grid.contains(*position) {
                return Err(EngineError::PlayerOutOfBounds {
                    player: id,
                    position: *position,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
            players.push(Player::new(id, *position, index == setup.local_player));
        }

        let mut bombs = BombRegistry::new();
        for position in grid.bomb_positions() {
            bombs.arm(Bomb::new(position, setup.rules.bomb_counter_init, None));
        }

        info!(
            "match {}: {}x{} grid, {} players, {} seeded bombs",
            match_id,
            grid.width(),
            grid.height(),
            players.len(),
            bombs.len()
        );

        Ok(Self {
            match_id,
            rules: setup.rules,
            turn_length: Duration::from_millis(setup.turn_length_ms),
            grid,
            players,
            bombs,
            local_player: PlayerId(setup.local_player),
            turn: 0,
            phase: TurnPhase::AwaitingTurn,
            status: GameStatus::InProgress,
            events: Vec::new(),
        })
    }

    /// Run one turn with one action per player, indexed by player id.
    ///
    /// Fails without touching any state if the batch is malformed, the turn
    /// number is stale, or the match is already over.
    pub fn execute_turn(
        &mut self,
        turn_number: u64,
        actions: &[Action],
    ) -> Result<TurnReport, EngineError> {
        if self.status.is_terminal() {
            return Err(EngineError::MatchOver {
                status: self.status,
            });
        }
        if actions.len() != self.players.len() {
            return Err(EngineError::ActionCountMismatch {
                expected: self.players.len(),
                actual: actions.len(),
            });
        }
        if turn_number < self.turn {
            return Err(EngineError::StaleTurn {
                requested: turn_number,
                current: self.turn,
            });
        }

        let next = turn_number
            .checked_add(1)
            .ok_or(EngineError::TurnOverflow {
                requested: turn_number,
            })?;

        self.turn = next;
        self.events.clear();
        debug!("match {}: turn {}", self.match_id, self.turn);

        self.phase = TurnPhase::ApplyingActions;
        self.commit_actions(actions);

        self.phase = TurnPhase::AdvancingBombs;
        let mut queue = ExplosionQueue::from(self.bombs.tick());

        self.phase = TurnPhase::ResolvingExplosions;
        self.resolve_explosions(&mut queue);

        self.phase = TurnPhase::CheckingTermination;
        self.status = self.check_termination();
        self.phase = match self.status {
            GameStatus::InProgress => TurnPhase::AwaitingTurn,
            GameStatus::Won(winner) => {
                info!("match {}: {} wins on turn {}", self.match_id, winner, self.turn);
                self.events.push(TurnEvent::GameWon { winner });
                TurnPhase::GameWon
            }
            GameStatus::Drawn => {
                info!("match {}: draw on turn {}", self.match_id, self.turn);
                self.events.push(TurnEvent::GameDrawn);
                TurnPhase::GameDrawn
            }
        };

        Ok(TurnReport {
            turn: self.turn,
            events: std::mem::take(&mut self.events),
            status: self.status,
        })
    }

    /// Like [`TurnEngine::execute_turn`], decoding numeric action codes first.
    /// An unknown code fails the whole call before anything is applied.
    pub fn execute_turn_codes(
        &mut self,
        turn_number: u64,
        codes: &[u8],
    ) -> Result<TurnReport, EngineError> {
        let actions = codes
            .iter()
            .map(|code| Action::try_from(*code))
            .collect::<Result<Vec<_>, _>>()?;
        self.execute_turn(turn_number, &actions)
    }

    /// Apply actions one at a time in player order. Illegal actions are
    /// dropped without any signal.
    fn commit_actions(&mut self, actions: &[Action]) {
        for (index, action) in actions.iter().enumerate() {
            let id = PlayerId(index);
            if self.can_do(id, *action) {
                self.apply(id, *action);
            } else {
                debug!("{} cannot {:?}, dropped", id, action);
            }
        }
    }

    /// Whether `action` is legal for `id` against the current state.
    pub fn can_do(&self, id: PlayerId, action: Action) -> bool {
        let Some(player) = self.players.get(id.index()) else {
            return false;
        };
        if player.is_dead() {
            return false;
        }

        match action {
            Action::None => true,
            Action::PlaceBomb => {
                player.has_bomb(self.rules.bomb_capacity) && self.grid.is_free(player.position())
            }
            Action::Move(direction) => self
                .grid
                .neighbor(player.position(), direction)
                .is_some_and(|to| self.grid.is_available(to)),
        }
    }

    fn apply(&mut self, id: PlayerId, action: Action) {
        let player = &mut self.players[id.index()];
        let from = player.position();

        match action {
            Action::None => {}
            Action::PlaceBomb => {
                player.take_bomb();
                self.grid.place_bomb(from);
                self.bombs
                    .arm(Bomb::new(from, self.rules.bomb_counter_init, Some(id)));
                self.events.push(TurnEvent::BombPlaced {
                    player: id,
                    at: from,
                });
            }
            Action::Move(direction) => {
                player.step(direction);
                self.events.push(TurnEvent::PlayerMoved {
                    player: id,
                    from,
                    to: player.position(),
                });
            }
        }
    }

    fn check_termination(&self) -> GameStatus {
        let alive: Vec<PlayerId> = self.alive_players().iter().map(|p| p.id()).collect();
        match alive.as_slice() {
            [winner] => GameStatus::Won(*winner),
            [] => GameStatus::Drawn,
            _ => GameStatus::InProgress,
        }
    }

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Presentation pacing for move animations.
    pub fn turn_length(&self) -> Duration {
        self.turn_length
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Content of the tile at `position`, or None outside the grid.
    pub fn tile_content(&self, position: Position) -> Option<TileContent> {
        self.grid.content(position)
    }

    /// The whole roster, dead players included.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn alive_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_alive()).collect()
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    pub fn bombs(&self) -> &BombRegistry {
        &self.bombs
    }

    pub fn local_player(&self) -> &Player {
        &self.players[self.local_player.index()]
    }

    /// The match from the local viewer's perspective.
    pub fn local_outcome(&self) -> LocalOutcome {
        match self.status {
            GameStatus::Won(winner) if winner == self.local_player => LocalOutcome::Won,
            GameStatus::Drawn => LocalOutcome::Draw,
            _ if self.local_player().is_dead() => LocalOutcome::Lost,
            _ => LocalOutcome::Playing,
        }
    }

    /// One-line status for the local viewer's HUD.
    pub fn status_text(&self) -> String {
        match self.local_outcome() {
            LocalOutcome::Playing => format!("alive: {}", self.alive_count()),
            LocalOutcome::Won => "You won!".to_string(),
            LocalOutcome::Lost => "You lose!".to_string(),
            LocalOutcome::Draw => "Draw.".to_string(),
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self)
    }
}
