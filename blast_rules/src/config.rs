//! Rule constants for a match.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Number of turns a freshly placed bomb waits before it detonates.
pub const BOMB_COUNTER_INIT: u32 = 5;

/// How many cells a blast reaches in each direction.
pub const BOMB_RADIUS: u32 = 3;

/// Tunable rules shared by every participant of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Initial fuse of every bomb, in turns.
    pub bomb_counter_init: u32,

    /// Blast reach in cells, inclusive.
    pub bomb_radius: u32,

    /// Maximum pending bombs per player. None = unlimited.
    pub bomb_capacity: Option<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bomb_counter_init: BOMB_COUNTER_INIT,
            bomb_radius: BOMB_RADIUS,
            bomb_capacity: None,
        }
    }
}

impl RulesConfig {
    /// Parse rules from a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let config: RulesConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style override of the fuse length.
    pub fn with_counter_init(mut self, turns: u32) -> Self {
        self.bomb_counter_init = turns;
        self
    }

    /// Builder-style override of the blast radius.
    pub fn with_radius(mut self, cells: u32) -> Self {
        self.bomb_radius = cells;
        self
    }

    /// Builder-style override of the per-player bomb limit.
    pub fn with_capacity(mut self, capacity: Option<u32>) -> Self {
        self.bomb_capacity = capacity;
        self
    }

    /// Check that the fuse and radius are positive.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.bomb_counter_init == 0 {
            return Err(RulesError::InvalidConfig(
                "bomb_counter_init must be at least 1".to_string(),
            ));
        }
        if self.bomb_radius == 0 {
            return Err(RulesError::InvalidConfig(
                "bomb_radius must be at least 1".to_string(),
            ));
        }
        if self.bomb_capacity == Some(0) {
            return Err(RulesError::InvalidConfig(
                "bomb_capacity must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
