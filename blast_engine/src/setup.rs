//! Match initialization payloads.

use blast_rules::{Grid, Position, RulesConfig, TileContent};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Everything needed to start a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub width: usize,
    pub height: usize,

    /// Wall-clock length of a turn. Only used for presentation timing.
    pub turn_length_ms: u64,

    /// Row-major initial content, `width * height` entries.
    pub map: Vec<TileContent>,

    /// Start position of each player, indexed by player id.
    pub players: Vec<Position>,

    /// Index of the player the local viewer plays as.
    pub local_player: usize,

    #[serde(default)]
    pub rules: RulesConfig,
}

impl MatchSetup {
    pub fn new(
        width: usize,
        height: usize,
        turn_length_ms: u64,
        map: Vec<TileContent>,
        players: Vec<Position>,
        local_player: usize,
    ) -> Self {
        Self {
            width,
            height,
            turn_length_ms,
            map,
            players,
            local_player,
            rules: RulesConfig::default(),
        }
    }

    /// Build a setup from an ASCII map; width and height come from the rows.
    pub fn from_ascii(
        map: &str,
        turn_length_ms: u64,
        players: Vec<Position>,
        local_player: usize,
    ) -> Result<Self, EngineError> {
        let grid = Grid::from_ascii(map)?;
        Ok(Self::new(
            grid.width(),
            grid.height(),
            turn_length_ms,
            grid.contents(),
            players,
            local_player,
        ))
    }

    /// Build a setup from numeric tile codes (see [`TileContent::code`]).
    pub fn from_codes(
        width: usize,
        height: usize,
        turn_length_ms: u64,
        codes: &[u8],
        players: Vec<Position>,
        local_player: usize,
    ) -> Result<Self, EngineError> {
        let map = codes
            .iter()
            .map(|code| TileContent::try_from(*code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            width,
            height,
            turn_length_ms,
            map,
            players,
            local_player,
        ))
    }

    /// Parse a setup sent by the match host.
    pub fn from_json(source: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        let setup = MatchSetup::from_ascii(
            "
            ..+
            #..
            ",
            250,
            vec![Position::new(0, 0), Position::new(2, 1)],
            1,
        )
        .unwrap();

        assert_eq!(setup.width, 3);
        assert_eq!(setup.height, 2);
        assert_eq!(setup.map[2], TileContent::SoftBlock);
        assert_eq!(setup.map[3], TileContent::HardBlock);
        assert_eq!(setup.rules, RulesConfig::default());
    }

    #[test]
    fn test_from_codes() {
        let setup =
            MatchSetup::from_codes(2, 2, 100, &[0, 1, 2, 3], vec![Position::new(0, 0)], 0)
                .unwrap();
        assert_eq!(
            setup.map,
            vec![
                TileContent::Free,
                TileContent::SoftBlock,
                TileContent::HardBlock,
                TileContent::Bomb
            ]
        );

        let err = MatchSetup::from_codes(2, 1, 100, &[0, 7], vec![Position::new(0, 0)], 0)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Rules(blast_rules::RulesError::UnknownTileCode(7))
        ));
    }

    #[test]
    fn test_from_json() {
        let source = r#"{
            "width": 2,
            "height": 1,
            "turn_length_ms": 500,
            "map": ["Free", "HardBlock"],
            "players": [{"x": 0, "y": 0}],
            "local_player": 0,
            "rules": {"bomb_radius": 1}
        }"#;

        let setup = MatchSetup::from_json(source).unwrap();
        assert_eq!(setup.map, vec![TileContent::Free, TileContent::HardBlock]);
        assert_eq!(setup.players, vec![Position::new(0, 0)]);
        assert_eq!(setup.rules.bomb_radius, 1);
        assert_eq!(setup.rules.bomb_counter_init, blast_rules::BOMB_COUNTER_INIT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = MatchSetup::from_json("{\"width\": 2}").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
