//! Errors raised while building or decoding board data.

use thiserror::Error;

/// Malformed board data or rule configuration.
///
/// These indicate an integration error in the caller, never a game-rule
/// violation: an illegal move is silently dropped by the engine instead.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown tile code: {0}")]
    UnknownTileCode(u8),

    #[error("unknown tile glyph: {0:?}")]
    UnknownTileGlyph(char),

    #[error("unknown action code: {0}")]
    UnknownAction(u8),

    #[error("grid must have a non-zero width and height (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("a {width}x{height} grid has more tiles than can be addressed")]
    GridTooLarge { width: usize, height: usize },

    #[error("map has {actual} tiles, expected {expected} for a {width}x{height} grid")]
    MapSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("map row {row} is {actual} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid rules: {0}")]
    InvalidConfig(String),

    #[error("failed to parse rules: {0}")]
    Toml(#[from] toml::de::Error),
}
