//! # Blast Rules
//!
//! The board model for Blastgrid matches - tiles, the grid, players, bombs and
//! the actions players can request. This crate holds no turn logic; the
//! `blast_engine` crate drives these types through a match.

pub mod config;
pub mod entities;
pub mod error;
pub mod grid;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use grid::*;
pub use mechanics::*;
