//! # Blast Engine
//!
//! The authoritative turn simulation for a Blastgrid match. It consumes the
//! board model from `blast_rules` and advances it one discrete turn at a time.
//!
//! ## Core Components
//!
//! - **engine**: The `TurnEngine` state machine - action validation, bomb
//!   fuses, chained explosions and win/draw detection
//! - **events**: What happened during a turn, for presentation collaborators
//! - **setup**: Match initialization payloads
//! - **snapshot**: Serializable view of the full match state
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: Same setup and same action batches give the same match
//! - **Sequential**: Player actions are applied one at a time, each validated
//!   against the state left by the previous one
//! - **Passive**: The engine never drives the clock; the caller hands it turns

pub mod engine;
pub mod error;
pub mod events;
pub mod setup;
pub mod snapshot;

pub use engine::*;
pub use error::*;
pub use events::*;
pub use setup::*;
pub use snapshot::*;
