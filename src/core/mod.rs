//! Core model types: players, rosters, scores, configuration and errors.
//!
//! These are the building blocks shared by rounds and games. Nothing here
//! knows about round history; `scoring` builds on top of it.

pub mod error;
pub mod player;
pub mod roster;
pub mod score;
pub mod config;

pub use error::{Result, ScoreError};
pub use player::{Player, PlayerMap, Seat};
pub use roster::Roster;
pub use score::Score;
pub use config::{EliminationPolicy, GameConfig, RoundRules};
