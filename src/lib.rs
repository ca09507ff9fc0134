//! # score-five
//!
//! The scoring model for the card game Five. Players add their score after
//! every round and drop out once their running total crosses the game's
//! score limit; the last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every operation either applies fully or
//!    returns a `ScoreError` and leaves state untouched.
//!
//! 2. **Typed players**: scores are stored per `Seat` of a validated
//!    `Roster`, never keyed by loose strings.
//!
//! 3. **Owned history**: a `Game` snapshots each appended round, so later
//!    edits to the caller's `RoundScore` cannot rewrite history.
//!
//! ## Modules
//!
//! - `core`: players, rosters, score values, configuration, errors
//! - `scoring`: `RoundScore`, `Game`, standings and results
//! - `persist`: serde records and bincode helpers for storage layers
//!
//! ## Example
//!
//! ```
//! use score_five::{Game, ScoreError};
//!
//! let mut game = Game::new(["A", "B", "C"], 50)?;
//!
//! let round = game.new_round_with(|p| match p.as_str() {
//!     "A" => 20,
//!     "B" => 15,
//!     _ => 60,
//! })?;
//! game.add_round_score(&round)?;
//! assert_eq!(game.alive_players(), ["A", "B"]);
//!
//! let round = game.new_round_with(|p| if p == "A" { 40 } else { 10 })?;
//! game.add_round_score(&round)?;
//! assert!(game.is_finished());
//! assert_eq!(game.alive_players(), ["B"]);
//! # Ok::<(), ScoreError>(())
//! ```

pub mod core;
pub mod scoring;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    EliminationPolicy, GameConfig, Player, PlayerMap, Result, Roster, RoundRules, Score,
    ScoreError, Seat,
};

pub use crate::scoring::{Game, GameResult, PlayerResult, PlayerSort, RoundScore};

pub use crate::persist::{GameRecord, PersistError, RoundRecord};
