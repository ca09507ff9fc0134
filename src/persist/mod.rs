//! Lossless records and a compact binary encoding for persistence layers.
//!
//! The crate does not own a storage format. It offers:
//! - `GameRecord` / `RoundRecord`: serde-friendly source state, also used as
//!   the serde representation of `Game` and `RoundScore`
//! - `encode` / `decode`: bincode helpers that keep codec failures apart
//!   from model validation failures
//!
//! Decoding never trusts stored derived state: games are rebuilt by
//! replaying every round through `Game::add_round_score`.

mod record;

pub use record::{GameRecord, RoundRecord};

use thiserror::Error;
use tracing::debug;

use crate::core::ScoreError;
use crate::scoring::{Game, RoundScore};

/// Failure while encoding or decoding model state.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The bytes could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// The bytes decoded to state that breaks a model invariant.
    #[error("stored state is invalid: {0}")]
    Invalid(#[from] ScoreError),
}

/// Encode a game as bytes.
pub fn encode(game: &Game) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(&GameRecord::from(game))?)
}

/// Decode and re-validate a game.
pub fn decode(bytes: &[u8]) -> Result<Game, PersistError> {
    let record: GameRecord = bincode::deserialize(bytes)?;
    let rounds = record.rounds.len();
    let game = Game::try_from(record)?;
    debug!(rounds, finished = game.is_finished(), "game decoded");
    Ok(game)
}

/// Encode a round, including any absent scores.
pub fn encode_round(round: &RoundScore) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(&RoundRecord::from(round))?)
}

/// Decode and re-validate a round.
pub fn decode_round(bytes: &[u8]) -> Result<RoundScore, PersistError> {
    let record: RoundRecord = bincode::deserialize(bytes)?;
    Ok(RoundScore::try_from(record)?)
}
