//! Error taxonomy for the scoring model.
//!
//! Every variant is a local validation failure. Operations validate before
//! they mutate, so an `Err` always means nothing changed.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Validation failure raised by `RoundScore`, `Game` or their building blocks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScoreError {
    /// Empty roster, duplicate names or a blank name.
    #[error("invalid player set: {0}")]
    InvalidPlayerSet(String),

    /// A game needs at least two players.
    #[error("a game needs at least two players, got {count}")]
    InvalidPlayerCount { count: usize },

    /// Non-positive limit, or a limit that cannot be reached under the round rules.
    #[error("invalid score limit {limit}: {reason}")]
    InvalidScoreLimit { limit: i64, reason: String },

    /// The player is not part of the relevant roster.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// The value cannot be represented as a round score.
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// A round is missing scores for some of its players.
    #[error("round is incomplete, missing scores for {missing:?}")]
    IncompleteRound { missing: Vec<String> },

    /// The round's roster is not the game's current alive players.
    #[error("round players {found:?} do not match alive players {expected:?}")]
    RoundPlayerMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The game already has at most one player left.
    #[error("game is finished and accepts no more rounds")]
    GameFinished,

    /// Round index outside `0..len`.
    #[error("round index {index} out of range for {len} rounds")]
    IndexOutOfRange { index: usize, len: usize },

    /// A score falls outside the game's configured round bounds.
    #[error("score {score} for {player:?} is outside {min}..={max}")]
    ScoreOutOfRange {
        player: String,
        score: i32,
        min: i32,
        max: i32,
    },

    /// Nobody scored zero in a round that requires a winner.
    #[error("round has no winner (nobody scored zero)")]
    MissingRoundWinner,

    /// Everybody scored zero in a round that requires a loser.
    #[error("round has no loser (everybody scored zero)")]
    MissingRoundLoser,

    /// Results were requested before the game finished.
    #[error("game is not finished yet")]
    GameNotFinished,
}

// Lets infallible conversions (e.g. `i32` into `Score`) share the fallible
// conversion path.
impl From<std::convert::Infallible> for ScoreError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl ScoreError {
    pub fn invalid_player_set(detail: impl Into<String>) -> Self {
        Self::InvalidPlayerSet(detail.into())
    }

    pub fn invalid_score(detail: impl Into<String>) -> Self {
        Self::InvalidScore(detail.into())
    }

    pub fn invalid_score_limit(limit: i64, reason: impl Into<String>) -> Self {
        Self::InvalidScoreLimit {
            limit,
            reason: reason.into(),
        }
    }

    pub fn unknown_player(player: impl Into<String>) -> Self {
        Self::UnknownPlayer(player.into())
    }
}
