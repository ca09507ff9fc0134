//! Game configuration types.
//!
//! A game is configured once at creation:
//! - `score_limit`: elimination threshold for cumulative totals
//! - `EliminationPolicy`: whether reaching the limit eliminates, or only exceeding it
//! - `RoundRules`: optional per-round constraints the game enforces on append
//!
//! All types are serde-serializable so callers can keep them in their own
//! settings files.

use serde::{Deserialize, Serialize};

use super::error::{Result, ScoreError};
use super::score::Score;

/// How a cumulative total is compared against the score limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EliminationPolicy {
    /// Eliminated once the total is strictly greater than the limit.
    #[default]
    Exceeds,
    /// Eliminated once the total is greater than or equal to the limit.
    Reaches,
}

impl EliminationPolicy {
    /// Whether a player with `total` is out under `limit`.
    #[must_use]
    pub fn is_eliminated(self, total: i64, limit: i64) -> bool {
        match self {
            EliminationPolicy::Exceeds => total > limit,
            EliminationPolicy::Reaches => total >= limit,
        }
    }
}

/// Per-round constraints enforced when a round is appended to a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRules {
    /// Inclusive `(min, max)` bounds for every score. `None` for unbounded.
    pub score_bounds: Option<(i32, i32)>,

    /// Require at least one zero score (a winner) and at least one
    /// non-zero score (a loser) in every round.
    pub require_winner_and_loser: bool,
}

impl RoundRules {
    /// No constraints beyond well-formed integers.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Set inclusive score bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.score_bounds = Some((min, max));
        self
    }

    /// Require a winner and a loser in every round.
    #[must_use]
    pub fn requiring_winner_and_loser(mut self) -> Self {
        self.require_winner_and_loser = true;
        self
    }

    /// Whether `score` is within the configured bounds.
    #[must_use]
    pub fn allows(&self, score: Score) -> bool {
        match self.score_bounds {
            Some((min, max)) => (min..=max).contains(&score.value()),
            None => true,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use score_five::core::{EliminationPolicy, GameConfig, RoundRules};
///
/// let config = GameConfig::new(100)
///     .with_policy(EliminationPolicy::Reaches)
///     .with_round_rules(RoundRules::unrestricted().with_bounds(0, 50));
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Elimination threshold for cumulative totals.
    pub score_limit: i64,

    /// Comparison used against `score_limit`.
    #[serde(default)]
    pub policy: EliminationPolicy,

    /// Constraints checked on every appended round.
    #[serde(default)]
    pub round_rules: RoundRules,
}

impl GameConfig {
    /// Score limit used by `GameConfig::five()`.
    pub const FIVE_SCORE_LIMIT: i64 = 250;

    /// Highest score a player can take in one round under `GameConfig::five()`.
    pub const FIVE_MAX_ROUND_SCORE: i32 = 50;

    /// A configuration with the given limit, `Exceeds` policy and no round rules.
    #[must_use]
    pub fn new(score_limit: i64) -> Self {
        Self {
            score_limit,
            policy: EliminationPolicy::default(),
            round_rules: RoundRules::default(),
        }
    }

    /// The classic table rules: limit 250, out on reaching it, round scores
    /// `0..=50` with one winner and at least one loser.
    #[must_use]
    pub fn five() -> Self {
        Self {
            score_limit: Self::FIVE_SCORE_LIMIT,
            policy: EliminationPolicy::Reaches,
            round_rules: RoundRules::unrestricted()
                .with_bounds(0, Self::FIVE_MAX_ROUND_SCORE)
                .requiring_winner_and_loser(),
        }
    }

    /// Set the elimination policy.
    #[must_use]
    pub fn with_policy(mut self, policy: EliminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the round rules.
    #[must_use]
    pub fn with_round_rules(mut self, rules: RoundRules) -> Self {
        self.round_rules = rules;
        self
    }

    /// Set the score limit.
    #[must_use]
    pub fn with_score_limit(mut self, score_limit: i64) -> Self {
        self.score_limit = score_limit;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.score_limit <= 0 {
            return Err(ScoreError::invalid_score_limit(
                self.score_limit,
                "must be positive",
            ));
        }
        if let Some((min, max)) = self.round_rules.score_bounds {
            if min > max {
                return Err(ScoreError::invalid_score_limit(
                    self.score_limit,
                    format!("round score bounds {min}..={max} are empty"),
                ));
            }
            if self.score_limit < i64::from(max) {
                return Err(ScoreError::invalid_score_limit(
                    self.score_limit,
                    format!("must be at least the maximum round score {max}"),
                ));
            }
        }
        Ok(())
    }

    /// Whether a player with `total` is out under this configuration.
    #[must_use]
    pub fn is_eliminated(&self, total: i64) -> bool {
        self.policy.is_eliminated(total, self.score_limit)
    }
}
