//! Round score values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{Result, ScoreError};

/// A single player's score in one round.
///
/// Any `i32` is a valid score as far as a round is concerned; games may
/// narrow the range through `RoundRules`. Conversions from wider or
/// untrusted inputs fail with `ScoreError::InvalidScore`.
///
/// ```
/// use score_five::core::Score;
///
/// assert_eq!(Score::try_from(12.0).unwrap(), Score::new(12));
/// assert!(Score::try_from(f64::NAN).is_err());
/// assert!("7x".parse::<Score>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self> {
        i32::try_from(value)
            .map(Self)
            .map_err(|_| ScoreError::invalid_score(format!("{value} is out of range")))
    }
}

impl TryFrom<f64> for Score {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ScoreError::invalid_score(format!("{value} is not finite")));
        }
        if value.fract() != 0.0 {
            return Err(ScoreError::invalid_score(format!("{value} is not an integer")));
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(ScoreError::invalid_score(format!("{value} is out of range")));
        }
        Ok(Self(value as i32))
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|e| ScoreError::invalid_score(format!("{s:?}: {e}")))
    }
}
