//! Scores for a single round.
//!
//! A `RoundScore` is created with a fixed roster and filled in one player at
//! a time. Scores are stored per seat, so a round can only ever hold scores
//! for the players it was created with.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Player, PlayerMap, Result, Roster, Score, ScoreError, Seat};
use crate::persist::RoundRecord;

/// Per-player scores for one round.
///
/// An unset score is "absent", which is distinct from a score of zero.
/// Once a round has been handed to `Game::add_round_score` the game keeps
/// its own copy; later changes to this value do not reach the game.
///
/// ## Example
///
/// ```
/// use score_five::scoring::RoundScore;
///
/// let mut round = RoundScore::new(["Alice", "Bob"]).unwrap();
/// assert!(!round.is_complete());
///
/// round.set_score("Alice", 0).unwrap();
/// round.set_score("Bob", 12).unwrap();
/// assert!(round.is_complete());
/// assert_eq!(round.score_for("Bob").map(|s| s.value()), Some(12));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord", into = "RoundRecord")]
pub struct RoundScore {
    roster: Roster,
    scores: PlayerMap<Option<Score>>,
}

impl RoundScore {
    /// Create an empty round for the given players.
    ///
    /// Fails with `InvalidPlayerSet` for an empty roster, duplicate names or
    /// blank names.
    pub fn new<I, S>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_roster(Roster::new(players)?))
    }

    /// Create an empty round for an already validated roster.
    #[must_use]
    pub fn from_roster(roster: Roster) -> Self {
        let scores = PlayerMap::with_default(roster.len());
        Self { roster, scores }
    }

    /// The round's roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// The player's score, or `None` if it has not been set.
    ///
    /// Players outside the roster read as `None` as well.
    #[must_use]
    pub fn score_for(&self, player: &str) -> Option<Score> {
        self.roster
            .seat_of(player)
            .and_then(|seat| self.scores[seat])
    }

    /// Set a player's score.
    ///
    /// Accepts anything convertible into a `Score`; malformed values fail
    /// with `InvalidScore`, non-members with `UnknownPlayer`.
    pub fn set_score<V>(&mut self, player: &str, value: V) -> Result<()>
    where
        V: TryInto<Score>,
        ScoreError: From<V::Error>,
    {
        let seat = self.roster.require_seat(player)?;
        let score = value.try_into()?;
        trace!(player, %score, "score set");
        self.scores[seat] = Some(score);
        Ok(())
    }

    /// Clear a player's score. Clearing an absent score is a no-op.
    pub fn remove_score(&mut self, player: &str) -> Result<()> {
        let seat = self.roster.require_seat(player)?;
        if self.scores[seat].take().is_some() {
            trace!(player, "score removed");
        }
        Ok(())
    }

    /// Clear every score.
    pub fn erase_scores(&mut self) {
        for score in self.scores.values_mut() {
            *score = None;
        }
    }

    /// A copy of this round with one more score set.
    pub fn with_score<V>(&self, player: &str, value: V) -> Result<Self>
    where
        V: TryInto<Score>,
        ScoreError: From<V::Error>,
    {
        let mut round = self.clone();
        round.set_score(player, value)?;
        Ok(round)
    }

    /// A copy of this round with one score cleared.
    pub fn without_score(&self, player: &str) -> Result<Self> {
        let mut round = self.clone();
        round.remove_score(player)?;
        Ok(round)
    }

    /// Whether every roster player has a score.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scores.values().all(Option::is_some)
    }

    /// Players still waiting for a score, in seating order.
    #[must_use]
    pub fn missing_players(&self) -> Vec<&Player> {
        self.iter()
            .filter(|(_, score)| score.is_none())
            .map(|(player, _)| player)
            .collect()
    }

    /// Iterate over (player, score) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (&Player, Option<Score>)> {
        self.roster
            .iter()
            .map(move |(seat, player)| (player, self.scores[seat]))
    }

    /// Players who scored zero.
    ///
    /// Fails with `IncompleteRound` until every score is set.
    pub fn winners(&self) -> Result<Vec<&Player>> {
        let scores = self.complete_scores()?;
        Ok(scores
            .into_iter()
            .filter(|(_, score)| score.is_zero())
            .map(|(player, _)| player)
            .collect())
    }

    /// Players holding the round's highest score.
    ///
    /// Empty when every player has the same score. Fails with
    /// `IncompleteRound` until every score is set.
    pub fn losers(&self) -> Result<Vec<&Player>> {
        let scores = self.complete_scores()?;
        let max = scores.iter().map(|(_, s)| *s).max();
        let min = scores.iter().map(|(_, s)| *s).min();
        if max == min {
            return Ok(Vec::new());
        }
        Ok(scores
            .into_iter()
            .filter(|(_, score)| Some(*score) == max)
            .map(|(player, _)| player)
            .collect())
    }

    /// Score at a seat of this round's roster.
    pub(crate) fn score_at(&self, seat: Seat) -> Option<Score> {
        self.scores[seat]
    }

    pub(crate) fn incomplete_error(&self) -> ScoreError {
        ScoreError::IncompleteRound {
            missing: self
                .missing_players()
                .into_iter()
                .map(|p| p.as_str().to_owned())
                .collect(),
        }
    }

    fn complete_scores(&self) -> Result<Vec<(&Player, Score)>> {
        self.iter()
            .map(|(player, score)| score.map(|s| (player, s)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.incomplete_error())
    }
}
