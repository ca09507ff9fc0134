//! Plain serde records for rounds and games.
//!
//! Records carry only source state: rosters, configuration and scores.
//! Converting a record back into a model type replays the public
//! constructors and mutations, so a tampered or truncated record fails with
//! the same `ScoreError` a live caller would get.

use serde::de::{Deserializer, Error as DeserializeError, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::{GameConfig, Player, ScoreError, Score};
use crate::scoring::{Game, RoundScore};

/// One round: its roster in seating order and whatever scores are set.
///
/// A player on the roster without an entry in `scores` has no score yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub players: Vec<Player>,
    /// A player may appear at most once; a repeated key fails to decode.
    #[serde(deserialize_with = "unique_scores")]
    pub scores: BTreeMap<Player, Score>,
}

/// A whole game: roster, configuration and round history in play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub players: Vec<Player>,
    pub config: GameConfig,
    pub rounds: Vec<RoundRecord>,
}

struct UniqueScoresVisitor;

impl<'de> Visitor<'de> for UniqueScoresVisitor {
    type Value = BTreeMap<Player, Score>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from player name to score with no repeated players")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut scores = BTreeMap::new();
        while let Some((player, score)) = access.next_entry::<Player, Score>()? {
            if scores.contains_key(&player) {
                return Err(DeserializeError::custom(format!(
                    "duplicate score for player {:?}",
                    player.as_str()
                )));
            }
            scores.insert(player, score);
        }
        Ok(scores)
    }
}

fn unique_scores<'de, D>(deserializer: D) -> Result<BTreeMap<Player, Score>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(UniqueScoresVisitor)
}

impl From<&RoundScore> for RoundRecord {
    fn from(round: &RoundScore) -> Self {
        Self {
            players: round.players().to_vec(),
            scores: round
                .iter()
                .filter_map(|(player, score)| score.map(|s| (player.clone(), s)))
                .collect(),
        }
    }
}

impl From<RoundScore> for RoundRecord {
    fn from(round: RoundScore) -> Self {
        Self::from(&round)
    }
}

impl TryFrom<RoundRecord> for RoundScore {
    type Error = ScoreError;

    fn try_from(record: RoundRecord) -> Result<Self, ScoreError> {
        let mut round = RoundScore::new(record.players)?;
        for (player, score) in record.scores {
            round.set_score(player.as_str(), score)?;
        }
        Ok(round)
    }
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            players: game.players().to_vec(),
            config: *game.config(),
            rounds: game.rounds().map(RoundRecord::from).collect(),
        }
    }
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = ScoreError;

    fn try_from(record: GameRecord) -> Result<Self, ScoreError> {
        let mut game = Game::with_config(record.players, record.config)?;
        for round in record.rounds {
            game.add_round_score(&RoundScore::try_from(round)?)?;
        }
        Ok(game)
    }
}
