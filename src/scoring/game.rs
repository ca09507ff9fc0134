//! A game of Five: roster, score limit and round history.
//!
//! ## Lifecycle
//!
//! A game is **active** while two or more players are alive and accepts
//! rounds through `add_round_score`. The append that leaves at most one
//! player alive moves it to **finished**, which is terminal.
//!
//! ## Derived state
//!
//! Per-player totals and the alive list are cached and updated on every
//! append. History is an `im::Vector`, so cloning a game (for
//! `with_round_score` or `first_rounds`) is O(1) in the number of rounds.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::roster::SeatList;
use crate::core::{GameConfig, Player, PlayerMap, Result, Roster, Score, ScoreError, Seat};
use crate::persist::GameRecord;

use super::round::RoundScore;

/// A game of Five.
///
/// ## Example
///
/// ```
/// use score_five::scoring::Game;
///
/// let mut game = Game::new(["A", "B", "C"], 50).unwrap();
///
/// let mut round = game.new_round().unwrap();
/// round.set_score("A", 20).unwrap();
/// round.set_score("B", 15).unwrap();
/// round.set_score("C", 60).unwrap();
/// game.add_round_score(&round).unwrap();
///
/// assert_eq!(game.total_score_for_player("C").unwrap(), 60);
/// assert_eq!(game.alive_players(), ["A", "B"]);
/// assert!(!game.is_finished());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    roster: Roster,
    config: GameConfig,
    rounds: Vector<RoundScore>,

    // === Derived ===
    totals: PlayerMap<i64>,
    alive: SeatList,
}

impl Game {
    /// Create a game with the default `Exceeds` policy and no round rules.
    ///
    /// Fails with `InvalidPlayerCount` for fewer than two players,
    /// `InvalidPlayerSet` for duplicate or blank names and
    /// `InvalidScoreLimit` for a non-positive limit.
    pub fn new<I, S>(players: I, score_limit: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(players, GameConfig::new(score_limit))
    }

    /// Create a game with a full configuration.
    pub fn with_config<I, S>(players: I, config: GameConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = players.into_iter().map(Into::into).collect();
        if names.len() < 2 {
            return Err(ScoreError::InvalidPlayerCount { count: names.len() });
        }
        let roster = Roster::new(names)?;
        config.validate()?;

        let totals = PlayerMap::with_value(roster.len(), 0);
        let alive = roster.seats().collect();
        Ok(Self {
            roster,
            config,
            rounds: Vector::new(),
            totals,
            alive,
        })
    }

    // === Queries ===

    /// The full roster in playing order, including eliminated players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// All players in playing order, including eliminated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn score_limit(&self) -> i64 {
        self.config.score_limit
    }

    #[must_use]
    pub fn number_of_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Round history in play order.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundScore> {
        self.rounds.iter()
    }

    /// The round at `index` (0-based, play order).
    pub fn round_score_at_index(&self, index: usize) -> Result<&RoundScore> {
        self.rounds.get(index).ok_or(ScoreError::IndexOutOfRange {
            index,
            len: self.rounds.len(),
        })
    }

    /// Sum of the player's scores over every round they played.
    ///
    /// An eliminated player's total stays frozen at the value that
    /// eliminated them.
    pub fn total_score_for_player(&self, player: &str) -> Result<i64> {
        let seat = self.roster.require_seat(player)?;
        Ok(self.totals[seat])
    }

    /// Players still in the game, in playing order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<&Player> {
        self.alive.iter().map(|&s| self.roster.player(s)).collect()
    }

    /// Players already out, in playing order.
    #[must_use]
    pub fn eliminated_players(&self) -> Vec<&Player> {
        self.roster
            .iter()
            .filter(|(seat, _)| !self.alive.contains(seat))
            .map(|(_, player)| player)
            .collect()
    }

    /// Whether the player is still in the game.
    pub fn is_alive(&self, player: &str) -> Result<bool> {
        let seat = self.roster.require_seat(player)?;
        Ok(self.alive.contains(&seat))
    }

    /// True once at most one player is alive.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.alive.len() <= 1
    }

    /// The player who deals first in round `round_index`.
    ///
    /// `round_index` may equal `number_of_rounds()` to ask about the next
    /// round. Until someone is eliminated the first seat rotates one place
    /// per round; afterwards it passes to the next alive player after the
    /// previous round's starter.
    pub fn starting_player(&self, round_index: usize) -> Result<&Player> {
        let len = self.rounds.len();
        if round_index > len {
            return Err(ScoreError::IndexOutOfRange {
                index: round_index,
                len,
            });
        }
        if round_index == len && self.is_finished() {
            return Err(ScoreError::GameFinished);
        }

        let count = self.roster.len();
        let mut totals: PlayerMap<i64> = PlayerMap::with_value(count, 0);
        let mut starter = Seat::new(0);
        for (i, round) in self.rounds.iter().take(round_index).enumerate() {
            self.accumulate(&mut totals, round);
            let alive = self.alive_under(&totals);
            starter = if alive.len() == count {
                Seat::new((i + 1) % count)
            } else {
                (1..=count)
                    .map(|step| Seat::new((starter.index() + step) % count))
                    .find(|seat| alive.contains(seat))
                    .unwrap_or(starter)
            };
        }
        Ok(self.roster.player(starter))
    }

    // === Mutation ===

    /// An empty round for the current alive players.
    ///
    /// Fails with `GameFinished` once the game is over.
    pub fn new_round(&self) -> Result<RoundScore> {
        if self.is_finished() {
            return Err(ScoreError::GameFinished);
        }
        Ok(RoundScore::from_roster(self.roster.select(&self.alive)?))
    }

    /// A round for the current alive players with scores from `score_for`.
    pub fn new_round_with<F, V>(&self, mut score_for: F) -> Result<RoundScore>
    where
        F: FnMut(&Player) -> V,
        V: TryInto<Score>,
        ScoreError: From<V::Error>,
    {
        let mut round = self.new_round()?;
        for &seat in &self.alive {
            let player = self.roster.player(seat);
            round.set_score(player.as_str(), score_for(player))?;
        }
        Ok(round)
    }

    /// Append a round to the history.
    ///
    /// The round must be complete, must be scored for exactly the alive
    /// players in playing order and must satisfy the configured round rules.
    /// The game stores its own copy; the caller's round is not retained.
    pub fn add_round_score(&mut self, round: &RoundScore) -> Result<()> {
        if let Err(err) = self.check_round(round) {
            debug!(round = self.rounds.len() + 1, error = %err, "round rejected");
            return Err(err);
        }
        self.push_round(round.clone());
        Ok(())
    }

    /// A copy of this game with `round` appended.
    pub fn with_round_score(&self, round: &RoundScore) -> Result<Self> {
        let mut game = self.clone();
        game.add_round_score(round)?;
        Ok(game)
    }

    /// A copy of this game holding only its first `count` rounds.
    pub fn first_rounds(&self, count: usize) -> Result<Self> {
        if count > self.rounds.len() {
            return Err(ScoreError::IndexOutOfRange {
                index: count,
                len: self.rounds.len(),
            });
        }
        let rounds = self.rounds.take(count);
        let mut totals = PlayerMap::with_value(self.roster.len(), 0);
        for round in &rounds {
            self.accumulate(&mut totals, round);
        }
        let alive = self.alive_under(&totals);
        Ok(Self {
            roster: self.roster.clone(),
            config: self.config,
            rounds,
            totals,
            alive,
        })
    }

    // === Internals ===

    fn check_round(&self, round: &RoundScore) -> Result<()> {
        if self.is_finished() {
            return Err(ScoreError::GameFinished);
        }
        if !round.is_complete() {
            return Err(round.incomplete_error());
        }

        let expected = self.alive_players();
        if round.players().iter().ne(expected.iter().copied()) {
            return Err(ScoreError::RoundPlayerMismatch {
                expected: expected.iter().map(|p| p.as_str().to_owned()).collect(),
                found: round.roster().names(),
            });
        }

        let rules = &self.config.round_rules;
        let scores: Vec<(&Player, Score)> = round
            .iter()
            .filter_map(|(player, score)| score.map(|s| (player, s)))
            .collect();

        if let Some((min, max)) = rules.score_bounds {
            if let Some((player, score)) = scores.iter().find(|(_, s)| !rules.allows(*s)) {
                return Err(ScoreError::ScoreOutOfRange {
                    player: player.as_str().to_owned(),
                    score: score.value(),
                    min,
                    max,
                });
            }
        }

        if rules.require_winner_and_loser {
            if !scores.iter().any(|(_, s)| s.is_zero()) {
                return Err(ScoreError::MissingRoundWinner);
            }
            if scores.iter().all(|(_, s)| s.is_zero()) {
                return Err(ScoreError::MissingRoundLoser);
            }
        }

        Ok(())
    }

    fn push_round(&mut self, round: RoundScore) {
        // The round's seats line up with `alive`, checked in `check_round`.
        for (i, &seat) in self.alive.iter().enumerate() {
            if let Some(score) = round.score_at(Seat::new(i)) {
                self.totals[seat] += i64::from(score);
            }
        }
        self.rounds.push_back(round);

        let alive = self.alive_under(&self.totals);
        let number = self.rounds.len();
        for &seat in self.alive.iter().filter(|s| !alive.contains(*s)) {
            info!(
                round = number,
                player = %self.roster.player(seat),
                total = self.totals[seat],
                limit = self.config.score_limit,
                "player eliminated"
            );
        }
        self.alive = alive;

        debug!(round = number, alive = self.alive.len(), "round accepted");
        if self.is_finished() {
            match self.alive.first() {
                Some(&winner) => info!(
                    rounds = number,
                    winner = %self.roster.player(winner),
                    "game finished"
                ),
                None => info!(rounds = number, "game finished with every player eliminated"),
            }
        }
    }

    /// Add a round's scores onto `totals`, matching players by name.
    fn accumulate(&self, totals: &mut PlayerMap<i64>, round: &RoundScore) {
        for (player, score) in round.iter() {
            if let (Some(seat), Some(score)) = (self.roster.seat_of(player.as_str()), score) {
                totals[seat] += i64::from(score);
            }
        }
    }

    fn alive_under(&self, totals: &PlayerMap<i64>) -> SeatList {
        self.roster
            .seats()
            .filter(|&seat| !self.config.is_eliminated(totals[seat]))
            .collect()
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.roster == other.roster && self.config == other.config && self.rounds == other.rounds
    }
}

impl Eq for Game {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EliminationPolicy, RoundRules};

    fn round(players: &[&str], scores: &[i32]) -> RoundScore {
        let mut round = RoundScore::new(players.iter().copied()).unwrap();
        for (player, score) in players.iter().zip(scores) {
            round.set_score(player, *score).unwrap();
        }
        round
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(["A", "B", "C"], 50).unwrap();
        assert_eq!(game.alive_players(), ["A", "B", "C"]);
        assert_eq!(game.number_of_rounds(), 0);
        assert!(!game.is_finished());
        assert_eq!(game.total_score_for_player("B").unwrap(), 0);
        assert!(game.eliminated_players().is_empty());
    }

    #[test]
    fn test_new_game_validation() {
        assert_eq!(
            Game::new(["A"], 50),
            Err(ScoreError::InvalidPlayerCount { count: 1 })
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            Game::new(empty, 50),
            Err(ScoreError::InvalidPlayerCount { count: 0 })
        );
        assert!(matches!(
            Game::new(["A", "A"], 50),
            Err(ScoreError::InvalidPlayerSet(_))
        ));
        assert!(matches!(
            Game::new(["A", "B"], 0),
            Err(ScoreError::InvalidScoreLimit { limit: 0, .. })
        ));
        assert!(Game::new(["A", "B"], -1).is_err());
    }

    #[test]
    fn test_large_table() {
        let names: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
        let mut game = Game::new(names.iter().cloned(), 10).unwrap();
        assert_eq!(game.alive_players().len(), 256);

        let round = game
            .new_round_with(|p| if p == "p255" { 11 } else { 0 })
            .unwrap();
        game.add_round_score(&round).unwrap();

        assert_eq!(game.total_score_for_player("p255").unwrap(), 11);
        assert!(!game.is_alive("p255").unwrap());
        assert_eq!(game.alive_players().len(), 255);
        assert_eq!(game.starting_player(1).unwrap().as_str(), "p1");
    }

    #[test]
    fn test_three_player_scenario() {
        let mut game = Game::new(["A", "B", "C"], 50).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[20, 15, 60]))
            .unwrap();
        assert_eq!(game.total_score_for_player("C").unwrap(), 60);
        assert_eq!(game.alive_players(), ["A", "B"]);
        assert_eq!(game.eliminated_players(), ["C"]);
        assert!(!game.is_finished());

        let with_c = round(&["A", "B", "C"], &[0, 5, 5]);
        assert!(matches!(
            game.add_round_score(&with_c),
            Err(ScoreError::RoundPlayerMismatch { .. })
        ));

        game.add_round_score(&round(&["A", "B"], &[40, 10])).unwrap();
        assert_eq!(game.total_score_for_player("A").unwrap(), 60);
        assert_eq!(game.total_score_for_player("C").unwrap(), 60);
        assert_eq!(game.alive_players(), ["B"]);
        assert!(game.is_finished());
        assert_eq!(game.number_of_rounds(), 2);
    }

    #[test]
    fn test_add_round_check_order() {
        let mut game = Game::new(["A", "B"], 10).unwrap();

        // Incomplete wins over mismatch.
        let partial = RoundScore::new(["B", "A"]).unwrap().with_score("A", 1).unwrap();
        assert!(matches!(
            game.add_round_score(&partial),
            Err(ScoreError::IncompleteRound { .. })
        ));

        let reordered = round(&["B", "A"], &[1, 1]);
        assert!(matches!(
            game.add_round_score(&reordered),
            Err(ScoreError::RoundPlayerMismatch { .. })
        ));

        game.add_round_score(&round(&["A", "B"], &[11, 0])).unwrap();
        assert!(game.is_finished());

        // Finished wins over everything else.
        assert_eq!(
            game.add_round_score(&partial),
            Err(ScoreError::GameFinished)
        );
        assert_eq!(game.number_of_rounds(), 1);
    }

    #[test]
    fn test_incomplete_round_is_not_appended() {
        let mut game = Game::new(["A", "B", "C"], 50).unwrap();
        let partial = game.new_round().unwrap().with_score("A", 3).unwrap();
        assert_eq!(
            game.add_round_score(&partial),
            Err(ScoreError::IncompleteRound {
                missing: vec!["B".to_owned(), "C".to_owned()]
            })
        );
        assert_eq!(game.number_of_rounds(), 0);
        assert_eq!(game.total_score_for_player("A").unwrap(), 0);
    }

    #[test]
    fn test_history_is_snapshotted() {
        let mut game = Game::new(["A", "B"], 50).unwrap();
        let mut round = round(&["A", "B"], &[5, 0]);
        game.add_round_score(&round).unwrap();

        round.set_score("A", 49).unwrap();
        round.remove_score("B").unwrap();

        let stored = game.round_score_at_index(0).unwrap();
        assert_eq!(stored.score_for("A"), Some(Score::new(5)));
        assert_eq!(stored.score_for("B"), Some(Score::ZERO));
        assert_eq!(game.total_score_for_player("A").unwrap(), 5);
    }

    #[test]
    fn test_round_index_bounds() {
        let mut game = Game::new(["A", "B"], 50).unwrap();
        assert_eq!(
            game.round_score_at_index(0),
            Err(ScoreError::IndexOutOfRange { index: 0, len: 0 })
        );
        game.add_round_score(&round(&["A", "B"], &[1, 2])).unwrap();
        assert!(game.round_score_at_index(0).is_ok());
        assert!(game.round_score_at_index(1).is_err());
    }

    #[test]
    fn test_unknown_player_queries() {
        let game = Game::new(["A", "B"], 50).unwrap();
        assert_eq!(
            game.total_score_for_player("Z"),
            Err(ScoreError::unknown_player("Z"))
        );
        assert!(game.is_alive("Z").is_err());
        assert!(game.is_alive("A").unwrap());
    }

    #[test]
    fn test_exceeds_policy_boundary() {
        let mut game = Game::new(["A", "B", "C"], 50).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[50, 51, 0]))
            .unwrap();
        assert_eq!(game.alive_players(), ["A", "C"]);
    }

    #[test]
    fn test_reaches_policy_boundary() {
        let config = GameConfig::new(50).with_policy(EliminationPolicy::Reaches);
        let mut game = Game::with_config(["A", "B", "C"], config).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[49, 50, 0]))
            .unwrap();
        assert_eq!(game.alive_players(), ["A", "C"]);
    }

    #[test]
    fn test_everyone_eliminated_at_once() {
        let mut game = Game::new(["A", "B", "C"], 10).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[11, 12, 13]))
            .unwrap();
        assert!(game.alive_players().is_empty());
        assert!(game.is_finished());
        assert_eq!(game.new_round(), Err(ScoreError::GameFinished));
    }

    #[test]
    fn test_round_rules_are_enforced() {
        let mut game = Game::with_config(["A", "B"], GameConfig::five()).unwrap();

        assert!(matches!(
            game.add_round_score(&round(&["A", "B"], &[0, 51])),
            Err(ScoreError::ScoreOutOfRange { score: 51, min: 0, max: 50, .. })
        ));
        assert_eq!(
            game.add_round_score(&round(&["A", "B"], &[3, 4])),
            Err(ScoreError::MissingRoundWinner)
        );
        assert_eq!(
            game.add_round_score(&round(&["A", "B"], &[0, 0])),
            Err(ScoreError::MissingRoundLoser)
        );
        assert_eq!(game.number_of_rounds(), 0);

        game.add_round_score(&round(&["A", "B"], &[0, 50])).unwrap();
        assert_eq!(game.total_score_for_player("B").unwrap(), 50);
    }

    #[test]
    fn test_unbounded_rules_accept_negative_scores() {
        let config = GameConfig::new(100).with_round_rules(RoundRules::unrestricted());
        let mut game = Game::with_config(["A", "B"], config).unwrap();
        game.add_round_score(&round(&["A", "B"], &[-10, 5])).unwrap();
        assert_eq!(game.total_score_for_player("A").unwrap(), -10);
    }

    #[test]
    fn test_new_round_with() {
        let game = Game::new(["A", "B", "C"], 50).unwrap();
        let round = game
            .new_round_with(|p| if p == "B" { 0 } else { 7 })
            .unwrap();
        assert!(round.is_complete());
        assert_eq!(round.score_for("B"), Some(Score::ZERO));
        assert_eq!(round.score_for("C"), Some(Score::new(7)));
    }

    #[test]
    fn test_with_round_score_leaves_original() {
        let game = Game::new(["A", "B"], 50).unwrap();
        let next = game.with_round_score(&round(&["A", "B"], &[3, 4])).unwrap();
        assert_eq!(game.number_of_rounds(), 0);
        assert_eq!(next.number_of_rounds(), 1);
        assert_ne!(game, next);
    }

    #[test]
    fn test_first_rounds() {
        let mut game = Game::new(["A", "B", "C"], 50).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[20, 15, 60]))
            .unwrap();
        game.add_round_score(&round(&["A", "B"], &[40, 10])).unwrap();

        let start = game.first_rounds(0).unwrap();
        assert_eq!(start, Game::new(["A", "B", "C"], 50).unwrap());
        assert_eq!(start.alive_players(), ["A", "B", "C"]);

        let one = game.first_rounds(1).unwrap();
        assert_eq!(one.alive_players(), ["A", "B"]);
        assert_eq!(one.total_score_for_player("A").unwrap(), 20);

        assert_eq!(game.first_rounds(2).unwrap(), game);
        assert!(game.first_rounds(3).is_err());
    }

    #[test]
    fn test_starting_player_rotation() {
        let mut game = Game::new(["A", "B", "C"], 50).unwrap();
        assert_eq!(game.starting_player(0).unwrap(), "A");

        game.add_round_score(&round(&["A", "B", "C"], &[1, 1, 1])).unwrap();
        game.add_round_score(&round(&["A", "B", "C"], &[1, 1, 1])).unwrap();
        assert_eq!(game.starting_player(1).unwrap(), "B");
        assert_eq!(game.starting_player(2).unwrap(), "C");

        // B goes out in round 3; round 4 passes from C to the next alive, A.
        game.add_round_score(&round(&["A", "B", "C"], &[1, 60, 1])).unwrap();
        assert_eq!(game.starting_player(3).unwrap(), "A");
        game.add_round_score(&round(&["A", "C"], &[1, 1])).unwrap();
        assert_eq!(game.starting_player(4).unwrap(), "C");

        assert!(matches!(
            game.starting_player(6),
            Err(ScoreError::IndexOutOfRange { index: 6, .. })
        ));
    }

    #[test]
    fn test_starting_player_after_finish() {
        let mut game = Game::new(["A", "B"], 10).unwrap();
        game.add_round_score(&round(&["A", "B"], &[0, 11])).unwrap();
        assert_eq!(game.starting_player(0).unwrap(), "A");
        assert_eq!(game.starting_player(1), Err(ScoreError::GameFinished));
    }

    #[test]
    fn test_game_equality() {
        let a = Game::new(["A", "B"], 50).unwrap();
        assert_eq!(a, Game::new(["A", "B"], 50).unwrap());
        assert_ne!(a, Game::new(["B", "A"], 50).unwrap());
        assert_ne!(a, Game::new(["A", "B"], 51).unwrap());

        let r1 = round(&["A", "B"], &[1, 2]);
        let r2 = round(&["A", "B"], &[2, 1]);
        let ab = a.with_round_score(&r1).unwrap().with_round_score(&r2).unwrap();
        let ba = a.with_round_score(&r2).unwrap().with_round_score(&r1).unwrap();
        assert_ne!(ab, ba);
    }
}
