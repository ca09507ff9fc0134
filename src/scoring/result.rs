//! Final results of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Player, Result, Score, ScoreError};

use super::game::Game;

/// A round score of fifty is the table maximum. The `non_fifty` statistics
/// leave those rounds out.
const FIFTY: Score = Score::new(GameConfig::FIVE_MAX_ROUND_SCORE);

/// Per-player statistics over a whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: Player,
    pub total: i64,
    pub rounds_played: usize,
    /// Rounds in which the player scored zero.
    pub wins: usize,
    /// Rounds in which the player held the highest score.
    pub losses: usize,
    /// Rounds in which the player took exactly fifty.
    pub fifties: usize,
    /// Lowest score above zero, if any.
    pub best_non_zero_score: Option<Score>,
    /// Highest score taken in a single round.
    pub worst_score: Option<Score>,
    /// Highest score taken in a round that was not a fifty.
    pub worst_non_fifty_score: Option<Score>,
    pub average_score: Option<f64>,
    pub average_non_fifty_score: Option<f64>,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// The last player standing. `None` if everyone went out in the same round.
    pub winner: Option<Player>,
    /// Players sharing the highest total.
    pub losers: Vec<Player>,
    pub rounds: usize,
    /// Mean of every score recorded in the game.
    pub average_score: f64,
    /// Mean of every score other than fifty; `None` if all were fifties.
    pub average_non_fifty_score: Option<f64>,
    /// One entry per player, in playing order.
    pub players: Vec<PlayerResult>,
}

impl GameResult {
    /// Results for one player.
    pub fn player_result(&self, player: &str) -> Result<&PlayerResult> {
        self.players
            .iter()
            .find(|r| r.player == *player)
            .ok_or_else(|| ScoreError::unknown_player(player))
    }
}

impl Game {
    /// Summarize a finished game.
    ///
    /// Fails with `GameNotFinished` while two or more players are alive.
    pub fn result(&self) -> Result<GameResult> {
        if !self.is_finished() {
            return Err(ScoreError::GameNotFinished);
        }

        let all_scores: Vec<Score> = self
            .rounds()
            .flat_map(|round| round.iter().filter_map(|(_, s)| s))
            .collect();

        let players = self
            .players()
            .iter()
            .map(|player| self.player_result(player))
            .collect::<Result<Vec<_>>>()?;

        Ok(GameResult {
            winner: self.alive_players().first().map(|&p| p.clone()),
            losers: self.trailers().into_iter().cloned().collect(),
            rounds: self.number_of_rounds(),
            average_score: mean(&all_scores).unwrap_or_default(),
            average_non_fifty_score: mean(&without_fifties(&all_scores)),
            players,
        })
    }

    fn player_result(&self, player: &Player) -> Result<PlayerResult> {
        let mut scores = Vec::new();
        let mut wins = 0;
        let mut losses = 0;
        for round in self.rounds() {
            let Some(score) = round.score_for(player.as_str()) else {
                continue;
            };
            scores.push(score);
            if score.is_zero() {
                wins += 1;
            }
            if round.losers()?.contains(&player) {
                losses += 1;
            }
        }

        let non_fifty = without_fifties(&scores);
        Ok(PlayerResult {
            player: player.clone(),
            total: self.total_of(player),
            rounds_played: scores.len(),
            wins,
            losses,
            fifties: scores.len() - non_fifty.len(),
            best_non_zero_score: scores.iter().copied().filter(|s| !s.is_zero()).min(),
            worst_score: scores.iter().copied().max(),
            worst_non_fifty_score: non_fifty.iter().copied().max(),
            average_score: mean(&scores),
            average_non_fifty_score: mean(&non_fifty),
        })
    }
}

fn without_fifties(scores: &[Score]) -> Vec<Score> {
    scores.iter().copied().filter(|&s| s != FIFTY).collect()
}

fn mean(scores: &[Score]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    Some(sum as f64 / scores.len() as f64)
}
