//! Leaderboard queries over a game's totals.
//!
//! Lower totals are better in Five. Sorts are stable, so players with equal
//! totals keep their playing order.

use serde::{Deserialize, Serialize};

use crate::core::Player;

use super::game::Game;

/// Ordering for player lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSort {
    /// The order in which players play.
    #[default]
    PlayingOrder,
    /// Lowest total first.
    WinningToLosing,
    /// Highest total first.
    LosingToWinning,
}

impl Game {
    /// All players, including eliminated ones, in the requested order.
    #[must_use]
    pub fn players_sorted(&self, sort: PlayerSort) -> Vec<&Player> {
        self.sort_players(self.players().iter().collect(), sort)
    }

    /// Alive players in the requested order.
    #[must_use]
    pub fn alive_players_sorted(&self, sort: PlayerSort) -> Vec<&Player> {
        self.sort_players(self.alive_players(), sort)
    }

    /// Alive players sharing the lowest total.
    #[must_use]
    pub fn leaders(&self) -> Vec<&Player> {
        self.with_extreme_total(self.alive_players(), |a, b| a < b)
    }

    /// Players, eliminated or not, sharing the highest total.
    #[must_use]
    pub fn trailers(&self) -> Vec<&Player> {
        self.with_extreme_total(self.players().iter().collect(), |a, b| a > b)
    }

    /// Alive players sharing the highest total among the alive.
    #[must_use]
    pub fn alive_trailers(&self) -> Vec<&Player> {
        self.with_extreme_total(self.alive_players(), |a, b| a > b)
    }

    pub(crate) fn total_of(&self, player: &Player) -> i64 {
        // Only called with players from this game's roster.
        self.total_score_for_player(player.as_str()).unwrap_or_default()
    }

    fn sort_players<'a>(&'a self, mut players: Vec<&'a Player>, sort: PlayerSort) -> Vec<&'a Player> {
        match sort {
            PlayerSort::PlayingOrder => {}
            PlayerSort::WinningToLosing => players.sort_by_key(|p| self.total_of(p)),
            PlayerSort::LosingToWinning => {
                players.sort_by_key(|p| std::cmp::Reverse(self.total_of(p)))
            }
        }
        players
    }

    fn with_extreme_total<'a>(
        &'a self,
        players: Vec<&'a Player>,
        better: impl Fn(i64, i64) -> bool,
    ) -> Vec<&'a Player> {
        let Some(best) = players
            .iter()
            .map(|p| self.total_of(p))
            .reduce(|acc, t| if better(t, acc) { t } else { acc })
        else {
            return Vec::new();
        };
        players
            .into_iter()
            .filter(|p| self.total_of(p) == best)
            .collect()
    }
}
