//! Ordered, duplicate-free player lists.
//!
//! A `Roster` fixes the seating order of a round or a game. Lookups by name
//! go through an `FxHashMap` so per-player operations stay O(1).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{Result, ScoreError};
use super::player::{Player, Seat};

/// Most tables seat at most eight players; larger rosters spill to the heap.
pub(crate) type SeatList = SmallVec<[Seat; 8]>;

/// An ordered, non-empty, duplicate-free sequence of players.
///
/// ```
/// use score_five::core::{Roster, Seat};
///
/// let roster = Roster::new(["Alice", "Bob", "Cleo"]).unwrap();
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.seat_of("Bob"), Some(Seat::new(1)));
/// assert!(Roster::new(["Alice", "Alice"]).is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: SmallVec<[Player; 8]>,
    seats: FxHashMap<Player, Seat>,
}

impl Roster {
    /// Build a roster from player names, validating each one.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .map(Player::new)
            .collect::<Result<Vec<_>>>()?;
        Self::from_players(players)
    }

    /// Build a roster from already validated players.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let players: SmallVec<[Player; 8]> = players.into_iter().collect();
        if players.is_empty() {
            return Err(ScoreError::invalid_player_set("roster must not be empty"));
        }

        let mut seats = FxHashMap::default();
        for (i, player) in players.iter().enumerate() {
            if seats.insert(player.clone(), Seat::new(i)).is_some() {
                return Err(ScoreError::invalid_player_set(format!(
                    "duplicate player {:?}",
                    player.as_str()
                )));
            }
        }

        Ok(Self { players, seats })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: rosters are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat of the named player, if they are on this roster.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.seats.get(name).copied()
    }

    /// Seat of the named player, or `UnknownPlayer`.
    pub fn require_seat(&self, name: &str) -> Result<Seat> {
        self.seat_of(name)
            .ok_or_else(|| ScoreError::unknown_player(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seats.contains_key(name)
    }

    /// The player sitting at `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate over (Seat, &Player) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (Seat::new(i), p))
    }

    /// Iterate over all seats.
    pub fn seats(&self) -> impl Iterator<Item = Seat> {
        Seat::all(self.players.len())
    }

    /// Player names as owned strings, for error reporting.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.as_str().to_owned()).collect()
    }

    /// Sub-roster of the given seats, kept in the order supplied.
    pub(crate) fn select(&self, seats: &[Seat]) -> Result<Self> {
        Self::from_players(seats.iter().map(|&s| self.player(s).clone()))
    }
}

impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players
    }
}

impl Eq for Roster {}

impl TryFrom<Vec<Player>> for Roster {
    type Error = ScoreError;

    fn try_from(players: Vec<Player>) -> Result<Self> {
        Self::from_players(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players.into_vec()
    }
}
