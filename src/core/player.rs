//! Player identification and per-seat data storage.
//!
//! ## Player
//!
//! A validated, non-blank player name. This is the identifier callers use.
//!
//! ## Seat
//!
//! A player's 0-based position inside one roster.
//!
//! ## PlayerMap
//!
//! One slot per seat, so a round's scores or a game's running totals are
//! reached by `Seat` without hashing names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::ops::{Index, IndexMut};

use super::error::{Result, ScoreError};

/// A player's name.
///
/// Names are opaque to the model: they are compared exactly and never
/// normalized. A name must contain at least one non-whitespace character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Player(String);

impl Player {
    /// Create a player from a name.
    ///
    /// ```
    /// use score_five::core::Player;
    ///
    /// let alice = Player::new("Alice").unwrap();
    /// assert_eq!(alice.as_str(), "Alice");
    /// assert!(Player::new("  ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScoreError::invalid_player_set(
                "player names must contain at least one character",
            ));
        }
        Ok(Self(name))
    }

    /// The player's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Player {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for Player {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Player {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Player {
    type Error = ScoreError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for Player {
    type Error = ScoreError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.0
    }
}

/// Seat index inside a roster.
///
/// Seats are 0-based: the first player in a roster sits at `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(pub usize);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(seat: usize) -> Self {
        Self(seat)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over all seats of a roster with `player_count` players.
    ///
    /// ```
    /// use score_five::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], Seat::new(0));
    /// assert_eq!(seats[3], Seat::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        (0..player_count).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A value for every seat of a roster, such as a score or a running total.
///
/// Maps are sized from a validated `Roster`; indexing with a seat from a
/// different roster is a logic error and panics when out of bounds.
///
/// ## Example
///
/// ```
/// use score_five::core::{PlayerMap, Seat};
///
/// let mut totals: PlayerMap<i64> = PlayerMap::with_value(3, 0);
/// totals[Seat::new(1)] += 15;
/// assert_eq!(totals[Seat::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`.
    pub fn new(seat_count: usize, factory: impl Fn(Seat) -> T) -> Self {
        assert!(seat_count > 0, "roster must seat at least one player");
        Self {
            data: Seat::all(seat_count).map(factory).collect(),
        }
    }

    /// Start every seat at `value`, e.g. zero totals.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Start every seat empty, e.g. a round with no scores yet.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Seats paired with their values, in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Seat(i), v))
    }

    /// Values in seating order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Mutable values in seating order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<Seat> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for PlayerMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_rejects_blank_names() {
        assert!(Player::new("").is_err());
        assert!(Player::new(" \t").is_err());
        assert_eq!(Player::new(" Bo ").unwrap().as_str(), " Bo ");
    }

    #[test]
    fn test_player_display_and_borrow() {
        let player = Player::new("Alice").unwrap();
        assert_eq!(format!("{}", player), "Alice");
        let name: &str = player.borrow();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_player_serde_validates() {
        let player = Player::new("Alice").unwrap();
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(json, "\"Alice\"");
        assert_eq!(serde_json::from_str::<Player>(&json).unwrap(), player);
        assert!(serde_json::from_str::<Player>("\"\"").is_err());
    }

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s1 = Seat::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s1), "Seat 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i64> = PlayerMap::new(4, |s| s.index() as i64 * 10);

        assert_eq!(map[Seat::new(0)], 0);
        assert_eq!(map[Seat::new(3)], 30);
        assert_eq!(map.values().count(), 4);
    }

    #[test]
    fn test_player_map_has_no_seat_cap() {
        let map: PlayerMap<Option<i32>> = PlayerMap::with_default(300);
        assert_eq!(map.iter().last().map(|(seat, _)| seat), Some(Seat::new(299)));
        assert_eq!(Seat::all(300).count(), 300);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<Option<i32>> = PlayerMap::with_default(3);
        map[Seat::new(2)] = Some(7);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (Seat::new(0), &None));
        assert_eq!(pairs[2], (Seat::new(2), &Some(7)));

        for value in map.values_mut() {
            *value = Some(1);
        }
        assert!(map.values().all(|v| *v == Some(1)));
    }

    #[test]
    #[should_panic(expected = "roster must seat at least one player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
