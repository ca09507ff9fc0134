//! The scoring model: rounds, games and standings.
//!
//! - `RoundScore`: one round's scores, filled in player by player
//! - `Game`: roster, limit and append-only round history
//! - `PlayerSort`, leaders/trailers: standings over a game's totals
//! - `GameResult`: summary of a finished game

mod round;
mod game;
mod standings;
mod result;

pub use round::RoundScore;
pub use game::Game;
pub use standings::PlayerSort;
pub use result::{GameResult, PlayerResult};
