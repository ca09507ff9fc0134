//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use score_five::{Game, RoundScore};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A complete round with `scores` given as (player, score) pairs, in roster order.
pub fn scored_round(scores: &[(&str, i32)]) -> RoundScore {
    let mut round = RoundScore::new(scores.iter().map(|(p, _)| *p)).unwrap();
    for (player, score) in scores {
        round.set_score(player, *score).unwrap();
    }
    round
}

/// Player names of a list, for readable assertions.
pub fn names<'a>(players: impl IntoIterator<Item = &'a score_five::Player>) -> Vec<&'a str> {
    players.into_iter().map(|p| p.as_str()).collect()
}

/// Append rounds that must all be accepted.
pub fn play(game: &mut Game, rounds: &[&[(&str, i32)]]) {
    for scores in rounds {
        game.add_round_score(&scored_round(scores)).unwrap();
    }
}
