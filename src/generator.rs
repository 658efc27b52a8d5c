//! Game and pick generation.
//!
//! A game draws 7 distinct numbers in one shot: the first 6 are the main
//! numbers and the 7th is the bonus, so the bonus can never repeat a main.

use tracing::debug;

use crate::error::Result;
use crate::rng::RandomSource;
use crate::sampler::sample;
use crate::types::{Game, Pick, DOMAIN_SIZE, DRAW_COUNT, GAMES_PER_PICK, MAIN_COUNT};

/// Generate one game. With `sort_main` the main numbers are ascending,
/// otherwise they keep draw order.
pub fn generate_game<R: RandomSource + ?Sized>(sort_main: bool, rng: &mut R) -> Result<Game> {
    let drawn = sample(DOMAIN_SIZE, DRAW_COUNT, rng)?;

    let mut main = [0u8; MAIN_COUNT];
    main.copy_from_slice(&drawn[..MAIN_COUNT]);
    if sort_main {
        main.sort_unstable();
    }

    Ok(Game {
        main,
        bonus: drawn[MAIN_COUNT],
    })
}

/// Generate a pick of independent games.
pub fn generate_pick<R: RandomSource + ?Sized>(sort_main: bool, rng: &mut R) -> Result<Pick> {
    let pick = (0..GAMES_PER_PICK)
        .map(|_| generate_game(sort_main, rng))
        .collect::<Result<Pick>>()?;
    debug!(games = pick.len(), sort_main, "generated pick");
    Ok(pick)
}
