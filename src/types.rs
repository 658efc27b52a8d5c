//! Core data types for the picker.
//!
//! The serialized shapes match what the page stores in `localStorage`:
//! a game is `{"main":[..6],"bonus":n}` and a history entry is
//! `{"games":[..],"at":millis}`.

use serde::{Deserialize, Serialize};

/// Highest number on the board (numbers are 1..=45).
pub const DOMAIN_SIZE: usize = 45;
/// Main numbers per game.
pub const MAIN_COUNT: usize = 6;
/// Main numbers plus the bonus.
pub const DRAW_COUNT: usize = MAIN_COUNT + 1;
/// Games in one generated pick.
pub const GAMES_PER_PICK: usize = 5;
/// Default cap on stored history entries.
pub const HISTORY_LIMIT: usize = 20;

/// One play: six main numbers and a bonus, all distinct and in [1, 45].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub main: [u8; MAIN_COUNT],
    pub bonus: u8,
}

impl Game {
    /// Check the game invariants: every value in range, all seven distinct.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; DOMAIN_SIZE + 1];
        for &n in self.main.iter().chain(std::iter::once(&self.bonus)) {
            let n = n as usize;
            if n == 0 || n > DOMAIN_SIZE || seen[n] {
                return false;
            }
            seen[n] = true;
        }
        true
    }

    pub fn is_sorted(&self) -> bool {
        self.main.windows(2).all(|w| w[0] < w[1])
    }
}

/// One generated batch of games.
pub type Pick = Vec<Game>;

/// A pick recorded in history. Fields are read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    games: Pick,
    #[serde(rename = "at")]
    created_at: i64,
}

impl HistoryEntry {
    pub fn new(games: Pick, created_at: i64) -> Self {
        Self { games, created_at }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Creation time in epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// A full pick of valid games.
    pub fn is_well_formed(&self) -> bool {
        self.games.len() == GAMES_PER_PICK && self.games.iter().all(Game::is_valid)
    }
}

/// Stored picks, newest first.
pub type History = Vec<HistoryEntry>;

/// Cosmetic color band of a number: 1-10, 11-20, 21-30, 31-40, 41-45.
pub fn band_of(n: u8) -> u8 {
    match n {
        0..=10 => 1,
        11..=20 => 2,
        21..=30 => 3,
        31..=40 => 4,
        _ => 5,
    }
}

/// The pick shown before anything has been generated.
pub fn demo_pick() -> Pick {
    vec![
        Game { main: [7, 12, 23, 29, 35, 41], bonus: 9 },
        Game { main: [3, 11, 19, 26, 32, 44], bonus: 15 },
        Game { main: [1, 8, 16, 24, 33, 45], bonus: 27 },
        Game { main: [5, 14, 21, 28, 39, 42], bonus: 10 },
        Game { main: [2, 13, 22, 30, 36, 40], bonus: 6 },
    ]
}
