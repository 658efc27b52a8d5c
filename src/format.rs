//! Clipboard text for picks.

use crate::types::Game;

pub fn pad2(n: u8) -> String {
    format!("{:02}", n)
}

/// `"07, 12, 23, 29, 35, 41 + bonus 09"`
pub fn format_game(game: &Game) -> String {
    let main: Vec<String> = game.main.iter().map(|&n| pad2(n)).collect();
    format!("{} + bonus {}", main.join(", "), pad2(game.bonus))
}

/// One numbered line per game, starting at 1.
pub fn format_pick(pick: &[Game]) -> String {
    pick.iter()
        .enumerate()
        .map(|(i, game)| format!("{}) {}", i + 1, format_game(game)))
        .collect::<Vec<_>>()
        .join("\n")
}
