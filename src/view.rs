//! Render descriptions for the page.
//!
//! These are plain data: the JS side turns them into DOM nodes. Nothing here
//! touches the document.

use serde::Serialize;

use crate::types::{band_of, Game, HistoryEntry};

pub const EMPTY_HISTORY_TEXT: &str = "No picks generated yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BallView {
    pub number: u8,
    pub band: u8,
}

impl BallView {
    fn of(number: u8) -> Self {
        Self { number, band: band_of(number) }
    }
}

/// One game row: 1-based label, six main balls and the bonus ball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameLineView {
    pub index: usize,
    pub main: Vec<BallView>,
    pub bonus: BallView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickView {
    pub lines: Vec<GameLineView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemView {
    pub created_at: i64,
    pub lines: Vec<GameLineView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HistoryView {
    Empty { text: &'static str },
    Entries { items: Vec<HistoryItemView> },
}

fn render_lines(games: &[Game]) -> Vec<GameLineView> {
    games
        .iter()
        .enumerate()
        .map(|(i, game)| GameLineView {
            index: i + 1,
            main: game.main.iter().copied().map(BallView::of).collect(),
            bonus: BallView::of(game.bonus),
        })
        .collect()
}

pub fn render_pick(pick: &[Game]) -> PickView {
    PickView { lines: render_lines(pick) }
}

pub fn render_history(history: &[HistoryEntry]) -> HistoryView {
    if history.is_empty() {
        return HistoryView::Empty { text: EMPTY_HISTORY_TEXT };
    }
    HistoryView::Entries {
        items: history
            .iter()
            .map(|entry| HistoryItemView {
                created_at: entry.created_at(),
                lines: render_lines(entry.games()),
            })
            .collect(),
    }
}
