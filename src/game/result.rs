//! Final outcome of a match.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::PlayerId;

/// Result of a finished match, decided by painted area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players painted the same area.
    Draw,
}

impl GameResult {
    /// Compare final areas on `board`.
    #[must_use]
    pub fn from_board(board: &BoardState) -> Self {
        let (a, b) = (board.area(PlayerId::P0), board.area(PlayerId::P1));
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::P0),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::P1),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
