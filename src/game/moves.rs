//! Move vocabulary and round records.
//!
//! A move names a hand slot, not a card. The card is looked up when the
//! round is applied and written into the [`RoundRecord`].

use serde::{Deserialize, Serialize};

use crate::board::PlacementKind;
use crate::catalog::CardId;
use crate::core::PlayerPair;
use crate::grid::{Coord, Rotation};

/// Orientation and anchor of a placed card.
///
/// `offset` is where the footprint's top-left corner lands; it may be
/// negative when the card's blank border hangs off the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub rotation: Rotation,
    pub offset: Coord,
}

impl Placement {
    #[must_use]
    pub const fn new(rotation: Rotation, offset: Coord) -> Self {
        Self { rotation, offset }
    }
}

/// One player's move for a round.
///
/// ```
/// use tableturf_engine::game::{Placement, PlayerMove};
/// use tableturf_engine::grid::{Coord, Rotation};
///
/// let mv = PlayerMove::Trivial {
///     slot: 2,
///     placement: Placement::new(Rotation::R90, Coord::new(3, -1)),
/// };
/// assert_eq!(mv.slot(), 2);
/// assert!(mv.placement().is_some());
/// assert!(PlayerMove::Discard { slot: 0 }.placement().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerMove {
    /// Throw the card away without placing it. Earns one gauge point.
    Discard { slot: usize },
    /// Place the card on empty cells next to the player's ink.
    Trivial { slot: usize, placement: Placement },
    /// Spend gauge to place the card over normal ink.
    Special { slot: usize, placement: Placement },
}

impl PlayerMove {
    /// Hand slot the move plays from.
    #[must_use]
    pub fn slot(&self) -> usize {
        match *self {
            PlayerMove::Discard { slot }
            | PlayerMove::Trivial { slot, .. }
            | PlayerMove::Special { slot, .. } => slot,
        }
    }

    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlayerMove::Discard { .. } => None,
            PlayerMove::Trivial { placement, .. } | PlayerMove::Special { placement, .. } => {
                Some(placement)
            }
        }
    }

    /// Placement kind, or `None` for a discard.
    #[must_use]
    pub fn kind(&self) -> Option<PlacementKind> {
        match self {
            PlayerMove::Discard { .. } => None,
            PlayerMove::Trivial { .. } => Some(PlacementKind::Trivial),
            PlayerMove::Special { .. } => Some(PlacementKind::Special),
        }
    }

    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, PlayerMove::Discard { .. })
    }
}

/// Accepted moves of one round, in the order rounds were played.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round counter value the moves were submitted for.
    pub round: u32,
    pub moves: PlayerPair<PlayerMove>,
    /// Cards the slots held when the round was applied.
    pub cards: PlayerPair<CardId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let mv = PlayerMove::Special {
            slot: 1,
            placement: Placement::new(Rotation::R180, Coord::new(-2, 4)),
        };
        let json = serde_json::to_value(mv).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "special": {
                    "slot": 1,
                    "placement": { "rotation": "R180", "offset": { "x": -2, "y": 4 } }
                }
            })
        );
        let back: PlayerMove = serde_json::from_value(json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn test_discard_json() {
        let back: PlayerMove = serde_json::from_str(r#"{"discard":{"slot":3}}"#).unwrap();
        assert_eq!(back, PlayerMove::Discard { slot: 3 });
        assert!(back.is_discard());
        assert_eq!(back.kind(), None);
    }

    #[test]
    fn test_kind() {
        let placement = Placement::default();
        assert_eq!(
            PlayerMove::Trivial { slot: 0, placement }.kind(),
            Some(PlacementKind::Trivial)
        );
        assert_eq!(
            PlayerMove::Special { slot: 0, placement }.kind(),
            Some(PlacementKind::Special)
        );
    }
}
