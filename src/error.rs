//! Error types for the engine.
//!
//! Two classes of failure exist:
//!
//! - [`Rejection`]: a proposed move broke one of the placement rules. This
//!   is an expected outcome reported back to the player; the state is left
//!   untouched.
//! - Everything else in [`EngineError`]: malformed catalog data, a round
//!   submitted out of order, a corrupted snapshot. The call fails closed.

use thiserror::Error;

use crate::catalog::{CardId, StageId};
use crate::core::PlayerId;

/// Why a move was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rejection {
    #[error("placement leaves the board")]
    OutOfBounds,

    #[error("placement covers a wall")]
    BlockedByWall,

    #[error("placement covers a contested cell")]
    OverlapsContested,

    #[error("placement covers the opponent's ink")]
    OverlapsOpponent,

    #[error("placement covers the player's own ink")]
    OverlapsSelf,

    #[error("placement does not touch the player's ink")]
    NotConnected,

    #[error("special attack needs {required} gauge, {available} available")]
    InsufficientGauge { required: u32, available: u32 },

    #[error("hand slot {0} does not exist")]
    InvalidHandSlot(usize),

    #[error("hand slot {0} is empty")]
    EmptyHandSlot(usize),
}

/// A seat index that names no player.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("seat {0} does not exist")]
pub struct UnknownSeat(pub u8);

/// Grid construction, access and text codec failures.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("{width}x{height} grid needs {expected} cells, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol { symbol: char, row: usize, column: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid text contains no rows")]
    Empty,
}

/// Malformed static catalog data.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("unknown stage {0}")]
    UnknownStage(StageId),

    #[error("{0} registered twice")]
    DuplicateCard(CardId),

    #[error("{0} registered twice")]
    DuplicateStage(StageId),

    #[error("{card} declares area {declared}, shape covers {actual}")]
    AreaMismatch {
        card: CardId,
        declared: u32,
        actual: u32,
    },

    #[error("{card} declares special cost {declared}, shape has {actual} special cells")]
    SpecialCostMismatch {
        card: CardId,
        declared: u32,
        actual: u32,
    },

    #[error("{card} has an empty shape")]
    EmptyShape { card: CardId },

    #[error("{stage} has no home cell for {player}")]
    MissingHome { stage: StageId, player: PlayerId },

    #[error("{stage} has ink at ({x}, {y}) that is not a home cell")]
    UnexpectedInk { stage: StageId, x: i32, y: i32 },

    #[error("layout error: {0}")]
    Layout(#[from] GridError),
}

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{player} move rejected: {reason}")]
    Rejected { player: PlayerId, reason: Rejection },

    #[error("round {got} submitted while round {expected} is pending")]
    RoundMismatch { expected: u32, got: u32 },

    #[error("match is finished")]
    MatchFinished,

    #[error("{player} cannot redraw: {reason}")]
    RedrawUnavailable {
        player: PlayerId,
        reason: &'static str,
    },

    #[error("{player} deck has {actual} cards, expected {expected}")]
    DeckSize {
        player: PlayerId,
        expected: usize,
        actual: usize,
    },

    #[error("state is inconsistent: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::BlockedByWall.to_string(), "placement covers a wall");
        assert_eq!(
            Rejection::InsufficientGauge {
                required: 3,
                available: 1
            }
            .to_string(),
            "special attack needs 3 gauge, 1 available"
        );
    }

    #[test]
    fn test_engine_error_wraps_rejection() {
        let err = EngineError::Rejected {
            player: PlayerId::P1,
            reason: Rejection::NotConnected,
        };
        assert_eq!(
            err.to_string(),
            "Player 1 move rejected: placement does not touch the player's ink"
        );
    }

    #[test]
    fn test_grid_error_converts() {
        let err: EngineError = GridError::Empty.into();
        assert!(matches!(err, EngineError::Grid(GridError::Empty)));
    }
}
