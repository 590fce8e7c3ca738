//! Placement legality.
//!
//! Rules are checked one at a time across every covered cell, so the
//! reported [`Rejection`] is always the first rule in this list that
//! fails, not the rule of the first failing cell:
//!
//! 1. every covered cell lies on the board (`OutOfBounds`)
//! 2. no covered cell is a wall (`BlockedByWall`)
//! 3. no covered cell is contested (`OverlapsContested`)
//! 4. no covered cell holds opponent ink the move may not cover (`OverlapsOpponent`)
//! 5. no covered cell holds own ink the move may not cover (`OverlapsSelf`)
//! 6. some covered cell touches the player's ink (`NotConnected`)
//! 7. special attacks only: the gauge pays for the card (`InsufficientGauge`)
//!
//! A trivial placement may only cover empty cells and connects through any
//! of the player's ink. A special attack may also cover normal ink of either
//! player but connects only through the player's special ink. Special ink is
//! never coverable.

use serde::{Deserialize, Serialize};

use super::state::BoardState;
use crate::core::PlayerId;
use crate::error::Rejection;
use crate::grid::{Cell, Coord, Footprint, InkKind};

/// How a card is put on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    Trivial,
    Special,
}

impl PlacementKind {
    /// Whether this placement may cover inked cells of `kind`.
    fn may_cover(self, kind: InkKind) -> bool {
        self == PlacementKind::Special && kind == InkKind::Normal
    }

    /// Whether own ink of `kind` next to the placement connects it.
    fn connects_through(self, kind: InkKind) -> bool {
        match self {
            PlacementKind::Trivial => true,
            PlacementKind::Special => kind == InkKind::Special,
        }
    }
}

/// Check the board rules (1 to 6) for a placement.
///
/// ```
/// use tableturf_engine::board::{validate_placement, BoardState, PlacementKind};
/// use tableturf_engine::core::PlayerId;
/// use tableturf_engine::error::Rejection;
/// use tableturf_engine::grid::{Coord, Footprint};
///
/// let board = BoardState::parse("
///     A...
///     ....
///     ...B
/// ").unwrap();
/// let bar = Footprint::parse("==").unwrap();
///
/// let ok = validate_placement(&board, PlayerId::P0, PlacementKind::Trivial, &bar, Coord::new(1, 0));
/// assert_eq!(ok, Ok(()));
///
/// let far = validate_placement(&board, PlayerId::P0, PlacementKind::Trivial, &bar, Coord::new(2, 1));
/// assert_eq!(far, Err(Rejection::NotConnected));
/// ```
pub fn validate_placement(
    board: &BoardState,
    player: PlayerId,
    kind: PlacementKind,
    footprint: &Footprint,
    offset: Coord,
) -> Result<(), Rejection> {
    let covered: Vec<Coord> = footprint.cells().map(|(pos, _)| pos + offset).collect();

    // Off-board cells are gone after rule 1, so `cell` is total below.
    let mut cells = Vec::with_capacity(covered.len());
    for &pos in &covered {
        cells.push(board.cell(pos).ok_or(Rejection::OutOfBounds)?);
    }

    if cells.contains(&Cell::Wall) {
        return Err(Rejection::BlockedByWall);
    }
    if cells.contains(&Cell::Contested) {
        return Err(Rejection::OverlapsContested);
    }

    let blocked_by = |owner: PlayerId| {
        cells.iter().any(|cell| match *cell {
            Cell::Ink { player: p, kind: ink } => p == owner && !kind.may_cover(ink),
            _ => false,
        })
    };
    if blocked_by(player.opponent()) {
        return Err(Rejection::OverlapsOpponent);
    }
    if blocked_by(player) {
        return Err(Rejection::OverlapsSelf);
    }

    let connected = covered.iter().any(|&pos| {
        pos.neighbours().any(|n| match board.cell(n) {
            Some(Cell::Ink { player: p, kind: ink }) => p == player && kind.connects_through(ink),
            _ => false,
        })
    });
    if !connected {
        return Err(Rejection::NotConnected);
    }

    Ok(())
}

/// Check every rule, including the gauge for special attacks.
///
/// The cost of a special attack is the number of special cells in the
/// footprint.
pub fn validate(
    board: &BoardState,
    player: PlayerId,
    kind: PlacementKind,
    footprint: &Footprint,
    offset: Coord,
    gauge: u32,
) -> Result<(), Rejection> {
    validate_placement(board, player, kind, footprint, offset)?;

    if kind == PlacementKind::Special {
        let required = footprint.special_count();
        if gauge < required {
            return Err(Rejection::InsufficientGauge {
                required,
                available: gauge,
            });
        }
    }
    Ok(())
}
