//! Simultaneous stamping of both players' placements.
//!
//! ## Algorithm
//!
//! 1. Every proposal is translated against the same pre-round board.
//! 2. Cells off the board, walls and contested cells are skipped. Special
//!    ink is skipped by normal claims and replaced by special claims.
//! 3. Each remaining cell collects at most one claim per player.
//! 4. A cell claimed twice is settled by [`settle`].
//! 5. Counts are rebuilt by scanning the new grid.
//!
//! Resolution does not validate placements. Callers that need legality
//! checks run the validator first.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::state::{BoardState, Counts};
use crate::core::{PlayerId, PlayerPair};
use crate::grid::{Cell, Coord, Footprint, InkKind, Stamp};

/// One player's placement for the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    stamp: Stamp,
    priority: u32,
}

impl Proposal {
    /// Place `footprint` at `offset`. `card_area` decides collisions:
    /// the smaller card has priority.
    #[must_use]
    pub fn new(footprint: &Footprint, offset: Coord, card_area: u32) -> Self {
        Self {
            stamp: footprint.translate(offset),
            priority: card_area,
        }
    }

    #[must_use]
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }
}

/// New board plus how each player's counts moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub board: BoardState,
    pub area_delta: PlayerPair<i64>,
    pub special_delta: PlayerPair<i64>,
}

#[derive(Clone, Copy, Debug)]
struct Claim {
    player: PlayerId,
    kind: InkKind,
    priority: u32,
}

/// Outcome of two claims on one cell.
///
/// Cards of different sizes: the smaller card's claim wins unless the
/// larger card lays special ink over the smaller card's normal ink.
/// Cards of equal size: special beats normal, same kinds are contested.
fn settle(first: Claim, second: Claim) -> Cell {
    use std::cmp::Ordering;

    let special_claim = match (first.kind, second.kind) {
        (InkKind::Special, InkKind::Normal) => Some(first),
        (InkKind::Normal, InkKind::Special) => Some(second),
        _ => None,
    };
    if let Some(claim) = special_claim {
        return Cell::special(claim.player);
    }

    match first.priority.cmp(&second.priority) {
        Ordering::Less => Cell::Ink {
            player: first.player,
            kind: first.kind,
        },
        Ordering::Greater => Cell::Ink {
            player: second.player,
            kind: second.kind,
        },
        Ordering::Equal => Cell::Contested,
    }
}

/// Stamp all proposals onto `board` at once.
///
/// ```
/// use tableturf_engine::board::{resolve, BoardState, Proposal};
/// use tableturf_engine::core::{PlayerId, PlayerPair};
/// use tableturf_engine::grid::{Coord, Footprint};
///
/// let board = BoardState::parse("A...B").unwrap();
/// let pip = Footprint::parse("=").unwrap();
/// let proposals = PlayerPair::from_array([
///     Some(Proposal::new(&pip, Coord::new(2, 0), 1)),
///     Some(Proposal::new(&pip, Coord::new(2, 0), 1)),
/// ]);
///
/// let resolution = resolve(&board, &proposals);
/// assert_eq!(resolution.board.render(), "A.#.B\n");
/// assert_eq!(resolution.area_delta[PlayerId::P0], 0);
/// ```
#[must_use]
pub fn resolve(board: &BoardState, proposals: &PlayerPair<Option<Proposal>>) -> Resolution {
    let mut claims: FxHashMap<Coord, Claim> = FxHashMap::default();
    let mut outcome: FxHashMap<Coord, Cell> = FxHashMap::default();

    for (player, proposal) in proposals.iter() {
        let Some(proposal) = proposal else { continue };
        for &(pos, kind) in proposal.stamp() {
            if !board.cell(pos).is_some_and(|cell| cell.accepts(kind)) {
                continue;
            }
            let claim = Claim {
                player,
                kind,
                priority: proposal.priority,
            };
            let cell = match claims.get(&pos) {
                Some(&earlier) => {
                    let settled = settle(earlier, claim);
                    trace!(%pos, ?earlier, ?claim, ?settled, "collision");
                    settled
                }
                None => Cell::Ink { player, kind },
            };
            claims.insert(pos, claim);
            outcome.insert(pos, cell);
        }
    }

    let before = board.counts();
    let grid = board.grid().map(|pos, cell| outcome.get(&pos).copied().unwrap_or(*cell));
    let board = BoardState::new(grid);
    let after = board.counts();

    let delta = |f: fn(&Counts) -> u32| {
        PlayerPair::new(|p| i64::from(f(&after[p])) - i64::from(f(&before[p])))
    };
    let area_delta = delta(|c| c.area);
    let special_delta = delta(|c| c.special);

    Resolution {
        board,
        area_delta,
        special_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(player: PlayerId, kind: InkKind, priority: u32) -> Claim {
        Claim {
            player,
            kind,
            priority,
        }
    }

    #[test]
    fn test_settle_table() {
        use InkKind::{Normal, Special};
        let (a, b) = (PlayerId::P0, PlayerId::P1);

        // Equal areas.
        assert_eq!(settle(claim(a, Normal, 5), claim(b, Normal, 5)), Cell::Contested);
        assert_eq!(settle(claim(a, Special, 5), claim(b, Special, 5)), Cell::Contested);
        assert_eq!(settle(claim(a, Special, 5), claim(b, Normal, 5)), Cell::special(a));
        assert_eq!(settle(claim(a, Normal, 5), claim(b, Special, 5)), Cell::special(b));

        // Smaller card wins same-kind collisions.
        assert_eq!(settle(claim(a, Normal, 3), claim(b, Normal, 9)), Cell::normal(a));
        assert_eq!(settle(claim(a, Special, 9), claim(b, Special, 3)), Cell::special(b));

        // Special ink beats normal ink whatever the sizes.
        assert_eq!(settle(claim(a, Normal, 3), claim(b, Special, 9)), Cell::special(b));
        assert_eq!(settle(claim(a, Special, 9), claim(b, Normal, 3)), Cell::special(a));
    }

    #[test]
    fn test_settle_is_symmetric() {
        use InkKind::{Normal, Special};
        for (ka, kb) in [(Normal, Normal), (Normal, Special), (Special, Special)] {
            for (pa, pb) in [(1, 1), (1, 4), (4, 1)] {
                let x = claim(PlayerId::P0, ka, pa);
                let y = claim(PlayerId::P1, kb, pb);
                assert_eq!(settle(x, y), settle(y, x));
            }
        }
    }

    #[test]
    fn test_permanent_cells_untouched() {
        let board = BoardState::parse("@#AB.").unwrap();
        let bar = Footprint::parse("======").unwrap();
        let proposals = PlayerPair::from_array([Some(Proposal::new(&bar, Coord::new(0, 0), 6)), None]);

        let resolution = resolve(&board, &proposals);
        assert_eq!(resolution.board.render(), "@#ABa\n");
        assert_eq!(resolution.area_delta[PlayerId::P0], 1);
        assert_eq!(resolution.area_delta[PlayerId::P1], 0);
    }

    #[test]
    fn test_special_claim_replaces_special_ink() {
        let board = BoardState::parse("B.\n..").unwrap();
        let star = Footprint::parse("*=").unwrap();
        let proposals = PlayerPair::from_array([Some(Proposal::new(&star, Coord::new(0, 0), 2)), None]);

        let resolution = resolve(&board, &proposals);
        assert_eq!(resolution.board.render(), "Aa\n..\n");
        assert_eq!(resolution.area_delta[PlayerId::P1], -1);
    }

    #[test]
    fn test_overwrites_normal_ink() {
        let board = BoardState::parse("bb\naa").unwrap();
        let star = Footprint::parse("*=").unwrap();
        let proposals = PlayerPair::from_array([Some(Proposal::new(&star, Coord::new(0, 0), 2)), None]);

        let resolution = resolve(&board, &proposals);
        assert_eq!(resolution.board.render(), "Aa\naa\n");
        assert_eq!(resolution.area_delta[PlayerId::P0], 2);
        assert_eq!(resolution.area_delta[PlayerId::P1], -2);
        assert_eq!(resolution.special_delta[PlayerId::P0], 1);
    }

    #[test]
    fn test_no_proposals_is_identity() {
        let board = BoardState::parse("A.\n.B").unwrap();
        let resolution = resolve(&board, &PlayerPair::default());
        assert_eq!(resolution.board, board);
        assert_eq!(resolution.area_delta, PlayerPair::default());
    }

    #[test]
    fn test_smaller_card_keeps_its_cells() {
        let board = BoardState::parse("....").unwrap();
        let small = Footprint::parse("==").unwrap();
        let large = Footprint::parse("====").unwrap();
        let proposals = PlayerPair::from_array([
            Some(Proposal::new(&large, Coord::new(0, 0), 4)),
            Some(Proposal::new(&small, Coord::new(1, 0), 2)),
        ]);

        let resolution = resolve(&board, &proposals);
        assert_eq!(resolution.board.render(), "abba\n");
    }
}
