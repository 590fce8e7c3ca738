//! Board grid plus per-player counts.
//!
//! ## Counts
//!
//! - `area`: cells holding the player's ink, normal or special
//! - `special`: the player's *charged* special cells, i.e. special ink with
//!   no empty playable cell around it
//!
//! Counts are never patched in place. Every constructor scans the grid,
//! so a `BoardState` built through this API cannot disagree with its cells.
//! Deserialized values skip the constructor and must be checked with
//! [`BoardState::verify_counts`].

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};
use crate::error::GridError;
use crate::grid::{Cell, Coord, Grid};

/// Scored cells of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub area: u32,
    pub special: u32,
}

/// A board grid with its scanned counts.
///
/// ```
/// use tableturf_engine::board::BoardState;
/// use tableturf_engine::core::PlayerId;
///
/// let board = BoardState::parse("
///     aaa.
///     aAa.
///     aaab
/// ").unwrap();
///
/// assert_eq!(board.area(PlayerId::P0), 9);
/// assert_eq!(board.special(PlayerId::P0), 1);
/// assert_eq!(board.area(PlayerId::P1), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid<Cell>,
    counts: PlayerPair<Counts>,
}

impl BoardState {
    /// Wrap a grid, scanning it for counts.
    #[must_use]
    pub fn new(grid: Grid<Cell>) -> Self {
        let counts = scan(&grid);
        Self { grid, counts }
    }

    /// Parse board text (`.` `@` `#` `a` `A` `b` `B`).
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Grid::parse(text).map(Self::new)
    }

    /// Canonical text form, one row per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.grid.render()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        self.grid.try_get(pos).copied()
    }

    #[must_use]
    pub fn counts(&self) -> &PlayerPair<Counts> {
        &self.counts
    }

    #[must_use]
    pub fn area(&self, player: PlayerId) -> u32 {
        self.counts[player].area
    }

    #[must_use]
    pub fn special(&self, player: PlayerId) -> u32 {
        self.counts[player].special
    }

    /// Whether the special cell at `pos` is surrounded.
    ///
    /// Neighbours off the board or behind walls do not count against it.
    #[must_use]
    pub fn is_charged(&self, pos: Coord) -> bool {
        is_charged(&self.grid, pos)
    }

    /// Re-scan the grid and compare with the cached counts.
    pub fn verify_counts(&self) -> Result<(), String> {
        let fresh = scan(&self.grid);
        if fresh == self.counts {
            Ok(())
        } else {
            Err(format!(
                "cached counts {:?} differ from grid scan {:?}",
                self.counts, fresh
            ))
        }
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_charged(grid: &Grid<Cell>, pos: Coord) -> bool {
    match grid.try_get(pos) {
        Some(cell) if cell.is_special() => pos
            .neighbours()
            .filter_map(|n| grid.try_get(n))
            .all(|c| *c != Cell::Empty),
        _ => false,
    }
}

fn scan(grid: &Grid<Cell>) -> PlayerPair<Counts> {
    let mut counts: PlayerPair<Counts> = PlayerPair::default();
    for (pos, cell) in grid.iter() {
        if let Some(player) = cell.owner() {
            counts[player].area += 1;
            if is_charged(grid, pos) {
                counts[player].special += 1;
            }
        }
    }
    counts
}
