//! Stage layouts.
//!
//! A stage is a fixed arrangement of walls and empty cells plus each
//! player's starting home cell, written as special ink. Any other content
//! in a layout is malformed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerPair};
use crate::error::CatalogError;
use crate::grid::{Cell, Coord, Grid};

/// Stage identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StageId(pub u32);

impl StageId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage({})", self.0)
    }
}

/// A validated stage layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    name: String,
    layout: Grid<Cell>,
    homes: PlayerPair<SmallVec<[Coord; 2]>>,
}

impl Stage {
    /// Validate a layout and collect its home cells.
    pub fn new(id: StageId, name: impl Into<String>, layout: Grid<Cell>) -> Result<Self, CatalogError> {
        let mut homes: PlayerPair<SmallVec<[Coord; 2]>> = PlayerPair::default();
        for (pos, cell) in layout.iter() {
            match *cell {
                Cell::Empty | Cell::Wall => {}
                Cell::Ink { player, .. } if cell.is_special() => homes[player].push(pos),
                _ => {
                    return Err(CatalogError::UnexpectedInk {
                        stage: id,
                        x: pos.x,
                        y: pos.y,
                    })
                }
            }
        }
        if let Some((player, _)) = homes.iter().find(|(_, cells)| cells.is_empty()) {
            return Err(CatalogError::MissingHome { stage: id, player });
        }

        Ok(Self {
            id,
            name: name.into(),
            layout,
            homes,
        })
    }

    /// Parse a layout from board text.
    pub fn parse(id: StageId, name: impl Into<String>, text: &str) -> Result<Self, CatalogError> {
        let layout = Grid::parse(text)?;
        Self::new(id, name, layout)
    }

    #[must_use]
    pub fn id(&self) -> StageId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting board: walls, empty cells and home cells.
    #[must_use]
    pub fn layout(&self) -> &Grid<Cell> {
        &self.layout
    }

    /// Home cells of one player.
    #[must_use]
    pub fn home_cells(&self, player: PlayerId) -> &[Coord] {
        &self.homes[player]
    }

    /// Cells that are not walls.
    #[must_use]
    pub fn playable_area(&self) -> usize {
        self.layout.cells().iter().filter(|c| **c != Cell::Wall).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_homes() {
        let stage = Stage::parse(
            StageId::new(1),
            "Tiny",
            "
            @..B
            ....
            A..@
            ",
        )
        .unwrap();
        assert_eq!(stage.home_cells(PlayerId::P0), &[Coord::new(0, 2)]);
        assert_eq!(stage.home_cells(PlayerId::P1), &[Coord::new(3, 0)]);
        assert_eq!(stage.playable_area(), 10);
        assert_eq!(stage.name(), "Tiny");
    }

    #[test]
    fn test_missing_home() {
        let err = Stage::parse(StageId::new(2), "NoB", "A...").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingHome {
                stage: StageId::new(2),
                player: PlayerId::P1
            }
        );
    }

    #[test]
    fn test_unexpected_ink() {
        let err = Stage::parse(StageId::new(3), "Painted", "A.a\n..B").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnexpectedInk {
                stage: StageId::new(3),
                x: 2,
                y: 0
            }
        );

        let err = Stage::parse(StageId::new(3), "Contested", "A#B").unwrap_err();
        assert!(matches!(err, CatalogError::UnexpectedInk { x: 1, .. }));
    }

    #[test]
    fn test_bad_text() {
        let err = Stage::parse(StageId::new(4), "Ragged", "A.\nB..").unwrap_err();
        assert!(matches!(err, CatalogError::Layout(_)));
    }
}
