//! Card footprints: small oriented grids of ink cells.
//!
//! A footprint is card-relative and not tied to a player. Rotating one
//! returns a new footprint; translating it yields absolute board
//! coordinates, which may lie outside the board. Bounds are the caller's
//! concern.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::array::Grid;
use super::cell::InkKind;
use super::coord::Coord;
use super::text::Symbol;
use crate::error::GridError;

/// One cell of a footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootprintCell {
    #[default]
    Blank,
    Normal,
    Special,
}

impl FootprintCell {
    /// The ink this cell lays down, if any.
    #[must_use]
    pub fn kind(self) -> Option<InkKind> {
        match self {
            FootprintCell::Blank => None,
            FootprintCell::Normal => Some(InkKind::Normal),
            FootprintCell::Special => Some(InkKind::Special),
        }
    }
}

impl Symbol for FootprintCell {
    fn to_symbol(&self) -> char {
        match self {
            FootprintCell::Blank => '.',
            FootprintCell::Normal => '=',
            FootprintCell::Special => '*',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(FootprintCell::Blank),
            '=' => Some(FootprintCell::Normal),
            '*' => Some(FootprintCell::Special),
            _ => None,
        }
    }
}

/// Clockwise quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Rotation for `turns` quarter turns, taken modulo 4.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }
}

/// Absolute cells a translated footprint would paint.
pub type Stamp = SmallVec<[(Coord, InkKind); 16]>;

/// An oriented card shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    grid: Grid<FootprintCell>,
}

impl Footprint {
    #[must_use]
    pub fn new(grid: Grid<FootprintCell>) -> Self {
        Self { grid }
    }

    /// Parse a footprint from its text form (`.` blank, `=` normal, `*` special).
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Grid::parse(text).map(Self::new)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<FootprintCell> {
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

    /// Number of inked cells.
    #[must_use]
    pub fn area(&self) -> u32 {
        self.cells().count() as u32
    }

    /// Number of special cells.
    #[must_use]
    pub fn special_count(&self) -> u32 {
        self.cells()
            .filter(|&(_, kind)| kind == InkKind::Special)
            .count() as u32
    }

    /// Inked cells in footprint-relative coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, InkKind)> + '_ {
        self.grid
            .iter()
            .filter_map(|(pos, cell)| cell.kind().map(|kind| (pos, kind)))
    }

    /// Return this footprint turned clockwise by `rotation`.
    ///
    /// Odd rotations swap width and height:
    ///
    /// ```
    /// use tableturf_engine::grid::{Footprint, Rotation};
    ///
    /// let bar = Footprint::parse("==*").unwrap();
    /// let turned = bar.rotate(Rotation::R90);
    /// assert_eq!((turned.width(), turned.height()), (1, 3));
    /// assert_eq!(turned.grid().render(), "=\n=\n*\n");
    /// ```
    #[must_use]
    pub fn rotate(&self, rotation: Rotation) -> Footprint {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let (new_w, new_h) = match rotation {
            Rotation::R0 | Rotation::R180 => (self.width(), self.height()),
            Rotation::R90 | Rotation::R270 => (self.height(), self.width()),
        };
        let source = |pos: Coord| match rotation {
            Rotation::R0 => pos,
            Rotation::R90 => Coord::new(pos.y, h - 1 - pos.x),
            Rotation::R180 => Coord::new(w - 1 - pos.x, h - 1 - pos.y),
            Rotation::R270 => Coord::new(w - 1 - pos.y, pos.x),
        };
        let grid = Grid::from_fn(new_w, new_h, |pos| {
            self.grid.try_get(source(pos)).copied().unwrap_or_default()
        });
        Footprint { grid }
    }

    /// Absolute coordinates and kinds when the footprint's origin is placed at `offset`.
    #[must_use]
    pub fn translate(&self, offset: Coord) -> Stamp {
        self.cells().map(|(pos, kind)| (pos + offset, kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ell() -> Footprint {
        Footprint::parse(
            "
            =.
            =.
            =*
            ",
        )
        .unwrap()
    }

    #[test]
    fn test_area_and_special() {
        let fp = ell();
        assert_eq!(fp.area(), 4);
        assert_eq!(fp.special_count(), 1);
    }

    #[test]
    fn test_rotate_quarter() {
        let fp = ell().rotate(Rotation::R90);
        assert_eq!(fp.grid().render(), "===\n*..\n");
    }

    #[test]
    fn test_rotate_half() {
        let fp = ell().rotate(Rotation::R180);
        assert_eq!(fp.grid().render(), "*=\n.=\n.=\n");
    }

    #[test]
    fn test_rotate_three_quarters() {
        let fp = ell().rotate(Rotation::R270);
        assert_eq!(fp.grid().render(), "..*\n===\n");
    }

    #[test]
    fn test_rotate_is_pure() {
        let fp = ell();
        let _ = fp.rotate(Rotation::R90);
        assert_eq!(fp, ell());
    }

    #[test]
    fn test_full_turn_is_identity() {
        let fp = ell();
        let back = fp
            .rotate(Rotation::R90)
            .rotate(Rotation::R90)
            .rotate(Rotation::R90)
            .rotate(Rotation::R90);
        assert_eq!(back, fp);
    }

    #[test]
    fn test_translate_may_leave_board() {
        let stamp = ell().translate(Coord::new(-1, -2));
        assert_eq!(
            stamp.as_slice(),
            &[
                (Coord::new(-1, -2), InkKind::Normal),
                (Coord::new(-1, -1), InkKind::Normal),
                (Coord::new(-1, 0), InkKind::Normal),
                (Coord::new(0, 0), InkKind::Special),
            ]
        );
    }

    #[test]
    fn test_rotation_from_turns() {
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::R90);
        assert_eq!(Rotation::R270.quarter_turns(), 3);
    }
}
