//! Signed board coordinates.
//!
//! Coordinates are signed so that a footprint translated partly off the
//! board can still be described; bounds are checked by the grid.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Offsets of the 8-neighbourhood, clockwise from the upper-left.
pub const EIGHT_NEIGHBOURS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
];

/// A column/row position. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight surrounding coordinates, which may lie off the board.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        EIGHT_NEIGHBOURS.into_iter().map(move |d| self + d)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
