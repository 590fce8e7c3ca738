//! Dense, bounds-checked 2D storage.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::error::GridError;

/// A `width × height` grid stored row-major.
///
/// The cell vector always holds exactly `width * height` values; every
/// constructor enforces it and no method can change the length. Reads and
/// writes outside `[0, width) × [0, height)` fail with
/// [`GridError::OutOfBounds`] instead of wrapping. Deserialized grids go
/// through [`Grid::new`] as well.
///
/// ```
/// use tableturf_engine::grid::{Coord, Grid};
///
/// let mut grid = Grid::filled(3, 2, 0u8);
/// grid.set(Coord::new(2, 1), 7).unwrap();
///
/// assert_eq!(grid.get(Coord::new(2, 1)), Ok(&7));
/// assert!(grid.get(Coord::new(3, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridData<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridData<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<GridData<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(data: GridData<T>) -> Result<Self, Self::Error> {
        Grid::new(data.width, data.height, data.cells)
    }
}

impl<T> Grid<T> {
    /// Build a grid from explicit row-major cell values.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = width.checked_mul(height);
        if expected != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index_of(&self, pos: Coord) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.x as usize + pos.y as usize * self.width)
        } else {
            Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read a cell.
    pub fn get(&self, pos: Coord) -> Result<&T, GridError> {
        let index = self.index_of(pos)?;
        Ok(&self.cells[index])
    }

    /// Read a cell, or `None` when `pos` is off the grid.
    #[must_use]
    pub fn try_get(&self, pos: Coord) -> Option<&T> {
        self.index_of(pos).ok().map(|i| &self.cells[i])
    }

    /// Overwrite a cell.
    pub fn set(&mut self, pos: Coord, value: T) -> Result<(), GridError> {
        let index = self.index_of(pos)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Iterate over `(Coord, &T)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, v)| {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            (Coord::new(x, y), v)
        })
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Build a grid of the same shape by transforming each cell.
    pub fn map<U>(&self, mut f: impl FnMut(Coord, &T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(pos, v)| f(pos, v)).collect(),
        }
    }

    /// Build a grid of the given shape from a per-coordinate generator.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Coord::new(x as i32, y as i32)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }
}
