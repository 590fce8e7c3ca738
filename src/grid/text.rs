//! Canonical one-character-per-cell text form.
//!
//! Rows are separated by newlines. When parsing, whitespace around each
//! row is ignored and blank lines are skipped, so indented fixtures work
//! directly. Rendering writes every row followed by `\n`.
//! `parse(render(grid)) == grid` for every grid with at least one row and
//! one column.

use std::fmt;
use std::str::FromStr;

use super::array::Grid;
use crate::error::GridError;

/// A cell type with a single-character text symbol.
pub trait Symbol: Sized {
    fn to_symbol(&self) -> char;

    fn from_symbol(symbol: char) -> Option<Self>;
}

impl<T: Symbol> Grid<T> {
    /// Parse the canonical text form.
    ///
    /// ```
    /// use tableturf_engine::grid::{Cell, Grid};
    ///
    /// let grid: Grid<Cell> = Grid::parse("
    ///     @.a
    ///     #.B
    /// ").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert_eq!(grid.render(), "@.a\n#.B\n");
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let before = cells.len();
            for (column, symbol) in line.chars().enumerate() {
                let cell = T::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row: height,
                    column,
                })?;
                cells.push(cell);
            }
            let row_len = cells.len() - before;
            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(GridError::RaggedRow {
                        row: height,
                        expected,
                        actual: row_len,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(GridError::Empty)?;
        Grid::new(width, height, cells)
    }

    /// Render the canonical text form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in self.cells().chunks(self.width().max(1)) {
            out.extend(row.iter().map(Symbol::to_symbol));
            out.push('\n');
        }
        out
    }
}

impl<T: Symbol> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: Symbol> FromStr for Grid<T> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Bit {
        Off,
        On,
    }

    impl Symbol for Bit {
        fn to_symbol(&self) -> char {
            match self {
                Bit::Off => '0',
                Bit::On => '1',
            }
        }

        fn from_symbol(symbol: char) -> Option<Self> {
            match symbol {
                '0' => Some(Bit::Off),
                '1' => Some(Bit::On),
                _ => None,
            }
        }
    }

    #[test]
    fn test_parse_indented() {
        let grid: Grid<Bit> = Grid::parse(
            "
            010
            110
            ",
        )
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells()[3], Bit::On);
        assert_eq!(grid.render(), "010\n110\n");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::<Bit>::parse("  \n \n"), Err(GridError::Empty));
        assert_eq!(
            Grid::<Bit>::parse("01\n012\n"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            Grid::<Bit>::parse("01\n0x\n"),
            Err(GridError::UnknownSymbol {
                symbol: 'x',
                row: 1,
                column: 1
            })
        );
    }

    #[test]
    fn test_round_trip_via_from_str() {
        let text = "1001\n0110\n";
        let grid: Grid<Bit> = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }
}
