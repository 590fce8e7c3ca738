//! Board cell values.

use serde::{Deserialize, Serialize};

use super::text::Symbol;
use crate::core::PlayerId;

/// Kind of ink in a painted cell or a footprint cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InkKind {
    Normal,
    Special,
}

/// One board cell.
///
/// A cell is owned by at most one player. Cells claimed by both players in
/// the same round become `Contested`: owned by no one, worth nothing, and
/// never painted again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Ink { player: PlayerId, kind: InkKind },
    Contested,
}

impl Cell {
    /// Normal ink for `player`.
    #[must_use]
    pub const fn normal(player: PlayerId) -> Self {
        Cell::Ink {
            player,
            kind: InkKind::Normal,
        }
    }

    /// Special ink for `player`.
    #[must_use]
    pub const fn special(player: PlayerId) -> Self {
        Cell::Ink {
            player,
            kind: InkKind::Special,
        }
    }

    /// The owning player, if the cell is inked.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Ink { player, .. } => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Cell::Ink {
                kind: InkKind::Special,
                ..
            }
        )
    }

    /// Whether a stamp laying `kind` ink may change this cell.
    ///
    /// Walls and contested cells are permanent. Special ink only gives way
    /// to special ink.
    #[must_use]
    pub fn accepts(self, kind: InkKind) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Wall | Cell::Contested => false,
            Cell::Ink {
                kind: InkKind::Normal,
                ..
            } => true,
            Cell::Ink {
                kind: InkKind::Special,
                ..
            } => kind == InkKind::Special,
        }
    }
}

impl Symbol for Cell {
    fn to_symbol(&self) -> char {
        match *self {
            Cell::Empty => '.',
            Cell::Wall => '@',
            Cell::Contested => '#',
            Cell::Ink {
                player,
                kind: InkKind::Normal,
            } => player.letter(),
            Cell::Ink {
                player,
                kind: InkKind::Special,
            } => player.letter().to_ascii_uppercase(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            '@' => Some(Cell::Wall),
            '#' => Some(Cell::Contested),
            c => {
                let player = PlayerId::from_letter(c)?;
                let kind = if c.is_ascii_uppercase() {
                    InkKind::Special
                } else {
                    InkKind::Normal
                };
                Some(Cell::Ink { player, kind })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let cases = [
            ('.', Cell::Empty),
            ('@', Cell::Wall),
            ('#', Cell::Contested),
            ('a', Cell::normal(PlayerId::P0)),
            ('A', Cell::special(PlayerId::P0)),
            ('b', Cell::normal(PlayerId::P1)),
            ('B', Cell::special(PlayerId::P1)),
        ];
        for (symbol, cell) in cases {
            assert_eq!(Cell::from_symbol(symbol), Some(cell));
            assert_eq!(cell.to_symbol(), symbol);
        }
        assert_eq!(Cell::from_symbol('c'), None);
        assert_eq!(Cell::from_symbol(' '), None);
    }

    #[test]
    fn test_accepts() {
        use InkKind::{Normal, Special};
        assert!(Cell::Empty.accepts(Normal));
        assert!(Cell::normal(PlayerId::P1).accepts(Normal));
        assert!(!Cell::special(PlayerId::P0).accepts(Normal));
        assert!(Cell::special(PlayerId::P0).accepts(Special));
        assert!(!Cell::Wall.accepts(Special));
        assert!(!Cell::Contested.accepts(Special));
    }

    #[test]
    fn test_owner() {
        assert_eq!(Cell::special(PlayerId::P1).owner(), Some(PlayerId::P1));
        assert_eq!(Cell::Contested.owner(), None);
    }
}
