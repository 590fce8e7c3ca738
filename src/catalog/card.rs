//! Card definitions - static shape data.
//!
//! A `Card` holds its footprint in all four orientations, precomputed at
//! construction, plus the declared area and special cost. Declared values
//! are checked against the shape; a mismatch is malformed data and the
//! card is refused.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::grid::{Footprint, Rotation};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tableturf_engine::catalog::{Card, CardId};
/// use tableturf_engine::grid::Rotation;
///
/// let chum = Card::from_shape(CardId::new(1), "Chum", "
///     .=
///     *=
///     .==
/// ");
/// assert!(chum.is_err()); // ragged shape
///
/// let chum = Card::from_shape(CardId::new(1), "Chum", "
///     .=.
///     *=.
///     .==
/// ").unwrap();
/// assert_eq!(chum.area(), 5);
/// assert_eq!(chum.special_cost(), 1);
/// assert_eq!(chum.shape(Rotation::R90).width(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    shapes: [Footprint; 4],
    area: u32,
    special_cost: u32,
}

impl Card {
    /// Create a card from a footprint and its declared counts.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        footprint: Footprint,
        area: u32,
        special_cost: u32,
    ) -> Result<Self, CatalogError> {
        let actual_area = footprint.area();
        if actual_area == 0 {
            return Err(CatalogError::EmptyShape { card: id });
        }
        if actual_area != area {
            return Err(CatalogError::AreaMismatch {
                card: id,
                declared: area,
                actual: actual_area,
            });
        }
        let actual_special = footprint.special_count();
        if actual_special != special_cost {
            return Err(CatalogError::SpecialCostMismatch {
                card: id,
                declared: special_cost,
                actual: actual_special,
            });
        }

        let shapes = Rotation::ALL.map(|r| footprint.rotate(r));
        Ok(Self {
            id,
            name: name.into(),
            shapes,
            area,
            special_cost,
        })
    }

    /// Create a card from footprint text, deriving area and special cost.
    pub fn from_shape(
        id: CardId,
        name: impl Into<String>,
        shape: &str,
    ) -> Result<Self, CatalogError> {
        let footprint = Footprint::parse(shape)?;
        let area = footprint.area();
        let special_cost = footprint.special_count();
        Self::new(id, name, footprint, area, special_cost)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Footprint in the given orientation.
    #[must_use]
    pub fn shape(&self, rotation: Rotation) -> &Footprint {
        &self.shapes[rotation.quarter_turns() as usize]
    }

    /// Cells covered; also the card's priority when footprints collide
    /// (smaller wins).
    #[must_use]
    pub fn area(&self) -> u32 {
        self.area
    }

    /// Gauge spent when played as a special attack.
    #[must_use]
    pub fn special_cost(&self) -> u32 {
        self.special_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domino() -> Footprint {
        Footprint::parse("=*").unwrap()
    }

    #[test]
    fn test_new_checks_area() {
        let err = Card::new(CardId::new(3), "Domino", domino(), 3, 1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::AreaMismatch {
                card: CardId::new(3),
                declared: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_new_checks_special_cost() {
        let err = Card::new(CardId::new(3), "Domino", domino(), 2, 4).unwrap_err();
        assert!(matches!(err, CatalogError::SpecialCostMismatch { declared: 4, actual: 1, .. }));
    }

    #[test]
    fn test_empty_shape_refused() {
        let err = Card::from_shape(CardId::new(9), "Nothing", "...").unwrap_err();
        assert_eq!(err, CatalogError::EmptyShape { card: CardId::new(9) });
    }

    #[test]
    fn test_shapes_precomputed() {
        let card = Card::new(CardId::new(1), "Domino", domino(), 2, 1).unwrap();
        assert_eq!(card.shape(Rotation::R0), &domino());
        assert_eq!(card.shape(Rotation::R90).grid().render(), "=\n*\n");
        assert_eq!(card.shape(Rotation::R180).grid().render(), "*=\n");
        assert_eq!(card.name(), "Domino");
        assert_eq!(format!("{}", card.id()), "Card(1)");
    }
}
