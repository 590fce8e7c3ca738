//! Catalog of cards and stages.
//!
//! The catalog is an explicit value handed to the engine; there is no
//! process-wide lookup table. Tests build small synthetic catalogs, the
//! orchestration layer builds one from the shipped game data.

use rustc_hash::FxHashMap;

use super::builtin::standard_stages;
use super::card::{Card, CardId};
use super::stage::{Stage, StageId};
use crate::error::CatalogError;

/// Registry of card and stage definitions.
///
/// ## Example
///
/// ```
/// use tableturf_engine::catalog::{Card, CardId, Catalog, StageId};
///
/// let mut catalog = Catalog::with_standard_stages().unwrap();
/// catalog
///     .register_card(Card::from_shape(CardId::new(1), "Pip", "*").unwrap())
///     .unwrap();
///
/// assert_eq!(catalog.card(CardId::new(1)).unwrap().name(), "Pip");
/// assert_eq!(catalog.stage(StageId::new(0)).unwrap().name(), "BoxSeats");
/// assert!(catalog.card(CardId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, Card>,
    stages: FxHashMap<StageId, Stage>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in stages and no cards.
    pub fn with_standard_stages() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for stage in standard_stages()? {
            catalog.register_stage(stage)?;
        }
        Ok(catalog)
    }

    /// Register a card definition. Ids must be unique.
    pub fn register_card(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id()) {
            return Err(CatalogError::DuplicateCard(card.id()));
        }
        self.cards.insert(card.id(), card);
        Ok(())
    }

    /// Register a stage. Ids must be unique.
    pub fn register_stage(&mut self, stage: Stage) -> Result<(), CatalogError> {
        if self.stages.contains_key(&stage.id()) {
            return Err(CatalogError::DuplicateStage(stage.id()));
        }
        self.stages.insert(stage.id(), stage);
        Ok(())
    }

    /// Get a card definition by ID.
    pub fn card(&self, id: CardId) -> Result<&Card, CatalogError> {
        self.cards.get(&id).ok_or(CatalogError::UnknownCard(id))
    }

    /// Get a stage by ID.
    pub fn stage(&self, id: StageId) -> Result<&Stage, CatalogError> {
        self.stages.get(&id).ok_or(CatalogError::UnknownStage(id))
    }

    /// Find a stage by its display name.
    #[must_use]
    pub fn stage_by_name(&self, name: &str) -> Option<&Stage> {
        self.stages.values().find(|s| s.name() == name)
    }
}
