//! Match construction.

use tracing::debug;

use super::player::PlayerState;
use super::state::MatchState;
use crate::board::BoardState;
use crate::catalog::{CardId, Catalog, StageId};
use crate::core::{GameRng, MatchConfig, PlayerId, PlayerPair};
use crate::error::{EngineError, Result};

/// Builder for a new match.
///
/// Decks are dealt from the front in the order given. Pass a `GameRng`
/// through [`MatchBuilder::with_shuffle`] to have the builder shuffle them
/// first, each seat from its own stream.
///
/// ## Example
///
/// ```
/// use tableturf_engine::catalog::{Card, CardId, Catalog, StageId};
/// use tableturf_engine::core::{GameRng, PlayerId};
/// use tableturf_engine::game::MatchBuilder;
///
/// let mut catalog = Catalog::with_standard_stages().unwrap();
/// for id in 1..=15 {
///     catalog.register_card(Card::from_shape(CardId::new(id), format!("Card {id}"), "=*").unwrap()).unwrap();
/// }
/// let deck: Vec<CardId> = (1..=15).map(CardId::new).collect();
///
/// let state = MatchBuilder::new(&catalog, StageId::new(0), [deck.clone(), deck])
///     .with_shuffle(&GameRng::new(42))
///     .build()
///     .unwrap();
///
/// assert_eq!(state.round(), 12);
/// assert_eq!(state.player(PlayerId::P0).hand().len(), 4);
/// assert_eq!(state.player(PlayerId::P1).deck().len(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder<'a> {
    catalog: &'a Catalog,
    stage: StageId,
    decks: PlayerPair<Vec<CardId>>,
    config: MatchConfig,
    shuffle: Option<GameRng>,
}

impl<'a> MatchBuilder<'a> {
    /// Start a match on `stage` with one deck per seat, seat 0 first.
    #[must_use]
    pub fn new(catalog: &'a Catalog, stage: StageId, decks: [Vec<CardId>; 2]) -> Self {
        Self {
            catalog,
            stage,
            decks: PlayerPair::from_array(decks),
            config: MatchConfig::default(),
            shuffle: None,
        }
    }

    /// Use a non-default configuration.
    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle both decks before dealing.
    #[must_use]
    pub fn with_shuffle(mut self, rng: &GameRng) -> Self {
        self.shuffle = Some(rng.clone());
        self
    }

    /// Validate the inputs and deal the opening hands.
    pub fn build(self) -> Result<MatchState> {
        let stage = self.catalog.stage(self.stage)?;
        let mut decks = self.decks;

        for player in PlayerId::all() {
            let deck = &mut decks[player];
            if deck.len() != self.config.deck_size {
                return Err(EngineError::DeckSize {
                    player,
                    expected: self.config.deck_size,
                    actual: deck.len(),
                });
            }
            for &card in deck.iter() {
                self.catalog.card(card)?;
            }
            if let Some(rng) = &self.shuffle {
                rng.for_context(&format!("deck-{}", player.index()))
                    .shuffle(deck);
            }
        }

        let players = decks.map(|_, deck| {
            PlayerState::deal(deck, self.config.hand_size, self.config.redraw_quota)
        });
        let board = BoardState::new(stage.layout().clone());

        debug!(
            stage = %self.stage,
            name = stage.name(),
            rounds = self.config.rounds,
            "match initialised"
        );
        Ok(MatchState::from_parts(self.config, self.stage, board, players))
    }
}

/// Start a match with the default configuration and decks dealt as given.
pub fn init_game(catalog: &Catalog, stage: StageId, decks: [Vec<CardId>; 2]) -> Result<MatchState> {
    MatchBuilder::new(catalog, stage, decks).build()
}
