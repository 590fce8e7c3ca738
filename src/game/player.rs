//! Per-player hand, deck and gauge.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::CardId;
use crate::core::GameRng;
use crate::error::Rejection;

/// Hand slots. A slot is `None` once the deck ran out of refills.
pub type Hand = SmallVec<[Option<CardId>; 4]>;

/// One player's private state.
///
/// The deck is ordered: refills are taken from the front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    hand: Hand,
    deck: Vector<CardId>,
    gauge: u32,
    redraws_left: u32,
}

impl PlayerState {
    /// Deal `hand_size` cards from the front of `deck`.
    #[must_use]
    pub fn deal(deck: &[CardId], hand_size: usize, redraw_quota: u32) -> Self {
        let mut deck: Vector<CardId> = deck.iter().copied().collect();
        let hand = (0..hand_size).map(|_| deck.pop_front()).collect();
        Self {
            hand,
            deck,
            gauge: 0,
            redraws_left: redraw_quota,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[Option<CardId>] {
        &self.hand
    }

    /// Remaining cards, next refill first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardId> {
        &self.deck
    }

    #[must_use]
    pub fn gauge(&self) -> u32 {
        self.gauge
    }

    #[must_use]
    pub fn redraws_left(&self) -> u32 {
        self.redraws_left
    }

    /// Card held in `slot`.
    pub fn card_in_slot(&self, slot: usize) -> Result<CardId, Rejection> {
        match self.hand.get(slot) {
            None => Err(Rejection::InvalidHandSlot(slot)),
            Some(None) => Err(Rejection::EmptyHandSlot(slot)),
            Some(Some(card)) => Ok(*card),
        }
    }

    /// Occupied slots with their cards.
    pub fn held_cards(&self) -> impl Iterator<Item = (usize, CardId)> + '_ {
        self.hand
            .iter()
            .enumerate()
            .filter_map(|(slot, card)| card.map(|c| (slot, c)))
    }

    /// Remove the card in `slot` and refill it from the deck.
    pub(crate) fn play(&mut self, slot: usize) -> Result<CardId, Rejection> {
        let card = self.card_in_slot(slot)?;
        self.hand[slot] = self.deck.pop_front();
        Ok(card)
    }

    pub(crate) fn set_gauge(&mut self, gauge: u32) {
        self.gauge = gauge;
    }

    /// Return the hand to the deck, shuffle and deal a fresh hand.
    ///
    /// The caller checks the quota; this only spends it.
    pub(crate) fn redraw(&mut self, rng: &mut GameRng) {
        let mut pool: Vec<CardId> = self.hand.iter().flatten().copied().collect();
        pool.extend(self.deck.iter().copied());
        rng.shuffle(&mut pool);

        let mut deck: Vector<CardId> = pool.into_iter().collect();
        for slot in self.hand.iter_mut() {
            *slot = deck.pop_front();
        }
        self.deck = deck;
        self.redraws_left = self.redraws_left.saturating_sub(1);
    }
}
