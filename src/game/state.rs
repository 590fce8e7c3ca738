//! Match state and its transitions.
//!
//! ## Lifecycle
//!
//! `MatchBuilder` produces a state in the `Playing` phase with the round
//! counter at `MatchConfig::rounds`. Each [`MatchState::apply_round`]
//! returns a successor with the counter one lower; at 0 the phase is
//! `Finished` and every further transition fails.
//!
//! ## Value semantics
//!
//! Transitions take `&self` and return a new state. The predecessor is
//! never touched, so a rejected round leaves the caller holding the exact
//! state it submitted against. Decks and history are `im` vectors, which
//! keeps successor construction cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::moves::{Placement, PlayerMove, RoundRecord};
use super::player::PlayerState;
use super::result::GameResult;
use crate::board::{resolve, validate, validate_placement, BoardState, PlacementKind, Proposal};
use crate::catalog::{CardId, Catalog, StageId};
use crate::core::{GameRng, MatchConfig, PlayerId, PlayerPair};
use crate::error::{EngineError, Result};
use crate::grid::{Coord, Rotation};

/// Match phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Finished,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    stage: StageId,
    round: u32,
    board: BoardState,
    players: PlayerPair<PlayerState>,
    history: Vector<RoundRecord>,
}

impl MatchState {
    pub(crate) fn from_parts(
        config: MatchConfig,
        stage: StageId,
        board: BoardState,
        players: PlayerPair<PlayerState>,
    ) -> Self {
        Self {
            round: config.rounds,
            config,
            stage,
            board,
            players,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn stage(&self) -> StageId {
        self.stage
    }

    /// Rounds left to play. Also the value the next submission must carry.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<PlayerState> {
        &self.players
    }

    /// Accepted rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.round == 0 {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Winner by painted area, once the match is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_finished().then(|| GameResult::from_board(&self.board))
    }

    // === Move checks ===

    /// Check one player's move against the current board.
    ///
    /// Rule violations come back as [`EngineError::Rejected`]; a card the
    /// catalog does not know is a catalog error.
    pub fn check_move(&self, catalog: &Catalog, player: PlayerId, mv: &PlayerMove) -> Result<()> {
        if self.is_finished() {
            return Err(EngineError::MatchFinished);
        }
        let state = &self.players[player];
        let rejected = |reason| EngineError::Rejected { player, reason };

        let card_id = state.card_in_slot(mv.slot()).map_err(rejected)?;
        let (Some(kind), Some(placement)) = (mv.kind(), mv.placement()) else {
            return Ok(());
        };
        let card = catalog.card(card_id)?;
        validate(
            &self.board,
            player,
            kind,
            card.shape(placement.rotation),
            placement.offset,
            state.gauge(),
        )
        .map_err(rejected)
    }

    /// Boolean form of [`MatchState::check_move`].
    #[must_use]
    pub fn is_move_valid(&self, catalog: &Catalog, player: PlayerId, mv: &PlayerMove) -> bool {
        self.check_move(catalog, player, mv).is_ok()
    }

    /// Every move `player` could submit this round.
    ///
    /// Discards come first for each slot, followed by trivial and then
    /// special placements in rotation and row-major offset order.
    pub fn legal_moves(&self, catalog: &Catalog, player: PlayerId) -> Result<Vec<PlayerMove>> {
        let mut moves = Vec::new();
        if self.is_finished() {
            return Ok(moves);
        }
        let state = &self.players[player];
        let (width, height) = (self.board.width() as i32, self.board.height() as i32);

        for (slot, card_id) in state.held_cards() {
            moves.push(PlayerMove::Discard { slot });
            let card = catalog.card(card_id)?;

            for kind in [PlacementKind::Trivial, PlacementKind::Special] {
                if kind == PlacementKind::Special && state.gauge() < card.special_cost() {
                    continue;
                }
                for rotation in Rotation::ALL {
                    let shape = card.shape(rotation);
                    for y in 1 - shape.height() as i32..height {
                        for x in 1 - shape.width() as i32..width {
                            let offset = Coord::new(x, y);
                            if validate_placement(&self.board, player, kind, shape, offset).is_err() {
                                continue;
                            }
                            let placement = Placement::new(rotation, offset);
                            moves.push(match kind {
                                PlacementKind::Trivial => PlayerMove::Trivial { slot, placement },
                                PlacementKind::Special => PlayerMove::Special { slot, placement },
                            });
                        }
                    }
                }
            }
        }
        Ok(moves)
    }

    // === Transitions ===

    /// Apply both players' moves for round `round`.
    ///
    /// Both moves are checked against the current board before anything is
    /// stamped. If either is refused the error names the first refusing
    /// player and no successor is produced.
    pub fn apply_round(
        &self,
        catalog: &Catalog,
        round: u32,
        moves: PlayerPair<PlayerMove>,
    ) -> Result<MatchState> {
        if self.is_finished() {
            return Err(EngineError::MatchFinished);
        }
        if round != self.round {
            return Err(EngineError::RoundMismatch {
                expected: self.round,
                got: round,
            });
        }
        for (player, mv) in moves.iter() {
            if let Err(err) = self.check_move(catalog, player, mv) {
                debug!(round, %player, %err, "round refused");
                return Err(err);
            }
        }

        let cards: PlayerPair<CardId> = moves.try_map(|player, mv| {
            self.players[player]
                .card_in_slot(mv.slot())
                .map_err(|reason| EngineError::Rejected { player, reason })
        })?;
        let proposals = moves.try_map(|player, mv| -> Result<Option<Proposal>> {
            let Some(placement) = mv.placement() else {
                return Ok(None);
            };
            let card = catalog.card(cards[player])?;
            Ok(Some(Proposal::new(
                card.shape(placement.rotation),
                placement.offset,
                card.area(),
            )))
        })?;
        let resolution = resolve(&self.board, &proposals);

        let mut next = self.clone();
        for (player, mv) in moves.iter() {
            let charged = resolution
                .board
                .special(player)
                .saturating_sub(self.board.special(player));
            let state = &mut next.players[player];
            let mut gauge = state.gauge() + charged;
            match mv {
                PlayerMove::Special { .. } => {
                    gauge = gauge.saturating_sub(catalog.card(cards[player])?.special_cost());
                }
                PlayerMove::Discard { .. } => gauge += 1,
                PlayerMove::Trivial { .. } => {}
            }
            state.set_gauge(gauge);
            state
                .play(mv.slot())
                .map_err(|reason| EngineError::Rejected { player, reason })?;
        }

        next.board = resolution.board;
        next.history.push_back(RoundRecord {
            round,
            moves,
            cards,
        });
        next.round -= 1;

        debug!(
            round,
            area_a = next.board.area(PlayerId::P0),
            area_b = next.board.area(PlayerId::P1),
            gauge_a = next.players[PlayerId::P0].gauge(),
            gauge_b = next.players[PlayerId::P1].gauge(),
            "round applied"
        );
        Ok(next)
    }

    /// Return `player`'s hand to the deck, shuffle and deal again.
    ///
    /// Only possible before the first round is applied, at most
    /// `MatchConfig::redraw_quota` times per player.
    pub fn redraw(&self, player: PlayerId, rng: &mut GameRng) -> Result<MatchState> {
        if self.is_finished() {
            return Err(EngineError::MatchFinished);
        }
        if self.round != self.config.rounds || !self.history.is_empty() {
            return Err(EngineError::RedrawUnavailable {
                player,
                reason: "the first round has been played",
            });
        }
        if self.players[player].redraws_left() == 0 {
            return Err(EngineError::RedrawUnavailable {
                player,
                reason: "no redraws left",
            });
        }

        let mut next = self.clone();
        next.players[player].redraw(rng);
        debug!(%player, redraws_left = next.players[player].redraws_left(), "hand redrawn");
        Ok(next)
    }

    // === Snapshots ===

    /// Encode a snapshot for resynchronisation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, refusing any state the engine could not have
    /// produced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: MatchState = bincode::deserialize(bytes)?;
        state.verify()?;
        Ok(state)
    }

    /// Check the cached values against the data they are derived from.
    pub fn verify(&self) -> Result<()> {
        self.board.verify_counts().map_err(EngineError::Inconsistent)?;

        if self.round > self.config.rounds {
            return Err(EngineError::Inconsistent(format!(
                "round {} above configured {}",
                self.round, self.config.rounds
            )));
        }
        let played = (self.config.rounds - self.round) as usize;
        if self.history.len() != played {
            return Err(EngineError::Inconsistent(format!(
                "{} rounds played but {} recorded",
                played,
                self.history.len()
            )));
        }
        for (player, state) in self.players.iter() {
            if state.hand().len() != self.config.hand_size {
                return Err(EngineError::Inconsistent(format!(
                    "{player} holds {} slots, expected {}",
                    state.hand().len(),
                    self.config.hand_size
                )));
            }
        }
        Ok(())
    }
}
