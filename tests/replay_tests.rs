//! Golden match replays.
//!
//! `fixtures/record_0.json` is a regression fixture: a 12-round match on
//! Thunder Point played with synthetic cards 101 to 115, whose final board,
//! counts and gauges were produced by this engine. It lists the cards, both
//! decks in dealing order and the moves of every round. Replaying the moves
//! from a fresh match must end on exactly the stored board, so any change
//! to stamping, scoring or gauge bookkeeping shows up here.

mod common;

use common::assert_board;
use serde::Deserialize;
use tableturf_engine::catalog::{Card, CardId, Catalog, StageId};
use tableturf_engine::core::{MatchConfig, PlayerId, PlayerPair};
use tableturf_engine::game::{init_game, GameResult, MatchState, PlayerMove};

const RECORD_0: &str = include_str!("fixtures/record_0.json");

#[derive(Deserialize)]
struct CardRecord {
    id: u32,
    name: String,
    shape: Vec<String>,
}

#[derive(Deserialize)]
struct MatchRecord {
    stage: u32,
    cards: Vec<CardRecord>,
    decks: [Vec<u32>; 2],
    moves: Vec<[PlayerMove; 2]>,
    board: Vec<String>,
    area: [u32; 2],
    special: [u32; 2],
    gauge: [u32; 2],
}

impl MatchRecord {
    fn load(json: &str) -> Self {
        serde_json::from_str(json).expect("record parses")
    }

    fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::with_standard_stages().expect("built-in stages are valid");
        for card in &self.cards {
            let card = Card::from_shape(CardId::new(card.id), card.name.as_str(), &card.shape.join("\n"))
                .expect("valid shape");
            catalog.register_card(card).expect("fresh id");
        }
        catalog
    }

    fn decks(&self) -> [Vec<CardId>; 2] {
        self.decks
            .clone()
            .map(|deck| deck.into_iter().map(CardId::new).collect())
    }

    /// Play every stored round, checking each move was on offer.
    fn replay(&self, catalog: &Catalog) -> MatchState {
        let mut state = init_game(catalog, StageId::new(self.stage), self.decks()).expect("valid match");
        for moves in &self.moves {
            let moves = PlayerPair::from_array(*moves);
            for (player, mv) in moves.iter() {
                let legal = state.legal_moves(catalog, player).expect("known cards");
                assert!(legal.contains(mv), "round {}: {player} {mv:?} not offered", state.round());
            }
            state = state
                .apply_round(catalog, state.round(), moves)
                .unwrap_or_else(|err| panic!("round {}: {err}", state.round()));
        }
        state
    }
}

/// Test replaying the golden match on Thunder Point.
#[test]
fn test_replay_record_0() {
    let record = MatchRecord::load(RECORD_0);
    let catalog = record.catalog();
    let state = record.replay(&catalog);

    assert_board(state.board(), &record.board.join("\n"));
    for player in PlayerId::all() {
        let i = player.index();
        assert_eq!(state.board().area(player), record.area[i], "{player}");
        assert_eq!(state.board().special(player), record.special[i], "{player}");
        assert_eq!(state.player(player).gauge(), record.gauge[i], "{player}");
    }
    assert!(state.is_finished());
    assert_eq!(state.result(), Some(GameResult::Winner(PlayerId::P1)));
    assert_eq!(state.history().len(), record.moves.len());
}

/// Test that the golden rounds use special attacks and discards.
#[test]
fn test_record_0_exercises_every_move_kind() {
    let record = MatchRecord::load(RECORD_0);
    let all: Vec<&PlayerMove> = record.moves.iter().flatten().collect();
    assert_eq!(record.moves.len(), 12);
    assert!(all.iter().any(|m| m.is_discard()));
    assert!(all.iter().any(|m| matches!(m, PlayerMove::Special { .. })));
    assert!(all.iter().any(|m| matches!(m, PlayerMove::Trivial { .. })));
}

/// Test that replaying twice gives identical states and snapshots.
#[test]
fn test_replay_is_deterministic() {
    let record = MatchRecord::load(RECORD_0);
    let catalog = record.catalog();
    let a = record.replay(&catalog);
    let b = record.replay(&catalog);
    assert_eq!(a, b);
    assert_eq!(a.to_bytes().expect("encodes"), b.to_bytes().expect("encodes"));
}

/// Test the configuration's JSON form.
#[test]
fn test_config_json() {
    let config = MatchConfig::default();
    let json = serde_json::to_string(&config).expect("serializes");
    assert_eq!(json, r#"{"rounds":12,"hand_size":4,"redraw_quota":1,"deck_size":15}"#);
    let back: MatchConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, config);
}
