//! Shared fixtures for the scenario tests.
//!
//! Nautilus and Point Sensor are 8x8 cards from the base set, with the
//! blank border the game data carries. Offsets in the board fixtures are
//! relative to that border, which is why they are often negative.

#![allow(dead_code)]

use tableturf_engine::board::{resolve, BoardState, Proposal};
use tableturf_engine::catalog::{Card, CardId, Catalog, StageId};
use tableturf_engine::core::{PlayerId, PlayerPair};
use tableturf_engine::grid::{Coord, Rotation};

pub const NAUTILUS: CardId = CardId(43);
pub const POINT_SENSOR: CardId = CardId(65);

pub const BOX_SEATS: StageId = StageId(0);
pub const THUNDER_POINT: StageId = StageId(6);

const NAUTILUS_SHAPE: &str = "
    ........
    ........
    .==.....
    .==.....
    .====*..
    ........
    ........
    ........
";

const POINT_SENSOR_SHAPE: &str = "
    ........
    ........
    ..=.=...
    ...*....
    ..=.=...
    ........
    ........
    ........
";

/// Built-in stages plus the two fixture cards.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::with_standard_stages().expect("built-in stages are valid");
    catalog
        .register_card(Card::from_shape(NAUTILUS, "Nautilus", NAUTILUS_SHAPE).expect("valid shape"))
        .expect("fresh id");
    catalog
        .register_card(
            Card::from_shape(POINT_SENSOR, "Point Sensor", POINT_SENSOR_SHAPE).expect("valid shape"),
        )
        .expect("fresh id");
    catalog
}

/// Starting board of a built-in stage.
pub fn stage_board(catalog: &Catalog, stage: StageId) -> BoardState {
    let stage = catalog.stage(stage).expect("stage exists");
    BoardState::new(stage.layout().clone())
}

pub fn board(text: &str) -> BoardState {
    BoardState::parse(text).expect("valid board text")
}

/// Stamp placements without validating them.
pub fn stamp(
    catalog: &Catalog,
    board: &BoardState,
    placements: &[(PlayerId, CardId, Rotation, Coord)],
) -> BoardState {
    let mut proposals: PlayerPair<Option<Proposal>> = PlayerPair::default();
    for &(player, card, rotation, offset) in placements {
        let card = catalog.card(card).expect("card exists");
        proposals[player] = Some(Proposal::new(card.shape(rotation), offset, card.area()));
    }
    resolve(board, &proposals).board
}

/// Compare a board with indented fixture text.
pub fn assert_board(actual: &BoardState, expected: &str) {
    let expected: String = expected
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(actual.render(), expected, "\nactual:\n{}\nexpected:\n{}", actual, expected);
}
