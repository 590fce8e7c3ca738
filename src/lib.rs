//! # tableturf-engine
//!
//! Deterministic simulation engine for a two-player territory-painting
//! card game. Players place card-shaped footprints of ink on a shared
//! board; both moves of a round are stamped at once and collisions are
//! settled by card size and ink kind.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation maps an input state (plus a
//!    caller-supplied `GameRng` where shuffling is involved) to a new
//!    state. Nothing is mutated in place and nothing performs I/O.
//!
//! 2. **Injected data**: cards and stages live in a `Catalog` value the
//!    caller passes in. There is no global lookup table.
//!
//! 3. **Scanned counts**: per-player area and special counts are always
//!    rebuilt from the grid, never patched incrementally.
//!
//! ## Modules
//!
//! - `core`: seats, per-seat storage, RNG, configuration
//! - `grid`: coordinates, grids, cells, footprints and the text codec
//! - `catalog`: card and stage definitions, built-in stages
//! - `board`: board state, placement validation, round resolution
//! - `game`: moves, player state, the match state machine
//! - `error`: rejection reasons and engine errors
//!
//! ## Example
//!
//! ```
//! use tableturf_engine::{
//!     Card, CardId, Catalog, Coord, MatchBuilder, MatchConfig, Placement, PlayerId,
//!     PlayerMove, PlayerPair, Rotation, StageId,
//! };
//!
//! let mut catalog = Catalog::with_standard_stages().unwrap();
//! catalog.register_card(Card::from_shape(CardId::new(1), "Dot", "=").unwrap()).unwrap();
//! let deck = vec![CardId::new(1); 15];
//!
//! let state = MatchBuilder::new(&catalog, StageId::new(0), [deck.clone(), deck])
//!     .with_config(MatchConfig::default())
//!     .build()
//!     .unwrap();
//!
//! // BoxSeats: seat 0 starts at (2, 7), seat 1 at (7, 2).
//! let moves = PlayerPair::from_array([
//!     PlayerMove::Trivial { slot: 0, placement: Placement::new(Rotation::R0, Coord::new(2, 6)) },
//!     PlayerMove::Trivial { slot: 0, placement: Placement::new(Rotation::R0, Coord::new(7, 3)) },
//! ]);
//! let next = state.apply_round(&catalog, state.round(), moves).unwrap();
//!
//! assert_eq!(next.round(), 11);
//! assert_eq!(next.board().area(PlayerId::P0), 2);
//! ```

pub mod board;
pub mod catalog;
pub mod core;
pub mod error;
pub mod game;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, PlayerId, PlayerPair, PLAYER_COUNT};

pub use crate::grid::{Cell, Coord, Footprint, FootprintCell, Grid, InkKind, Rotation, Symbol};

pub use crate::catalog::{Card, CardId, Catalog, Stage, StageId};

pub use crate::board::{resolve, validate, BoardState, PlacementKind, Proposal, Resolution};

pub use crate::game::{
    init_game, GameResult, MatchBuilder, MatchState, Phase, Placement, PlayerMove, PlayerState,
    RoundRecord,
};

pub use crate::error::{CatalogError, EngineError, GridError, Rejection, Result, UnknownSeat};
