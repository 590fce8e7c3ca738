//! Match state machine.
//!
//! ## Key Types
//!
//! - `PlayerMove`: discard, trivial placement or special attack from a hand slot
//! - `PlayerState`: hand, ordered deck, gauge and redraw quota
//! - `MatchState`: round counter, board, players and history
//! - `MatchBuilder` / `init_game`: validated match construction
//! - `GameResult`: winner by area once finished

pub mod builder;
pub mod moves;
pub mod player;
pub mod result;
pub mod state;

pub use builder::{init_game, MatchBuilder};
pub use moves::{Placement, PlayerMove, RoundRecord};
pub use player::{Hand, PlayerState};
pub use result::GameResult;
pub use state::{MatchState, Phase};
