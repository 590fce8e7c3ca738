//! Core engine types: seats, per-seat storage, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::GameRng;
