//! Board state, placement legality and round resolution.
//!
//! ## Key Types
//!
//! - `BoardState`: grid plus scanned per-player area and special counts
//! - `validate` / `validate_placement`: named legality decisions
//! - `resolve`: stamps both players' placements against one snapshot

pub mod resolver;
pub mod state;
pub mod validator;

pub use resolver::{resolve, Proposal, Resolution};
pub use state::{BoardState, Counts};
pub use validator::{validate, validate_placement, PlacementKind};
