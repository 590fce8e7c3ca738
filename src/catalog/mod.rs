//! Static game data: cards and stages.
//!
//! ## Key Types
//!
//! - `CardId` / `Card`: card shape in four orientations, area, special cost
//! - `StageId` / `Stage`: wall layout and home cells
//! - `Catalog`: injected lookup for both

pub mod builtin;
pub mod card;
pub mod registry;
pub mod stage;

pub use builtin::standard_stages;
pub use card::{Card, CardId};
pub use registry::Catalog;
pub use stage::{Stage, StageId};
