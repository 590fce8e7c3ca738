//! Grids, cells and card footprints.
//!
//! ## Key Types
//!
//! - `Grid<T>`: dense row-major storage with bounds-checked access
//! - `Symbol`: one-character text codec shared by boards and footprints
//! - `Cell`: board cell (empty, wall, player ink, contested)
//! - `Footprint`: rotatable card shape that can be translated onto a board

pub mod array;
pub mod cell;
pub mod coord;
pub mod footprint;
pub mod text;

pub use array::Grid;
pub use cell::{Cell, InkKind};
pub use coord::{Coord, EIGHT_NEIGHBOURS};
pub use footprint::{Footprint, FootprintCell, Rotation, Stamp};
pub use text::Symbol;
