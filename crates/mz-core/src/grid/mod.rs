//! Grid model
//!
//! Cells, coordinates and the bounds-checked grid every other stage works on.

mod cell;
mod coord;
#[allow(clippy::module_inception)]
mod grid;

pub use cell::{Cell, CellTags};
pub use coord::{Direction, GridPos, SpaceIndex, WallIndex};
pub use grid::Grid;
