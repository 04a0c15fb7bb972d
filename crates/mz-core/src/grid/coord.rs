//! Coordinate systems
//!
//! Three index spaces share one integer domain:
//! - `SpaceIndex`: 1-based room index, lands on an odd grid row/column
//! - `WallIndex`: 1-based partition index, lands on the even grid row/column
//!   between rooms `n` and `n + 1`
//! - `GridPos`: raw (row, col) into the cell array
//!
//! Keeping them as separate types stops logical indices leaking into raw
//! grid arithmetic.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// 1-based logical room index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceIndex(pub usize);

impl SpaceIndex {
    /// Grid row/column of this room: `2 * (n - 1) + 1`
    ///
    /// `n` must be at least 1.
    pub const fn to_grid(self) -> usize {
        2 * (self.0 - 1) + 1
    }
}

/// 1-based logical partition index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallIndex(pub usize);

impl WallIndex {
    /// Grid row/column of the wall after room `n`: `2 * n`
    pub const fn to_grid(self) -> usize {
        2 * self.0
    }
}

/// Raw grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the room at logical (row, col)
    pub const fn of_space(row: SpaceIndex, col: SpaceIndex) -> Self {
        Self::new(row.to_grid(), col.to_grid())
    }

    /// One step in `dir`, or `None` when it would leave the non-negative
    /// quadrant. Upper bounds are the grid's concern.
    pub fn step(self, dir: Direction) -> Option<GridPos> {
        let (dr, dc) = dir.delta();
        Some(GridPos {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// Cardinal directions, in flood-fill expansion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// (row, col) delta
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}
