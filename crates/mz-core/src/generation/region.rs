//! Partition regions
//!
//! A region is an inclusive rectangle of logical partition indices, not grid
//! coordinates. Region `(r1, r2, c1, c2)` owns the wall rows `r1..=r2` and
//! wall columns `c1..=c2`, i.e. rooms `r1..=r2 + 1` by `c1..=c2 + 1`.

use serde::{Deserialize, Serialize};

use crate::grid::WallIndex;

/// Inclusive rectangle of partition indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// First wall row
    pub r1: usize,
    /// Last wall row
    pub r2: usize,
    /// First wall column
    pub c1: usize,
    /// Last wall column
    pub c2: usize,
}

impl Region {
    pub fn new(r1: usize, r2: usize, c1: usize, c2: usize) -> Self {
        Self { r1, r2, c1, c2 }
    }

    /// The whole interior of a maze with `width` x `height` rooms
    pub fn interior(width: usize, height: usize) -> Self {
        Self::new(1, height - 1, 1, width - 1)
    }

    /// Inverted bounds: nothing left to divide
    pub fn is_degenerate(&self) -> bool {
        self.r2 < self.r1 || self.c2 < self.c1
    }

    /// Grid rows spanned by this region, including the closing margin
    pub fn grid_rows(&self) -> std::ops::RangeInclusive<usize> {
        WallIndex(self.r1).to_grid() - 1..=WallIndex(self.r2).to_grid() + 1
    }

    /// Grid columns spanned by this region, including the closing margin
    pub fn grid_cols(&self) -> std::ops::RangeInclusive<usize> {
        WallIndex(self.c1).to_grid() - 1..=WallIndex(self.c2).to_grid() + 1
    }

    /// The four chambers left after splitting at (`horiz`, `vert`), in
    /// top-left, bottom-left, top-right, bottom-right order.
    ///
    /// `horiz` and `vert` are at least 1, so `horiz - 1` never underflows.
    pub fn quadrants(&self, horiz: usize, vert: usize) -> [Region; 4] {
        [
            Region::new(self.r1, horiz - 1, self.c1, vert - 1),
            Region::new(horiz + 1, self.r2, self.c1, vert - 1),
            Region::new(self.r1, horiz - 1, vert + 1, self.c2),
            Region::new(horiz + 1, self.r2, vert + 1, self.c2),
        ]
    }
}
