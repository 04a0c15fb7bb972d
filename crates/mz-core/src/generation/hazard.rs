//! Hazard and collectible scattering
//!
//! Markers land on uniformly random room cells after the walls are final.
//! There is no exclusion check: a marker may overwrite another marker or a
//! room that a door leads into. Last write wins.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::grid::{Cell, Grid, GridPos, SpaceIndex};
use crate::rng::GameRng;

/// Kind of marker scattered over the rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MarkerKind {
    /// Obstacle; also tagged as wall so it blocks traversal
    Hazard,
    /// Passable pickup
    Collectible,
}

impl MarkerKind {
    pub const fn cell(self) -> Cell {
        match self {
            MarkerKind::Hazard => Cell::hazard(),
            MarkerKind::Collectible => Cell::collectible(),
        }
    }
}

/// Place `count` markers of `kind` on random rooms of a `width` x `height`
/// room grid. Returns every placement in draw order, so the result always
/// holds exactly `count` entries even when positions repeat.
pub fn scatter(
    grid: &mut Grid,
    kind: MarkerKind,
    count: usize,
    width: usize,
    height: usize,
    rng: &mut GameRng,
) -> Vec<GridPos> {
    let cell = kind.cell();
    let mut placed = Vec::with_capacity(count);

    for _ in 0..count {
        let row = SpaceIndex(rng.range(1, height));
        let col = SpaceIndex(rng.range(1, width));
        let pos = GridPos::of_space(row, col);
        grid.set(pos.row, pos.col, cell);
        placed.push(pos);
    }

    placed
}
