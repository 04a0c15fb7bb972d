//! Perimeter and door placement
//!
//! Stamps the raw structure before any partitioning:
//! - top and bottom rows are solid wall apart from one door each
//!   (exit on top, entrance on the bottom)
//! - room rows (odd) get side walls only
//! - wall rows (even) get pillars on every even column; the odd columns
//!   between pillars stay open until a partition closes them

use log::trace;

use crate::grid::{Cell, Grid, GridPos, SpaceIndex};
use crate::rng::GameRng;

/// Door positions chosen by [`place_boundary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doors {
    pub entrance: GridPos,
    pub exit: GridPos,
}

/// Stamp perimeter walls and pillars, then pick the two doors.
///
/// `width` is the number of logical rooms per row; each door column is drawn
/// uniformly from those `width` positions. The exit is drawn first.
pub fn place_boundary(grid: &mut Grid, width: usize, rng: &mut GameRng) -> Doors {
    let (rows, cols) = grid.dimensions();
    let bottom = rows - 1;

    for r in 0..rows {
        for c in 0..cols {
            let is_wall = if r == 0 || r == bottom {
                true
            } else if r % 2 == 1 {
                c == 0 || c == cols - 1
            } else {
                c % 2 == 0
            };
            if is_wall {
                grid.set(r, c, Cell::wall());
            }
        }
    }

    let exit = GridPos::new(0, SpaceIndex(rng.range(1, width)).to_grid());
    grid.set(exit.row, exit.col, Cell::exit());

    let entrance = GridPos::new(bottom, SpaceIndex(rng.range(1, width)).to_grid());
    grid.set(entrance.row, entrance.col, Cell::entrance());

    trace!("doors placed: exit {:?}, entrance {:?}", exit, entrance);
    Doors { entrance, exit }
}
