//! Recursive division
//!
//! Each region is split by one horizontal and one vertical wall into four
//! chambers. Three of the four wall arms get a gap and one stays solid, so
//! the chambers stay mutually connected through the cross. The chambers are
//! then divided the same way until they run out of partition lines.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid, GridPos, SpaceIndex, WallIndex};
use crate::rng::GameRng;

use super::region::Region;

/// Gap flags before shuffling: exactly one arm stays closed.
pub const GAP_FLAGS: [bool; 4] = [true, true, true, false];

/// One wall cross drawn by the partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Junction {
    /// Region that was divided
    pub region: Region,
    /// Partition row of the horizontal wall
    pub horiz: usize,
    /// Partition column of the vertical wall
    pub vert: usize,
    /// Carved gap per arm: left, right, above, below. `None` = solid arm.
    pub gaps: [Option<GridPos>; 4],
}

impl Junction {
    pub fn open_gaps(&self) -> usize {
        self.gaps.iter().filter(|gap| gap.is_some()).count()
    }
}

/// Round half up: `floor(v + 0.5)`
fn round_half_up(v: f64) -> usize {
    (v + 0.5).floor().max(0.0) as usize
}

/// Pick a split line inside `lo..=hi` (partition indices).
///
/// A single-line range returns that line. Otherwise the candidates are the
/// interior lines `lo + 1..=hi - 1`, trimmed to their middle part: `divisions`
/// of 4 keeps the middle half, 3 keeps the middle third.
pub fn split_line(lo: usize, hi: usize, divisions: u32, rng: &mut GameRng) -> usize {
    if lo == hi {
        return lo;
    }
    let x = (lo + 1) as f64;
    let y = hi as f64 - 1.0;
    let d = f64::from(divisions);
    let start = round_half_up(x + (y - x) / d);
    let end = round_half_up(x + (d - 1.0) * (y - x) / d);
    rng.range(start, end)
}

/// Divide `root` and every chamber it produces.
///
/// Chambers are processed depth-first in top-left, bottom-left, top-right,
/// bottom-right order, driven by an explicit stack. Returns every cross drawn.
pub fn partition(grid: &mut Grid, root: Region, rng: &mut GameRng) -> Vec<Junction> {
    let mut junctions = Vec::new();
    let mut stack = vec![root];

    while let Some(region) = stack.pop() {
        if region.is_degenerate() {
            continue;
        }

        let junction = divide(grid, region, rng);
        trace!(
            "divided {:?} at horiz {} vert {}, gaps {:?}",
            region,
            junction.horiz,
            junction.vert,
            junction.gaps
        );

        let quadrants = region.quadrants(junction.horiz, junction.vert);
        stack.extend(quadrants.into_iter().rev());
        junctions.push(junction);
    }

    junctions
}

/// Draw one wall cross over `region` and carve its gaps
fn divide(grid: &mut Grid, region: Region, rng: &mut GameRng) -> Junction {
    let Region { r1, r2, c1, c2 } = region;

    let horiz = split_line(r1, r2, 4, rng);
    let vert = split_line(c1, c2, 3, rng);

    let wall_row = WallIndex(horiz).to_grid();
    let wall_col = WallIndex(vert).to_grid();

    for i in region.grid_rows() {
        for j in region.grid_cols() {
            if i == wall_row || j == wall_col {
                grid.set(i, j, Cell::wall());
            }
        }
    }

    let mut flags = GAP_FLAGS;
    rng.shuffle(&mut flags);

    let mut gaps = [None; 4];
    if flags[0] {
        let col = SpaceIndex(rng.range(c1, vert)).to_grid();
        gaps[0] = Some(GridPos::new(wall_row, col));
    }
    if flags[1] {
        let col = SpaceIndex(rng.range(vert + 1, c2 + 1)).to_grid();
        gaps[1] = Some(GridPos::new(wall_row, col));
    }
    if flags[2] {
        let row = SpaceIndex(rng.range(r1, horiz)).to_grid();
        gaps[2] = Some(GridPos::new(row, wall_col));
    }
    if flags[3] {
        let row = SpaceIndex(rng.range(horiz + 1, r2 + 1)).to_grid();
        gaps[3] = Some(GridPos::new(row, wall_col));
    }

    for gap in gaps.iter().flatten() {
        grid.set(gap.row, gap.col, Cell::open());
    }

    Junction {
        region,
        horiz,
        vert,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::boundary::place_boundary;
    use crate::grid::CellTags;

    fn divided(width: usize, height: usize, seed: u64) -> (Grid, Vec<Junction>) {
        let mut grid = Grid::new(2 * height + 1, 2 * width + 1);
        let mut rng = GameRng::new(seed);
        place_boundary(&mut grid, width, &mut rng);
        let junctions = partition(&mut grid, Region::interior(width, height), &mut rng);
        (grid, junctions)
    }

    #[test]
    fn test_split_line_single() {
        let mut rng = GameRng::new(1);
        assert_eq!(split_line(4, 4, 4, &mut rng), 4);
        assert_eq!(split_line(4, 4, 3, &mut rng), 4);
    }

    #[test]
    fn test_split_line_adjacent_takes_upper() {
        let mut rng = GameRng::new(1);
        assert_eq!(split_line(2, 3, 4, &mut rng), 3);
        assert_eq!(split_line(2, 3, 3, &mut rng), 3);
    }

    #[test]
    fn test_split_line_stays_in_middle() {
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            // interior 2..=19: quarters keep 6..=15, thirds keep 8..=13
            let h = split_line(1, 20, 4, &mut rng);
            assert!((6..=15).contains(&h), "horiz {h}");
            let v = split_line(1, 20, 3, &mut rng);
            assert!((8..=13).contains(&v), "vert {v}");
        }
    }

    #[test]
    fn test_degenerate_region_draws_nothing() {
        let (grid, junctions) = divided(1, 4, 2);
        assert!(junctions.is_empty());
        // a single column of rooms stays a straight corridor
        for r in 1..grid.rows() - 1 {
            assert!(grid.get(r, 1).is_some_and(Cell::is_open));
        }
    }

    #[test]
    fn test_every_cross_keeps_three_gaps() {
        for seed in 0..30 {
            let (grid, junctions) = divided(12, 9, seed);
            assert!(!junctions.is_empty());
            for junction in &junctions {
                assert_eq!(junction.open_gaps(), 3, "{junction:?}");
                for gap in junction.gaps.iter().flatten() {
                    assert!(grid.in_bounds(gap.row, gap.col));
                }
            }
        }
    }

    #[test]
    fn test_gaps_lie_on_their_arm() {
        let (_, junctions) = divided(10, 10, 77);
        for j in &junctions {
            let wall_row = WallIndex(j.horiz).to_grid();
            let wall_col = WallIndex(j.vert).to_grid();
            if let Some(left) = j.gaps[0] {
                assert_eq!(left.row, wall_row);
                assert!(left.col < wall_col);
            }
            if let Some(right) = j.gaps[1] {
                assert_eq!(right.row, wall_row);
                assert!(right.col > wall_col);
            }
            if let Some(above) = j.gaps[2] {
                assert_eq!(above.col, wall_col);
                assert!(above.row < wall_row);
            }
            if let Some(below) = j.gaps[3] {
                assert_eq!(below.col, wall_col);
                assert!(below.row > wall_row);
            }
        }
    }

    #[test]
    fn test_partition_never_touches_doors() {
        for seed in 0..10 {
            let (grid, _) = divided(7, 5, seed);
            assert_eq!(grid.count_with(CellTags::ENTRANCE), 1);
            assert_eq!(grid.count_with(CellTags::EXIT), 1);
        }
    }

    #[test]
    fn test_two_by_two_single_cross() {
        let (grid, junctions) = divided(2, 2, 4);
        assert_eq!(junctions.len(), 1);
        let j = junctions[0];
        assert_eq!((j.horiz, j.vert), (1, 1));
        // centre pillar is always solid
        assert!(grid.get(2, 2).is_some_and(|c| c.has(CellTags::WALL)));
        let open_arms = [(2, 1), (2, 3), (1, 2), (3, 2)]
            .iter()
            .filter(|(r, c)| grid.get(*r, *c).is_some_and(Cell::is_open))
            .count();
        assert_eq!(open_arms, 3);
    }
}
